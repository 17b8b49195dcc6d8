//! Utility functions for canvas coordinate mapping.
//!
//! This module provides:
//! - Canvas bounding boxes and the device-pixel viewport
//! - The CSS-pixel to device-pixel pointer transform

use crate::draw::Point;
use log::debug;
use serde::{Deserialize, Serialize};

// ============================================================================
// Coordinate Mapping
// ============================================================================

/// On-screen bounding box of the canvas element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Bounds anchored at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

/// Canvas placement plus the device pixel ratio that sizes its raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub bounds: CanvasBounds,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(bounds: CanvasBounds, device_pixel_ratio: f64) -> Self {
        let viewport = Self {
            bounds,
            device_pixel_ratio,
        };
        debug!(
            "Viewport {:.1}x{:.1} css px at dpr {}, raster {:?}",
            bounds.width,
            bounds.height,
            device_pixel_ratio,
            viewport.raster_size()
        );
        viewport
    }

    /// Raster dimensions in device pixels: CSS size times the pixel ratio, rounded.
    pub fn raster_size(&self) -> (u32, u32) {
        let scale = |css: f64| {
            let px = (css * self.device_pixel_ratio).round();
            if px.is_finite() && px > 0.0 { px as u32 } else { 0 }
        };
        (scale(self.bounds.width), scale(self.bounds.height))
    }
}

/// Converts a pointer position in CSS pixels to raster device pixels.
///
/// ```text
/// x = (client_x - left) * (raster_width / css_width)
/// y = (client_y - top)  * (raster_height / css_height)
/// ```
///
/// The scale folds in the device pixel ratio, so no further division is
/// needed downstream. A degenerate box (zero or non-finite CSS size) maps with
/// scale 1 instead of producing infinite coordinates.
pub fn to_device_pixels(
    client_x: f64,
    client_y: f64,
    bounds: &CanvasBounds,
    raster_width: u32,
    raster_height: u32,
) -> Point {
    let scale = |raster: u32, css: f64| {
        let s = raster as f64 / css;
        if s.is_finite() { s } else { 1.0 }
    };

    Point {
        x: (client_x - bounds.left) * scale(raster_width, bounds.width),
        y: (client_y - bounds.top) * scale(raster_height, bounds.height),
    }
}
