//! Stroke geometry: points, strokes and the style a stroke is created with.

use serde::{Deserialize, Serialize};

/// A recorded pointer position in device pixels (origin top-left, y-down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Color and width resolved from the tool state when a stroke starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// CSS color string, passed through to the rasterizer unvalidated
    pub color: String,
    /// Line width in device pixels
    pub width: f64,
}

/// One continuous pointer-down-to-pointer-up drawing action.
///
/// Points only grow while the stroke is the active one; after pointer-up the
/// stroke is never modified again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS color string
    pub color: String,
    /// Ordered polyline vertices
    pub points: Vec<Point>,
    /// Line width in device pixels
    pub width: f64,
}

impl Stroke {
    /// Creates an empty stroke carrying the given style.
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            color: style.color,
            points: Vec::new(),
            width: style.width,
        }
    }
}
