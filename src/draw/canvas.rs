//! In-memory raster surface that strokes are replayed onto.

use super::render::{RenderOptions, render_strokes};
use super::stroke::Stroke;
use crate::util::Viewport;
use log::debug;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Largest edge Cairo image surfaces accept.
pub const MAX_SURFACE_EDGE: i32 = 32767;

/// Errors raised while creating, rendering or exporting a canvas.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// ARGB32 raster sized in device pixels.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Creates a transparent canvas of `width` x `height` device pixels.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        if !(1..=MAX_SURFACE_EDGE).contains(&width) || !(1..=MAX_SURFACE_EDGE).contains(&height) {
            return Err(CanvasError::InvalidSize { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        debug!("Created {width}x{height} canvas");
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Creates a canvas matching the viewport's device-pixel raster size.
    pub fn from_viewport(viewport: &Viewport) -> Result<Self, CanvasError> {
        let (width, height) = viewport.raster_size();
        Self::new(width as i32, height as i32)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Redraws the whole surface from `strokes`.
    pub fn render(&mut self, strokes: &[Stroke], options: &RenderOptions) -> Result<(), CanvasError> {
        let ctx = cairo::Context::new(&self.surface)?;
        render_strokes(&ctx, strokes, options);
        ctx.status()?;
        drop(ctx);
        self.surface.flush();
        Ok(())
    }

    /// Returns the premultiplied `[r, g, b, a]` value at a device pixel.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<[u8; 4]>, CanvasError> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(None);
        }

        let stride = self.surface.stride() as usize;
        let data = self.surface.data()?;
        let offset = y as usize * stride + x as usize * 4;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&data[offset..offset + 4]);

        // ARGB32 stores one native-endian u32 per pixel
        let argb = u32::from_ne_bytes(raw);
        Ok(Some([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ]))
    }

    /// Returns true if any pixel differs from fully transparent black.
    pub fn has_visible_pixels(&mut self) -> Result<bool, CanvasError> {
        let data = self.surface.data()?;
        Ok(data.iter().any(|byte| *byte != 0))
    }

    /// Copies out the raw surface bytes (row stride included).
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, CanvasError> {
        Ok(self.surface.data()?.to_vec())
    }

    /// Writes the current raster to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), CanvasError> {
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        debug!("Wrote canvas snapshot to {}", path.display());
        Ok(())
    }
}
