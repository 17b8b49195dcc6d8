//! Stroke model, history and Cairo-based rasterization.
//!
//! This module defines the core drawing types:
//! - [`Point`], [`Stroke`], [`StrokeStyle`]: recorded geometry and its style
//! - [`History`]: committed strokes plus the redo buffer
//! - [`Color`]: RGBA color parsed from CSS color strings
//! - [`Canvas`] and [`render_strokes`]: full clear-and-replay rasterization

pub mod canvas;
pub mod color;
pub mod history;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasError, MAX_SURFACE_EDGE};
pub use color::Color;
pub use history::History;
pub use render::{RenderOptions, render_freehand, render_strokes};
pub use stroke::{Point, Stroke, StrokeStyle};

pub use color::{BLACK, TRANSPARENT, WHITE};
