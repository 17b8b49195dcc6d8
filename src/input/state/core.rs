//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{History, RenderOptions};
use crate::input::tool::ToolState;
use crate::util::{CanvasBounds, Viewport};

/// Stroke lifecycle state machine.
///
/// A pointer-down while idle starts a stroke; pointer-up ends it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// Pointer held down; moves extend the last committed stroke
    Drawing,
}

/// Main input state containing all drawing session state.
///
/// Owns the stroke history, the tool/style record and the stroke lifecycle
/// state. It processes every [`InputEvent`](crate::input::InputEvent) and
/// raises [`needs_redraw`](Self::needs_redraw) whenever the committed strokes
/// changed.
pub struct InputState {
    /// Committed strokes and redo buffer
    pub history: History,
    /// Current tool, color and width
    pub tools: ToolState,
    /// Current stroke lifecycle state
    pub state: DrawingState,
    /// Whether the raster needs to be rebuilt from the history
    pub needs_redraw: bool,
    /// How strokes are rasterized
    pub render_options: RenderOptions,
    /// Raster width in device pixels
    pub raster_width: u32,
    /// Raster height in device pixels
    pub raster_height: u32,
    /// Canvas bounds used for pointer events that do not carry their own
    pub bounds: CanvasBounds,
}

impl InputState {
    /// Creates an idle input state with an empty history.
    ///
    /// # Arguments
    /// * `tools` - Initial tool, color and width
    /// * `viewport` - Canvas placement and device pixel ratio
    /// * `render_options` - Background and single-point handling
    pub fn with_defaults(tools: ToolState, viewport: Viewport, render_options: RenderOptions) -> Self {
        let (raster_width, raster_height) = viewport.raster_size();
        Self {
            history: History::new(),
            tools,
            state: DrawingState::Idle,
            needs_redraw: true,
            render_options,
            raster_width,
            raster_height,
            bounds: viewport.bounds,
        }
    }

    /// Builds the input state from loaded configuration.
    pub fn from_config(config: &Config, viewport: Viewport) -> Self {
        let tools = ToolState::new(
            config.drawing.default_color.clone(),
            config.drawing.default_width,
            config.drawing.eraser_color.clone(),
        );
        Self::with_defaults(tools, viewport, config.render_options())
    }

    /// Updates the raster size after the host resized its surface.
    pub fn update_raster_size(&mut self, width: u32, height: u32) {
        if (width, height) != (self.raster_width, self.raster_height) {
            self.raster_width = width;
            self.raster_height = height;
            self.needs_redraw = true;
        }
    }

    /// Updates the bounds used for pointer events without explicit bounds.
    pub fn update_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    /// Returns true while a pointer press is being turned into a stroke.
    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }
}
