use crate::draw::Point;
use crate::util::{self, CanvasBounds};
use log::trace;

use super::{DrawingState, InputState};

impl InputState {
    /// Maps a CSS-pixel pointer position into raster device pixels.
    pub fn device_point(&self, client_x: f64, client_y: f64, bounds: Option<CanvasBounds>) -> Point {
        let bounds = bounds.unwrap_or(self.bounds);
        util::to_device_pixels(
            client_x,
            client_y,
            &bounds,
            self.raster_width,
            self.raster_height,
        )
    }

    /// Processes a pointer press.
    ///
    /// Commits a new stroke with the current style, seeded with the press
    /// position, and requests a redraw. A press while already drawing means the
    /// release never reached the canvas: the open stroke is ended first so the
    /// new gesture never joins onto it.
    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64, bounds: Option<CanvasBounds>) {
        if self.state == DrawingState::Drawing {
            trace!("pointer-down while drawing, ending previous stroke");
            self.on_pointer_up();
        }

        let point = self.device_point(client_x, client_y, bounds);
        let style = self.tools.style();
        self.history.commit_new_stroke(style, Some(point));
        self.state = DrawingState::Drawing;
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// Each move while drawing appends exactly one point to the active stroke
    /// and requests a redraw. Moves while idle are ignored.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, bounds: Option<CanvasBounds>) {
        if self.state != DrawingState::Drawing {
            return;
        }

        let point = self.device_point(client_x, client_y, bounds);
        self.history.extend_active_stroke(point);
        self.needs_redraw = true;
    }

    /// Processes a pointer release, ending the active stroke.
    pub fn on_pointer_up(&mut self) {
        self.state = DrawingState::Idle;
    }
}
