use crate::draw::{Canvas, CanvasError};

use super::InputState;

impl InputState {
    /// Rebuilds the canvas from the committed strokes if a redraw is pending.
    ///
    /// # Returns
    /// `true` if the canvas was redrawn, `false` if nothing changed since the
    /// last render
    pub fn render_if_needed(&mut self, canvas: &mut Canvas) -> Result<bool, CanvasError> {
        if !self.needs_redraw {
            return Ok(false);
        }
        self.render(canvas)?;
        Ok(true)
    }

    /// Unconditionally rebuilds the canvas from the committed strokes.
    pub fn render(&mut self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        canvas.render(self.history.snapshot(), &self.render_options)?;
        self.needs_redraw = false;
        Ok(())
    }
}
