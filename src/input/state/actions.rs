use crate::input::events::InputEvent;
use crate::input::tool::Tool;
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Routes one input event to its handler.
    ///
    /// Events must be dispatched in the order the host delivered them; every
    /// call runs to completion and leaves `needs_redraw` set if the committed
    /// strokes changed.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown {
                client_x,
                client_y,
                bounds,
            } => self.on_pointer_down(client_x, client_y, bounds),
            InputEvent::PointerMove {
                client_x,
                client_y,
                bounds,
            } => self.on_pointer_move(client_x, client_y, bounds),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::SetTool { tool } => self.set_tool(tool),
            InputEvent::SetColor { color } => self.tools.set_color(color),
            InputEvent::SetWidth { width } => {
                self.tools.set_width(width);
            }
            InputEvent::Undo => {
                self.undo();
            }
            InputEvent::Redo => {
                self.redo();
            }
            InputEvent::Clear => self.clear(),
        }
    }

    /// Selects a tool for the next stroke.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
    }

    /// Undoes the last committed stroke.
    ///
    /// An in-progress gesture ends first so later moves cannot extend a
    /// stroke that now sits in the redo buffer. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.state = DrawingState::Idle;
        let changed = self.history.undo();
        if changed {
            debug!("Undo: {} committed, {} redoable", self.history.len(), self.history.redo_stack().len());
            self.needs_redraw = true;
        }
        changed
    }

    /// Restores the most recently undone stroke. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.state = DrawingState::Idle;
        let changed = self.history.redo();
        if changed {
            debug!("Redo: {} committed, {} redoable", self.history.len(), self.history.redo_stack().len());
            self.needs_redraw = true;
        }
        changed
    }

    /// Drops every stroke, including the redo buffer. Not undoable.
    pub fn clear(&mut self) {
        self.state = DrawingState::Idle;
        self.history.clear();
        self.needs_redraw = true;
        debug!("Canvas cleared");
    }
}
