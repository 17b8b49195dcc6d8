//! Committed stroke history with a linear redo buffer.

use super::stroke::{Point, Stroke, StrokeStyle};
use log::trace;

/// Owns every stroke of the drawing session.
///
/// `committed` is rendered in order (first = bottom layer, last = top layer).
/// `redo` holds strokes removed by [`History::undo`] as a stack; it never
/// contributes to the raster and is dropped whenever a new stroke starts.
/// A stroke lives in exactly one of the two lists at any time.
#[derive(Debug, Clone, Default)]
pub struct History {
    committed: Vec<Stroke>,
    redo: Vec<Stroke>,
}

impl History {
    /// Creates an empty history.
    pub const fn new() -> Self {
        Self {
            committed: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Appends a new stroke with the given style and clears the redo buffer.
    ///
    /// Returns the freshly committed stroke so the caller can keep feeding it
    /// points without searching for it again.
    pub fn commit_new_stroke(&mut self, style: StrokeStyle, first_point: Option<Point>) -> &mut Stroke {
        let mut stroke = Stroke::new(style);
        stroke.points.extend(first_point);

        self.redo.clear();
        self.committed.push(stroke);
        let last = self.committed.len() - 1;
        &mut self.committed[last]
    }

    /// Appends a point to the most recently committed stroke.
    ///
    /// No-op when nothing has been committed yet.
    pub fn extend_active_stroke(&mut self, point: Point) {
        match self.committed.last_mut() {
            Some(stroke) => stroke.points.push(point),
            None => trace!("extend_active_stroke with empty history ignored"),
        }
    }

    /// Moves the last committed stroke onto the redo stack.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.redo.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone stroke back onto the committed list.
    ///
    /// Returns `false` (and changes nothing) when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Drops every committed and undone stroke. Not undoable.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }

    /// Committed strokes in paint order.
    pub fn snapshot(&self) -> &[Stroke] {
        &self.committed
    }

    /// Undone strokes; the last element is the next one [`History::redo`] restores.
    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// True when there is nothing to render and nothing to redo.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.redo.is_empty()
    }
}
