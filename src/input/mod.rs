//! Input handling and stroke lifecycle state machine.
//!
//! This module translates host pointer and toolbar events into stroke history
//! changes. It maintains the current tool state (tool, color, width), converts
//! CSS-pixel pointer positions into device pixels and drives the idle/drawing
//! state machine.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::InputEvent;
pub use state::{DrawingState, InputState};
pub use tool::{Tool, ToolState};
