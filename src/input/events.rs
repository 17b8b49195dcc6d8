//! Host-independent input event types.

use super::tool::Tool;
use crate::util::CanvasBounds;
use serde::{Deserialize, Serialize};

/// Everything the drawing core reacts to.
///
/// Hosts map their native pointer and toolbar callbacks onto these values and
/// feed them to [`InputState::dispatch`](super::InputState::dispatch) in
/// delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Primary button pressed at a CSS-pixel position
    PointerDown {
        client_x: f64,
        client_y: f64,
        /// Canvas bounding box at the time of the event (viewport bounds if absent)
        #[serde(default)]
        bounds: Option<CanvasBounds>,
    },
    /// Pointer moved, button state unknown to the host
    PointerMove {
        client_x: f64,
        client_y: f64,
        #[serde(default)]
        bounds: Option<CanvasBounds>,
    },
    /// Primary button released
    PointerUp,
    /// Toolbar tool selection
    SetTool { tool: Tool },
    /// Color picker change
    SetColor { color: String },
    /// Width slider change
    SetWidth { width: f64 },
    Undo,
    Redo,
    Clear,
}
