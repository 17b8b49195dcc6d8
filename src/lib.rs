//! Freehand drawing core: stroke recording, undo/redo history and Cairo replay.
//!
//! Hosts translate their native pointer and toolbar callbacks into
//! [`input::InputEvent`]s, feed them to [`input::InputState::dispatch`] and
//! redraw a [`draw::Canvas`] whenever the state asks for it.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
