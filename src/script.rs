//! Scripted input for the headless replay host.
//!
//! A script is JSON Lines: one [`InputEvent`] per line, tagged by `"event"`.
//! Blank lines and lines starting with `#` are skipped.

use crate::draw::{Canvas, CanvasError};
use crate::input::{InputEvent, InputState};
use log::{debug, info};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rendering failed: {0}")]
    Render(#[from] CanvasError),
}

/// Totals reported after a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Events dispatched
    pub events: usize,
    /// Full redraws performed
    pub redraws: usize,
    /// Strokes committed at the end
    pub committed: usize,
    /// Strokes left in the redo buffer at the end
    pub redoable: usize,
}

/// Parses script text into events.
pub fn parse_script(text: &str) -> Result<Vec<InputEvent>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| ScriptError::Parse {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let events = parse_script(&text)?;
    debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Dispatches every event in order, redrawing the canvas after each one that
/// changed the committed strokes.
pub fn replay<I>(events: I, state: &mut InputState, canvas: &mut Canvas) -> Result<ReplaySummary, ScriptError>
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut summary = ReplaySummary::default();

    // Start from the current history so an empty script still yields a clean raster
    if state.render_if_needed(canvas)? {
        summary.redraws += 1;
    }

    for event in events {
        state.dispatch(event);
        summary.events += 1;
        if state.render_if_needed(canvas)? {
            summary.redraws += 1;
        }
    }

    summary.committed = state.history.len();
    summary.redoable = state.history.redo_stack().len();
    info!(
        "Replayed {} events: {} redraws, {} strokes committed, {} redoable",
        summary.events, summary.redraws, summary.committed, summary.redoable
    );
    Ok(summary)
}
