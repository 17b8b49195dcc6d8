//! Drawing tool selection and the style new strokes are created with.

use crate::draw::StrokeStyle;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool decides which color a stroke gets when the pointer goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Paints with the current color (default)
    #[default]
    Pencil,
    /// Paints with the erase color, covering earlier strokes
    Eraser,
}

/// Current tool, color and width.
///
/// Only read when a stroke starts, so changes made mid-stroke apply to the
/// next stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    color: String,
    width: f64,
    eraser_color: String,
}

impl ToolState {
    /// Creates a tool state with the pencil selected.
    pub fn new(color: impl Into<String>, width: f64, eraser_color: impl Into<String>) -> Self {
        Self {
            tool: Tool::Pencil,
            color: color.into(),
            width,
            eraser_color: eraser_color.into(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn eraser_color(&self) -> &str {
        &self.eraser_color
    }

    /// Selects a tool. The host mirrors this in its toolbar highlight.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
    }

    /// Stores a new pencil color and re-arms the pencil.
    ///
    /// The string is not validated; the rasterizer decides what an invalid
    /// color looks like.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        debug!("Color set to '{}'", self.color);
        self.set_tool(Tool::Pencil);
    }

    /// Stores a new stroke width. Zero, negative or non-finite widths are ignored.
    pub fn set_width(&mut self, width: f64) -> bool {
        if !width.is_finite() || width <= 0.0 {
            warn!("Ignoring invalid stroke width {width}");
            return false;
        }
        self.width = width;
        debug!("Width set to {width}");
        true
    }

    /// Resolves the style for a stroke starting now.
    pub fn style(&self) -> StrokeStyle {
        let color = match self.tool {
            Tool::Pencil => self.color.clone(),
            Tool::Eraser => self.eraser_color.clone(),
        };
        StrokeStyle {
            color,
            width: self.width,
        }
    }
}
