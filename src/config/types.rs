//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state a session starts with. The host can change color and
/// width at runtime through style events.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pencil color as a CSS color string (e.g. "#000000", "red")
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default stroke width in device pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Color the eraser paints with; should match the page background
    #[serde(default = "default_eraser_color")]
    pub eraser_color: String,

    /// Paint a dot for clicks without drag (false leaves them invisible)
    #[serde(default = "default_single_point_dots")]
    pub single_point_dots: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            eraser_color: default_eraser_color(),
            single_point_dots: default_single_point_dots(),
        }
    }
}

/// Canvas geometry settings used by hosts that own their surface (e.g. replay).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in CSS pixels (valid range: 1.0 - 8192.0)
    #[serde(default = "default_canvas_width")]
    pub width: f64,

    /// Canvas height in CSS pixels (valid range: 1.0 - 8192.0)
    #[serde(default = "default_canvas_height")]
    pub height: f64,

    /// Device pixels per CSS pixel (valid range: 0.25 - 8.0)
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,

    /// Optional background fill as a CSS color; unset keeps the raster transparent
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            device_pixel_ratio: default_device_pixel_ratio(),
            background: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

pub(super) fn default_color() -> String {
    "#000000".to_string()
}

fn default_width() -> f64 {
    5.0
}

pub(super) fn default_eraser_color() -> String {
    "#FFFFFF".to_string()
}

fn default_single_point_dots() -> bool {
    true
}

fn default_canvas_width() -> f64 {
    800.0
}

fn default_canvas_height() -> f64 {
    600.0
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}
