//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchpad/config.toml`. Settings
//! cover the initial tool style and the canvas geometry used by the replay host.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CanvasConfig, DrawingConfig};

use crate::draw::{Color, MAX_SURFACE_EDGE, RenderOptions};
use crate::util::{CanvasBounds, Viewport};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_width = 5.0
/// eraser_color = "#FFFFFF"
/// single_point_dots = true
///
/// [canvas]
/// width = 800.0
/// height = 600.0
/// device_pixel_ratio = 2.0
/// background = "white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size and pixel density
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to
    /// their default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    /// - `canvas.width` / `canvas.height`: 1.0 - 8192.0
    /// - `device_pixel_ratio`: 0.25 - 8.0
    /// - `canvas.width`/`canvas.height` times `device_pixel_ratio` must fit a
    ///   Cairo surface edge; the CSS size shrinks to fit
    /// - colors must parse as CSS colors
    pub fn validate_and_clamp(&mut self) {
        clamp_field("default_width", &mut self.drawing.default_width, 1.0, 100.0, 5.0);
        clamp_field("canvas width", &mut self.canvas.width, 1.0, 8192.0, 800.0);
        clamp_field("canvas height", &mut self.canvas.height, 1.0, 8192.0, 600.0);
        clamp_field(
            "device_pixel_ratio",
            &mut self.canvas.device_pixel_ratio,
            0.25,
            8.0,
            1.0,
        );
        let dpr = self.canvas.device_pixel_ratio;
        fit_raster_edge("canvas width", &mut self.canvas.width, dpr);
        fit_raster_edge("canvas height", &mut self.canvas.height, dpr);

        if Color::from_css(&self.drawing.default_color).is_none() {
            warn!(
                "Invalid default_color '{}', falling back to '{}'",
                self.drawing.default_color,
                types::default_color()
            );
            self.drawing.default_color = types::default_color();
        }

        if Color::from_css(&self.drawing.eraser_color).is_none() {
            warn!(
                "Invalid eraser_color '{}', falling back to '{}'",
                self.drawing.eraser_color,
                types::default_eraser_color()
            );
            self.drawing.eraser_color = types::default_eraser_color();
        }

        if let Some(bg) = &self.canvas.background {
            if Color::from_css(bg).is_none() {
                warn!("Invalid canvas background '{bg}', using a transparent canvas");
                self.canvas.background = None;
            }
        }
    }

    /// Rasterizer settings derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            background: self.canvas.background.as_deref().and_then(Color::from_css),
            single_point_dots: self.drawing.single_point_dots,
        }
    }

    /// Viewport described by the `[canvas]` section.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            CanvasBounds::sized(self.canvas.width, self.canvas.height),
            self.canvas.device_pixel_ratio,
        )
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_field(name: &str, value: &mut f64, min: f64, max: f64, fallback: f64) {
    if !value.is_finite() {
        warn!("Invalid {name} {value}, using {fallback}");
        *value = fallback;
    } else if !(min..=max).contains(value) {
        warn!("Invalid {name} {value:.2}, clamping to {min}-{max} range");
        *value = value.clamp(min, max);
    }
}

fn fit_raster_edge(name: &str, css: &mut f64, dpr: f64) {
    let max_css = (MAX_SURFACE_EDGE as f64 / dpr).floor();
    if *css > max_css {
        warn!(
            "{name} {css} at device_pixel_ratio {dpr} exceeds the {MAX_SURFACE_EDGE}px raster limit, clamping to {max_css}"
        );
        *css = max_css;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_color, "#000000");
        assert_eq!(config.drawing.default_width, 5.0);
        assert_eq!(config.drawing.eraser_color, "#FFFFFF");
        assert!(config.drawing.single_point_dots);
        assert_eq!(config.canvas.device_pixel_ratio, 1.0);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [canvas]
            device_pixel_ratio = 2.0
            background = "white"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.viewport().raster_size(), (1600, 1200));
        assert_eq!(config.render_options().background, Some(crate::draw::WHITE));
    }

    #[test]
    fn validation_clamps_and_resets() {
        let mut config = Config::from_toml(
            r##"
            [drawing]
            default_color = "nope"
            default_width = 500.0
            eraser_color = "#12"

            [canvas]
            width = 0.0
            device_pixel_ratio = 20.0
            background = "???"
            "##,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_color, "#000000");
        assert_eq!(config.drawing.default_width, 100.0);
        assert_eq!(config.drawing.eraser_color, "#FFFFFF");
        assert_eq!(config.canvas.width, 1.0);
        assert_eq!(config.canvas.device_pixel_ratio, 8.0);
        assert_eq!(config.canvas.background, None);
    }

    #[test]
    fn validation_keeps_raster_within_surface_limit() {
        let mut config = Config::from_toml(
            r#"
            [canvas]
            width = 8192.0
            height = 600.0
            device_pixel_ratio = 8.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 4095.0);
        assert_eq!(config.canvas.height, 600.0);
        let (w, h) = config.viewport().raster_size();
        assert_eq!((w, h), (32760, 4800));
        assert!(w as i32 <= MAX_SURFACE_EDGE);
    }

    #[test]
    fn validation_accepts_functional_and_extended_colors() {
        let mut config = Config::from_toml(
            r#"
            [drawing]
            default_color = "rgb(255, 0, 0)"
            eraser_color = "ivory"

            [canvas]
            background = "hsl(120, 100%, 25%)"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_color, "rgb(255, 0, 0)");
        assert_eq!(config.drawing.eraser_color, "ivory");
        assert!(config.render_options().background.is_some());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\ndefault_width = ").is_err());
        assert!(Config::from_toml("[drawing]\ndefault_width = \"wide\"").is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("drawing").is_some());
        assert!(properties.get("canvas").is_some());
    }
}
