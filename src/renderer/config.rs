//! Configuration for mini map rendering

use serde::Deserialize;
use thiserror::Error;

use crate::geo::ViewportConfig;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse mini map config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MiniMapConfig {
    /// Viewport size and padding
    pub viewport: ViewportConfig,

    /// Background fill
    pub background: String,

    /// Stroke color of the crosshair guide lines
    pub guide_color: String,

    /// Stroke color of the previous segment when it has no route type
    pub fallback_color: String,

    /// Stroke width of the current segment
    pub current_stroke_width: f64,

    /// Stroke width of the previous segment
    pub previous_stroke_width: f64,

    /// Opacity of the previous segment
    pub previous_opacity: f64,

    /// Radius of the turn point marker
    pub marker_radius: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "mm-" for "mm-current")
    pub class_prefix: Option<String>,
}

impl Default for MiniMapConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            background: "#f5f5f5".to_string(),
            guide_color: "#e0e0e0".to_string(),
            fallback_color: "#999999".to_string(),
            current_stroke_width: 4.0,
            previous_stroke_width: 3.0,
            previous_opacity: 0.35,
            marker_radius: 4.0,
            standalone: false,
            pretty_print: true,
            class_prefix: Some("mm-".to_string()),
        }
    }
}

impl MiniMapConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn width(&self) -> f64 {
        self.viewport.width
    }

    pub fn height(&self) -> f64 {
        self.viewport.height
    }

    /// Set the viewport configuration
    pub fn with_viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the viewport size, keeping the padding
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.viewport = self.viewport.with_size(width, height);
        self
    }

    /// Set the background fill
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set the previous-segment fallback color
    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
