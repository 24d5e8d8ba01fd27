//! Configuration for the viewport transform

use serde::Deserialize;

/// Size of the target viewport and the padding around the plotted extent
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in SVG units
    pub width: f64,

    /// Viewport height in SVG units
    pub height: f64,

    /// Fraction of the extent added on each side of each axis
    pub padding: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 120.0,
            padding: 0.15,
        }
    }
}

impl ViewportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the padding fraction
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewportConfig::default();
        assert_eq!(config.width, 120.0);
        assert_eq!(config.height, 120.0);
        assert_eq!(config.padding, 0.15);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ViewportConfig::new().with_size(200.0, 100.0).with_padding(0.0);
        assert_eq!(config.width, 200.0);
        assert_eq!(config.height, 100.0);
        assert_eq!(config.padding, 0.0);
    }
}
