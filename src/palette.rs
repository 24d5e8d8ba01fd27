//! Route-type color palettes
//!
//! Direction steps carry a route-type tag (`bus`, `walk`, `rail`, ...). The
//! composer turns that tag into a stroke color through a [`ColorResolver`],
//! which callers supply. [`RoutePalette`] is the stock implementation, loaded
//! from TOML with a built-in default.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Maps a route-type tag to a display color
pub trait ColorResolver {
    fn resolve_color(&self, route_type: &str) -> String;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve_color(&self, route_type: &str) -> String {
        self(route_type)
    }
}

/// Color used for route types no palette knows about
pub const FALLBACK_COLOR: &str = "#666666";

/// A palette mapping route-type tags to concrete colors
#[derive(Debug, Clone)]
pub struct RoutePalette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: route type -> color
    pub colors: HashMap<String, String>,
    /// Color for tags missing from both this palette and the default one
    pub fallback: String,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    fallback: Option<String>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

const DEFAULT_PALETTE: &str = r##"
fallback = "#666666"

[colors]
# Active modes
walk = "#4caf50"
bike = "#8bc34a"

# Road
car = "#607d8b"
taxi = "#ffc107"
bus = "#2196f3"
coach = "#1565c0"

# Rail
tram = "#e91e63"
subway = "#9c27b0"
rail = "#f44336"
funicular = "#795548"
gondola = "#ff5722"

# Water
ferry = "#00bcd4"
"##;

static DEFAULT: OnceLock<RoutePalette> = OnceLock::new();

impl RoutePalette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(RoutePalette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            fallback: parsed.fallback.unwrap_or_else(|| FALLBACK_COLOR.to_string()),
        })
    }

    /// Look up a route type, trying the exact tag then its lowercase form
    ///
    /// Returns None if the tag is not defined in this palette.
    pub fn resolve(&self, route_type: &str) -> Option<&str> {
        self.colors
            .get(route_type)
            .or_else(|| self.colors.get(&route_type.to_lowercase()))
            .map(|s| s.as_str())
    }

    /// Resolve a route type with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. This palette
    /// 2. The default palette
    /// 3. This palette's fallback color
    pub fn resolve_or_default(&self, route_type: &str) -> String {
        if let Some(color) = self.resolve(route_type) {
            return color.to_string();
        }

        let default = DEFAULT.get_or_init(Self::default);
        if let Some(color) = default.resolve(route_type) {
            return color.to_string();
        }

        self.fallback.clone()
    }
}

impl Default for RoutePalette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

impl ColorResolver for RoutePalette {
    fn resolve_color(&self, route_type: &str) -> String {
        self.resolve_or_default(route_type)
    }
}
