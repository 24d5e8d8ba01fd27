//! SVG renderer for direction-step mini maps
//!
//! This module turns projected route geometry into a self-contained SVG
//! thumbnail with CSS classes for styling.

pub mod arrow;
pub mod compose;
pub mod config;
pub mod path;
pub mod svg;

pub use arrow::{arrow, ArrowGlyph};
pub use compose::MiniMapComposer;
pub use config::{ConfigError, MiniMapConfig};
pub use path::path_from;
pub use svg::SvgBuilder;
