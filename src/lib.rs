//! Route Minimap - SVG thumbnails for turn-by-turn navigation steps
//!
//! This library extracts a direction step's geometry from GeoJSON route
//! features, projects it into a small viewport together with the preceding
//! step, and renders an SVG thumbnail with an arrow at the turn point.
//!
//! # Example
//!
//! ```rust
//! use route_minimap::{render_minimap, DirectionStep, RouteData};
//!
//! let route = RouteData::from_geojson_str(r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "properties": {},
//!         "geometry": {"type": "LineString", "coordinates": [[8.54, 47.37], [8.55, 47.37]]}
//!     }]
//! }"#).unwrap();
//!
//! let step = DirectionStep::new(vec![0], "walk").with_heading(90.0);
//! let svg = render_minimap(&route, &step, None, "#4caf50");
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("rotate(0)"));
//! ```

pub mod direction;
pub mod error;
pub mod geo;
pub mod palette;
pub mod renderer;

pub use direction::DirectionStep;
pub use error::RouteDataError;
pub use geo::{
    extract_coordinates, transform, Bounds, GeoCoordinate, RouteData, TransformResult,
    ViewportConfig, ViewportPoint,
};
pub use palette::{ColorResolver, PaletteError, RoutePalette};
pub use renderer::{arrow, path_from, ConfigError, MiniMapComposer, MiniMapConfig};

/// Render a mini map with the default configuration and palette
///
/// The previous step, when given, is colored from the default palette.
///
/// # Example
///
/// ```rust
/// use route_minimap::{render_minimap, DirectionStep, RouteData};
///
/// let route = RouteData::default();
/// let step = DirectionStep::new(vec![0], "bus");
///
/// // no geometry: an empty 120x120 document
/// let svg = render_minimap(&route, &step, None, "#2196f3");
/// assert!(svg.contains(r#"viewBox="0 0 120 120""#));
/// assert!(!svg.contains("<path"));
/// ```
pub fn render_minimap(
    route: &RouteData,
    direction: &DirectionStep,
    previous: Option<&DirectionStep>,
    color: &str,
) -> String {
    MiniMapComposer::new(MiniMapConfig::default(), RoutePalette::default())
        .compose(route, direction, previous, color, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"mode": "walk"},
             "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.0, 0.01]]}},
            {"type": "Feature", "properties": {"mode": "bus"},
             "geometry": {"type": "MultiLineString",
                          "coordinates": [[[0.0, 0.01], [0.01, 0.01]], [[0.01, 0.01], [0.02, 0.02]]]}}
        ]
    }"#;

    #[test]
    fn test_render_simple_step() {
        let route = RouteData::from_geojson_str(ROUTE).unwrap();
        let step = DirectionStep::new(vec![0], "walk");
        let svg = render_minimap(&route, &step, None, "#ff0000");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r##"stroke="#ff0000""##));
    }

    #[test]
    fn test_render_with_previous_step() {
        let route = RouteData::from_geojson_str(ROUTE).unwrap();
        let previous = DirectionStep::new(vec![0], "walk");
        let step = DirectionStep::new(vec![1], "bus").with_heading(90.0);
        let svg = render_minimap(&route, &step, Some(&previous), "#2196f3");
        assert!(svg.contains("mm-previous"));
        assert!(svg.contains(r##"stroke="#4caf50""##));
        assert!(svg.contains("rotate(0)"));
    }

    #[test]
    fn test_render_missing_geometry() {
        let route = RouteData::from_geojson_str(ROUTE).unwrap();
        let step = DirectionStep::new(vec![7], "walk");
        let svg = render_minimap(&route, &step, None, "#ff0000");
        assert!(!svg.contains("<rect"));
    }
}
