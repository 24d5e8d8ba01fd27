//! Error types for loading route data

use thiserror::Error;

/// Errors that can occur when reading route geometry
#[derive(Error, Debug)]
pub enum RouteDataError {
    #[error("Failed to parse route GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
}
