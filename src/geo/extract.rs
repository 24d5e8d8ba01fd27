//! Coordinate extraction from GeoJSON line features

use geojson::{Feature, FeatureCollection, GeoJson, Value};

use super::types::GeoCoordinate;
use crate::error::RouteDataError;

/// Route geometry: an ordered list of line features addressed by index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteData {
    features: Vec<Feature>,
}

impl RouteData {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Parse route data from a GeoJSON document.
    ///
    /// A FeatureCollection is used as-is, a single Feature becomes a one-element
    /// route, and a bare Geometry is wrapped into a feature without properties.
    pub fn from_geojson_str(source: &str) -> Result<Self, RouteDataError> {
        let parsed: GeoJson = source.parse()?;
        Ok(Self::from(parsed))
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }
}

impl From<Vec<Feature>> for RouteData {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}

impl From<FeatureCollection> for RouteData {
    fn from(collection: FeatureCollection) -> Self {
        Self::new(collection.features)
    }
}

impl From<GeoJson> for RouteData {
    fn from(geojson: GeoJson) -> Self {
        match geojson {
            GeoJson::FeatureCollection(collection) => collection.into(),
            GeoJson::Feature(feature) => Self::new(vec![feature]),
            GeoJson::Geometry(geometry) => Self::new(vec![Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: None,
                foreign_members: None,
            }]),
        }
    }
}

/// Concatenate the coordinates of the features at `indices`, in index order.
///
/// LineString features contribute their positions directly; MultiLineString
/// features are flattened one level. Anything else (other geometry kinds,
/// missing geometry, out-of-range indices) contributes nothing.
pub fn extract_coordinates(route: &RouteData, indices: &[usize]) -> Vec<GeoCoordinate> {
    let mut coordinates = Vec::new();

    for &index in indices {
        let Some(feature) = route.get(index) else {
            tracing::trace!(index, features = route.len(), "feature index out of range");
            continue;
        };
        let Some(geometry) = &feature.geometry else {
            tracing::trace!(index, "feature has no geometry");
            continue;
        };

        match &geometry.value {
            Value::LineString(line) => push_positions(&mut coordinates, line),
            Value::MultiLineString(lines) => {
                for line in lines {
                    push_positions(&mut coordinates, line);
                }
            }
            other => {
                tracing::trace!(index, kind = geometry_kind(other), "skipping non-line geometry");
            }
        }
    }

    coordinates
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn push_positions(out: &mut Vec<GeoCoordinate>, positions: &[Vec<f64>]) {
    out.extend(positions.iter().filter_map(|p| match p.as_slice() {
        [lng, lat, ..] => Some(GeoCoordinate::new(*lng, *lat)),
        _ => {
            tracing::trace!(ordinates = p.len(), "skipping short position");
            None
        }
    }));
}
