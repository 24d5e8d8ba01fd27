//! Turn-by-turn direction steps

use serde::Deserialize;

/// One navigation step, referencing the route features it covers.
///
/// Deserializes from the upstream JSON shape
/// (`{"featureIndices": [...], "heading": 90, "type": "bus"}`); other fields
/// on the step are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionStep {
    /// Indices into the route's feature list, in travel order
    #[serde(default)]
    pub feature_indices: Vec<usize>,

    /// Compass bearing at the turn point (0 = north, clockwise)
    #[serde(default)]
    pub heading: Option<f64>,

    /// Route-type tag used to look up the display color
    #[serde(rename = "type", default)]
    pub route_type: String,
}

impl DirectionStep {
    pub fn new(feature_indices: Vec<usize>, route_type: impl Into<String>) -> Self {
        Self {
            feature_indices,
            heading: None,
            route_type: route_type.into(),
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Heading in degrees, north when absent
    pub fn heading_or_north(&self) -> f64 {
        self.heading.unwrap_or(0.0)
    }

    pub fn has_features(&self) -> bool {
        !self.feature_indices.is_empty()
    }
}
