//! Geographic to viewport projection.
//!
//! Coordinates are normalized against a bounding box and scaled into a
//! `width × height` viewport. Both axes share one scale factor, taken from the
//! larger padded range, so shapes keep their aspect ratio.
//!
//! The bounding box may come from a different coordinate set than the one being
//! plotted. The composer uses this to draw the current and previous segments of
//! a route at the same scale.
//!
//! ## Axis Convention
//!
//! - x grows eastward (increasing longitude)
//! - y grows downward, so increasing latitude moves a point up the screen

use super::config::ViewportConfig;
use super::types::{Bounds, GeoCoordinate, ViewportPoint};

/// Floor for the normalization range, in degrees.
///
/// A single point (or several coincident points) has a zero extent; this keeps
/// the division finite and places the point in the center of the viewport.
pub const MIN_RANGE: f64 = 1e-9;

/// Output of [`transform`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformResult {
    /// One viewport point per input coordinate, in input order
    pub points: Vec<ViewportPoint>,
    /// Bounds the points were normalized against, `None` for empty input
    pub bounds: Option<Bounds>,
    /// The transformed centroid of `bounds`
    pub center: Option<ViewportPoint>,
}

impl TransformResult {
    /// Result for an empty coordinate set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First transformed point, the turn point for a direction step
    pub fn first(&self) -> Option<ViewportPoint> {
        self.points.first().copied()
    }
}

/// Projection from a fixed geographic bounding box into the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: GeoCoordinate,
    range: f64,
    width: f64,
    height: f64,
}

impl Projection {
    /// Build the projection for `bounds` under `viewport`
    pub fn new(bounds: &Bounds, viewport: &ViewportConfig) -> Self {
        let scale = 1.0 + 2.0 * viewport.padding;
        let lng_range = bounds.lng_range() * scale;
        let lat_range = bounds.lat_range() * scale;
        let range = lng_range.max(lat_range);

        Self {
            center: bounds.center(),
            range: if range < MIN_RANGE { MIN_RANGE } else { range },
            width: viewport.width,
            height: viewport.height,
        }
    }

    /// Uniform range (in degrees) mapped onto the viewport
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Project a single coordinate
    pub fn project(&self, c: GeoCoordinate) -> ViewportPoint {
        let nx = (c.lng - self.center.lng) / self.range;
        let ny = (c.lat - self.center.lat) / self.range;
        ViewportPoint {
            x: (0.5 + nx) * self.width,
            y: (0.5 - ny) * self.height,
        }
    }
}

/// Map `coordinates` into the viewport.
///
/// The bounding box is computed from `bounding` when it is non-empty and from
/// `coordinates` otherwise. Empty `coordinates` yield an empty result.
pub fn transform(
    coordinates: &[GeoCoordinate],
    viewport: &ViewportConfig,
    bounding: Option<&[GeoCoordinate]>,
) -> TransformResult {
    if coordinates.is_empty() {
        return TransformResult::empty();
    }

    let context = match bounding {
        Some(b) if !b.is_empty() => b,
        _ => coordinates,
    };
    let Some(bounds) = Bounds::from_coordinates(context) else {
        return TransformResult::empty();
    };

    let projection = Projection::new(&bounds, viewport);

    TransformResult {
        points: coordinates.iter().map(|c| projection.project(*c)).collect(),
        bounds: Some(bounds),
        center: Some(projection.project(bounds.center())),
    }
}
