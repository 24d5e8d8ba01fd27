//! Core types for geographic and viewport coordinates

/// A longitude/latitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub lng: f64,
    pub lat: f64,
}

impl GeoCoordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

/// A point in SVG pixel space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewportPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Geographic extent of a coordinate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn new(min_lng: f64, max_lng: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            max_lng,
            min_lat,
            max_lat,
        }
    }

    /// Smallest bounds containing every coordinate, or `None` for an empty set
    pub fn from_coordinates(coordinates: &[GeoCoordinate]) -> Option<Self> {
        let (first, rest) = coordinates.split_first()?;
        let seed = Self::new(first.lng, first.lng, first.lat, first.lat);
        Some(rest.iter().fold(seed, |b, c| b.expand_to_include(*c)))
    }

    /// Expand these bounds to include a coordinate
    pub fn expand_to_include(&self, c: GeoCoordinate) -> Bounds {
        Bounds::new(
            self.min_lng.min(c.lng),
            self.max_lng.max(c.lng),
            self.min_lat.min(c.lat),
            self.max_lat.max(c.lat),
        )
    }

    pub fn lng_range(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Centroid of the box
    pub fn center(&self) -> GeoCoordinate {
        GeoCoordinate {
            lng: (self.min_lng + self.max_lng) / 2.0,
            lat: (self.min_lat + self.max_lat) / 2.0,
        }
    }

    pub fn contains(&self, c: GeoCoordinate) -> bool {
        c.lng >= self.min_lng && c.lng <= self.max_lng && c.lat >= self.min_lat && c.lat <= self.max_lat
    }
}
