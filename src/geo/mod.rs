//! Geographic input handling
//!
//! Extracts coordinates from route features and projects them into the
//! fixed-size viewport the renderer draws into.

pub mod config;
pub mod extract;
pub mod transform;
pub mod types;

pub use config::ViewportConfig;
pub use extract::{extract_coordinates, RouteData};
pub use transform::{transform, Projection, TransformResult};
pub use types::{Bounds, GeoCoordinate, ViewportPoint};
