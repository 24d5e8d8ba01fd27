//! Polyline path descriptors
//!
//! Converts transformed viewport points into SVG path `d` attribute strings.

use crate::geo::ViewportPoint;

/// Format a coordinate for SVG output, rounded to two decimals.
///
/// Whole numbers print without a fractional part and negative zero prints as
/// `0`, so `10.0` becomes `10` and `63.3333` becomes `63.33`.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Build a polyline `d` attribute: one move to the first point, then one line
/// to each subsequent point. Empty input gives an empty descriptor.
pub fn path_from(points: &[ViewportPoint]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut d = format!("M{} {}", fmt_num(first.x), fmt_num(first.y));
    for point in rest {
        d.push_str(&format!(" L{} {}", fmt_num(point.x), fmt_num(point.y)));
    }
    d
}
