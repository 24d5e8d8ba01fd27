//! Directional arrow glyph drawn at the turn point.
//!
//! The glyph is a filled triangle on a translucent white disk. Its base shape
//! points east (screen right), which is a 90° compass heading, so a heading is
//! turned into an SVG rotation by subtracting [`BASE_HEADING`].
//!
//! ## Rotation Convention
//!
//! SVG rotation is clockwise positive in degrees, as are compass headings:
//! - heading 0° (north) → `rotate(-90)`
//! - heading 90° (east) → `rotate(0)`
//! - heading 180° (south) → `rotate(90)`

use super::path::fmt_num;
use super::svg::escape_xml;

/// Compass heading the un-rotated glyph points at
pub const BASE_HEADING: f64 = 90.0;

const DISK_RADIUS: f64 = 9.0;
const DISK_OPACITY: f64 = 0.85;
const TRIANGLE: &str = "M-4 -5 L6 0 L-4 5 Z";

/// Arrow glyph at a viewport position
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGlyph {
    pub x: f64,
    pub y: f64,
    /// Compass heading in degrees (0 = north, clockwise)
    pub heading: f64,
    pub color: String,
}

impl ArrowGlyph {
    pub fn new(x: f64, y: f64, heading: f64, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            heading,
            color: color.into(),
        }
    }

    /// SVG rotation applied to the base glyph
    pub fn rotation(&self) -> f64 {
        self.heading - BASE_HEADING
    }

    /// Render the glyph as a single `<g>` element
    pub fn to_svg(&self, class_prefix: &str) -> String {
        format!(
            r##"<g class="{prefix}arrow" transform="translate({x} {y}) rotate({r})"><circle r="{disk}" fill="#ffffff" fill-opacity="{opacity}"/><path d="{triangle}" fill="{color}"/></g>"##,
            prefix = class_prefix,
            x = fmt_num(self.x),
            y = fmt_num(self.y),
            r = fmt_num(self.rotation()),
            disk = fmt_num(DISK_RADIUS),
            opacity = DISK_OPACITY,
            triangle = TRIANGLE,
            color = escape_xml(&self.color),
        )
    }
}

/// Render an arrow glyph at `(x, y)` pointing along `heading`
pub fn arrow(x: f64, y: f64, heading: f64, color: &str) -> String {
    ArrowGlyph::new(x, y, heading, color).to_svg("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_rotates_minus_90() {
        let svg = arrow(10.0, 20.0, 0.0, "#ff0000");
        assert!(svg.contains("rotate(-90)"), "{}", svg);
    }

    #[test]
    fn test_east_is_unrotated() {
        let svg = arrow(10.0, 20.0, 90.0, "#ff0000");
        assert!(svg.contains("rotate(0)"), "{}", svg);
    }

    #[test]
    fn test_rotation_values() {
        assert_eq!(ArrowGlyph::new(0.0, 0.0, 180.0, "red").rotation(), 90.0);
        assert_eq!(ArrowGlyph::new(0.0, 0.0, 270.0, "red").rotation(), 180.0);
        assert_eq!(ArrowGlyph::new(0.0, 0.0, 45.5, "red").rotation(), -44.5);
    }

    #[test]
    fn test_glyph_markup() {
        let svg = ArrowGlyph::new(60.0, 42.5, 90.0, "#ff0000").to_svg("mm-");
        insta::assert_snapshot!(svg, @r##"<g class="mm-arrow" transform="translate(60 42.5) rotate(0)"><circle r="9" fill="#ffffff" fill-opacity="0.85"/><path d="M-4 -5 L6 0 L-4 5 Z" fill="#ff0000"/></g>"##);
    }

    #[test]
    fn test_color_is_escaped() {
        let svg = arrow(0.0, 0.0, 0.0, r#"red" onload="x"#);
        assert!(!svg.contains(r#"onload="x""#));
        assert!(svg.contains("&quot;"));
    }
}
