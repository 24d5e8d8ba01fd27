//! SVG document assembly

use super::arrow::ArrowGlyph;
use super::path::{fmt_num, path_from};
use super::MiniMapConfig;
use crate::geo::ViewportPoint;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: MiniMapConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: MiniMapConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    pub fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn class(&self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Number of child elements added so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, class: &str, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.class(class),
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            styles
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, class: &str, x1: f64, y1: f64, x2: f64, y2: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            self.class(class),
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            styles
        ));
    }

    /// Add an unfilled polyline through `points`
    pub fn add_polyline(&mut self, class: &str, points: &[ViewportPoint], styles: &str) {
        self.elements.push(format!(
            r#"{}<path class="{}" d="{}" fill="none"{}/>"#,
            self.indent_str(),
            self.class(class),
            path_from(points),
            styles
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, class: &str, cx: f64, cy: f64, r: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            self.class(class),
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r),
            styles
        ));
    }

    /// Add an arrow glyph group
    pub fn add_arrow(&mut self, glyph: &ArrowGlyph) {
        let markup = glyph.to_svg(&self.prefix());
        self.elements.push(format!("{}{}", self.indent_str(), markup));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let w = fmt_num(self.config.width());
        let h = fmt_num(self.config.height());

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Format stroke attributes for a polyline
pub fn stroke_styles(color: &str, width: f64, opacity: Option<f64>) -> String {
    let mut parts = vec![
        format!(r#" stroke="{}""#, escape_xml(color)),
        format!(r#" stroke-width="{}""#, fmt_num(width)),
        r#" stroke-linecap="round" stroke-linejoin="round""#.to_string(),
    ];
    if let Some(op) = opacity {
        if op < 1.0 {
            parts.push(format!(r#" stroke-opacity="{}""#, op));
        }
    }
    parts.join("")
}

/// Format a fill attribute
pub fn fill_style(color: &str) -> String {
    format!(r#" fill="{}""#, escape_xml(color))
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
