//! Mini map composition for direction steps
//!
//! Each thumbnail shows the current step's geometry on top of the previous
//! step's geometry, both projected against their combined extent so the two
//! segments share one scale. The turn point (the first point of the current
//! step) gets a solid marker and an arrow glyph.

use crate::direction::DirectionStep;
use crate::geo::{extract_coordinates, transform, GeoCoordinate, RouteData};
use crate::palette::ColorResolver;

use super::arrow::ArrowGlyph;
use super::svg::{fill_style, stroke_styles, SvgBuilder};
use super::MiniMapConfig;

const GUIDE_STROKE_WIDTH: f64 = 1.0;

/// Renders mini maps with a fixed configuration and color resolver
pub struct MiniMapComposer<R> {
    config: MiniMapConfig,
    resolver: R,
}

impl<R: ColorResolver> MiniMapComposer<R> {
    pub fn new(config: MiniMapConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &MiniMapConfig {
        &self.config
    }

    /// Render the mini map for `direction`.
    ///
    /// `color` strokes the current segment. The previous segment, when
    /// `previous` references any features, is colored by the resolver;
    /// otherwise it is empty and the configured fallback color applies.
    /// `is_first` does not change the output.
    pub fn compose(
        &self,
        route: &RouteData,
        direction: &DirectionStep,
        previous: Option<&DirectionStep>,
        color: &str,
        is_first: bool,
    ) -> String {
        let current = extract_coordinates(route, &direction.feature_indices);
        if current.is_empty() {
            tracing::debug!(
                indices = direction.feature_indices.len(),
                is_first,
                "no coordinates for direction step, rendering empty mini map"
            );
            return self.empty_shell();
        }

        let (previous_coords, previous_color) = match previous {
            Some(step) if step.has_features() => (
                extract_coordinates(route, &step.feature_indices),
                self.resolver.resolve_color(&step.route_type),
            ),
            _ => (Vec::new(), self.config.fallback_color.clone()),
        };

        let context: Vec<GeoCoordinate> = previous_coords
            .iter()
            .chain(current.iter())
            .copied()
            .collect();

        let viewport = &self.config.viewport;
        let current_view = transform(&current, viewport, Some(&context));
        let previous_view = transform(&previous_coords, viewport, Some(&context));

        let mut builder = SvgBuilder::new(self.config.clone());
        let (w, h) = (viewport.width, viewport.height);

        builder.add_rect("background", 0.0, 0.0, w, h, &fill_style(&self.config.background));

        let guide = stroke_styles(&self.config.guide_color, GUIDE_STROKE_WIDTH, None);
        builder.add_line("guide", 0.0, h / 2.0, w, h / 2.0, &guide);
        builder.add_line("guide", w / 2.0, 0.0, w / 2.0, h, &guide);

        if !previous_view.is_empty() {
            builder.add_polyline(
                "previous",
                &previous_view.points,
                &stroke_styles(
                    &previous_color,
                    self.config.previous_stroke_width,
                    Some(self.config.previous_opacity),
                ),
            );
        }

        builder.add_polyline(
            "current",
            &current_view.points,
            &stroke_styles(color, self.config.current_stroke_width, Some(1.0)),
        );

        if let Some(turn) = current_view.first() {
            builder.add_circle(
                "turn-point",
                turn.x,
                turn.y,
                self.config.marker_radius,
                &fill_style(color),
            );
            builder.add_arrow(&ArrowGlyph::new(
                turn.x,
                turn.y,
                direction.heading_or_north(),
                color,
            ));
        }

        tracing::debug!(
            current_points = current_view.points.len(),
            previous_points = previous_view.points.len(),
            is_first,
            "rendered mini map"
        );

        builder.build()
    }

    /// Render one mini map per step, in order.
    ///
    /// Step `i` uses step `i - 1` as its previous direction and its own route
    /// type for its color. A step without usable geometry yields the empty
    /// shell; it never stops the batch.
    pub fn compose_all(&self, route: &RouteData, directions: &[DirectionStep]) -> Vec<String> {
        directions
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let span = tracing::info_span!("minimap_step", step = i);
                let _guard = span.enter();

                let previous = i.checked_sub(1).map(|p| &directions[p]);
                let color = self.resolver.resolve_color(&step.route_type);
                self.compose(route, step, previous, &color, i == 0)
            })
            .collect()
    }

    /// SVG root with the configured viewport and no content
    pub fn empty_shell(&self) -> String {
        SvgBuilder::new(self.config.clone()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::ViewportConfig;
    use crate::palette::RoutePalette;
    use geojson::{Feature, Geometry, Value};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn line_feature(points: &[(f64, f64)]) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(
                points.iter().map(|&(x, y)| vec![x, y]).collect(),
            ))),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    fn route() -> RouteData {
        RouteData::new(vec![
            line_feature(&[(0.0, 0.0), (0.0, 1.0)]),
            line_feature(&[(0.0, 1.0), (1.0, 1.0), (1.0, 2.0)]),
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![3.0, 3.0]))),
                id: None,
                properties: None,
                foreign_members: None,
            },
        ])
    }

    fn composer() -> MiniMapComposer<RoutePalette> {
        MiniMapComposer::new(MiniMapConfig::default(), RoutePalette::default())
    }

    #[test]
    fn test_empty_geometry_renders_shell() {
        let composer = composer();
        let step = DirectionStep::new(vec![2], "bus");
        let svg = composer.compose(&route(), &step, None, "#ff0000", true);
        assert_eq!(svg, composer.empty_shell());
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_resolver_not_called_without_previous_data() {
        let calls = RefCell::new(Vec::new());
        let resolver = |tag: &str| {
            calls.borrow_mut().push(tag.to_string());
            "#00ff00".to_string()
        };
        let composer = MiniMapComposer::new(MiniMapConfig::default(), resolver);
        let step = DirectionStep::new(vec![1], "walk");

        let svg = composer.compose(&route(), &step, None, "#ff0000", false);
        let empty_prev = DirectionStep::new(vec![], "bus");
        composer.compose(&route(), &step, Some(&empty_prev), "#ff0000", false);

        assert!(calls.borrow().is_empty());
        assert!(!svg.contains("mm-previous"));
    }

    #[test]
    fn test_previous_segment_uses_resolved_color() {
        let resolver = |tag: &str| format!("#{}", if tag == "bus" { "0000ff" } else { "000000" });
        let composer = MiniMapComposer::new(MiniMapConfig::default(), resolver);
        let previous = DirectionStep::new(vec![0], "bus");
        let step = DirectionStep::new(vec![1], "walk").with_heading(90.0);

        let svg = composer.compose(&route(), &step, Some(&previous), "#ff0000", false);
        assert!(svg.contains(r##"class="mm-previous""##));
        assert!(svg.contains(r##"stroke="#0000ff""##));
        assert!(svg.contains(r#"stroke-opacity="0.35""#));

        // previous is drawn beneath current
        let prev_at = svg.find("mm-previous").unwrap();
        let curr_at = svg.find("mm-current").unwrap();
        assert!(prev_at < curr_at);
    }

    #[test]
    fn test_segments_share_scale() {
        let composer = MiniMapComposer::new(
            MiniMapConfig::default().with_viewport(ViewportConfig::default().with_padding(0.0)),
            RoutePalette::default(),
        );
        let previous = DirectionStep::new(vec![0], "bus");
        let step = DirectionStep::new(vec![1], "walk");

        // combined extent is (0,0)-(1,2): range 2, center (0.5, 1)
        // so the turn point (0,1) lands at x = (0.5 - 0.25) * 120 = 30, y = 60
        let svg = composer.compose(&route(), &step, Some(&previous), "#ff0000", false);
        assert!(svg.contains(r#"cx="30" cy="60""#), "{}", svg);
        assert!(svg.contains(r#"translate(30 60)"#));
    }

    #[test]
    fn test_missing_heading_points_north() {
        let step = DirectionStep::new(vec![1], "walk");
        let svg = composer().compose(&route(), &step, None, "#ff0000", false);
        assert!(svg.contains("rotate(-90)"));
    }

    #[test]
    fn test_is_first_does_not_change_output() {
        let composer = composer();
        let previous = DirectionStep::new(vec![0], "bus");
        let step = DirectionStep::new(vec![1], "walk").with_heading(45.0);
        assert_eq!(
            composer.compose(&route(), &step, Some(&previous), "#ff0000", true),
            composer.compose(&route(), &step, Some(&previous), "#ff0000", false)
        );
    }

    #[test]
    fn test_compose_all_chains_previous_steps() {
        let composer = composer();
        let steps = vec![
            DirectionStep::new(vec![0], "walk").with_heading(0.0),
            DirectionStep::new(vec![2], "bus"),
            DirectionStep::new(vec![1], "bus").with_heading(90.0),
        ];
        let maps = composer.compose_all(&route(), &steps);
        assert_eq!(maps.len(), 3);

        assert!(!maps[0].contains("mm-previous"));
        assert!(maps[0].contains(r##"stroke="#4caf50""##));

        // a step without geometry renders the empty shell and the batch continues
        assert_eq!(maps[1], composer.empty_shell());

        // step 1 references only a point feature, so step 2 has no previous path
        assert!(!maps[2].contains("mm-previous"));
        assert!(maps[2].contains(r##"stroke="#2196f3""##));
        assert!(maps[2].contains("rotate(0)"));
    }
}
