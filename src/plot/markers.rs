//! Point markers, uncertainty ellipses and limit-value placement.

use glam::{DVec2, dvec2};

use crate::axis::AxisRange;
use crate::data::Uncertain;
use crate::defaults;
use crate::layout::Transform;
use crate::style::{Color, LimitMarkers, Marker, PointStyle, SvgStyle, TextStyle};
use crate::svg::{Circle, Document, Element, Ellipse, Layer, Line, Polygon, Rect, Text, TextAnchor};
use crate::types::Bounds;

/// Fill of the 1, 2 and 3 standard deviation ellipses
const UNCERTAINTY_FILLS: [Color; 3] = [
    Color::Rgb(200, 200, 255),
    Color::Rgb(222, 222, 255),
    Color::Rgb(240, 240, 255),
];

fn paint(style: &PointStyle) -> SvgStyle {
    SvgStyle::new().stroke(style.stroke).fill(style.fill)
}

/// The element drawing `style` centered on `pos`, `None` for [`Marker::None`].
pub(crate) fn marker_element(style: &PointStyle, pos: DVec2) -> Option<Element> {
    let s = style.size;
    let half = s / 2.0;
    let element: Element = match &style.marker {
        Marker::None => return None,
        Marker::Circle | Marker::UncertaintyEllipse => {
            Circle::new(pos, half).style(paint(style)).into()
        }
        Marker::Square => Rect::new(Bounds::new(pos.x - half, pos.y - half, pos.x + half, pos.y + half))
            .style(paint(style))
            .into(),
        Marker::Point => Circle::new(pos, s / 4.0)
            .style(SvgStyle::new().stroke(style.stroke).fill(style.stroke))
            .into(),
        Marker::Egg => Ellipse::new(pos, dvec2(s / 3.0, half))
            .style(paint(style))
            .into(),
        Marker::VerticalLine => Line::new(pos - dvec2(0.0, half), pos + dvec2(0.0, half))
            .style(SvgStyle::new().stroke(style.stroke))
            .into(),
        Marker::HorizontalLine => Line::new(pos - dvec2(half, 0.0), pos + dvec2(half, 0.0))
            .style(SvgStyle::new().stroke(style.stroke))
            .into(),
        Marker::VerticalTick => Line::new(pos, pos - dvec2(0.0, s))
            .style(SvgStyle::new().stroke(style.stroke))
            .into(),
        Marker::HorizontalTick => Line::new(pos, pos + dvec2(s, 0.0))
            .style(SvgStyle::new().stroke(style.stroke))
            .into(),
        Marker::Cone => Polygon::new(vec![
            pos + dvec2(-half, -half),
            pos + dvec2(half, -half),
            pos + dvec2(0.0, half),
        ])
        .style(paint(style))
        .into(),
        glyph_marker => {
            let glyph = glyph_marker.glyph().unwrap_or("?");
            let fill = if style.fill.is_blank() {
                style.stroke
            } else {
                style.fill
            };
            // baseline a third of the glyph below its center
            Text::new(pos + dvec2(0.0, s / 3.0), glyph, &TextStyle::new().size(s))
                .anchor(TextAnchor::Middle)
                .fill(fill)
                .into()
        }
    };
    Some(element)
}

/// Pixel radius of `k` standard deviations along one axis.
fn sigma_radius(map: impl Fn(f64) -> f64, value: f64, sd: Option<f64>, k: f64) -> f64 {
    let r = match sd {
        Some(sd) => (map(value + k * sd) - map(value)).abs(),
        None => 0.0,
    };
    if r > 0.0 { r } else { defaults::MIN_ELLIPSE_RADIUS }
}

/// 3, 2 and 1 standard deviation ellipses around a point, outermost first.
///
/// Returns nothing when neither coordinate has a usable standard deviation.
pub(crate) fn uncertainty_ellipses(
    transform: &Transform,
    x: &Uncertain,
    y: Option<&Uncertain>,
    pos: DVec2,
) -> Vec<(Layer, Ellipse)> {
    let sx = x.usable_std_dev();
    let sy = y.and_then(Uncertain::usable_std_dev);
    if sx.is_none() && sy.is_none() {
        return Vec::new();
    }
    let y_value = y.map_or(0.0, |y| y.value);

    [
        (Layer::Uncertainty3, 3.0),
        (Layer::Uncertainty2, 2.0),
        (Layer::Uncertainty1, 1.0),
    ]
    .into_iter()
    .map(|(layer, k)| {
        let radii = dvec2(
            sigma_radius(|v| transform.x(v), x.value, sx, k),
            sigma_radius(|v| transform.y(v), y_value, sy, k),
        );
        let fill = UNCERTAINTY_FILLS[k as usize - 1];
        (layer, Ellipse::new(pos, radii).style(SvgStyle::new().fill(fill)))
    })
    .collect()
}

/// Draw a plottable point: its uncertainty ellipses when the marker asks
/// for them, then the marker itself.
pub(crate) fn draw_point(
    doc: &mut Document,
    transform: &Transform,
    pos: DVec2,
    x: &Uncertain,
    y: Option<&Uncertain>,
    style: &PointStyle,
) {
    if style.marker == Marker::UncertaintyEllipse {
        for (layer, ellipse) in uncertainty_ellipses(transform, x, y, pos) {
            doc.push(layer, ellipse);
        }
    }
    if let Some(marker) = marker_element(style, pos) {
        doc.push(Layer::DataPoints, marker);
    }
}

/// Where a coordinate falls relative to its axis range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reach {
    Inside,
    Missing,
    Above,
    Below,
}

pub(crate) fn reach(v: f64, range: &AxisRange) -> Reach {
    if v.is_nan() {
        Reach::Missing
    } else if v > range.max() && !range.contains(v) {
        Reach::Above
    } else if v < range.min() && !range.contains(v) {
        Reach::Below
    } else {
        Reach::Inside
    }
}

/// Pixel coordinate for one coordinate of a limit point.
///
/// Missing values sit where zero is, clamped into the window; values off
/// either end sit half a marker beyond the window edge.
pub(crate) fn limit_coordinate(
    v: f64,
    range: &AxisRange,
    map: impl Fn(f64) -> f64,
    low_edge: f64,
    high_edge: f64,
    half: f64,
) -> f64 {
    let direction = (high_edge - low_edge).signum();
    match reach(v, range) {
        Reach::Inside => map(v),
        Reach::Missing => map(range.clamp(0.0)),
        Reach::Above => high_edge + direction * half,
        Reach::Below => low_edge - direction * half,
    }
}

/// Marker for a point with the given coordinate reaches.
pub(crate) fn limit_style<'a>(limits: &'a LimitMarkers, reaches: &[Reach]) -> &'a PointStyle {
    if reaches.contains(&Reach::Missing) {
        &limits.nan
    } else if reaches.contains(&Reach::Above) {
        &limits.plus_infinity
    } else {
        &limits.minus_infinity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::{SvgNode, ToSvgNode};

    fn range(min: f64, max: f64) -> AxisRange {
        AxisRange::new(min, max).unwrap()
    }

    #[test]
    fn every_shape_draws_something() {
        let shapes = [
            Marker::Circle,
            Marker::Square,
            Marker::Point,
            Marker::Egg,
            Marker::UncertaintyEllipse,
            Marker::VerticalLine,
            Marker::HorizontalLine,
            Marker::VerticalTick,
            Marker::HorizontalTick,
            Marker::Cone,
            Marker::Star,
            Marker::Glyph("&#x03A9;".into()),
        ];
        for marker in shapes {
            let style = PointStyle::new(marker.clone());
            assert!(
                marker_element(&style, dvec2(10.0, 10.0)).is_some(),
                "{marker:?}"
            );
        }
        assert!(marker_element(&PointStyle::new(Marker::None), DVec2::ZERO).is_none());
    }

    #[test]
    fn glyph_marker_is_centered_text() {
        let style = PointStyle::new(Marker::Heart).stroke(Color::RED);
        let Some(Element::Text(text)) = marker_element(&style, dvec2(50.0, 40.0)) else {
            panic!("glyph marker should be text");
        };
        assert_eq!(text.anchor, TextAnchor::Middle);
        assert_eq!(text.fill, Some(Color::RED));
        let SvgNode::Text(node) = text.to_node(3) else {
            panic!("expected <text>");
        };
        assert_eq!(node.content, "\u{2665}");
    }

    #[test]
    fn ellipses_nest_and_end_with_one_sigma() {
        let window = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let t = Transform::new(window, &range(0.0, 10.0), Some(&range(0.0, 10.0)), 0.5);
        let x = Uncertain::new(5.0).std_dev(0.5);
        let y = Uncertain::new(5.0);
        let ellipses = uncertainty_ellipses(&t, &x, Some(&y), t.apply(dvec2(5.0, 5.0)));

        let layers: Vec<Layer> = ellipses.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            layers,
            [Layer::Uncertainty3, Layer::Uncertainty2, Layer::Uncertainty1]
        );
        assert_eq!(ellipses[0].1.radii.x, 15.0);
        assert_eq!(ellipses[2].1.radii.x, 5.0);
        // no y uncertainty: clamped to the minimum radius
        assert_eq!(ellipses[2].1.radii.y, defaults::MIN_ELLIPSE_RADIUS);
    }

    #[test]
    fn no_uncertainty_no_ellipses() {
        let window = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let t = Transform::new(window, &range(0.0, 10.0), None, 0.5);
        assert!(uncertainty_ellipses(&t, &Uncertain::new(1.0), None, DVec2::ZERO).is_empty());
    }

    #[test]
    fn limit_coordinates() {
        let r = range(-1.0, 11.0);
        let map = |v: f64| 10.0 * v + 20.0;
        let (left, right) = (10.0, 130.0);
        assert_eq!(limit_coordinate(f64::INFINITY, &r, map, left, right, 5.0), 135.0);
        assert_eq!(limit_coordinate(f64::NEG_INFINITY, &r, map, left, right, 5.0), 5.0);
        assert_eq!(limit_coordinate(99.0, &r, map, left, right, 5.0), 135.0);
        // straddles zero: NaN stays at zero
        assert_eq!(limit_coordinate(f64::NAN, &r, map, left, right, 5.0), 20.0);
        // all positive: NaN clamps to the nearer end
        let positive = range(2.0, 8.0);
        assert_eq!(limit_coordinate(f64::NAN, &positive, map, left, right, 5.0), 40.0);
    }

    #[test]
    fn vertical_limits_go_beyond_top_and_bottom() {
        let r = range(0.0, 10.0);
        let map = |v: f64| 100.0 - 10.0 * v;
        // bottom is the low edge, top the high edge
        assert_eq!(limit_coordinate(f64::INFINITY, &r, map, 100.0, 0.0, 5.0), -5.0);
        assert_eq!(limit_coordinate(-3.0, &r, map, 100.0, 0.0, 5.0), 105.0);
    }

    #[test]
    fn limit_style_prefers_nan() {
        let limits = LimitMarkers::default();
        assert_eq!(
            limit_style(&limits, &[Reach::Above, Reach::Missing]),
            &limits.nan
        );
        assert_eq!(limit_style(&limits, &[Reach::Above]), &limits.plus_infinity);
        assert_eq!(
            limit_style(&limits, &[Reach::Inside, Reach::Below]),
            &limits.minus_infinity
        );
    }
}
