//! Value labels written beside data points.

use glam::{DVec2, dvec2};

use crate::data::Uncertain;
use crate::defaults;
use crate::stats::confidence_interval;
use crate::style::ValueLabelStyle;
use crate::svg::{TSpan, Text, TextAnchor};

/// Runs describing one value: the number itself, then each enabled extra
/// in its own color.
pub(crate) fn value_spans(u: &Uncertain, style: &ValueLabelStyle) -> Vec<TSpan> {
    let fmt = &style.format;
    let mut spans = vec![TSpan::new(format!(
        "{}{}{}",
        style.prefix,
        fmt.format(u.value),
        style.suffix
    ))];

    if let Some(sd) = u.usable_std_dev() {
        if let Some(color) = style.plus_minus {
            spans.push(TSpan::new(format!(" &#x00B1;{}", fmt.format(sd))).fill(color));
        }
        if let Some(ci) = &style.confidence {
            let (lo, hi) = confidence_interval(u.value, sd, u.df, ci.alpha, ci.distribution);
            spans.push(
                TSpan::new(format!(" <{}, {}>", fmt.format(lo), fmt.format(hi))).fill(ci.color),
            );
        }
    }
    if let Some((color, df)) = style.df.zip(u.df) {
        spans.push(TSpan::new(format!(" ({df})")).fill(color));
    }
    if let Some((color, id)) = style.id.zip(u.id.as_ref()) {
        spans.push(TSpan::new(format!(" {id}")).fill(color));
    }
    if let Some((color, timestamp)) = style.timestamp.zip(u.timestamp.as_ref()) {
        spans.push(TSpan::new(format!(" {timestamp}")).fill(color));
    }
    if let Some((color, order)) = style.order.zip(u.order) {
        spans.push(TSpan::new(format!(" #{order}")).fill(color));
    }
    spans
}

/// Label text run starting just beyond a marker of `marker_size` at `pos`,
/// running in the label's rotation direction.
pub(crate) fn label_text(
    spans: Vec<TSpan>,
    style: &ValueLabelStyle,
    pos: DVec2,
    marker_size: f64,
) -> Text {
    let angle = style.rotation.degrees().to_radians();
    let along = dvec2(angle.cos(), angle.sin());
    let across = dvec2(-angle.sin(), angle.cos());
    let start = pos
        + along * (marker_size / 2.0 + defaults::TICK_LABEL_GAP)
        + across * (style.text.font_size / 3.0);

    let mut text = Text::new(start, "", &style.text)
        .anchor(TextAnchor::Start)
        .rotate(style.rotation.degrees())
        .fill(style.fill);
    text.spans = spans;
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, ConfidenceLabel, Rotation};
    use crate::svg::{SvgNode, ToSvgNode};

    #[test]
    fn plain_value() {
        let spans = value_spans(&Uncertain::new(4.2).std_dev(0.1), &ValueLabelStyle::new());
        assert_eq!(spans, vec![TSpan::new("4.2")]);
    }

    #[test]
    fn prefix_and_suffix_wrap_the_number() {
        let style = ValueLabelStyle::new().prefix("t=").suffix(" s");
        let spans = value_spans(&Uncertain::new(3.1), &style);
        assert_eq!(spans[0].text, "t=3.1 s");
    }

    #[test]
    fn extras_each_get_their_color() {
        let style = ValueLabelStyle::new()
            .plus_minus(Color::GRAY)
            .df(Color::BLUE)
            .id(Color::GREEN)
            .timestamp(Color::PURPLE)
            .order(Color::BROWN);
        let u = Uncertain::new(4.2)
            .std_dev(0.1)
            .df(9)
            .id("lap 2")
            .timestamp("2024-03-01")
            .order(7);
        let spans = value_spans(&u, &style);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            ["4.2", " &#x00B1;0.1", " (9)", " lap 2", " 2024-03-01", " #7"]
        );
        assert_eq!(spans[1].fill, Some(Color::GRAY));
        assert_eq!(spans[5].fill, Some(Color::BROWN));
    }

    #[test]
    fn missing_fields_are_skipped() {
        let style = ValueLabelStyle::new().plus_minus(Color::GRAY).id(Color::GREEN);
        assert_eq!(value_spans(&Uncertain::new(1.0), &style).len(), 1);
    }

    #[test]
    fn confidence_interval_run() {
        let style = ValueLabelStyle::new().confidence(ConfidenceLabel {
            distribution: crate::stats::Distribution::Uniform,
            alpha: 0.0,
            ..ConfidenceLabel::default()
        });
        let spans = value_spans(&Uncertain::new(10.0).std_dev(1.0), &style);
        // uniform half width is sqrt(3) * sd at alpha ~ 0
        assert_eq!(spans[1].text, " <8.27, 11.7>");
    }

    #[test]
    fn label_follows_rotation() {
        let style = ValueLabelStyle::new().rotation(Rotation::Upward);
        let text = label_text(vec![TSpan::new("7.8")], &style, dvec2(100.0, 100.0), 10.0);
        assert_eq!(text.rotation, -90.0);
        assert!(text.pos.y < 100.0);

        let SvgNode::Text(node) = text.to_node(3) else {
            panic!("expected <text>");
        };
        assert!(node.transform.is_some_and(|t| t.starts_with("rotate(-90")));
        assert_eq!(node.content, "7.8");
    }
}
