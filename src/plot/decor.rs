//! Everything drawn around the data: backgrounds, title, axes, ticks,
//! grids, axis labels and the legend.

use glam::dvec2;

use super::markers::marker_element;
use super::{AxisConfig, LegendConfig, PlotCommon};
use crate::axis::{Axis, TickLabelPlacement};
use crate::defaults;
use crate::layout::{LayoutResult, LegendEntrySpec, LegendLayout, LegendSpec, TextPlacement};
use crate::style::{Color, LineStyle, PointStyle, SvgStyle, TextStyle};
use crate::svg::{CLIP_ID, Document, Group, Layer, Line, Rect, Text, TextAnchor};

/// Image and window backgrounds, clip path and title.
pub(crate) fn draw_frame(doc: &mut Document, common: &PlotCommon, layout: &LayoutResult) {
    let border = common.image_border_width();
    doc.push(
        Layer::ImageBackground,
        Rect::new(layout.image.inset(border / 2.0)).style(common.image_frame.clone()),
    );
    doc.push(
        Layer::PlotBackground,
        Rect::new(layout.plot_window).style(common.window_frame.clone()),
    );

    if common.clip_to_window {
        doc.clip_window = Some(layout.plot_window);
        for layer in [Layer::DataLines, Layer::DataPoints] {
            doc.layer_mut(layer).clip_path = Some(CLIP_ID.to_string());
        }
    }

    if let (Some(title), Some(place)) = (&common.title, layout.title) {
        doc.push(
            Layer::Title,
            caption(place, title, &common.title_style).anchor(TextAnchor::Middle),
        );
    }
}

fn caption(place: TextPlacement, text: &str, style: &TextStyle) -> Text {
    Text::new(place.pos, text, style).text_length(place.text_length)
}

/// Axis captions placed by layout.
pub(crate) fn draw_axis_captions(
    doc: &mut Document,
    layout: &LayoutResult,
    x: Option<(&str, &TextStyle)>,
    y: Option<(&str, &TextStyle)>,
) {
    if let (Some((text, style)), Some(place)) = (x, layout.x_label) {
        doc.push(
            Layer::XLabel,
            caption(place, text, style).anchor(TextAnchor::Middle),
        );
    }
    if let (Some((text, style)), Some(place)) = (y, layout.y_label) {
        doc.push(
            Layer::YLabel,
            caption(place, text, style)
                .anchor(TextAnchor::Middle)
                .rotate(-90.0),
        );
    }
}

fn grid_style(color: Color, width: f64) -> SvgStyle {
    SvgStyle::new().stroke(color).width(width)
}

/// Anchor that keeps a rotated tick label clear of its tick.
pub(crate) fn rotated_anchor(degrees: f64, level: TextAnchor) -> TextAnchor {
    if degrees == 0.0 {
        level
    } else if degrees < 0.0 {
        TextAnchor::End
    } else {
        TextAnchor::Start
    }
}

/// Horizontal axis line at pixel height `line_y`, with its ticks, grid and
/// tick values.
pub(crate) fn draw_x_axis(
    doc: &mut Document,
    layout: &LayoutResult,
    axis: &Axis,
    config: &AxisConfig,
    labels: &[String],
    line_y: f64,
) {
    let window = layout.plot_window;
    let t = &layout.transform;
    let ticks = &config.ticks;

    if let Some(color) = ticks.minor_grid {
        for v in axis.minor_ticks() {
            let x = t.x(v);
            doc.push(
                Layer::XMinorGrid,
                Line::new(dvec2(x, window.top), dvec2(x, window.bottom))
                    .style(grid_style(color, defaults::MINOR_GRID_WIDTH)),
            );
        }
    }
    if let Some(color) = ticks.major_grid {
        for v in axis.major_ticks() {
            let x = t.x(v);
            doc.push(
                Layer::XMajorGrid,
                Line::new(dvec2(x, window.top), dvec2(x, window.bottom))
                    .style(grid_style(color, defaults::MAJOR_GRID_WIDTH)),
            );
        }
    }

    doc.push(
        Layer::XAxis,
        Line::new(dvec2(window.left, line_y), dvec2(window.right, line_y))
            .style(config.line.clone()),
    );

    // Window-edge values hang below the window, so their ticks go there too
    let base = if ticks.labels == TickLabelPlacement::WindowEdge {
        window.bottom
    } else {
        line_y
    };
    let span = |len: f64| {
        let down = if ticks.direction.reaches_outside() { len } else { 0.0 };
        let up = if ticks.direction.reaches_inside() { len } else { 0.0 };
        (base - up, base + down)
    };

    let (top, bottom) = span(ticks.minor_length);
    for v in axis.minor_ticks() {
        let x = t.x(v);
        doc.push(
            Layer::XMinorTicks,
            Line::new(dvec2(x, top), dvec2(x, bottom))
                .style(grid_style(ticks.color, ticks.minor_width)),
        );
    }
    let (top, bottom) = span(ticks.major_length);
    let majors = axis.major_ticks();
    for &v in &majors {
        let x = t.x(v);
        doc.push(
            Layer::XMajorTicks,
            Line::new(dvec2(x, top), dvec2(x, bottom))
                .style(grid_style(ticks.color, ticks.major_width)),
        );
    }

    if ticks.labels == TickLabelPlacement::None {
        return;
    }
    let degrees = ticks.label_rotation.degrees();
    let font_size = ticks.label_text.font_size;
    let top_of_text = base + ticks.outside_reach() + defaults::TICK_LABEL_GAP;
    let y = if degrees == 0.0 {
        top_of_text + font_size
    } else {
        top_of_text + font_size / 2.0
    };
    for (&v, label) in majors.iter().zip(labels) {
        doc.push(
            Layer::XTickValues,
            Text::new(dvec2(t.x(v), y), label.as_str(), &ticks.label_text)
                .anchor(rotated_anchor(degrees, TextAnchor::Middle))
                .rotate(degrees),
        );
    }
}

/// Vertical axis line at pixel position `line_x`, with its ticks, grid and
/// tick values.
pub(crate) fn draw_y_axis(
    doc: &mut Document,
    layout: &LayoutResult,
    axis: &Axis,
    config: &AxisConfig,
    labels: &[String],
    line_x: f64,
) {
    let window = layout.plot_window;
    let t = &layout.transform;
    let ticks = &config.ticks;

    if let Some(color) = ticks.minor_grid {
        for v in axis.minor_ticks() {
            let y = t.y(v);
            doc.push(
                Layer::YMinorGrid,
                Line::new(dvec2(window.left, y), dvec2(window.right, y))
                    .style(grid_style(color, defaults::MINOR_GRID_WIDTH)),
            );
        }
    }
    if let Some(color) = ticks.major_grid {
        for v in axis.major_ticks() {
            let y = t.y(v);
            doc.push(
                Layer::YMajorGrid,
                Line::new(dvec2(window.left, y), dvec2(window.right, y))
                    .style(grid_style(color, defaults::MAJOR_GRID_WIDTH)),
            );
        }
    }

    doc.push(
        Layer::YAxis,
        Line::new(dvec2(line_x, window.top), dvec2(line_x, window.bottom))
            .style(config.line.clone()),
    );

    let base = if ticks.labels == TickLabelPlacement::WindowEdge {
        window.left
    } else {
        line_x
    };
    let span = |len: f64| {
        let left = if ticks.direction.reaches_outside() { len } else { 0.0 };
        let right = if ticks.direction.reaches_inside() { len } else { 0.0 };
        (base - left, base + right)
    };

    let (left, right) = span(ticks.minor_length);
    for v in axis.minor_ticks() {
        let y = t.y(v);
        doc.push(
            Layer::YMinorTicks,
            Line::new(dvec2(left, y), dvec2(right, y))
                .style(grid_style(ticks.color, ticks.minor_width)),
        );
    }
    let (left, right) = span(ticks.major_length);
    let majors = axis.major_ticks();
    for &v in &majors {
        let y = t.y(v);
        doc.push(
            Layer::YMajorTicks,
            Line::new(dvec2(left, y), dvec2(right, y))
                .style(grid_style(ticks.color, ticks.major_width)),
        );
    }

    if ticks.labels == TickLabelPlacement::None {
        return;
    }
    let degrees = ticks.label_rotation.degrees();
    let x = base - ticks.outside_reach() - defaults::TICK_LABEL_GAP;
    let lift = ticks.label_text.font_size / 3.0;
    for (&v, label) in majors.iter().zip(labels) {
        doc.push(
            Layer::YTickValues,
            Text::new(dvec2(x, t.y(v) + lift), label.as_str(), &ticks.label_text)
                .anchor(rotated_anchor(degrees, TextAnchor::End))
                .rotate(degrees),
        );
    }
}

/// One series as the legend shows it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LegendItem<'a> {
    pub title: &'a str,
    pub point: &'a PointStyle,
    pub line: Option<&'a LineStyle>,
}

/// Sizing input for the legend, `None` when it is switched off.
pub(crate) fn legend_spec<'a>(
    config: &'a LegendConfig,
    items: &[LegendItem<'a>],
) -> Option<LegendSpec<'a>> {
    if !config.show {
        return None;
    }
    Some(LegendSpec {
        title: config.title.as_deref(),
        title_style: &config.title_style,
        text_style: &config.text_style,
        entries: items
            .iter()
            .map(|item| LegendEntrySpec {
                title: item.title,
                marker_size: item.point.marker.is_visible().then_some(item.point.size),
                has_line: item.line.is_some(),
            })
            .collect(),
        border_width: config.border_width(),
        placement: config.placement,
    })
}

/// Legend box, title and one group per series.
pub(crate) fn draw_legend(
    doc: &mut Document,
    config: &LegendConfig,
    legend: &LegendLayout,
    items: &[LegendItem<'_>],
) {
    doc.push(
        Layer::LegendBackground,
        Rect::new(legend.bounds).style(config.frame.clone()),
    );
    if let Some(title) = &config.title {
        doc.push(
            Layer::LegendTitle,
            Text::new(legend.title_pos(&config.title_style), title.as_str(), &config.title_style)
                .anchor(TextAnchor::Middle),
        );
    }

    for (i, item) in items.iter().enumerate() {
        let row = legend.row(i, item.line.is_some(), &config.text_style);
        let mut entry = Group::new().class("legendEntry");
        if let Some(marker) = marker_element(item.point, row.marker) {
            entry.push(marker);
        }
        if let (Some(line), Some((from, to))) = (item.line, row.line) {
            entry.push(
                Line::new(from, to).style(SvgStyle::new().stroke(line.color).width(line.width)),
            );
        }
        entry.push(Text::new(row.text, item.title, &config.text_style));
        doc.push(Layer::LegendEntries, entry);
    }
}
