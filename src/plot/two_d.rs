//! XY plots.

use glam::{DVec2, dvec2};

use super::decor::{self, LegendItem};
use super::labels::{label_text, value_spans};
use super::markers::{Reach, draw_point, limit_coordinate, limit_style, marker_element, reach};
use super::{AxisConfig, Plot, PlotCommon};
use crate::axis::{Axis, format_tick_labels};
use crate::data::{Uncertain, partition};
use crate::defaults;
use crate::errors::PlotResult;
use crate::layout::{AxisLayout, Caption, LayoutResult, LayoutSpec, Transform, compute_layout};
use crate::style::{Color, LineStyle, PointStyle, SvgStyle, ValueLabelStyle};
use crate::svg::{Document, Layer, Line, Path, Polygon, Polyline, Rect, TSpan};
use crate::types::Bounds;

/// Bars from each point to an axis line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Bars {
    #[default]
    None,
    /// Thin line down (or up) to the X axis
    YStick,
    /// Thin line across to the Y axis
    XStick,
    /// Filled block down (or up) to the X axis
    YBlock,
    /// Filled block across to the Y axis
    XBlock,
}

/// One named set of `(x, y)` points.
#[derive(Clone, Debug, PartialEq)]
pub struct Series2d {
    pub title: String,
    pub points: Vec<(Uncertain, Uncertain)>,
    pub point: PointStyle,
    /// Line joining the points in order
    pub line: Option<LineStyle>,
    pub bars: Bars,
    pub bar_style: SvgStyle,
    pub bar_width: f64,
    pub value_labels: Option<ValueLabelStyle>,
    /// Write the X value ahead of Y in value labels
    pub label_x: bool,
}

impl Series2d {
    pub fn new<X: Into<Uncertain>, Y: Into<Uncertain>>(
        title: impl Into<String>,
        points: impl IntoIterator<Item = (X, Y)>,
    ) -> Self {
        Self {
            title: title.into(),
            points: points
                .into_iter()
                .map(|(x, y)| (x.into(), y.into()))
                .collect(),
            point: PointStyle::default(),
            line: None,
            bars: Bars::None,
            bar_style: SvgStyle::new()
                .stroke(Color::BLACK)
                .fill(Color::LIGHT_GRAY)
                .width(defaults::DATA_LINE_WIDTH),
            bar_width: defaults::BAR_WIDTH,
            value_labels: None,
            label_x: false,
        }
    }

    pub fn point(mut self, point: PointStyle) -> Self {
        self.point = point;
        self
    }

    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    pub fn bars(mut self, bars: Bars) -> Self {
        self.bars = bars;
        self
    }

    pub fn bar_style(mut self, style: SvgStyle) -> Self {
        self.bar_style = style;
        self
    }

    pub fn value_labels(mut self, style: ValueLabelStyle) -> Self {
        self.value_labels = Some(style);
        self
    }

    pub fn label_x(mut self, label_x: bool) -> Self {
        self.label_x = label_x;
        self
    }
}

/// Points, lines and bars over two numeric axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot2d {
    pub common: PlotCommon,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub series: Vec<Series2d>,
}

impl Default for Plot2d {
    fn default() -> Self {
        Self {
            common: PlotCommon::new(defaults::IMAGE_SIZE_2D),
            x_axis: AxisConfig::new(),
            y_axis: AxisConfig::new(),
            series: Vec::new(),
        }
    }
}

struct Prepared {
    x: Axis,
    y: Axis,
    x_labels: Vec<String>,
    y_labels: Vec<String>,
    layout: LayoutResult,
}

impl Prepared {
    /// Pixel height of the X axis line and pixel position of the Y axis line
    fn axis_lines(&self) -> (f64, f64) {
        let t = &self.layout.transform;
        (t.y(self.y.cross_value()), t.x(self.x.cross_value()))
    }
}

impl Plot2d {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_common(mut self, common: PlotCommon) -> Self {
        self.common = common;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.common = self.common.title(title);
        self
    }

    pub fn legend_on(mut self, show: bool) -> Self {
        self.common = self.common.legend_on(show);
        self
    }

    pub fn x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn x_range(mut self, min: f64, max: f64) -> PlotResult<Self> {
        self.x_axis = self.x_axis.range(min, max)?;
        Ok(self)
    }

    pub fn y_range(mut self, min: f64, max: f64) -> PlotResult<Self> {
        self.y_axis = self.y_axis.range(min, max)?;
        Ok(self)
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis = self.x_axis.label(label);
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_axis = self.y_axis.label(label);
        self
    }

    pub fn series(mut self, series: Series2d) -> Self {
        self.series.push(series);
        self
    }

    fn legend_items(&self) -> Vec<LegendItem<'_>> {
        self.series
            .iter()
            .map(|s| LegendItem {
                title: &s.title,
                point: &s.point,
                line: s.line.as_ref(),
            })
            .collect()
    }

    fn prepare(&self) -> PlotResult<Prepared> {
        let (xs, ys): (Vec<Uncertain>, Vec<Uncertain>) = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().cloned())
            .unzip();
        let x = self.x_axis.resolve(&xs)?;
        let y = self.y_axis.resolve(&ys)?;
        let x_labels = format_tick_labels(&x.major_ticks(), &self.x_axis.ticks.format);
        let y_labels = format_tick_labels(&y.major_ticks(), &self.y_axis.ticks.format);

        let common = &self.common;
        let x_caption = self.x_axis.caption();
        let y_caption = self.y_axis.caption();
        let items = self.legend_items();
        let spec = LayoutSpec {
            image: common.image_size,
            border_width: common.image_border_width(),
            title: common
                .title
                .as_deref()
                .map(|t| Caption::new(t, &common.title_style)),
            x_label: x_caption
                .as_deref()
                .map(|t| Caption::new(t, &self.x_axis.label_style)),
            y_label: y_caption
                .as_deref()
                .map(|t| Caption::new(t, &self.y_axis.label_style)),
            limit_margin: common.limit_markers.max_size(),
            legend: decor::legend_spec(&common.legend, &items),
            x_axis: AxisLayout {
                range: x.range,
                ticks: &self.x_axis.ticks,
                labels: &x_labels,
            },
            y_axis: Some(AxisLayout {
                range: y.range,
                ticks: &self.y_axis.ticks,
                labels: &y_labels,
            }),
            x_axis_position: defaults::X_AXIS_POSITION_1D,
        };
        let layout = compute_layout(&spec)?;
        Ok(Prepared {
            x,
            y,
            x_labels,
            y_labels,
            layout,
        })
    }

    fn draw_series(&self, doc: &mut Document, series: &Series2d, prep: &Prepared) {
        let t = &prep.layout.transform;
        let window = prep.layout.plot_window;
        let (x_line, y_line) = prep.axis_lines();
        let split = partition(&series.points);
        let inside = |(x, y): &&(Uncertain, Uncertain)| {
            reach(x.value, &prep.x.range) == Reach::Inside
                && reach(y.value, &prep.y.range) == Reach::Inside
        };

        let visible: Vec<&(Uncertain, Uncertain)> = split.normal.iter().filter(inside).collect();
        let pixels: Vec<DVec2> = visible
            .iter()
            .map(|(x, y)| t.apply(dvec2(x.value, y.value)))
            .collect();

        if let Some(line) = &series.line {
            draw_line(doc, line, &pixels, x_line);
        }
        for &pos in &pixels {
            draw_bar(doc, series, pos, x_line, y_line);
        }

        for ((x, y), &pos) in visible.iter().map(|p| (&p.0, &p.1)).zip(&pixels) {
            draw_point(doc, t, pos, x, Some(y), &series.point);
            if let Some(style) = &series.value_labels {
                let mut spans = Vec::new();
                if series.label_x {
                    spans.extend(value_spans(x, style));
                    spans.push(TSpan::new(", "));
                }
                spans.extend(value_spans(y, style));
                let text = label_text(spans, style, pos, series.point.size);
                doc.push(Layer::ValueLabels, text);
            }
        }

        let off_window = split
            .normal
            .iter()
            .filter(|p| !inside(p))
            .chain(&split.limits);
        for (x, y) in off_window {
            draw_limit_point(doc, &self.common, prep, t, window, x.value, y.value);
        }
    }
}

fn draw_limit_point(
    doc: &mut Document,
    common: &PlotCommon,
    prep: &Prepared,
    t: &Transform,
    window: Bounds,
    x: f64,
    y: f64,
) {
    let reaches = [reach(x, &prep.x.range), reach(y, &prep.y.range)];
    let style = limit_style(&common.limit_markers, &reaches);
    let half = style.size / 2.0;
    let pos = dvec2(
        limit_coordinate(x, &prep.x.range, |v| t.x(v), window.left, window.right, half),
        limit_coordinate(y, &prep.y.range, |v| t.y(v), window.bottom, window.top, half),
    );
    if let Some(marker) = marker_element(style, pos) {
        doc.push(Layer::LimitPoints, marker);
    }
}

/// Connecting line, with the area down to the X axis filled first.
fn draw_line(doc: &mut Document, line: &LineStyle, pixels: &[DVec2], x_line: f64) {
    let (Some(first), Some(last)) = (pixels.first(), pixels.last()) else {
        return;
    };
    if let Some(fill) = line.area_fill {
        let mut outline = pixels.to_vec();
        outline.push(dvec2(last.x, x_line));
        outline.push(dvec2(first.x, x_line));
        doc.push(
            Layer::DataLines,
            Polygon::new(outline).style(SvgStyle::new().fill(fill)),
        );
    }

    let stroke = SvgStyle::new()
        .stroke(line.color)
        .fill(Color::Blank)
        .width(line.width);
    if line.curve && pixels.len() > 2 {
        doc.push(Layer::DataLines, Path::smooth_through(pixels).style(stroke));
    } else if pixels.len() > 1 {
        doc.push(Layer::DataLines, Polyline::new(pixels.to_vec()).style(stroke));
    }
}

fn draw_bar(doc: &mut Document, series: &Series2d, pos: DVec2, x_line: f64, y_line: f64) {
    let half = series.bar_width / 2.0;
    let stick = SvgStyle {
        fill: None,
        ..series.bar_style.clone()
    };
    match series.bars {
        Bars::None => {}
        Bars::YStick => doc.push(
            Layer::DataLines,
            Line::new(pos, dvec2(pos.x, x_line)).style(stick),
        ),
        Bars::XStick => doc.push(
            Layer::DataLines,
            Line::new(pos, dvec2(y_line, pos.y)).style(stick),
        ),
        Bars::YBlock => doc.push(
            Layer::DataLines,
            Rect::new(Bounds::new(
                pos.x - half,
                pos.y.min(x_line),
                pos.x + half,
                pos.y.max(x_line),
            ))
            .style(series.bar_style.clone()),
        ),
        Bars::XBlock => doc.push(
            Layer::DataLines,
            Rect::new(Bounds::new(
                pos.x.min(y_line),
                pos.y - half,
                pos.x.max(y_line),
                pos.y + half,
            ))
            .style(series.bar_style.clone()),
        ),
    }
}

impl Plot for Plot2d {
    fn common(&self) -> &PlotCommon {
        &self.common
    }

    fn layout(&self) -> PlotResult<LayoutResult> {
        Ok(self.prepare()?.layout)
    }

    fn draw(&self, doc: &mut Document) -> PlotResult<LayoutResult> {
        let prep = self.prepare()?;
        let layout = &prep.layout;
        let (x_line, y_line) = prep.axis_lines();

        decor::draw_frame(doc, &self.common, layout);
        decor::draw_x_axis(doc, layout, &prep.x, &self.x_axis, &prep.x_labels, x_line);
        decor::draw_y_axis(doc, layout, &prep.y, &self.y_axis, &prep.y_labels, y_line);
        let x_caption = self.x_axis.caption();
        let y_caption = self.y_axis.caption();
        decor::draw_axis_captions(
            doc,
            layout,
            x_caption.as_deref().map(|c| (c, &self.x_axis.label_style)),
            y_caption.as_deref().map(|c| (c, &self.y_axis.label_style)),
        );

        for series in &self.series {
            self.draw_series(doc, series, &prep);
        }

        if let Some(legend) = &layout.legend {
            decor::draw_legend(doc, &self.common.legend, legend, &self.legend_items());
        }

        crate::log::debug!(
            series = self.series.len(),
            points = doc.layer(Layer::DataPoints).count_primitives(),
            limits = doc.layer(Layer::LimitPoints).count_primitives(),
            "drew 2D plot"
        );
        Ok(prep.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::Element;

    fn plot(series: Series2d) -> Plot2d {
        Plot2d::new()
            .x_range(0.0, 10.0)
            .unwrap()
            .y_range(-5.0, 5.0)
            .unwrap()
            .series(series)
    }

    fn zigzag() -> Series2d {
        Series2d::new("zigzag", [(1.0, 1.0), (2.0, -2.0), (3.0, 3.0), (4.0, -1.0)])
    }

    #[test]
    fn points_land_in_data_points() {
        let doc = plot(zigzag()).render().unwrap();
        assert_eq!(doc.layer(Layer::DataPoints).count_primitives(), 4);
        assert!(doc.layer(Layer::DataLines).is_empty());
        assert!(!doc.layer(Layer::YTickValues).is_empty());
    }

    #[test]
    fn straight_and_curved_lines() {
        let straight = plot(zigzag().line(LineStyle::new(Color::BLUE))).render().unwrap();
        assert!(matches!(
            straight.layer(Layer::DataLines).children.as_slice(),
            [Element::Polyline(_)]
        ));

        let curved = plot(zigzag().line(LineStyle::new(Color::BLUE).curve(true)))
            .render()
            .unwrap();
        assert!(matches!(
            curved.layer(Layer::DataLines).children.as_slice(),
            [Element::Path(_)]
        ));
    }

    #[test]
    fn area_fill_is_painted_under_the_line() {
        let line = LineStyle::new(Color::BLUE).area_fill(Color::LIGHT_BLUE);
        let doc = plot(zigzag().line(line)).render().unwrap();
        let children = &doc.layer(Layer::DataLines).children;
        assert!(matches!(
            children.as_slice(),
            [Element::Polygon(_), Element::Polyline(_)]
        ));
    }

    #[test]
    fn every_bar_kind() {
        for (bars, expect_rect) in [
            (Bars::YStick, false),
            (Bars::XStick, false),
            (Bars::YBlock, true),
            (Bars::XBlock, true),
        ] {
            let doc = plot(zigzag().bars(bars)).render().unwrap();
            let children = &doc.layer(Layer::DataLines).children;
            assert_eq!(children.len(), 4, "{bars:?}");
            assert_eq!(matches!(children[0], Element::Rect(_)), expect_rect, "{bars:?}");
        }
    }

    #[test]
    fn y_stick_reaches_the_x_axis() {
        let prep = plot(zigzag()).prepare().unwrap();
        let (x_line, _) = prep.axis_lines();
        assert_eq!(x_line, prep.layout.transform.y(0.0));

        let doc = plot(zigzag().bars(Bars::YStick)).render().unwrap();
        let Element::Line(stick) = &doc.layer(Layer::DataLines).children[0] else {
            panic!("expected a stick");
        };
        assert_eq!(stick.to.y, x_line);
    }

    #[test]
    fn limit_points_for_missing_and_off_range() {
        let series = Series2d::new(
            "odd",
            [
                (1.0, f64::NAN),
                (f64::INFINITY, 1.0),
                (2.0, 50.0),
                (3.0, 1.0),
            ],
        );
        let doc = plot(series).render().unwrap();
        assert_eq!(doc.layer(Layer::DataPoints).count_primitives(), 1);
        assert_eq!(doc.layer(Layer::LimitPoints).count_primitives(), 3);
    }

    #[test]
    fn autoscaled_finite_points_are_never_limit_markers() {
        let points = [(0.0, -0.01), (3.0, 5.0), (10.01, 10.0), (5.0, 2.5)];
        let doc = Plot2d::new()
            .series(Series2d::new("edge", points))
            .render()
            .unwrap();
        assert_eq!(doc.layer(Layer::DataPoints).count_primitives(), points.len());
        assert!(doc.layer(Layer::LimitPoints).is_empty());

        let uncertain = [
            (Uncertain::new(1.0).std_dev(0.2), Uncertain::new(99.0)),
            (Uncertain::new(2.0), Uncertain::new(100.004).std_dev(0.1)),
            (Uncertain::new(3.0).std_dev(0.05), Uncertain::new(101.0)),
        ];
        let doc = Plot2d::new()
            .series(Series2d::new("spread", uncertain))
            .render()
            .unwrap();
        assert_eq!(doc.layer(Layer::DataPoints).count_primitives(), 3);
        assert!(doc.layer(Layer::LimitPoints).is_empty());
    }

    #[test]
    fn data_layers_are_clipped() {
        let svg = plot(zigzag().line(LineStyle::new(Color::RED)))
            .to_svg_string()
            .unwrap();
        assert!(svg.contains("<clipPath id=\"plot_window\">"));
        assert!(svg.contains("<g id=\"dataPoints\" clip-path=\"url(#plot_window)\">"));
        assert!(svg.contains("<g id=\"dataLines\" clip-path=\"url(#plot_window)\">"));
    }

    #[test]
    fn clipping_can_be_switched_off() {
        let mut p = plot(zigzag());
        p.common = p.common.clip_to_window(false);
        let svg = p.to_svg_string().unwrap();
        assert!(!svg.contains("clipPath"));
    }

    #[test]
    fn value_labels_can_lead_with_x() {
        let series = Series2d::new("a", [(2.0, 3.5)])
            .value_labels(ValueLabelStyle::new())
            .label_x(true);
        let doc = plot(series).render().unwrap();
        let Element::Text(label) = &doc.layer(Layer::ValueLabels).children[0] else {
            panic!("expected a label");
        };
        assert_eq!(label.content(), "2, 3.5");
    }

    #[test]
    fn axis_labels_are_placed() {
        let p = plot(zigzag()).x_label("time").y_label("height");
        let doc = p.render().unwrap();
        assert_eq!(doc.layer(Layer::XLabel).count_primitives(), 1);
        let Element::Text(y) = &doc.layer(Layer::YLabel).children[0] else {
            panic!("expected y label text");
        };
        assert_eq!(y.rotation, -90.0);
    }
}
