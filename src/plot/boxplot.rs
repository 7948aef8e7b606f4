//! Box-and-whisker plots, one box per series over a categorical X axis.

use glam::dvec2;

use super::decor;
use super::markers::marker_element;
use super::{AxisConfig, Plot, PlotCommon};
use crate::axis::{Axis, AxisRange, TickLabelPlacement, TickStyle, format_tick_labels};
use crate::data::Uncertain;
use crate::defaults;
use crate::errors::PlotResult;
use crate::layout::{AxisLayout, Caption, LayoutResult, LayoutSpec, compute_layout};
use crate::stats::{QuantileDefinition, mean, quantile};
use crate::style::{Color, Marker, PointStyle, SvgStyle, TextStyle};
use crate::svg::{Document, Layer, Line, Rect, Text, TextAnchor};
use crate::types::Bounds;

/// Five-number summary plus mean and outliers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSummary {
    /// Smallest value inside the lower inner fence
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Largest value inside the upper inner fence
    pub upper_whisker: f64,
    pub mean: f64,
    /// Between 1.5 and 3 interquartile ranges beyond the box
    pub mild_outliers: Vec<f64>,
    /// More than 3 interquartile ranges beyond the box
    pub extreme_outliers: Vec<f64>,
}

/// Summarize the finite values of a sample. `None` if there are none.
pub fn summarize(values: &[f64], definition: QuantileDefinition) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25, definition)?;
    let median = quantile(&sorted, 0.5, definition)?;
    let q3 = quantile(&sorted, 0.75, definition)?;
    let iqr = q3 - q1;
    let inner = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
    let outer = (q1 - 3.0 * iqr, q3 + 3.0 * iqr);

    let within = |v: &&f64| **v >= inner.0 && **v <= inner.1;
    let lower_whisker = sorted.iter().find(within).copied().unwrap_or(q1);
    let upper_whisker = sorted.iter().rev().find(within).copied().unwrap_or(q3);

    let (extreme_outliers, mild_outliers): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .copied()
        .filter(|v| *v < inner.0 || *v > inner.1)
        .partition(|v| *v < outer.0 || *v > outer.1);

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        mean: mean(&sorted)?,
        mild_outliers,
        extreme_outliers,
    })
}

/// One sample drawn as a box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSeries {
    pub title: String,
    pub values: Vec<f64>,
    pub box_style: SvgStyle,
    pub median_style: SvgStyle,
    pub whisker_style: SvgStyle,
    pub mild_outlier: PointStyle,
    pub extreme_outlier: PointStyle,
    /// Marker for the mean, not drawn when `None`
    pub mean_marker: Option<PointStyle>,
}

impl BoxSeries {
    pub fn new(title: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            title: title.into(),
            values: values.into_iter().collect(),
            box_style: SvgStyle::new()
                .stroke(Color::BLACK)
                .fill(Color::LIGHT_BLUE)
                .width(1.0),
            median_style: SvgStyle::new().stroke(Color::BLUE).width(2.0),
            whisker_style: SvgStyle::new().stroke(Color::BLACK).width(1.0),
            mild_outlier: PointStyle::new(Marker::Circle)
                .size(defaults::OUTLIER_MARKER_SIZE)
                .stroke(Color::RED),
            extreme_outlier: PointStyle::new(Marker::Circle)
                .size(defaults::OUTLIER_MARKER_SIZE)
                .stroke(Color::RED)
                .fill(Color::RED),
            mean_marker: None,
        }
    }

    pub fn box_style(mut self, style: SvgStyle) -> Self {
        self.box_style = style;
        self
    }

    pub fn show_mean(mut self, marker: PointStyle) -> Self {
        self.mean_marker = Some(marker);
        self
    }
}

/// Boxes side by side, Y autoscaled over every sample.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlot {
    pub common: PlotCommon,
    pub x_label: Option<String>,
    pub x_label_style: TextStyle,
    /// Style of the category ticks and series titles under each box
    pub x_ticks: TickStyle,
    pub y_axis: AxisConfig,
    pub quantiles: QuantileDefinition,
    pub box_width: f64,
    pub series: Vec<BoxSeries>,
}

impl Default for BoxPlot {
    fn default() -> Self {
        Self {
            common: PlotCommon::new(defaults::IMAGE_SIZE_BOXPLOT),
            x_label: None,
            x_label_style: TextStyle::new().size(defaults::LABEL_FONT_SIZE),
            x_ticks: TickStyle::new().labels(TickLabelPlacement::WindowEdge),
            y_axis: AxisConfig::new(),
            quantiles: QuantileDefinition::default(),
            box_width: defaults::BOX_WIDTH,
            series: Vec::new(),
        }
    }
}

struct Prepared {
    y: Axis,
    y_labels: Vec<String>,
    layout: LayoutResult,
}

impl BoxPlot {
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

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> PlotResult<Self> {
        self.y_axis = self.y_axis.range(min, max)?;
        Ok(self)
    }

    pub fn quantiles(mut self, definition: QuantileDefinition) -> Self {
        self.quantiles = definition;
        self
    }

    pub fn series(mut self, series: BoxSeries) -> Self {
        self.series.push(series);
        self
    }

    fn categories(&self) -> PlotResult<AxisRange> {
        AxisRange::new(0.0, self.series.len().max(1) as f64)
    }

    fn prepare(&self) -> PlotResult<Prepared> {
        let values: Vec<Uncertain> = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied().map(Uncertain::new))
            .collect();
        let y = self.y_axis.resolve(&values)?;
        let y_labels = format_tick_labels(&y.major_ticks(), &self.y_axis.ticks.format);
        let titles: Vec<String> = self.series.iter().map(|s| s.title.clone()).collect();

        let common = &self.common;
        let y_caption = self.y_axis.caption();
        let spec = LayoutSpec {
            image: common.image_size,
            border_width: common.image_border_width(),
            title: common
                .title
                .as_deref()
                .map(|t| Caption::new(t, &common.title_style)),
            x_label: self
                .x_label
                .as_deref()
                .map(|t| Caption::new(t, &self.x_label_style)),
            y_label: y_caption
                .as_deref()
                .map(|t| Caption::new(t, &self.y_axis.label_style)),
            limit_margin: 0.0,
            legend: None,
            x_axis: AxisLayout {
                range: self.categories()?,
                ticks: &self.x_ticks,
                labels: &titles,
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
            y,
            y_labels,
            layout,
        })
    }

    /// Category axis along the window bottom with a title under each box.
    fn draw_categories(&self, doc: &mut Document, layout: &LayoutResult) {
        let window = layout.plot_window;
        let t = &layout.transform;
        let ticks = &self.x_ticks;
        doc.push(
            Layer::XAxis,
            Line::new(
                dvec2(window.left, window.bottom),
                dvec2(window.right, window.bottom),
            )
            .style(SvgStyle::new().stroke(ticks.color).width(defaults::AXIS_LINE_WIDTH)),
        );

        let reach = ticks.outside_reach();
        let degrees = ticks.label_rotation.degrees();
        let label_y = window.bottom + reach + defaults::TICK_LABEL_GAP + ticks.label_text.font_size;
        for (i, series) in self.series.iter().enumerate() {
            let x = t.x(i as f64 + 0.5);
            if reach > 0.0 {
                doc.push(
                    Layer::XMajorTicks,
                    Line::new(dvec2(x, window.bottom), dvec2(x, window.bottom + reach))
                        .style(SvgStyle::new().stroke(ticks.color).width(ticks.major_width)),
                );
            }
            if ticks.labels != TickLabelPlacement::None {
                doc.push(
                    Layer::XTickValues,
                    Text::new(dvec2(x, label_y), series.title.as_str(), &ticks.label_text)
                        .anchor(decor::rotated_anchor(degrees, TextAnchor::Middle))
                        .rotate(degrees),
                );
            }
        }
    }

    fn draw_box(
        &self,
        doc: &mut Document,
        slot: usize,
        series: &BoxSeries,
        range: &AxisRange,
        layout: &LayoutResult,
    ) {
        let Some(summary) = summarize(&series.values, self.quantiles) else {
            crate::log::debug!(title = %series.title, "no finite values, box skipped");
            return;
        };
        let t = &layout.transform;
        let cx = t.x(slot as f64 + 0.5);
        let half = self.box_width / 2.0;
        let cap = defaults::WHISKER_CAP_LENGTH / 2.0;
        let y = |v: f64| t.y(range.clamp(v));

        for (from, to) in [
            (summary.q3, summary.upper_whisker),
            (summary.q1, summary.lower_whisker),
        ] {
            doc.push(
                Layer::Whiskers,
                Line::new(dvec2(cx, y(from)), dvec2(cx, y(to))).style(series.whisker_style.clone()),
            );
            doc.push(
                Layer::Whiskers,
                Line::new(dvec2(cx - cap, y(to)), dvec2(cx + cap, y(to)))
                    .style(series.whisker_style.clone()),
            );
        }

        doc.push(
            Layer::Boxes,
            Rect::new(Bounds::new(cx - half, y(summary.q3), cx + half, y(summary.q1)))
                .style(series.box_style.clone()),
        );
        doc.push(
            Layer::Medians,
            Line::new(
                dvec2(cx - half, y(summary.median)),
                dvec2(cx + half, y(summary.median)),
            )
            .style(series.median_style.clone()),
        );

        if let Some(marker) = series
            .mean_marker
            .as_ref()
            .and_then(|style| marker_element(style, dvec2(cx, y(summary.mean))))
        {
            doc.push(Layer::Means, marker);
        }

        let outliers = [
            (Layer::MildOutliers, &series.mild_outlier, &summary.mild_outliers),
            (
                Layer::ExtremeOutliers,
                &series.extreme_outlier,
                &summary.extreme_outliers,
            ),
        ];
        for (layer, style, values) in outliers {
            for &v in values.iter().filter(|v| range.contains(**v)) {
                if let Some(marker) = marker_element(style, dvec2(cx, t.y(v))) {
                    doc.push(layer, marker);
                }
            }
        }
    }
}

impl Plot for BoxPlot {
    fn common(&self) -> &PlotCommon {
        &self.common
    }

    fn layout(&self) -> PlotResult<LayoutResult> {
        Ok(self.prepare()?.layout)
    }

    fn draw(&self, doc: &mut Document) -> PlotResult<LayoutResult> {
        let prep = self.prepare()?;
        let layout = &prep.layout;

        decor::draw_frame(doc, &self.common, layout);
        self.draw_categories(doc, layout);
        decor::draw_y_axis(
            doc,
            layout,
            &prep.y,
            &self.y_axis,
            &prep.y_labels,
            layout.plot_window.left,
        );
        let y_caption = self.y_axis.caption();
        decor::draw_axis_captions(
            doc,
            layout,
            self.x_label.as_deref().map(|c| (c, &self.x_label_style)),
            y_caption.as_deref().map(|c| (c, &self.y_axis.label_style)),
        );

        for (slot, series) in self.series.iter().enumerate() {
            self.draw_box(doc, slot, series, &prep.y.range, layout);
        }
        Ok(prep.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summary_of_a_plain_sample() {
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let s = summarize(&values, QuantileDefinition::Type8).unwrap();
        assert!(close(s.median, 5.0));
        assert!(close(s.q1, 8.0 / 3.0));
        assert!(close(s.mean, 5.0));
        assert_eq!(s.lower_whisker, 1.0);
        assert_eq!(s.upper_whisker, 9.0);
        assert!(s.mild_outliers.is_empty() && s.extreme_outliers.is_empty());
    }

    #[test]
    fn outliers_split_by_fence() {
        let mut values: Vec<f64> = (1..=9).map(f64::from).collect();
        values.extend([20.0, 100.0]);
        let s = summarize(&values, QuantileDefinition::Type8).unwrap();
        assert_eq!(s.upper_whisker, 9.0);
        assert_eq!(s.mild_outliers, vec![20.0]);
        assert_eq!(s.extreme_outliers, vec![100.0]);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let s = summarize(&[f64::NAN, 1.0, 2.0, 3.0, f64::INFINITY], QuantileDefinition::Type7)
            .unwrap();
        assert_eq!(s.median, 2.0);
        assert!(summarize(&[f64::NAN], QuantileDefinition::Type8).is_none());
    }

    #[test]
    fn draws_one_box_per_series() {
        let plot = BoxPlot::new()
            .title("Lap times")
            .series(BoxSeries::new("dan", [3.1, 4.2, 3.8, 4.0, 3.5]))
            .series(
                BoxSeries::new("elaine", [2.1, 7.8, 3.3, 3.9, 4.4, 30.0])
                    .show_mean(PointStyle::new(Marker::Cross)),
            );
        let doc = plot.render().unwrap();
        assert_eq!(doc.layer(Layer::Boxes).count_primitives(), 2);
        assert_eq!(doc.layer(Layer::Medians).count_primitives(), 2);
        assert_eq!(doc.layer(Layer::Whiskers).count_primitives(), 8);
        assert_eq!(doc.layer(Layer::Means).count_primitives(), 1);
        assert_eq!(doc.layer(Layer::XTickValues).count_primitives(), 2);
        assert_eq!(
            doc.layer(Layer::MildOutliers).count_primitives()
                + doc.layer(Layer::ExtremeOutliers).count_primitives(),
            1
        );
    }

    #[test]
    fn box_spans_the_quartiles() {
        let plot = BoxPlot::new()
            .y_range(0.0, 10.0)
            .unwrap()
            .series(BoxSeries::new("a", (1..=9).map(f64::from)));
        let layout = plot.layout().unwrap();
        let doc = plot.render().unwrap();
        let crate::svg::Element::Rect(rect) = &doc.layer(Layer::Boxes).children[0] else {
            panic!("expected the box");
        };
        let t = layout.transform;
        assert!((rect.bounds.bottom - t.y(8.0 / 3.0)).abs() < 1e-9);
        assert!((rect.bounds.left - (t.x(0.5) - defaults::BOX_WIDTH / 2.0)).abs() < 1e-9);
    }
}
