//! Values along a single axis.

use glam::dvec2;

use super::decor::{self, LegendItem};
use super::labels::{label_text, value_spans};
use super::markers::{draw_point, limit_coordinate, limit_style, marker_element, reach};
use super::{AxisConfig, Plot, PlotCommon};
use crate::axis::{Axis, TickLabelPlacement, TickStyle, format_tick_labels};
use crate::data::{Uncertain, partition};
use crate::defaults;
use crate::errors::PlotResult;
use crate::layout::{AxisLayout, Caption, LayoutResult, LayoutSpec, compute_layout};
use crate::style::{PointStyle, ValueLabelStyle};
use crate::svg::{Document, Layer};

/// One named set of values.
#[derive(Clone, Debug, PartialEq)]
pub struct Series1d {
    pub title: String,
    pub values: Vec<Uncertain>,
    pub point: PointStyle,
    pub value_labels: Option<ValueLabelStyle>,
}

impl Series1d {
    pub fn new<V: Into<Uncertain>>(
        title: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            title: title.into(),
            values: values.into_iter().map(Into::into).collect(),
            point: PointStyle::default(),
            value_labels: None,
        }
    }

    pub fn point(mut self, point: PointStyle) -> Self {
        self.point = point;
        self
    }

    pub fn value_labels(mut self, style: ValueLabelStyle) -> Self {
        self.value_labels = Some(style);
        self
    }
}

/// Markers strung along a horizontal axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot1d {
    pub common: PlotCommon,
    pub x_axis: AxisConfig,
    /// Height of the axis line in the window, 0 bottom to 1 top
    pub x_axis_position: f64,
    pub series: Vec<Series1d>,
}

impl Default for Plot1d {
    fn default() -> Self {
        Self {
            common: PlotCommon::new(defaults::IMAGE_SIZE_1D),
            x_axis: AxisConfig::new().ticks(TickStyle::new().labels(TickLabelPlacement::OnAxis)),
            x_axis_position: defaults::X_AXIS_POSITION_1D,
            series: Vec::new(),
        }
    }
}

struct Prepared {
    axis: Axis,
    labels: Vec<String>,
    layout: LayoutResult,
}

impl Plot1d {
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

    pub fn x_range(mut self, min: f64, max: f64) -> PlotResult<Self> {
        self.x_axis = self.x_axis.range(min, max)?;
        Ok(self)
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis = self.x_axis.label(label);
        self
    }

    /// Clamped to `[0, 1]`; NaN restores the default
    pub fn x_axis_position(mut self, fraction: f64) -> Self {
        self.x_axis_position = crate::layout::axis_fraction(fraction);
        self
    }

    pub fn series(mut self, series: Series1d) -> Self {
        self.series.push(series);
        self
    }

    fn legend_items(&self) -> Vec<LegendItem<'_>> {
        self.series
            .iter()
            .map(|s| LegendItem {
                title: &s.title,
                point: &s.point,
                line: None,
            })
            .collect()
    }

    fn prepare(&self) -> PlotResult<Prepared> {
        let values: Vec<Uncertain> = self.series.iter().flat_map(|s| s.values.clone()).collect();
        let axis = self.x_axis.resolve(&values)?;
        let labels = format_tick_labels(&axis.major_ticks(), &self.x_axis.ticks.format);

        let common = &self.common;
        let x_caption = self.x_axis.caption();
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
            y_label: None,
            limit_margin: common.limit_markers.max_size(),
            legend: decor::legend_spec(&common.legend, &items),
            x_axis: AxisLayout {
                range: axis.range,
                ticks: &self.x_axis.ticks,
                labels: &labels,
            },
            y_axis: None,
            x_axis_position: self.x_axis_position,
        };
        let layout = compute_layout(&spec)?;
        Ok(Prepared {
            axis,
            labels,
            layout,
        })
    }

    fn draw_series(&self, doc: &mut Document, series: &Series1d, axis: &Axis, layout: &LayoutResult) {
        let t = &layout.transform;
        let window = layout.plot_window;
        let line_y = t.y(0.0);
        let split = partition(&series.values);

        for u in &split.normal {
            if !axis.range.contains(u.value) {
                continue;
            }
            let pos = dvec2(t.x(u.value), line_y);
            draw_point(doc, t, pos, u, None, &series.point);
            if let Some(style) = &series.value_labels {
                let text = label_text(value_spans(u, style), style, pos, series.point.size);
                doc.push(Layer::ValueLabels, text);
            }
        }

        // Non-finite values, and finite ones off the ends of a fixed range
        let off_window = split
            .normal
            .iter()
            .filter(|u| !axis.range.contains(u.value))
            .chain(&split.limits);
        for u in off_window {
            let style = limit_style(&self.common.limit_markers, &[reach(u.value, &axis.range)]);
            let x = limit_coordinate(
                u.value,
                &axis.range,
                |v| t.x(v),
                window.left,
                window.right,
                style.size / 2.0,
            );
            if let Some(marker) = marker_element(style, dvec2(x, line_y)) {
                doc.push(Layer::LimitPoints, marker);
            }
        }
    }
}

impl Plot for Plot1d {
    fn common(&self) -> &PlotCommon {
        &self.common
    }

    fn layout(&self) -> PlotResult<LayoutResult> {
        Ok(self.prepare()?.layout)
    }

    fn draw(&self, doc: &mut Document) -> PlotResult<LayoutResult> {
        let Prepared {
            axis,
            labels,
            layout,
        } = self.prepare()?;

        decor::draw_frame(doc, &self.common, &layout);
        decor::draw_x_axis(doc, &layout, &axis, &self.x_axis, &labels, layout.transform.y(0.0));
        let x_caption = self.x_axis.caption();
        decor::draw_axis_captions(
            doc,
            &layout,
            x_caption.as_deref().map(|c| (c, &self.x_axis.label_style)),
            None,
        );

        for series in &self.series {
            self.draw_series(doc, series, &axis, &layout);
        }

        if let Some(legend) = &layout.legend {
            decor::draw_legend(doc, &self.common.legend, legend, &self.legend_items());
        }

        crate::log::debug!(
            series = self.series.len(),
            points = doc.layer(Layer::DataPoints).count_primitives(),
            "drew 1D plot"
        );
        Ok(layout)
    }
}
