//! Plot façades: 1D value plots, 2D XY plots and boxplots.
//!
//! Each plot kind owns its data and options. Rendering autoscales the
//! axes, runs [`compute_layout`](crate::layout::compute_layout), and draws
//! into a freshly cleared [`Document`].

mod boxplot;
mod decor;
mod labels;
mod markers;
mod one_d;
mod two_d;

pub use boxplot::{BoxPlot, BoxSeries, BoxSummary, summarize};
pub use one_d::{Plot1d, Series1d};
pub use two_d::{Bars, Plot2d, Series2d};

use std::io;
use std::path::Path as FsPath;

use crate::axis::{AutoscaleConfig, Axis, AxisCross, AxisRange, TickStyle, scale_axis};
use crate::data::Uncertain;
use crate::defaults;
use crate::errors::{LayoutWarning, PlotResult};
use crate::layout::{LayoutResult, LegendPlacement};
use crate::style::{Color, LimitMarkers, SvgStyle, TextStyle};
use crate::svg::{Document, DocumentInfo, License};
use crate::types::Size;

/// Legend box options.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendConfig {
    pub show: bool,
    pub placement: LegendPlacement,
    pub title: Option<String>,
    pub title_style: TextStyle,
    pub text_style: TextStyle,
    /// Box fill, border color and border width
    pub frame: SvgStyle,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            show: false,
            placement: LegendPlacement::OutsideRight,
            title: None,
            title_style: TextStyle::new().size(defaults::LEGEND_TITLE_FONT_SIZE),
            text_style: TextStyle::new().size(defaults::LEGEND_FONT_SIZE),
            frame: SvgStyle::new()
                .fill(Color::WHITE)
                .stroke(Color::BLACK)
                .width(defaults::LEGEND_BORDER_WIDTH),
        }
    }
}

impl LegendConfig {
    pub(crate) fn border_width(&self) -> f64 {
        if self.frame.stroke.is_some_and(|c| !c.is_blank()) {
            self.frame.stroke_width.unwrap_or(defaults::LEGEND_BORDER_WIDTH)
        } else {
            0.0
        }
    }
}

/// Options shared by every plot kind.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotCommon {
    pub image_size: Size,
    pub title: Option<String>,
    pub title_style: TextStyle,
    /// Whole-image background and its border
    pub image_frame: SvgStyle,
    /// Plot window background and its border
    pub window_frame: SvgStyle,
    pub legend: LegendConfig,
    pub limit_markers: LimitMarkers,
    /// Clip data points and lines to the plot window
    pub clip_to_window: bool,
    pub info: DocumentInfo,
    /// Decimals written for coordinates
    pub precision: usize,
    pub font_family: String,
}

impl PlotCommon {
    pub fn new(image_size: Size) -> Self {
        Self {
            image_size,
            title: None,
            title_style: TextStyle::new().size(defaults::TITLE_FONT_SIZE),
            image_frame: SvgStyle::new()
                .fill(Color::WHITE)
                .stroke(Color::YELLOW)
                .width(defaults::IMAGE_BORDER_WIDTH),
            window_frame: SvgStyle::new()
                .fill(Color::WHITE)
                .stroke(Color::BLACK)
                .width(defaults::PLOT_WINDOW_BORDER_WIDTH),
            legend: LegendConfig::default(),
            limit_markers: LimitMarkers::default(),
            clip_to_window: true,
            info: DocumentInfo::default(),
            precision: defaults::COORD_PRECISION,
            font_family: defaults::FONT_FAMILY.to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn image_size(mut self, width: f64, height: f64) -> Self {
        self.image_size = Size::new(width, height);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.image_frame.fill = Some(color);
        self
    }

    pub fn window_background(mut self, color: Color) -> Self {
        self.window_frame.fill = Some(color);
        self
    }

    pub fn legend_on(mut self, show: bool) -> Self {
        self.legend.show = show;
        self
    }

    pub fn legend_placement(mut self, placement: LegendPlacement) -> Self {
        self.legend.placement = placement;
        self
    }

    pub fn legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend.title = Some(title.into());
        self
    }

    pub fn limit_markers(mut self, markers: LimitMarkers) -> Self {
        self.limit_markers = markers;
        self
    }

    pub fn clip_to_window(mut self, clip: bool) -> Self {
        self.clip_to_window = clip;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.info.author = Some(author.into());
        self
    }

    pub fn copyright(mut self, holder: impl Into<String>, date: impl Into<String>) -> Self {
        self.info.copyright_holder = Some(holder.into());
        self.info.copyright_date = Some(date.into());
        self
    }

    pub fn license(mut self, license: License) -> Self {
        self.info.license = Some(license);
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub(crate) fn image_border_width(&self) -> f64 {
        if self.image_frame.stroke.is_some_and(|c| !c.is_blank()) {
            self.image_frame.stroke_width.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// Set up a cleared document for this plot.
    fn prepare(&self, doc: &mut Document) {
        doc.clear();
        doc.size = self.image_size;
        doc.precision = self.precision;
        doc.font_family = self.font_family.clone();
        doc.info = self.info.clone();
        if doc.info.title.is_none() {
            doc.info.title = self.title.clone();
        }
    }
}

/// Options for one numeric axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Fixed range; autoscaled from the data when `None`
    pub range: Option<AxisRange>,
    /// Fixed major tick interval
    pub interval: Option<f64>,
    pub autoscale: AutoscaleConfig,
    pub label: Option<String>,
    pub units: Option<String>,
    pub label_style: TextStyle,
    pub ticks: TickStyle,
    pub minor_count: u32,
    pub cross: AxisCross,
    pub line: SvgStyle,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            range: None,
            interval: None,
            autoscale: AutoscaleConfig::default(),
            label: None,
            units: None,
            label_style: TextStyle::new().size(defaults::LABEL_FONT_SIZE),
            ticks: TickStyle::new(),
            minor_count: defaults::MINOR_TICKS_PER_MAJOR,
            cross: AxisCross::Zero,
            line: SvgStyle::new()
                .stroke(Color::BLACK)
                .width(defaults::AXIS_LINE_WIDTH),
        }
    }
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the range. Fails for inverted, degenerate or non-finite limits.
    pub fn range(mut self, min: f64, max: f64) -> PlotResult<Self> {
        self.range = Some(AxisRange::new(min, max)?);
        Ok(self)
    }

    pub fn interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn autoscale(mut self, config: AutoscaleConfig) -> Self {
        self.autoscale = config;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn ticks(mut self, ticks: TickStyle) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn minor_count(mut self, count: u32) -> Self {
        self.minor_count = count;
        self
    }

    pub fn cross(mut self, cross: AxisCross) -> Self {
        self.cross = cross;
        self
    }

    /// Label with units appended in parentheses
    pub fn caption(&self) -> Option<String> {
        match (&self.label, &self.units) {
            (Some(label), Some(units)) => Some(format!("{label} ({units})")),
            (Some(label), None) => Some(label.clone()),
            (None, Some(units)) => Some(format!("({units})")),
            (None, None) => None,
        }
    }

    /// The axis to draw: the fixed range if set, else autoscaled from `data`.
    pub fn resolve(&self, data: &[Uncertain]) -> PlotResult<Axis> {
        let axis = match (self.range, self.interval) {
            (Some(range), Some(interval)) => Axis::new(range, interval)?,
            (Some(range), None) => Axis::fitted(range, &self.autoscale)?,
            (None, interval) => {
                let scale = scale_axis(data, &self.autoscale)?;
                match interval {
                    Some(interval) => Axis::new(AxisRange::new(scale.min, scale.max)?, interval)?,
                    None => Axis::from_scale(&scale)?,
                }
            }
        };
        Ok(axis.minor_count(self.minor_count).cross(self.cross))
    }
}

/// Behavior shared by all plot kinds.
pub trait Plot {
    fn common(&self) -> &PlotCommon;

    /// Geometry the next render will use.
    fn layout(&self) -> PlotResult<LayoutResult>;

    /// Draw everything into an already prepared document.
    fn draw(&self, doc: &mut Document) -> PlotResult<LayoutResult>;

    /// Clear `doc` and redraw this plot into it, returning layout warnings.
    fn render_into(&self, doc: &mut Document) -> PlotResult<Vec<LayoutWarning>> {
        self.common().prepare(doc);
        let layout = self.draw(doc)?;
        Ok(layout.warnings)
    }

    fn render(&self) -> PlotResult<Document> {
        let mut doc = Document::new(self.common().image_size);
        self.render_into(&mut doc)?;
        Ok(doc)
    }

    fn to_svg_string(&self) -> PlotResult<String> {
        self.render()?.to_svg_string()
    }

    fn write<W: io::Write>(&self, writer: &mut W) -> PlotResult<()>
    where
        Self: Sized,
    {
        self.render()?.write(writer)
    }

    fn write_to_file(&self, path: impl AsRef<FsPath>) -> PlotResult<()>
    where
        Self: Sized,
    {
        self.render()?.write_to_file(path)
    }
}
