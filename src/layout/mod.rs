//! Plot window geometry.
//!
//! [`compute_layout`] is a pure function from the image size and the
//! styles of everything drawn around the data to the rectangle the data
//! lives in, the Cartesian to pixel transform, and the legend box. It is
//! re-run on every render; nothing here is cached.

pub mod legend;

pub use legend::{
    LegendEntrySpec, LegendLayout, LegendPlacement, LegendPlacementResult, LegendRow,
    LegendSize, LegendSpec, place_legend, size_legend,
};

use glam::{DVec2, dvec2};

use crate::axis::{AxisRange, TickLabelPlacement, TickStyle};
use crate::defaults;
use crate::errors::{LayoutWarning, PlotError, PlotResult};
use crate::style::TextStyle;
use crate::text::fit_text;
use crate::types::{Bounds, Size};

/// Per-axis linear map from data values to pixels: `pixel = value * scale + shift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: DVec2,
    pub shift: DVec2,
}

impl Transform {
    /// Map `x_range` across the window and `y_range` up it (SVG Y grows down).
    ///
    /// Without a Y range every value lands on the horizontal line at
    /// `x_axis_fraction` of the window height (0 bottom, 1 top), clamped
    /// to the window.
    pub fn new(
        window: Bounds,
        x_range: &AxisRange,
        y_range: Option<&AxisRange>,
        x_axis_fraction: f64,
    ) -> Self {
        let sx = window.width() / x_range.span();
        let tx = window.left - x_range.min() * sx;

        let (sy, ty) = match y_range {
            Some(y) => {
                let sy = -window.height() / y.span();
                (sy, window.bottom - y.min() * sy)
            }
            None => (
                0.0,
                window.bottom - axis_fraction(x_axis_fraction) * window.height(),
            ),
        };

        Transform {
            scale: dvec2(sx, sy),
            shift: dvec2(tx, ty),
        }
    }

    #[inline]
    pub fn x(&self, v: f64) -> f64 {
        v * self.scale.x + self.shift.x
    }

    #[inline]
    pub fn y(&self, v: f64) -> f64 {
        v * self.scale.y + self.shift.y
    }

    #[inline]
    pub fn apply(&self, p: DVec2) -> DVec2 {
        p * self.scale + self.shift
    }
}

/// Axis height as a fraction of the window, kept inside `[0, 1]`.
pub(crate) fn axis_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        defaults::X_AXIS_POSITION_1D
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// A piece of text and the style it is drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Caption<'a> {
    pub text: &'a str,
    pub style: &'a TextStyle,
}

impl<'a> Caption<'a> {
    pub fn new(text: &'a str, style: &'a TextStyle) -> Self {
        Caption { text, style }
    }
}

/// What layout needs to know about one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout<'a> {
    pub range: AxisRange,
    pub ticks: &'a TickStyle,
    /// Formatted major tick values
    pub labels: &'a [String],
}

/// Inputs to [`compute_layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSpec<'a> {
    pub image: Size,
    pub border_width: f64,
    pub title: Option<Caption<'a>>,
    pub x_label: Option<Caption<'a>>,
    pub y_label: Option<Caption<'a>>,
    /// Room kept free beside the window for off-window limit markers
    pub limit_margin: f64,
    pub legend: Option<LegendSpec<'a>>,
    pub x_axis: AxisLayout<'a>,
    /// `None` for 1D plots
    pub y_axis: Option<AxisLayout<'a>>,
    /// Height of the 1D X axis as a fraction of the window
    pub x_axis_position: f64,
}

/// Where a caption goes and the length to squeeze it into, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    pub pos: DVec2,
    pub text_length: Option<f64>,
}

/// Everything drawing needs from layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    pub image: Bounds,
    pub plot_window: Bounds,
    pub transform: Transform,
    pub legend: Option<LegendLayout>,
    /// Baseline center
    pub title: Option<TextPlacement>,
    /// Baseline center
    pub x_label: Option<TextPlacement>,
    /// Baseline center, drawn rotated by -90 degrees
    pub y_label: Option<TextPlacement>,
    pub warnings: Vec<LayoutWarning>,
}

/// Space window-edge tick labels and outward ticks take beside the window.
fn tick_reservation(axis: &AxisLayout<'_>, horizontal_axis: bool) -> f64 {
    let reach = axis.ticks.outside_reach();
    if axis.ticks.labels != TickLabelPlacement::WindowEdge || axis.labels.is_empty() {
        return reach;
    }
    reach + defaults::TICK_LABEL_GAP + axis.ticks.label_extent(axis.labels, horizontal_axis)
}

fn place_caption(
    caption: &Caption<'_>,
    pos: DVec2,
    allotted: f64,
    warnings: &mut Vec<LayoutWarning>,
) -> TextPlacement {
    let fit = fit_text(caption.text, caption.style, allotted);
    warnings.extend(fit.warning);
    TextPlacement {
        pos,
        text_length: fit.text_length,
    }
}

/// Compute the plot window, transform and legend box.
///
/// Each step narrows the remaining rectangle: image border, title, axis
/// labels, limit-marker margins, legend, then tick values.
pub fn compute_layout(spec: &LayoutSpec<'_>) -> PlotResult<LayoutResult> {
    let size = Size::try_new(spec.image.width, spec.image.height).map_err(|reason| {
        PlotError::InvalidImageSize {
            width: spec.image.width,
            height: spec.image.height,
            reason,
        }
    })?;
    let image = Bounds::from_size(size);
    let mut window = image.inset(spec.border_width + defaults::IMAGE_BORDER_MARGIN);
    let inner_width = window.width();
    let mut warnings = Vec::new();

    let title = spec.title.map(|caption| {
        let pos = dvec2(image.center().x, window.top + caption.style.font_size);
        window.top += caption.style.line_height();
        place_caption(&caption, pos, inner_width, &mut warnings)
    });

    let x_label_baseline = spec.x_label.map(|caption| {
        let baseline = window.bottom - caption.style.font_size / 2.0;
        window.bottom -= caption.style.line_height();
        baseline
    });
    let y_label_x = spec.y_label.map(|caption| {
        let x = window.left + caption.style.font_size;
        window.left += caption.style.line_height();
        x
    });

    window.left += spec.limit_margin;
    window.right -= spec.limit_margin;
    if spec.y_axis.is_some() {
        window.top += spec.limit_margin;
        window.bottom -= spec.limit_margin;
    }

    let mut legend = None;
    if let Some(legend_spec) = spec.legend.as_ref().filter(|l| !l.entries.is_empty()) {
        let legend_size = size_legend(legend_spec);
        let placed = place_legend(legend_spec.placement, window, image, legend_size.size())?;
        window = placed.plot_window;
        warnings.extend(placed.warning);
        legend = placed.legend.map(|bounds| LegendLayout {
            bounds,
            size: legend_size,
        });
    }

    window.bottom -= tick_reservation(&spec.x_axis, true);
    if let Some(y_axis) = &spec.y_axis {
        window.left += tick_reservation(y_axis, false);
    }

    if !window.is_positive() {
        return Err(PlotError::WindowTooSmall {
            width: window.width(),
            height: window.height(),
        });
    }

    let x_label = spec.x_label.zip(x_label_baseline).map(|(caption, y)| {
        let pos = dvec2(window.center().x, y);
        place_caption(&caption, pos, window.width(), &mut warnings)
    });
    let y_label = spec.y_label.zip(y_label_x).map(|(caption, x)| {
        let pos = dvec2(x, window.center().y);
        place_caption(&caption, pos, window.height(), &mut warnings)
    });

    let transform = Transform::new(
        window,
        &spec.x_axis.range,
        spec.y_axis.as_ref().map(|a| &a.range),
        spec.x_axis_position,
    );

    crate::log::debug!(
        left = window.left,
        top = window.top,
        right = window.right,
        bottom = window.bottom,
        warnings = warnings.len(),
        "computed plot window"
    );

    Ok(LayoutResult {
        image,
        plot_window: window,
        transform,
        legend,
        title,
        x_label,
        y_label,
        warnings,
    })
}
