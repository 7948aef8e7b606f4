//! Legend box sizing and placement.

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::errors::{LayoutWarning, PlotError, PlotResult};
use crate::style::TextStyle;
use crate::text;
use crate::types::{Bounds, Size};

/// Where the legend box goes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LegendPlacement {
    /// Over the top right corner of the plot window
    Inside,
    OutsideLeft,
    /// Right of the plot window, which shrinks to make room
    #[default]
    OutsideRight,
    OutsideTop,
    OutsideBottom,
    /// Top-left corner at explicit image coordinates
    Somewhere(f64, f64),
    /// No legend
    Nowhere,
}

/// What one legend row shows.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntrySpec<'a> {
    pub title: &'a str,
    /// Nominal size of the series marker, `None` when points are hidden
    pub marker_size: Option<f64>,
    pub has_line: bool,
}

/// Everything the legend's size depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSpec<'a> {
    pub title: Option<&'a str>,
    pub title_style: &'a TextStyle,
    pub text_style: &'a TextStyle,
    pub entries: Vec<LegendEntrySpec<'a>>,
    pub border_width: f64,
    pub placement: LegendPlacement,
}

/// Intrinsic legend metrics.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LegendSize {
    pub width: f64,
    pub height: f64,
    pub row_height: f64,
    pub title_height: f64,
    /// Width of the marker column (0 when no series shows markers)
    pub marker_column: f64,
    /// Width of the line sample column (0 when no series has a line)
    pub line_column: f64,
    pub border_width: f64,
}

impl LegendSize {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Compute the legend box size from its entries.
pub fn size_legend(spec: &LegendSpec<'_>) -> LegendSize {
    let largest_marker = spec
        .entries
        .iter()
        .filter_map(|e| e.marker_size)
        .fold(0.0, f64::max);
    let any_line = spec.entries.iter().any(|e| e.has_line);
    let text_width = text::max_width(spec.entries.iter().map(|e| e.title), spec.text_style);

    let marker_column = if largest_marker > 0.0 {
        largest_marker + defaults::LEGEND_SPACING
    } else {
        0.0
    };
    let line_column = if any_line {
        defaults::LEGEND_LINE_LENGTH + defaults::LEGEND_SPACING
    } else {
        0.0
    };
    let row_height = spec
        .text_style
        .line_height()
        .max(largest_marker + defaults::LEGEND_SPACING / 2.0);

    let (title_width, title_height) = match spec.title {
        Some(title) => (
            text::estimate_width(title, spec.title_style),
            spec.title_style.line_height(),
        ),
        None => (0.0, 0.0),
    };

    let frame = 2.0 * (defaults::LEGEND_MARGIN + spec.border_width);
    let width = title_width.max(marker_column + line_column + text_width) + frame;
    let height = spec.entries.len() as f64 * row_height + title_height + frame;

    LegendSize {
        width,
        height,
        row_height,
        title_height,
        marker_column,
        line_column,
        border_width: spec.border_width,
    }
}

/// Where a legend ended up, and the plot window left around it.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendPlacementResult {
    pub legend: Option<Bounds>,
    pub plot_window: Bounds,
    pub warning: Option<LayoutWarning>,
}

/// Position the legend and shrink the plot window for outside placements.
///
/// An explicit position outside the image is an error; a computed one that
/// spills over the image edge only yields a warning.
pub fn place_legend(
    placement: LegendPlacement,
    plot_window: Bounds,
    image: Bounds,
    size: Size,
) -> PlotResult<LegendPlacementResult> {
    let spacing = defaults::LEGEND_SPACING;
    let (w, h) = (size.width, size.height);
    let mut plot = plot_window;

    let legend = match placement {
        LegendPlacement::Nowhere => {
            return Ok(LegendPlacementResult {
                legend: None,
                plot_window,
                warning: None,
            });
        }
        LegendPlacement::Inside => Bounds::from_origin(
            dvec2(plot.right - spacing - w, plot.top + spacing),
            size,
        ),
        LegendPlacement::OutsideRight => {
            plot.right = plot_window.right - w - spacing;
            Bounds::from_origin(dvec2(plot.right + spacing, plot.top), size)
        }
        LegendPlacement::OutsideLeft => {
            plot.left = plot_window.left + w + spacing;
            Bounds::from_origin(dvec2(plot_window.left, plot.top), size)
        }
        LegendPlacement::OutsideTop => {
            plot.top = plot_window.top + h + spacing;
            let left = (plot.left + plot.right - w) / 2.0;
            Bounds::from_origin(dvec2(left, plot_window.top), size)
        }
        LegendPlacement::OutsideBottom => {
            plot.bottom = plot_window.bottom - h - spacing;
            let left = (plot.left + plot.right - w) / 2.0;
            Bounds::from_origin(dvec2(left, plot.bottom + spacing), size)
        }
        LegendPlacement::Somewhere(x, y) => {
            if !image.contains_point(dvec2(x, y)) {
                return Err(PlotError::LegendOutsideImage {
                    x,
                    y,
                    width: image.width(),
                    height: image.height(),
                });
            }
            Bounds::from_origin(dvec2(x, y), size)
        }
    };

    let warning = (!image.contains(&legend)).then(|| {
        crate::log::reported(LayoutWarning::LegendOutsideImage {
            left: legend.left,
            top: legend.top,
            right: legend.right,
            bottom: legend.bottom,
        })
    });

    crate::log::debug!(?placement, ?legend, ?plot, "placed legend");
    Ok(LegendPlacementResult {
        legend: Some(legend),
        plot_window: plot,
        warning,
    })
}

/// Positions inside one legend row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    /// Center of the marker sample
    pub marker: DVec2,
    /// Ends of the line sample
    pub line: Option<(DVec2, DVec2)>,
    /// Baseline start of the series title
    pub text: DVec2,
}

/// A placed legend box with its internal metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    pub bounds: Bounds,
    pub size: LegendSize,
}

impl LegendLayout {
    fn content_left(&self) -> f64 {
        self.bounds.left + self.size.border_width + defaults::LEGEND_MARGIN
    }

    fn content_top(&self) -> f64 {
        self.bounds.top + self.size.border_width + defaults::LEGEND_MARGIN
    }

    /// Baseline center of the legend title
    pub fn title_pos(&self, title_style: &TextStyle) -> DVec2 {
        dvec2(
            (self.bounds.left + self.bounds.right) / 2.0,
            self.content_top() + title_style.font_size,
        )
    }

    /// Geometry of row `index`, counting from the top
    pub fn row(&self, index: usize, has_line: bool, text_style: &TextStyle) -> LegendRow {
        let top = self.content_top() + self.size.title_height + index as f64 * self.size.row_height;
        let middle = top + self.size.row_height / 2.0;
        let left = self.content_left();

        let marker_x = left + (self.size.marker_column - defaults::LEGEND_SPACING).max(0.0) / 2.0;
        let line_left = left + self.size.marker_column;
        let line = (has_line && self.size.line_column > 0.0).then(|| {
            (
                dvec2(line_left, middle),
                dvec2(line_left + defaults::LEGEND_LINE_LENGTH, middle),
            )
        });

        LegendRow {
            marker: dvec2(marker_x, middle),
            line,
            // baseline about a third of the font below the row middle
            text: dvec2(
                line_left + self.size.line_column,
                middle + text_style.font_size / 3.0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec<'a>(
        titles: &'a [&'a str],
        text_style: &'a TextStyle,
        has_line: bool,
    ) -> LegendSpec<'a> {
        LegendSpec {
            title: None,
            title_style: text_style,
            text_style,
            entries: titles
                .iter()
                .map(|t| LegendEntrySpec {
                    title: t,
                    marker_size: Some(10.0),
                    has_line,
                })
                .collect(),
            border_width: 1.0,
            placement: LegendPlacement::OutsideRight,
        }
    }

    #[test]
    fn longest_title_drives_width() {
        let style = TextStyle::new();
        let short = size_legend(&spec(&["a", "b"], &style, false));
        let long = size_legend(&spec(&["a", "a much longer title"], &style, false));
        assert!(long.width > short.width);
        assert_eq!(long.height, short.height);
    }

    #[test]
    fn line_samples_widen_legend() {
        let style = TextStyle::new();
        let plain = size_legend(&spec(&["dan"], &style, false));
        let lined = size_legend(&spec(&["dan"], &style, true));
        assert_eq!(lined.width - plain.width, defaults::LEGEND_LINE_LENGTH + defaults::LEGEND_SPACING);
    }

    #[test]
    fn title_adds_a_row() {
        let style = TextStyle::new();
        let mut s = spec(&["dan", "elaine"], &style, false);
        let without = size_legend(&s);
        s.title = Some("Runners");
        let with = size_legend(&s);
        assert_eq!(with.height - without.height, style.line_height());
    }

    #[test]
    fn outside_right_round_trip() {
        let image = Bounds::new(0.0, 0.0, 500.0, 400.0);
        let window = Bounds::new(40.0, 30.0, 480.0, 360.0);
        let size = Size::new(80.0, 50.0);
        let placed = place_legend(LegendPlacement::OutsideRight, window, image, size).unwrap();
        let legend = placed.legend.unwrap();
        assert_eq!(
            placed.plot_window.right,
            window.right - size.width - defaults::LEGEND_SPACING
        );
        assert_eq!(legend.left, placed.plot_window.right + defaults::LEGEND_SPACING);
        assert!(placed.warning.is_none());
    }

    #[test]
    fn outside_placements_shrink_their_side() {
        let image = Bounds::new(0.0, 0.0, 500.0, 400.0);
        let window = Bounds::new(40.0, 30.0, 480.0, 360.0);
        let size = Size::new(80.0, 50.0);

        let left = place_legend(LegendPlacement::OutsideLeft, window, image, size).unwrap();
        assert_eq!(left.plot_window.left, 40.0 + 80.0 + defaults::LEGEND_SPACING);
        let top = place_legend(LegendPlacement::OutsideTop, window, image, size).unwrap();
        assert_eq!(top.plot_window.top, 30.0 + 50.0 + defaults::LEGEND_SPACING);
        let bottom = place_legend(LegendPlacement::OutsideBottom, window, image, size).unwrap();
        assert_eq!(bottom.plot_window.bottom, 360.0 - 50.0 - defaults::LEGEND_SPACING);
        let inside = place_legend(LegendPlacement::Inside, window, image, size).unwrap();
        assert_eq!(inside.plot_window, window);
        assert!(window.contains(&inside.legend.unwrap()));
    }

    #[test]
    fn explicit_position_outside_image_is_an_error() {
        let image = Bounds::new(0.0, 0.0, 500.0, 400.0);
        let window = Bounds::new(40.0, 30.0, 480.0, 360.0);
        let result = place_legend(
            LegendPlacement::Somewhere(600.0, 10.0),
            window,
            image,
            Size::new(10.0, 10.0),
        );
        assert!(matches!(result, Err(PlotError::LegendOutsideImage { .. })));
    }

    #[test]
    fn spilling_legend_only_warns() {
        let image = Bounds::new(0.0, 0.0, 500.0, 400.0);
        let window = Bounds::new(40.0, 30.0, 480.0, 360.0);
        let placed = place_legend(
            LegendPlacement::Somewhere(450.0, 10.0),
            window,
            image,
            Size::new(100.0, 20.0),
        )
        .unwrap();
        assert!(matches!(
            placed.warning,
            Some(LayoutWarning::LegendOutsideImage { .. })
        ));
        assert_eq!(placed.plot_window, window);
    }

    #[test]
    fn nowhere_leaves_window_alone() {
        let image = Bounds::new(0.0, 0.0, 500.0, 400.0);
        let window = Bounds::new(40.0, 30.0, 480.0, 360.0);
        let placed =
            place_legend(LegendPlacement::Nowhere, window, image, Size::new(80.0, 50.0)).unwrap();
        assert!(placed.legend.is_none());
        assert_eq!(placed.plot_window, window);
    }

    #[test]
    fn rows_stack_downwards() {
        let style = TextStyle::new();
        let s = spec(&["dan", "elaine"], &style, true);
        let size = size_legend(&s);
        let layout = LegendLayout {
            bounds: Bounds::from_origin(dvec2(100.0, 50.0), size.size()),
            size,
        };
        let r0 = layout.row(0, true, &style);
        let r1 = layout.row(1, true, &style);
        assert_eq!(r1.marker.y - r0.marker.y, size.row_height);
        assert!(r0.line.is_some());
        assert!(r0.text.x > r0.marker.x);
        assert!(layout.bounds.contains_point(r1.text));
    }
}
