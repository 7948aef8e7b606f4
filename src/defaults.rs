//! Default sizes and settings (all in SVG pixels unless noted)

use crate::types::Size;

// Images
pub const IMAGE_SIZE_1D: Size = Size::new(500.0, 200.0);
pub const IMAGE_SIZE_2D: Size = Size::new(500.0, 400.0);
pub const IMAGE_SIZE_BOXPLOT: Size = Size::new(500.0, 350.0);
pub const IMAGE_BORDER_WIDTH: f64 = 2.0;
pub const IMAGE_BORDER_MARGIN: f64 = 5.0;
pub const PLOT_WINDOW_BORDER_WIDTH: f64 = 1.0;
/// Decimal places written for coordinates
pub const COORD_PRECISION: usize = 3;

// Text
pub const FONT_SIZE: f64 = 12.0;
pub const FONT_FAMILY: &str = "Lucida Sans Unicode";
pub const TITLE_FONT_SIZE: f64 = 18.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;
pub const TICK_LABEL_FONT_SIZE: f64 = 10.0;
pub const VALUE_LABEL_FONT_SIZE: f64 = 10.0;
pub const LEGEND_FONT_SIZE: f64 = 12.0;
pub const LEGEND_TITLE_FONT_SIZE: f64 = 14.0;
/// Line height as a multiple of font size
pub const TEXT_MARGIN: f64 = 1.5;
/// Average glyph width over font size
pub const ASPECT_RATIO: f64 = 0.6;
/// Uppercase ASCII letters relative to other glyphs
pub const UPPERCASE_WEIGHT: f64 = 1.2;
/// Estimated/allotted width above which overflowing text is reported
pub const MAX_TEXT_COMPRESSION: f64 = 1.25;

// Markers and lines
pub const MARKER_SIZE: f64 = 10.0;
pub const LIMIT_MARKER_SIZE: f64 = 10.0;
pub const DATA_LINE_WIDTH: f64 = 2.0;
/// Thickness of block bars
pub const BAR_WIDTH: f64 = 10.0;
/// Smallest radius drawn for an uncertainty ellipse
pub const MIN_ELLIPSE_RADIUS: f64 = 1.0;

// Axes
pub const AXIS_LINE_WIDTH: f64 = 1.0;
pub const MAJOR_TICK_LENGTH: f64 = 5.0;
pub const MINOR_TICK_LENGTH: f64 = 2.0;
pub const MAJOR_TICK_WIDTH: f64 = 2.0;
pub const MINOR_TICK_WIDTH: f64 = 1.0;
pub const MINOR_TICKS_PER_MAJOR: u32 = 4;
pub const MAJOR_GRID_WIDTH: f64 = 1.0;
pub const MINOR_GRID_WIDTH: f64 = 0.5;
/// Gap between a tick mark and its value label
pub const TICK_LABEL_GAP: f64 = 3.0;
/// Default fractional height of the 1D X axis (0 bottom, 1 top)
pub const X_AXIS_POSITION_1D: f64 = 0.5;

// Autoscale
pub const MIN_TICKS: u32 = 6;
pub const UNCERTAINTY_MULTIPLIER: f64 = 3.0;
pub const OUTSIDE_TOLERANCE: f64 = 0.01;
/// Smallest axis span accepted, relative to the larger limit (or 1)
pub const RANGE_EPSILON: f64 = f64::EPSILON * 1000.0;
/// Upper bound on major ticks along one axis
pub const MAX_TICKS: usize = 1000;

// Legend
pub const LEGEND_SPACING: f64 = 10.0;
pub const LEGEND_MARGIN: f64 = 5.0;
pub const LEGEND_LINE_LENGTH: f64 = 25.0;
pub const LEGEND_BORDER_WIDTH: f64 = 1.0;

// Statistics
pub const CONFIDENCE_ALPHA: f64 = 0.05;

// Boxplot
pub const BOX_WIDTH: f64 = 30.0;
pub const WHISKER_CAP_LENGTH: f64 = 10.0;
pub const OUTLIER_MARKER_SIZE: f64 = 6.0;
