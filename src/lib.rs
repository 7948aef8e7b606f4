//! SVG plots of values that may be uncertain, infinite or missing.
//!
//! Three plot kinds share one pipeline: autoscale the axes, lay out the
//! title, labels, ticks and legend around a plot window, then draw into a
//! layered [`Document`](svg::Document) that serializes to a standalone SVG.
//!
//! ```
//! use svgplot::{Plot, Plot1d, Series1d};
//!
//! # fn main() -> Result<(), svgplot::PlotError> {
//! let svg = Plot1d::new()
//!     .title("Race Times")
//!     .legend_on(true)
//!     .x_range(-1.0, 11.0)?
//!     .series(Series1d::new("dan", [3.1, 4.2]))
//!     .series(Series1d::new("elaine", [2.1, 7.8]))
//!     .to_svg_string()?;
//! assert!(svg.starts_with("<?xml"));
//! # Ok(())
//! # }
//! ```

pub mod axis;
pub mod data;
pub mod defaults;
pub mod errors;
pub mod layout;
pub mod log;
pub mod plot;
pub mod stats;
pub mod style;
pub mod svg;
pub mod text;
pub mod types;

pub use axis::{AxisCross, AxisRange, TickLabelPlacement, TickStyle};
pub use data::{Uncertain, partition};
pub use errors::{LayoutWarning, PlotError, PlotResult};
pub use layout::LegendPlacement;
pub use plot::{
    AxisConfig, Bars, BoxPlot, BoxSeries, LegendConfig, Plot, Plot1d, Plot2d, PlotCommon,
    Series1d, Series2d,
};
pub use stats::{Distribution, QuantileDefinition};
pub use style::{Color, LineStyle, Marker, NumberFormat, PointStyle, TextStyle, ValueLabelStyle};
pub use svg::{Document, Layer, License, Permission};
pub use types::{Bounds, Size};
