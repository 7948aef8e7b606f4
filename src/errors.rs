//! Error types with diagnostics using miette
//!
//! Hard errors abort the current render. Soft conditions are collected as
//! [`LayoutWarning`]s and never stop the document from being produced.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;

// ============================================================================
// Hard errors
// ============================================================================

/// Errors that abort building or writing a plot
#[derive(Error, Diagnostic, Debug)]
pub enum PlotError {
    #[error("axis maximum {max} must be greater than minimum {min}")]
    #[diagnostic(
        code(svgplot::axis::inverted_range),
        help("swap the limits or choose a wider range")
    )]
    InvertedRange { min: f64, max: f64 },

    #[error("axis range [{min}, {max}] is too small to plot")]
    #[diagnostic(
        code(svgplot::axis::degenerate_range),
        help("the span must exceed {threshold}; all data values may be equal")
    )]
    DegenerateRange { min: f64, max: f64, threshold: f64 },

    #[error("axis limit {value} is not a finite number")]
    #[diagnostic(code(svgplot::axis::non_finite_limit))]
    NonFiniteLimit { value: f64 },

    #[error("tick interval {interval} is not usable for range [{min}, {max}]")]
    #[diagnostic(
        code(svgplot::axis::invalid_tick_interval),
        help("the interval must be positive and give at most {max_ticks} ticks")
    )]
    InvalidTickInterval {
        interval: f64,
        min: f64,
        max: f64,
        max_ticks: usize,
    },

    #[error("no finite values to autoscale from")]
    #[diagnostic(
        code(svgplot::axis::no_finite_values),
        help("set an explicit range, or supply at least two distinct finite values")
    )]
    NoFiniteValues,

    #[error("invalid image size {width}x{height}: {reason}")]
    #[diagnostic(code(svgplot::layout::invalid_image_size))]
    InvalidImageSize {
        width: f64,
        height: f64,
        reason: NumericError,
    },

    #[error("plot window collapsed to {width:.1}x{height:.1} pixels")]
    #[diagnostic(
        code(svgplot::layout::window_too_small),
        help("enlarge the image, or shrink title, labels, legend or tick-value fonts")
    )]
    WindowTooSmall { width: f64, height: f64 },

    #[error("legend position ({x}, {y}) lies outside the {width}x{height} image")]
    #[diagnostic(code(svgplot::legend::outside_image))]
    LegendOutsideImage {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("cannot serialize SVG document: {reason}")]
    #[diagnostic(code(svgplot::svg::serialize))]
    Serialize { reason: String },

    #[error("cannot write SVG output")]
    #[diagnostic(code(svgplot::io))]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Soft warnings
// ============================================================================

/// Conditions reported while laying out a plot that do not stop rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    #[error("text {text:?} estimated {estimated:.1}px wide but only {allotted:.1}px available")]
    TextOverflow {
        text: String,
        estimated: f64,
        allotted: f64,
    },

    #[error("legend edge ({left:.1}, {top:.1})-({right:.1}, {bottom:.1}) extends outside the image")]
    LegendOutsideImage {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_message_names_limits() {
        let err = PlotError::DegenerateRange {
            min: 1.0,
            max: 1.0,
            threshold: 1e-13,
        };
        assert_eq!(err.to_string(), "axis range [1, 1] is too small to plot");
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = PlotError::NoFiniteValues;
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("svgplot::axis::no_finite_values"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: PlotError = io.into();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
