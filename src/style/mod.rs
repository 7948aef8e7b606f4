//! Style value types: colors, strokes, fonts, markers and label formats.

mod color;
mod marker;
mod number;
mod text;
mod value;

pub use color::{Color, ParseColorError};
pub use marker::{LimitMarkers, Marker, PointStyle};
pub use number::{Notation, NumberFormat, strip_redundant_zeros};
pub use text::TextStyle;
pub use value::{ConfidenceLabel, ValueLabelStyle};

use crate::defaults;

/// Paint attributes of a shape. `None` means the attribute is not written
/// and the value is inherited from the enclosing group.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SvgStyle {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl SvgStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stroke.is_none() && self.fill.is_none() && self.stroke_width.is_none()
    }
}

/// Line connecting the points of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    /// Smooth Bézier curve through the points instead of straight segments
    pub curve: bool,
    /// Fill between the line and the X axis
    pub area_fill: Option<Color>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: defaults::DATA_LINE_WIDTH,
            curve: false,
            area_fill: None,
        }
    }
}

impl LineStyle {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn curve(mut self, curve: bool) -> Self {
        self.curve = curve;
        self
    }

    pub fn area_fill(mut self, color: Color) -> Self {
        self.area_fill = Some(color);
        self
    }
}

/// Fixed set of text rotations for labels.
///
/// Negative angles turn the text counter-clockwise (reading uphill).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Horizontal,
    SlopeUp,
    Uphill,
    SteepUp,
    Upward,
    BackUp,
    UpsideDown,
    SlopeDown,
    Downhill,
    SteepDown,
    Downward,
    BackDown,
}

impl Rotation {
    /// Angle in degrees, clockwise as SVG `rotate()` expects
    pub fn degrees(self) -> f64 {
        match self {
            Rotation::Horizontal => 0.0,
            Rotation::SlopeUp => -30.0,
            Rotation::Uphill => -45.0,
            Rotation::SteepUp => -60.0,
            Rotation::Upward => -90.0,
            Rotation::BackUp => -135.0,
            Rotation::UpsideDown => 180.0,
            Rotation::SlopeDown => 30.0,
            Rotation::Downhill => 45.0,
            Rotation::SteepDown => 60.0,
            Rotation::Downward => 90.0,
            Rotation::BackDown => 135.0,
        }
    }

    /// Extent of a text run of `width` and `font_size` along the vertical
    pub fn vertical_extent(self, width: f64, font_size: f64) -> f64 {
        let a = self.degrees().to_radians();
        width * a.sin().abs() + font_size * a.cos().abs()
    }

    /// Extent of a text run of `width` and `font_size` along the horizontal
    pub fn horizontal_extent(self, width: f64, font_size: f64) -> f64 {
        let a = self.degrees().to_radians();
        width * a.cos().abs() + font_size * a.sin().abs()
    }
}

/// Direction tick marks point relative to the plot window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickDirection {
    /// Into the plot window
    Inward,
    /// Away from the plot window, towards the tick labels
    #[default]
    Outward,
    Both,
}

impl TickDirection {
    pub fn reaches_outside(self) -> bool {
        matches!(self, TickDirection::Outward | TickDirection::Both)
    }

    pub fn reaches_inside(self) -> bool {
        matches!(self, TickDirection::Inward | TickDirection::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_style_empty_until_set() {
        assert!(SvgStyle::new().is_empty());
        assert!(!SvgStyle::new().width(2.0).is_empty());
    }

    #[test]
    fn rotation_extents() {
        let w = 40.0;
        let h = 10.0;
        assert_eq!(Rotation::Horizontal.vertical_extent(w, h), h);
        assert!((Rotation::Upward.vertical_extent(w, h) - w).abs() < 1e-9);
        assert!((Rotation::Upward.horizontal_extent(w, h) - h).abs() < 1e-9);
        let diag = Rotation::Uphill.vertical_extent(w, h);
        assert!(diag > h && diag < w + h);
    }

    #[test]
    fn tick_direction_reach() {
        assert!(TickDirection::Both.reaches_inside());
        assert!(TickDirection::Both.reaches_outside());
        assert!(!TickDirection::Inward.reaches_outside());
    }
}
