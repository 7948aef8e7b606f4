//! Data-point marker shapes.

use super::color::Color;
use crate::defaults;

/// Shape drawn at each data point.
///
/// Most shapes are drawn as SVG geometry. A few are single glyphs written as
/// numeric character references; [`Marker::Glyph`] takes any caller string.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Marker {
    /// Nothing drawn
    None,
    #[default]
    Circle,
    Square,
    /// Small filled circle, a fifth of the nominal size
    Point,
    /// Ellipse twice as tall as wide
    Egg,
    /// Nested 1, 2 and 3 standard deviation ellipses
    UncertaintyEllipse,
    VerticalLine,
    HorizontalLine,
    VerticalTick,
    HorizontalTick,
    /// Upward triangle drawn as a polygon
    Cone,
    Triangle,
    Star,
    Lozenge,
    Diamond,
    Heart,
    Club,
    Spade,
    Asterisk,
    Cross,
    /// Caller-chosen text, e.g. `"&#x2609;"` or `"X"`
    Glyph(String),
}

impl Marker {
    /// Text drawn for glyph-based markers
    pub fn glyph(&self) -> Option<&str> {
        match self {
            Marker::Triangle => Some("&#x25B2;"),
            Marker::Star => Some("&#x2605;"),
            Marker::Lozenge => Some("&#x25CA;"),
            Marker::Diamond => Some("&#x2666;"),
            Marker::Heart => Some("&#x2665;"),
            Marker::Club => Some("&#x2663;"),
            Marker::Spade => Some("&#x2660;"),
            Marker::Asterisk => Some("&#x2217;"),
            Marker::Cross => Some("&#x00D7;"),
            Marker::Glyph(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Marker::None)
    }
}

/// How data points of one series are drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct PointStyle {
    pub marker: Marker,
    /// Nominal size in pixels (diameter for circles, font size for glyphs)
    pub size: f64,
    pub stroke: Color,
    pub fill: Color,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            marker: Marker::Circle,
            size: defaults::MARKER_SIZE,
            stroke: Color::BLACK,
            fill: Color::Blank,
        }
    }
}

impl PointStyle {
    pub fn new(marker: Marker) -> Self {
        Self {
            marker,
            ..Self::default()
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }
}

/// Markers used for values that cannot be drawn inside the window.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitMarkers {
    pub nan: PointStyle,
    pub plus_infinity: PointStyle,
    pub minus_infinity: PointStyle,
}

impl Default for LimitMarkers {
    fn default() -> Self {
        let glyph = |text: &str| {
            PointStyle::new(Marker::Glyph(text.to_string()))
                .size(defaults::LIMIT_MARKER_SIZE)
                .stroke(Color::RED)
                .fill(Color::RED)
        };
        Self {
            nan: glyph("?"),
            plus_infinity: glyph("&#x2192;"),
            minus_infinity: glyph("&#x2190;"),
        }
    }
}

impl LimitMarkers {
    /// Largest marker; sets the side margins the layout keeps free
    pub fn max_size(&self) -> f64 {
        self.nan
            .size
            .max(self.plus_infinity.size)
            .max(self.minus_infinity.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_markers_have_text() {
        assert_eq!(Marker::Heart.glyph(), Some("&#x2665;"));
        assert_eq!(Marker::Glyph("Q".into()).glyph(), Some("Q"));
        assert_eq!(Marker::Circle.glyph(), None);
    }

    #[test]
    fn limit_markers_are_distinct() {
        let limits = LimitMarkers::default();
        assert_ne!(limits.nan.marker, limits.plus_infinity.marker);
        assert_ne!(limits.plus_infinity.marker, limits.minus_infinity.marker);
        assert_eq!(limits.max_size(), defaults::LIMIT_MARKER_SIZE);
    }
}
