//! Styling of the value labels written beside data points.

use super::{Color, NumberFormat, Rotation, TextStyle};
use crate::defaults;
use crate::stats::Distribution;

/// Confidence-interval sub-label `<lo, hi>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceLabel {
    pub color: Color,
    /// Two-sided significance level, e.g. `0.05` for a 95% interval
    pub alpha: f64,
    pub distribution: Distribution,
}

impl Default for ConfidenceLabel {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            alpha: defaults::CONFIDENCE_ALPHA,
            distribution: Distribution::StudentT,
        }
    }
}

/// What a data-point label contains and how it is drawn.
///
/// Every optional sub-run is switched on by giving it a color.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabelStyle {
    pub rotation: Rotation,
    pub format: NumberFormat,
    pub text: TextStyle,
    pub fill: Color,
    pub prefix: String,
    pub suffix: String,
    /// `± sd`
    pub plus_minus: Option<Color>,
    pub confidence: Option<ConfidenceLabel>,
    /// Degrees of freedom, written `(df)`
    pub df: Option<Color>,
    pub id: Option<Color>,
    pub timestamp: Option<Color>,
    /// Sequence order, written `#n`
    pub order: Option<Color>,
}

impl Default for ValueLabelStyle {
    fn default() -> Self {
        Self {
            rotation: Rotation::Horizontal,
            format: NumberFormat::default(),
            text: TextStyle::new().size(defaults::VALUE_LABEL_FONT_SIZE),
            fill: Color::BLACK,
            prefix: String::new(),
            suffix: String::new(),
            plus_minus: None,
            confidence: None,
            df: None,
            id: None,
            timestamp: None,
            order: None,
        }
    }
}

impl ValueLabelStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn plus_minus(mut self, color: Color) -> Self {
        self.plus_minus = Some(color);
        self
    }

    pub fn confidence(mut self, confidence: ConfidenceLabel) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn df(mut self, color: Color) -> Self {
        self.df = Some(color);
        self
    }

    pub fn id(mut self, color: Color) -> Self {
        self.id = Some(color);
        self
    }

    pub fn timestamp(mut self, color: Color) -> Self {
        self.timestamp = Some(color);
        self
    }

    pub fn order(mut self, color: Color) -> Self {
        self.order = Some(color);
        self
    }
}
