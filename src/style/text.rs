//! Font descriptors for text runs.

use crate::defaults;

/// Font description used both for SVG attributes and for width estimation.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f64,
    /// CSS font family list, e.g. `"Lucida Sans Unicode"`
    pub font_family: String,
    /// `bold`, `normal`, `100`..`900`
    pub font_weight: Option<String>,
    /// `italic`, `oblique`, `normal`
    pub font_style: Option<String>,
    /// `condensed`, `expanded`, ...
    pub font_stretch: Option<String>,
    /// `underline`, `line-through`, ...
    pub font_decoration: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            font_family: defaults::FONT_FAMILY.to_string(),
            font_weight: None,
            font_style: None,
            font_stretch: None,
            font_decoration: None,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.font_style = Some(style.into());
        self
    }

    pub fn stretch(mut self, stretch: impl Into<String>) -> Self {
        self.font_stretch = Some(stretch.into());
        self
    }

    pub fn decoration(mut self, decoration: impl Into<String>) -> Self {
        self.font_decoration = Some(decoration.into());
        self
    }

    /// Vertical space reserved for one line of this text
    pub fn line_height(&self) -> f64 {
        self.font_size * defaults::TEXT_MARGIN
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight
            .as_deref()
            .is_some_and(|w| w == "bold" || w == "bolder" || w.parse::<u32>().is_ok_and(|n| n >= 600))
    }
}
