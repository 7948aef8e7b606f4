//! Colors as written into SVG paint attributes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A paint value. `Blank` is written as `none`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Blank,
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const PURPLE: Color = Color::Rgb(128, 0, 128);
    pub const BROWN: Color = Color::Rgb(165, 42, 42);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(169, 169, 169);
    pub const LIGHT_BLUE: Color = Color::Rgb(173, 216, 230);
    pub const LIGHT_YELLOW: Color = Color::Rgb(255, 255, 224);
    pub const WHITESMOKE: Color = Color::Rgb(245, 245, 245);

    /// Whether painting with this color draws anything
    pub fn is_blank(self) -> bool {
        matches!(self, Color::Blank)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Blank => write!(f, "none"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised color {0:?}")]
pub struct ParseColorError(pub String);

/// SVG keyword colors accepted by [`Color::from_str`].
#[rustfmt::skip]
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("aqua", (0, 255, 255)),        ("azure", (240, 255, 255)),
    ("black", (0, 0, 0)),           ("blue", (0, 0, 255)),
    ("brown", (165, 42, 42)),       ("cyan", (0, 255, 255)),
    ("darkblue", (0, 0, 139)),      ("darkgray", (169, 169, 169)),
    ("darkgreen", (0, 100, 0)),     ("darkgrey", (169, 169, 169)),
    ("darkorange", (255, 140, 0)),  ("darkred", (139, 0, 0)),
    ("ghostwhite", (248, 248, 255)),("gold", (255, 215, 0)),
    ("gray", (128, 128, 128)),      ("green", (0, 128, 0)),
    ("grey", (128, 128, 128)),      ("indigo", (75, 0, 130)),
    ("lightblue", (173, 216, 230)), ("lightgray", (211, 211, 211)),
    ("lightgreen", (144, 238, 144)),("lightgrey", (211, 211, 211)),
    ("lightyellow", (255, 255, 224)),("lime", (0, 255, 0)),
    ("magenta", (255, 0, 255)),     ("maroon", (128, 0, 0)),
    ("navy", (0, 0, 128)),          ("olive", (128, 128, 0)),
    ("orange", (255, 165, 0)),      ("pink", (255, 192, 203)),
    ("purple", (128, 0, 128)),      ("red", (255, 0, 0)),
    ("silver", (192, 192, 192)),    ("steelblue", (70, 130, 180)),
    ("teal", (0, 128, 128)),        ("white", (255, 255, 255)),
    ("whitesmoke", (245, 245, 245)),("yellow", (255, 255, 0)),
];

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `none`/`blank`, `#rgb`, `#rrggbb`, `rgb(r,g,b)` and SVG color keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let err = || ParseColorError(s.to_string());

        if name == "none" || name == "blank" || name == "transparent" {
            return Ok(Color::Blank);
        }

        if let Some(hex) = name.strip_prefix('#') {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(err)?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
                [r1, r2, g1, g2, b1, b2] => {
                    Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
                }
                _ => Err(err()),
            };
        }

        if let Some(inner) = name.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<u8> = inner
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| err())?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Color::Rgb(*r, *g, *b)),
                _ => Err(err()),
            };
        }

        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, (r, g, b))| Color::Rgb(*r, *g, *b))
            .ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rgb_and_blank() {
        assert_eq!(Color::Rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Color::Blank.to_string(), "none");
    }

    #[test]
    fn parse_keywords() {
        assert_eq!("red".parse(), Ok(Color::RED));
        assert_eq!(" LightGray ".parse(), Ok(Color::LIGHT_GRAY));
        assert_eq!("none".parse(), Ok(Color::Blank));
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#ff8000".parse(), Ok(Color::Rgb(255, 128, 0)));
        assert_eq!("#f80".parse(), Ok(Color::Rgb(255, 136, 0)));
        assert!("#ff80".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn parse_rgb_function() {
        assert_eq!("rgb(10, 20, 30)".parse(), Ok(Color::Rgb(10, 20, 30)));
        assert!("rgb(10,20)".parse::<Color>().is_err());
        assert!("rgb(10,20,300)".parse::<Color>().is_err());
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "chartreuse-ish".parse::<Color>(),
            Err(ParseColorError("chartreuse-ish".to_string()))
        );
    }
}
