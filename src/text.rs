//! Text width estimation and character references.
//!
//! There is no font shaping here. Width is a heuristic: every visible glyph
//! is `ASPECT_RATIO * font_size` wide, uppercase ASCII letters a little
//! wider. A character reference such as `&#x3A9;` is one glyph. Text is
//! never markup: `<` and `>` are ordinary glyphs and are escaped on output.
//! Renderers can be told to squeeze a run into its allotted space with the
//! `textLength` attribute.

use std::borrow::Cow;

use crate::defaults;
use crate::errors::LayoutWarning;
use crate::style::TextStyle;

/// Width of `text` in glyph units (1.0 per ordinary glyph).
pub fn glyph_units(text: &str) -> f64 {
    decode_references(text)
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                defaults::UPPERCASE_WEIGHT
            } else {
                1.0
            }
        })
        .sum()
}

/// Estimated rendered width of `text` in pixels.
pub fn estimate_width(text: &str, style: &TextStyle) -> f64 {
    glyph_units(text) * defaults::ASPECT_RATIO * style.font_size
}

/// Widest of several strings.
pub fn max_width<'a>(texts: impl IntoIterator<Item = &'a str>, style: &TextStyle) -> f64 {
    texts
        .into_iter()
        .map(|t| estimate_width(t, style))
        .fold(0.0, f64::max)
}

/// Outcome of fitting a text run into an allotted width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFit {
    pub estimated: f64,
    /// Value for the `textLength` attribute when the run must be compressed
    pub text_length: Option<f64>,
    pub warning: Option<LayoutWarning>,
}

/// Check a run against the space it has.
///
/// Overflowing runs get a `textLength`; runs that would need squeezing
/// beyond [`defaults::MAX_TEXT_COMPRESSION`] also produce a warning.
pub fn fit_text(text: &str, style: &TextStyle, allotted: f64) -> TextFit {
    let estimated = estimate_width(text, style);
    if estimated <= allotted || allotted <= 0.0 {
        return TextFit {
            estimated,
            text_length: None,
            warning: None,
        };
    }

    let warning = (estimated / allotted > defaults::MAX_TEXT_COMPRESSION).then(|| {
        crate::log::reported(LayoutWarning::TextOverflow {
            text: text.to_string(),
            estimated,
            allotted,
        })
    });

    TextFit {
        estimated,
        text_length: Some(allotted),
        warning,
    }
}

/// Resolve the character references that stand for one glyph.
///
/// Numeric references (`&#937;`, `&#x3A9;`) and the five predefined XML
/// entities become the character they name. Any other `&` is plain text,
/// so `AT&T;` stays as written and is escaped by the serializer.
pub fn decode_references(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match reference_at(tail) {
            Some((c, len)) => {
                result.push(c);
                rest = &tail[len..];
            }
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

/// Character named by the reference at the start of `s`, and its length.
fn reference_at(s: &str) -> Option<(char, usize)> {
    let end = s.find(';')?;
    let body = &s[1..end];
    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) if is_all(hex, |c| c.is_ascii_hexdigit()) => {
                    u32::from_str_radix(hex, 16).ok()?
                }
                None if is_all(digits, |c| c.is_ascii_digit()) => digits.parse().ok()?,
                _ => return None,
            };
            char::from_u32(code).filter(|&c| c != '\0')?
        }
    };
    Some((c, end + 1))
}

fn is_all(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TextStyle {
        TextStyle::new().size(10.0)
    }

    #[test]
    fn empty_string_has_no_width() {
        assert_eq!(estimate_width("", &style()), 0.0);
    }

    #[test]
    fn width_grows_with_each_glyph() {
        let s = style();
        let mut prev = 0.0;
        for n in 1..20 {
            let w = estimate_width(&"ab".repeat(n), &s);
            assert!(w > prev);
            prev = w;
        }
    }

    #[test]
    fn reference_counts_as_one_glyph() {
        let s = style();
        assert_eq!(estimate_width("&#x3A9;", &s), estimate_width("x", &s));
        assert_eq!(estimate_width("&#x00B1;", &s), estimate_width("x", &s));
        assert_eq!(estimate_width("&#937;", &s), estimate_width("x", &s));
        assert_eq!(estimate_width("a&amp;b", &s), estimate_width("axb", &s));
    }

    #[test]
    fn unknown_entities_are_measured_literally() {
        assert_eq!(glyph_units("&alpha;"), 7.0);
        let at_t = 2.0 + 3.0 * defaults::UPPERCASE_WEIGHT;
        assert!((glyph_units("AT&T;") - at_t).abs() < 1e-9);
    }

    #[test]
    fn angle_brackets_are_glyphs() {
        let s = style();
        assert_eq!(glyph_units(" <8.27, 11.7>"), 13.0);
        assert!(estimate_width("x<b>2</b>", &s) > estimate_width("x2", &s));
    }

    #[test]
    fn uppercase_is_wider() {
        let s = style();
        assert!(estimate_width("W", &s) > estimate_width("w", &s));
        assert_eq!(glyph_units("AB"), 2.0 * defaults::UPPERCASE_WEIGHT);
    }

    #[test]
    fn unterminated_sequences_terminate() {
        assert_eq!(glyph_units("&#x39"), 5.0);
        assert_eq!(glyph_units("a < b"), 5.0);
        assert_eq!(glyph_units("&"), 1.0);
        assert_eq!(glyph_units("<"), 1.0);
    }

    #[test]
    fn width_scales_with_font_size() {
        let w10 = estimate_width("hello", &TextStyle::new().size(10.0));
        let w20 = estimate_width("hello", &TextStyle::new().size(20.0));
        assert!((w20 - 2.0 * w10).abs() < 1e-9);
        assert!((w10 - 5.0 * 0.6 * 10.0).abs() < 1e-9);
    }

    #[test]
    fn non_ascii_counts_per_char() {
        assert_eq!(glyph_units("\u{3a9}\u{3b1}"), 2.0);
    }

    #[test]
    fn fit_compresses_and_warns() {
        let s = style();
        let fit = fit_text("a fairly long title", &s, 1000.0);
        assert_eq!(fit.text_length, None);

        let w = estimate_width("abcdefghij", &s);
        let slight = fit_text("abcdefghij", &s, w * 0.9);
        assert_eq!(slight.text_length, Some(w * 0.9));
        assert!(slight.warning.is_none());

        let heavy = fit_text("abcdefghij", &s, w * 0.5);
        assert!(matches!(heavy.warning, Some(LayoutWarning::TextOverflow { .. })));
    }

    #[test]
    fn only_character_references_are_decoded() {
        assert_eq!(decode_references("&#x00B1;0.1"), "\u{b1}0.1");
        assert_eq!(decode_references("&#937; &#X3a9;"), "\u{3a9} \u{3a9}");
        assert_eq!(decode_references("&lt;b&gt; &amp; &quot;&apos;"), "<b> & \"'");
        assert_eq!(decode_references("AT&T;"), "AT&T;");
        assert_eq!(decode_references("&alpha;"), "&alpha;");
        assert_eq!(decode_references("&#xZZ; &#; &#0; &"), "&#xZZ; &#; &#0; &");
        assert!(matches!(decode_references("plain"), Cow::Borrowed("plain")));
    }
}
