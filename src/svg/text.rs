//! `<text>` with optional differently colored `<tspan>` runs.

use glam::DVec2;

use super::{SvgNode, ToSvgNode, dom, fmt_num, num};
use crate::defaults;
use crate::style::{Color, TextStyle};
use crate::text::decode_references;

/// Horizontal alignment of a text run about its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A run inside a `<text>`.
#[derive(Clone, Debug, PartialEq)]
pub struct TSpan {
    pub text: String,
    pub fill: Option<Color>,
}

impl TSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

/// `<text>` anchored at `pos` (baseline).
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub pos: DVec2,
    pub spans: Vec<TSpan>,
    pub anchor: TextAnchor,
    /// Degrees, clockwise, about `pos`
    pub rotation: f64,
    pub font: TextStyle,
    pub fill: Option<Color>,
    /// Width the renderer should fit the run into
    pub text_length: Option<f64>,
}

impl Text {
    pub fn new(pos: DVec2, text: impl Into<String>, font: &TextStyle) -> Self {
        Self {
            pos,
            spans: vec![TSpan::new(text)],
            anchor: TextAnchor::Start,
            rotation: 0.0,
            font: font.clone(),
            fill: None,
            text_length: None,
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn text_length(mut self, length: Option<f64>) -> Self {
        self.text_length = length;
        self
    }

    pub fn span(mut self, span: TSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// All runs concatenated, unescaped
    pub fn content(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl ToSvgNode for Text {
    fn to_node(&self, p: usize) -> SvgNode {
        let transform = (self.rotation != 0.0).then(|| {
            format!(
                "rotate({} {} {})",
                fmt_num(self.rotation, p),
                fmt_num(self.pos.x, p),
                fmt_num(self.pos.y, p)
            )
        });
        let font_family = (self.font.font_family != defaults::FONT_FAMILY)
            .then(|| self.font.font_family.clone());

        // a lone uncolored run is written as plain character data
        let (content, spans) = match self.spans.as_slice() {
            [TSpan { text, fill: None }] => (decode_references(text).into_owned(), Vec::new()),
            spans => (
                String::new(),
                spans
                    .iter()
                    .map(|span| {
                        dom::TextNode::TSpan(dom::TSpan {
                            fill: span.fill.map(|c| c.to_string()),
                            content: decode_references(&span.text).into_owned(),
                        })
                    })
                    .collect(),
            ),
        };

        SvgNode::Text(dom::Text {
            x: num(self.pos.x, p),
            y: num(self.pos.y, p),
            text_anchor: (self.anchor != TextAnchor::Start).then(|| self.anchor.as_str().into()),
            transform,
            font_size: num(self.font.font_size, p),
            font_family,
            font_weight: self.font.font_weight.clone(),
            font_style: self.font.font_style.clone(),
            font_stretch: self.font.font_stretch.clone(),
            text_decoration: self.font.font_decoration.clone(),
            fill: self.fill.map(|c| c.to_string()),
            text_length: self.text_length.and_then(|l| num(l, p)),
            length_adjust: self.text_length.map(|_| "spacingAndGlyphs".into()),
            content,
            spans,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn node(t: &Text) -> dom::Text {
        match t.to_node(3) {
            SvgNode::Text(text) => text,
            other => panic!("expected <text>, got {other:?}"),
        }
    }

    #[test]
    fn plain_text() {
        let t = Text::new(dvec2(250.0, 20.0), "Race Times", &TextStyle::new().size(18.0))
            .anchor(TextAnchor::Middle);
        let n = node(&t);
        assert_eq!(n.x.as_deref(), Some("250"));
        assert_eq!(n.text_anchor.as_deref(), Some("middle"));
        assert_eq!(n.font_size.as_deref(), Some("18"));
        assert_eq!(n.transform, None);
        assert_eq!(n.content, "Race Times");
        assert!(n.spans.is_empty());
    }

    #[test]
    fn colored_spans_and_rotation() {
        let t = Text::new(dvec2(10.0, 10.0), "4.2", &TextStyle::new().size(10.0).weight("bold"))
            .rotate(-90.0)
            .span(TSpan::new(" &#x00B1;0.1").fill(Color::GRAY));
        let n = node(&t);
        assert_eq!(n.transform.as_deref(), Some("rotate(-90 10 10)"));
        assert_eq!(n.font_weight.as_deref(), Some("bold"));
        assert!(n.content.is_empty());
        let runs: Vec<(Option<&str>, &str)> = n
            .spans
            .iter()
            .map(|dom::TextNode::TSpan(s)| (s.fill.as_deref(), s.content.as_str()))
            .collect();
        assert_eq!(
            runs,
            [(None, "4.2"), (Some("rgb(128,128,128)"), " \u{b1}0.1")]
        );
        assert_eq!(t.content(), "4.2 &#x00B1;0.1");
    }

    #[test]
    fn text_length_and_family() {
        let t = Text::new(dvec2(0.0, 0.0), "a < b & c", &TextStyle::new().family("serif"))
            .text_length(Some(40.0));
        let n = node(&t);
        assert_eq!(n.font_family.as_deref(), Some("serif"));
        assert_eq!(n.text_length.as_deref(), Some("40"));
        assert_eq!(n.length_adjust.as_deref(), Some("spacingAndGlyphs"));
        assert_eq!(n.content, "a < b & c");
    }
}
