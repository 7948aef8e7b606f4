//! SVG element tree and serialization.
//!
//! Elements are plain data in pixel coordinates. Each one converts itself
//! into a [`dom`] node with numbers rounded to the document precision, and
//! the document hands the finished tree to `facet-xml`.

pub mod dom;
mod document;
mod path;
mod shapes;
mod text;

pub(crate) use document::CLIP_ID;
pub use document::{Document, DocumentInfo, Layer, License, Permission};
pub use dom::SvgNode;
pub use path::{Path, PathCommand};
pub use shapes::{Circle, Ellipse, Line, Polygon, Polyline, Rect};
pub use text::{TSpan, Text, TextAnchor};

use enum_dispatch::enum_dispatch;

use crate::style::SvgStyle;

/// Conversion into an SVG DOM node.
#[enum_dispatch]
pub trait ToSvgNode {
    /// Node for this element, numbers written with `precision` decimals
    fn to_node(&self, precision: usize) -> SvgNode;
}

/// Any drawable node.
#[enum_dispatch(ToSvgNode)]
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line,
    Rect,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
    Path,
    Text,
    Group,
}

/// Format a coordinate with at most `precision` decimals and no trailing zeros.
pub fn fmt_num(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub(crate) fn num(v: f64, precision: usize) -> Option<String> {
    Some(fmt_num(v, precision))
}

/// Presentation attributes in node form.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Paint {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub stroke_width: Option<String>,
}

impl SvgStyle {
    /// Only the attributes that are set
    pub(crate) fn paint(&self, precision: usize) -> Paint {
        Paint {
            stroke: self.stroke.map(|c| c.to_string()),
            fill: self.fill.map(|c| c.to_string()),
            stroke_width: self.stroke_width.map(|w| fmt_num(w, precision)),
        }
    }
}

/// `<g>`: a styled container. Children inherit its paint attributes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Group {
    pub id: Option<String>,
    pub class: Option<String>,
    /// Id of a `<clipPath>` to apply
    pub clip_path: Option<String>,
    pub style: SvgStyle,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.children.push(element.into());
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of non-group elements anywhere below this group
    pub fn count_primitives(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Element::Group(g) => g.count_primitives(),
                _ => 1,
            })
            .sum()
    }

    /// Direct child groups
    pub fn subgroups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|child| match child {
            Element::Group(g) => Some(g),
            _ => None,
        })
    }
}

impl ToSvgNode for Group {
    fn to_node(&self, precision: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(precision);
        SvgNode::G(dom::Group {
            id: self.id.clone(),
            class: self.class.clone(),
            clip_path: self.clip_path.as_ref().map(|id| format!("url(#{id})")),
            stroke,
            fill,
            stroke_width,
            children: self
                .children
                .iter()
                .map(|child| child.to_node(precision))
                .collect(),
        })
    }
}
