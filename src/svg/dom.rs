//! Facet-derived SVG nodes, serialized by `facet-xml`.
//!
//! Attribute values are already formatted text, so numbers carry the
//! document precision. Unset attributes are left out. Escaping of text
//! and attribute values is done by the serializer.

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root `<svg>` element
#[derive(Facet, Debug, Clone, Default)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub version: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any node the plotter writes below the root
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "title")]
    Title(Literal),
    #[facet(rename = "desc")]
    Desc(Literal),
    #[facet(rename = "metadata")]
    Metadata(Metadata),
    #[facet(rename = "defs")]
    Defs(Defs),
    #[facet(rename = "clipPath")]
    ClipPath(ClipPath),
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "circle")]
    Circle(Circle),
    #[facet(rename = "ellipse")]
    Ellipse(Ellipse),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    #[facet(rename = "polyline")]
    Polyline(Polyline),
    #[facet(rename = "text")]
    Text(Text),
}

/// Element holding nothing but character data
#[derive(Facet, Debug, Clone, Default)]
pub struct Literal {
    #[facet(xml::text)]
    pub content: String,
}

impl Literal {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// `<defs>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Defs {
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// `<clipPath>`
#[derive(Facet, Debug, Clone, Default)]
pub struct ClipPath {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// `<g>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute, rename = "clip-path")]
    pub clip_path: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// `<rect>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute)]
    pub rx: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<circle>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Circle {
    #[facet(xml::attribute)]
    pub cx: Option<String>,
    #[facet(xml::attribute)]
    pub cy: Option<String>,
    #[facet(xml::attribute)]
    pub r: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<ellipse>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Ellipse {
    #[facet(xml::attribute)]
    pub cx: Option<String>,
    #[facet(xml::attribute)]
    pub cy: Option<String>,
    #[facet(xml::attribute)]
    pub rx: Option<String>,
    #[facet(xml::attribute)]
    pub ry: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<line>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<String>,
    #[facet(xml::attribute)]
    pub y1: Option<String>,
    #[facet(xml::attribute)]
    pub x2: Option<String>,
    #[facet(xml::attribute)]
    pub y2: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<path>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<polygon>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<polyline>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Polyline {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// `<text>`: either plain `content` or a sequence of `<tspan>` runs
#[derive(Facet, Debug, Clone, Default)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<String>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "font-weight")]
    pub font_weight: Option<String>,
    #[facet(xml::attribute, rename = "font-style")]
    pub font_style: Option<String>,
    #[facet(xml::attribute, rename = "font-stretch")]
    pub font_stretch: Option<String>,
    #[facet(xml::attribute, rename = "text-decoration")]
    pub text_decoration: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "textLength")]
    pub text_length: Option<String>,
    #[facet(xml::attribute, rename = "lengthAdjust")]
    pub length_adjust: Option<String>,
    #[facet(xml::text)]
    pub content: String,
    #[facet(xml::elements)]
    pub spans: Vec<TextNode>,
}

/// Child of `<text>`
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum TextNode {
    #[facet(rename = "tspan")]
    TSpan(TSpan),
}

/// `<tspan>`
#[derive(Facet, Debug, Clone, Default)]
pub struct TSpan {
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

/// `<metadata>`
#[derive(Facet, Debug, Clone, Default)]
pub struct Metadata {
    #[facet(xml::elements)]
    pub children: Vec<RdfNode>,
}

/// RDF / Creative Commons / Dublin Core vocabulary used in `<metadata>`
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum RdfNode {
    #[facet(rename = "rdf:RDF")]
    Rdf(RdfRoot),
    #[facet(rename = "cc:Work")]
    Work(Resource),
    #[facet(rename = "cc:License")]
    License(Resource),
    #[facet(rename = "cc:Agent")]
    Agent(Resource),
    #[facet(rename = "cc:license")]
    LicenseRef(Resource),
    #[facet(rename = "cc:permits")]
    Permits(Resource),
    #[facet(rename = "cc:requires")]
    Requires(Resource),
    #[facet(rename = "cc:prohibits")]
    Prohibits(Resource),
    #[facet(rename = "dc:creator")]
    Creator(Resource),
    #[facet(rename = "dc:type")]
    Type(Resource),
    #[facet(rename = "dc:format")]
    Format(Literal),
    #[facet(rename = "dc:title")]
    Title(Literal),
    #[facet(rename = "dc:description")]
    Description(Literal),
    #[facet(rename = "dc:date")]
    Date(Literal),
}

/// `<rdf:RDF>` with its namespace declarations
#[derive(Facet, Debug, Clone, Default)]
pub struct RdfRoot {
    #[facet(xml::attribute, rename = "xmlns:rdf")]
    pub xmlns_rdf: Option<String>,
    #[facet(xml::attribute, rename = "xmlns:cc")]
    pub xmlns_cc: Option<String>,
    #[facet(xml::attribute, rename = "xmlns:dc")]
    pub xmlns_dc: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<RdfNode>,
}

/// RDF node that names or points at a resource
#[derive(Facet, Debug, Clone, Default)]
pub struct Resource {
    #[facet(xml::attribute, rename = "rdf:about")]
    pub about: Option<String>,
    #[facet(xml::attribute, rename = "rdf:resource")]
    pub resource: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<RdfNode>,
}

impl Resource {
    pub fn about(about: impl Into<String>, children: Vec<RdfNode>) -> Self {
        Self {
            about: Some(about.into()),
            resource: None,
            children,
        }
    }

    pub fn pointing_at(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Self::default()
        }
    }

    pub fn wrapping(children: Vec<RdfNode>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}
