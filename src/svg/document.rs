//! The layered SVG document and its metadata.

use std::io;
use std::path::Path as FsPath;

use facet_xml::SerializeOptions;

use super::dom::{self, Literal, RdfNode, Resource, SvgNode};
use super::{Element, Group, Rect, ToSvgNode, fmt_num, num};
use crate::defaults;
use crate::errors::{PlotError, PlotResult};
use crate::text::decode_references;
use crate::types::{Bounds, Size};

/// Semantic layers, in paint order: later layers draw on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    ImageBackground,
    PlotBackground,
    XMinorGrid,
    XMajorGrid,
    YMinorGrid,
    YMajorGrid,
    XAxis,
    YAxis,
    XMinorTicks,
    XMajorTicks,
    YMinorTicks,
    YMajorTicks,
    XTickValues,
    YTickValues,
    XLabel,
    YLabel,
    Whiskers,
    Boxes,
    Medians,
    Means,
    MildOutliers,
    ExtremeOutliers,
    DataLines,
    /// Outermost uncertainty ellipses (3 standard deviations)
    Uncertainty3,
    Uncertainty2,
    /// Innermost ellipses, painted last of the three
    Uncertainty1,
    DataPoints,
    LimitPoints,
    ValueLabels,
    LegendBackground,
    LegendTitle,
    /// One sub-group per series
    LegendEntries,
    Title,
}

impl Layer {
    pub const ALL: [Layer; 33] = [
        Layer::ImageBackground,
        Layer::PlotBackground,
        Layer::XMinorGrid,
        Layer::XMajorGrid,
        Layer::YMinorGrid,
        Layer::YMajorGrid,
        Layer::XAxis,
        Layer::YAxis,
        Layer::XMinorTicks,
        Layer::XMajorTicks,
        Layer::YMinorTicks,
        Layer::YMajorTicks,
        Layer::XTickValues,
        Layer::YTickValues,
        Layer::XLabel,
        Layer::YLabel,
        Layer::Whiskers,
        Layer::Boxes,
        Layer::Medians,
        Layer::Means,
        Layer::MildOutliers,
        Layer::ExtremeOutliers,
        Layer::DataLines,
        Layer::Uncertainty3,
        Layer::Uncertainty2,
        Layer::Uncertainty1,
        Layer::DataPoints,
        Layer::LimitPoints,
        Layer::ValueLabels,
        Layer::LegendBackground,
        Layer::LegendTitle,
        Layer::LegendEntries,
        Layer::Title,
    ];

    /// Value of the group's `id` attribute
    pub fn id(self) -> &'static str {
        match self {
            Layer::ImageBackground => "imageBackground",
            Layer::PlotBackground => "plotBackground",
            Layer::XMinorGrid => "xMinorGrid",
            Layer::XMajorGrid => "xMajorGrid",
            Layer::YMinorGrid => "yMinorGrid",
            Layer::YMajorGrid => "yMajorGrid",
            Layer::XAxis => "xAxis",
            Layer::YAxis => "yAxis",
            Layer::XMinorTicks => "xMinorTicks",
            Layer::XMajorTicks => "xMajorTicks",
            Layer::YMinorTicks => "yMinorTicks",
            Layer::YMajorTicks => "yMajorTicks",
            Layer::XTickValues => "xTicksValues",
            Layer::YTickValues => "yTicksValues",
            Layer::XLabel => "xLabel",
            Layer::YLabel => "yLabel",
            Layer::Whiskers => "whiskers",
            Layer::Boxes => "boxes",
            Layer::Medians => "medians",
            Layer::Means => "means",
            Layer::MildOutliers => "mildOutliers",
            Layer::ExtremeOutliers => "extremeOutliers",
            Layer::DataLines => "dataLines",
            Layer::DataPoints => "dataPoints",
            Layer::LimitPoints => "limitPoints",
            Layer::Uncertainty3 => "uncertainty3",
            Layer::Uncertainty2 => "uncertainty2",
            Layer::Uncertainty1 => "uncertainty1",
            Layer::ValueLabels => "valueLabels",
            Layer::LegendBackground => "legendBackground",
            Layer::LegendTitle => "legendTitle",
            Layer::LegendEntries => "legendEntries",
            Layer::Title => "title",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Creative Commons permission state of one license term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Permission {
    #[default]
    Permits,
    Requires,
    Prohibits,
}

/// Terms of a Creative Commons license.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct License {
    pub reproduction: Permission,
    pub distribution: Permission,
    pub attribution: Permission,
    pub commercial_use: Permission,
    /// `Requires` means derivatives must share alike
    pub derivative_works: Permission,
}

impl Default for License {
    /// CC BY: everything permitted, attribution required
    fn default() -> Self {
        Self {
            reproduction: Permission::Permits,
            distribution: Permission::Permits,
            attribution: Permission::Requires,
            commercial_use: Permission::Permits,
            derivative_works: Permission::Permits,
        }
    }
}

impl License {
    /// Short code such as `by-nc-sa`, or `None` for a public domain dedication
    pub fn code(&self) -> Option<String> {
        if self.attribution != Permission::Requires {
            return None;
        }
        let mut code = String::from("by");
        if self.commercial_use == Permission::Prohibits {
            code.push_str("-nc");
        }
        match self.derivative_works {
            Permission::Prohibits => code.push_str("-nd"),
            Permission::Requires => code.push_str("-sa"),
            Permission::Permits => {}
        }
        Some(code)
    }

    pub fn url(&self) -> String {
        match self.code() {
            Some(code) => format!("http://creativecommons.org/licenses/{code}/4.0/"),
            None => "http://creativecommons.org/publicdomain/zero/1.0/".to_string(),
        }
    }

    fn terms(&self) -> [(&'static str, Permission); 5] {
        [
            ("Reproduction", self.reproduction),
            ("Distribution", self.distribution),
            ("Attribution", self.attribution),
            ("CommercialUse", self.commercial_use),
            ("DerivativeWorks", self.derivative_works),
        ]
    }
}

/// Descriptive metadata written at the top of the document.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub copyright_holder: Option<String>,
    pub copyright_date: Option<String>,
    pub license: Option<License>,
}

/// Id of the plot window `<clipPath>`
pub(crate) const CLIP_ID: &str = "plot_window";

/// A sized SVG image made of ordered layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub size: Size,
    pub info: DocumentInfo,
    /// Decimals written for coordinates
    pub precision: usize,
    pub font_family: String,
    /// Rectangle of the plot window clip path, when clipping is used
    pub clip_window: Option<Bounds>,
    layers: Vec<Group>,
}

impl Document {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            info: DocumentInfo::default(),
            precision: defaults::COORD_PRECISION,
            font_family: defaults::FONT_FAMILY.to_string(),
            clip_window: None,
            layers: Self::empty_layers(),
        }
    }

    fn empty_layers() -> Vec<Group> {
        Layer::ALL.iter().map(|l| Group::with_id(l.id())).collect()
    }

    /// Drop every drawn element so the document can be redrawn
    pub fn clear(&mut self) {
        self.layers = Self::empty_layers();
        self.clip_window = None;
    }

    pub fn layer(&self, layer: Layer) -> &Group {
        &self.layers[layer.index()]
    }

    pub fn layer_mut(&mut self, layer: Layer) -> &mut Group {
        &mut self.layers[layer.index()]
    }

    pub fn push(&mut self, layer: Layer, element: impl Into<Element>) {
        self.layer_mut(layer).push(element);
    }

    /// Layers holding at least one element, in paint order
    pub fn non_empty_layers(&self) -> impl Iterator<Item = (Layer, &Group)> {
        Layer::ALL
            .iter()
            .map(|&l| (l, self.layer(l)))
            .filter(|(_, g)| !g.is_empty())
    }

    /// Serialize the whole document, XML declaration included
    pub fn to_svg_string(&self) -> PlotResult<String> {
        let svg = self.to_dom();
        let markup = facet_xml::to_string_with_options(&svg, &SerializeOptions::default())
            .map_err(|e| PlotError::Serialize {
                reason: e.to_string(),
            })?;

        let mut out = String::from(XML_DECLARATION);
        out.push('\n');
        if let Some(notice) = self.copyright_notice() {
            out.push_str(&format!("<!-- {notice} -->\n"));
        }
        out.push_str(&markup);
        out.push('\n');
        Ok(out)
    }

    pub fn write<W: io::Write>(&self, writer: &mut W) -> PlotResult<()> {
        writer.write_all(self.to_svg_string()?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_file(&self, path: impl AsRef<FsPath>) -> PlotResult<()> {
        std::fs::write(path, self.to_svg_string()?)?;
        Ok(())
    }

    /// The `<svg>` tree: metadata, clip path, then the non-empty layers
    pub fn to_dom(&self) -> dom::Svg {
        let p = self.precision;
        let mut children = self.metadata_nodes();

        if let Some(window) = self.clip_window {
            children.push(SvgNode::Defs(dom::Defs {
                children: vec![SvgNode::ClipPath(dom::ClipPath {
                    id: Some(CLIP_ID.to_string()),
                    children: vec![Rect::new(window).to_node(p)],
                })],
            }));
        }

        children.extend(self.non_empty_layers().map(|(_, group)| group.to_node(p)));

        dom::Svg {
            xmlns: Some(dom::SVG_NS.to_string()),
            version: Some("1.1".to_string()),
            width: num(self.size.width, p),
            height: num(self.size.height, p),
            view_box: Some(format!(
                "0 0 {} {}",
                fmt_num(self.size.width, p),
                fmt_num(self.size.height, p)
            )),
            font_family: Some(self.font_family.clone()),
            children,
        }
    }

    fn copyright_notice(&self) -> Option<String> {
        let holder = self.info.copyright_holder.as_ref()?;
        let date = self.info.copyright_date.as_deref().unwrap_or_default();
        let notice = decode_references(&format!("Copyright {holder} {date}")).into_owned();
        // "--" is not allowed inside a comment
        Some(notice.replace("--", "- -").trim().to_string())
    }

    fn metadata_nodes(&self) -> Vec<SvgNode> {
        let info = &self.info;
        let text = |s: &str| Literal::new(decode_references(s));
        let mut nodes = Vec::new();
        if let Some(title) = &info.title {
            nodes.push(SvgNode::Title(text(title)));
        }
        if let Some(desc) = &info.description {
            nodes.push(SvgNode::Desc(text(desc)));
        }

        let Some(license) = &info.license else {
            return nodes;
        };
        let url = license.url();

        let mut work = vec![
            RdfNode::Format(Literal::new("image/svg+xml")),
            RdfNode::Type(Resource::pointing_at(
                "http://purl.org/dc/dcmitype/StillImage",
            )),
        ];
        if let Some(title) = &info.title {
            work.push(RdfNode::Title(text(title)));
        }
        if let Some(desc) = &info.description {
            work.push(RdfNode::Description(text(desc)));
        }
        if let Some(author) = info.author.as_ref().or(info.copyright_holder.as_ref()) {
            work.push(RdfNode::Creator(Resource::wrapping(vec![RdfNode::Agent(
                Resource::wrapping(vec![RdfNode::Title(text(author))]),
            )])));
        }
        if let Some(date) = &info.copyright_date {
            work.push(RdfNode::Date(text(date)));
        }
        work.push(RdfNode::LicenseRef(Resource::pointing_at(url.as_str())));

        let terms = license
            .terms()
            .into_iter()
            .map(|(term, permission)| {
                let target = Resource::pointing_at(format!("http://creativecommons.org/ns#{term}"));
                match permission {
                    Permission::Permits => RdfNode::Permits(target),
                    Permission::Requires => RdfNode::Requires(target),
                    Permission::Prohibits => RdfNode::Prohibits(target),
                }
            })
            .collect();

        nodes.push(SvgNode::Metadata(dom::Metadata {
            children: vec![RdfNode::Rdf(dom::RdfRoot {
                xmlns_rdf: Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#".to_string()),
                xmlns_cc: Some("http://creativecommons.org/ns#".to_string()),
                xmlns_dc: Some("http://purl.org/dc/elements/1.1/".to_string()),
                children: vec![
                    RdfNode::Work(Resource::about("", work)),
                    RdfNode::License(Resource::about(url, terms)),
                ],
            })],
        }));
        nodes
    }
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::Circle;
    use glam::dvec2;
    use regex_lite::Regex;

    #[test]
    fn layer_table_matches_discriminants() {
        for (i, layer) in Layer::ALL.iter().enumerate() {
            assert_eq!(layer.index(), i, "{layer:?}");
        }
    }

    #[test]
    fn one_sigma_paints_last() {
        let pos = |l: Layer| Layer::ALL.iter().position(|&x| x == l);
        assert!(pos(Layer::Uncertainty3) < pos(Layer::Uncertainty2));
        assert!(pos(Layer::Uncertainty2) < pos(Layer::Uncertainty1));
        assert!(pos(Layer::ImageBackground) < pos(Layer::DataPoints));
        assert!(pos(Layer::DataPoints) < pos(Layer::Title));
    }

    #[test]
    fn empty_layers_are_omitted() {
        let mut doc = Document::new(Size::new(100.0, 50.0));
        doc.push(Layer::DataPoints, Circle::new(dvec2(1.0, 1.0), 1.0));
        let svg = doc.to_dom();
        let ids: Vec<Option<&str>> = svg
            .children
            .iter()
            .map(|node| match node {
                SvgNode::G(g) => g.id.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(ids, [Some("dataPoints")]);

        let markup = doc.to_svg_string().unwrap();
        assert!(markup.starts_with("<?xml"));
        assert!(markup.contains("<g id=\"dataPoints\">"));
        assert!(!markup.contains("<defs"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut doc = Document::new(Size::new(100.0, 50.0));
        doc.push(Layer::Title, Circle::new(dvec2(1.0, 1.0), 1.0));
        doc.clip_window = Some(Bounds::new(1.0, 1.0, 9.0, 9.0));
        doc.clear();
        assert_eq!(doc.non_empty_layers().count(), 0);
        assert!(doc.clip_window.is_none());
    }

    #[test]
    fn clip_path_definition() {
        let mut doc = Document::new(Size::new(100.0, 50.0));
        doc.clip_window = Some(Bounds::new(10.0, 5.0, 90.0, 45.0));
        let svg = doc.to_dom();
        let [SvgNode::Defs(defs)] = svg.children.as_slice() else {
            panic!("expected only <defs>");
        };
        let [SvgNode::ClipPath(clip)] = defs.children.as_slice() else {
            panic!("expected a <clipPath>");
        };
        assert_eq!(clip.id.as_deref(), Some(CLIP_ID));
        let [SvgNode::Rect(rect)] = clip.children.as_slice() else {
            panic!("expected a <rect>");
        };
        assert_eq!(rect.x.as_deref(), Some("10"));
        assert_eq!(rect.width.as_deref(), Some("80"));
        assert_eq!(rect.height.as_deref(), Some("40"));
    }

    #[test]
    fn license_codes() {
        assert_eq!(License::default().code().as_deref(), Some("by"));
        let nc_sa = License {
            commercial_use: Permission::Prohibits,
            derivative_works: Permission::Requires,
            ..License::default()
        };
        assert_eq!(nc_sa.url(), "http://creativecommons.org/licenses/by-nc-sa/4.0/");
        let pd = License {
            attribution: Permission::Permits,
            ..License::default()
        };
        assert!(pd.url().contains("publicdomain"));
    }

    #[test]
    fn metadata_block() {
        let mut doc = Document::new(Size::new(100.0, 50.0));
        doc.info = DocumentInfo {
            title: Some("Race <Times>".into()),
            description: Some("two runners".into()),
            copyright_holder: Some("Jane Doe".into()),
            copyright_date: Some("2024".into()),
            license: Some(License::default()),
            ..DocumentInfo::default()
        };
        let svg = doc.to_svg_string().unwrap();
        assert!(svg.contains("<!-- Copyright Jane Doe 2024 -->"));
        assert!(svg.contains("<title>Race &lt;Times&gt;</title>"));
        assert!(svg.contains("<desc>two runners</desc>"));
        assert!(svg.contains("<dc:title>Jane Doe</dc:title>"));

        let resource = |predicate: &str, url: &str| {
            Regex::new(&format!(r#"<{predicate} rdf:resource="{url}"\s*(/>|></{predicate}>)"#))
                .unwrap()
        };
        assert!(
            resource("cc:license", "http://creativecommons.org/licenses/by/4.0/").is_match(&svg)
        );
        assert!(
            resource("cc:requires", "http://creativecommons.org/ns#Attribution").is_match(&svg)
        );
    }

    #[test]
    fn ampersand_without_reference_is_escaped() {
        let mut doc = Document::new(Size::new(100.0, 50.0));
        doc.info.title = Some("AT&T; results &#x3A9;".into());
        let svg = doc.to_svg_string().unwrap();
        assert!(svg.contains("<title>AT&amp;T; results \u{3a9}</title>"), "{svg}");
    }

    #[test]
    fn write_to_sink() {
        let mut doc = Document::new(Size::new(10.0, 10.0));
        doc.push(Layer::DataPoints, Circle::new(dvec2(5.0, 5.0), 1.0));
        let mut sink = Vec::new();
        doc.write(&mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("width=\"10\" height=\"10\""));
        assert!(text.trim_end().ends_with("</svg>"));
    }
}
