//! Basic shape elements.

use glam::DVec2;

use super::{Paint, SvgNode, ToSvgNode, dom, fmt_num, num};
use crate::style::SvgStyle;
use crate::types::Bounds;

/// `<line>`
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub from: DVec2,
    pub to: DVec2,
    pub style: SvgStyle,
}

impl Line {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self {
            from,
            to,
            style: SvgStyle::default(),
        }
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToSvgNode for Line {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Line(dom::Line {
            x1: num(self.from.x, p),
            y1: num(self.from.y, p),
            x2: num(self.to.x, p),
            y2: num(self.to.y, p),
            stroke,
            fill,
            stroke_width,
        })
    }
}

/// `<rect>`
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub bounds: Bounds,
    /// Corner radius
    pub radius: Option<f64>,
    pub style: SvgStyle,
}

impl Rect {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            radius: None,
            style: SvgStyle::default(),
        }
    }

    pub fn radius(mut self, r: f64) -> Self {
        self.radius = Some(r);
        self
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToSvgNode for Rect {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Rect(dom::Rect {
            x: num(self.bounds.left, p),
            y: num(self.bounds.top, p),
            width: num(self.bounds.width(), p),
            height: num(self.bounds.height(), p),
            rx: self.radius.and_then(|r| num(r, p)),
            stroke,
            fill,
            stroke_width,
        })
    }
}

/// `<circle>`
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub style: SvgStyle,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            style: SvgStyle::default(),
        }
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToSvgNode for Circle {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Circle(dom::Circle {
            cx: num(self.center.x, p),
            cy: num(self.center.y, p),
            r: num(self.radius, p),
            stroke,
            fill,
            stroke_width,
        })
    }
}

/// `<ellipse>`
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub center: DVec2,
    pub radii: DVec2,
    pub style: SvgStyle,
}

impl Ellipse {
    pub fn new(center: DVec2, radii: DVec2) -> Self {
        Self {
            center,
            radii,
            style: SvgStyle::default(),
        }
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToSvgNode for Ellipse {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Ellipse(dom::Ellipse {
            cx: num(self.center.x, p),
            cy: num(self.center.y, p),
            rx: num(self.radii.x, p),
            ry: num(self.radii.y, p),
            stroke,
            fill,
            stroke_width,
        })
    }
}

fn points_attr(points: &[DVec2], p: usize) -> String {
    points
        .iter()
        .map(|pt| format!("{},{}", fmt_num(pt.x, p), fmt_num(pt.y, p)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<polygon>`: closed outline
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
    pub style: SvgStyle,
}

impl Polygon {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self {
            points,
            style: SvgStyle::default(),
        }
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToSvgNode for Polygon {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Polygon(dom::Polygon {
            points: Some(points_attr(&self.points, p)),
            stroke,
            fill,
            stroke_width,
        })
    }
}

/// `<polyline>`: open outline
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<DVec2>,
    pub style: SvgStyle,
}

impl Polyline {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self {
            points,
            style: SvgStyle::default(),
        }
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToSvgNode for Polyline {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Polyline(dom::Polyline {
            points: Some(points_attr(&self.points, p)),
            stroke,
            fill,
            stroke_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use glam::dvec2;

    #[test]
    fn line_rounds_coordinates() {
        let line = Line::new(dvec2(0.12345, 1.0), dvec2(10.0, 2.5));
        let SvgNode::Line(node) = line.to_node(3) else {
            panic!("expected <line>");
        };
        assert_eq!(node.x1.as_deref(), Some("0.123"));
        assert_eq!(node.y1.as_deref(), Some("1"));
        assert_eq!(node.x2.as_deref(), Some("10"));
        assert_eq!(node.y2.as_deref(), Some("2.5"));
        assert_eq!(node.stroke, None);
    }

    #[test]
    fn rect_from_bounds() {
        let rect = Rect::new(Bounds::new(5.0, 5.0, 495.0, 195.0))
            .style(SvgStyle::new().fill(Color::WHITE).stroke(Color::BLACK).width(2.0));
        let SvgNode::Rect(node) = rect.to_node(3) else {
            panic!("expected <rect>");
        };
        assert_eq!(node.width.as_deref(), Some("490"));
        assert_eq!(node.height.as_deref(), Some("190"));
        assert_eq!(node.rx, None);
        assert_eq!(node.stroke.as_deref(), Some("rgb(0,0,0)"));
        assert_eq!(node.fill.as_deref(), Some("rgb(255,255,255)"));
        assert_eq!(node.stroke_width.as_deref(), Some("2"));
    }

    #[test]
    fn polygon_points() {
        let tri = Polygon::new(vec![dvec2(0.0, 0.0), dvec2(4.0, 0.0), dvec2(2.0, 3.5)]);
        let SvgNode::Polygon(node) = tri.to_node(3) else {
            panic!("expected <polygon>");
        };
        assert_eq!(node.points.as_deref(), Some("0,0 4,0 2,3.5"));
    }

    #[test]
    fn ellipse_radii() {
        let e = Ellipse::new(dvec2(1.0, 2.0), dvec2(3.0, 4.0));
        let SvgNode::Ellipse(node) = e.to_node(3) else {
            panic!("expected <ellipse>");
        };
        assert_eq!(node.rx.as_deref(), Some("3"));
        assert_eq!(node.ry.as_deref(), Some("4"));
    }
}
