//! `<path>` with its drawing commands.

use glam::DVec2;

use super::{Paint, SvgNode, ToSvgNode, dom, fmt_num};
use crate::style::SvgStyle;

/// One path command, absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M`
    MoveTo(DVec2),
    /// `L`
    LineTo(DVec2),
    /// `H`
    Horizontal(f64),
    /// `V`
    Vertical(f64),
    /// `Q`
    Quadratic { ctrl: DVec2, to: DVec2 },
    /// `T`
    SmoothQuadratic(DVec2),
    /// `C`
    Cubic { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
    /// `S`
    SmoothCubic { ctrl2: DVec2, to: DVec2 },
    /// `A`
    Arc {
        radii: DVec2,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    /// `Z`
    Close,
}

impl PathCommand {
    fn write(&self, out: &mut String, p: usize) {
        let pt = |v: DVec2| format!("{},{}", fmt_num(v.x, p), fmt_num(v.y, p));
        let s = match *self {
            PathCommand::MoveTo(to) => format!("M{}", pt(to)),
            PathCommand::LineTo(to) => format!("L{}", pt(to)),
            PathCommand::Horizontal(x) => format!("H{}", fmt_num(x, p)),
            PathCommand::Vertical(y) => format!("V{}", fmt_num(y, p)),
            PathCommand::Quadratic { ctrl, to } => format!("Q{} {}", pt(ctrl), pt(to)),
            PathCommand::SmoothQuadratic(to) => format!("T{}", pt(to)),
            PathCommand::Cubic { ctrl1, ctrl2, to } => {
                format!("C{} {} {}", pt(ctrl1), pt(ctrl2), pt(to))
            }
            PathCommand::SmoothCubic { ctrl2, to } => format!("S{} {}", pt(ctrl2), pt(to)),
            PathCommand::Arc {
                radii,
                rotation,
                large_arc,
                sweep,
                to,
            } => format!(
                "A{} {} {} {} {}",
                pt(radii),
                fmt_num(rotation, p),
                u8::from(large_arc),
                u8::from(sweep),
                pt(to)
            ),
            PathCommand::Close => "Z".to_string(),
        };
        out.push_str(&s);
    }
}

/// `<path>`
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub style: SvgStyle,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }

    pub fn move_to(mut self, to: DVec2) -> Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(mut self, to: DVec2) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) -> Self {
        self.commands.push(PathCommand::Cubic { ctrl1, ctrl2, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Smooth curve through `points` (Catmull-Rom converted to cubic Béziers).
    pub fn smooth_through(points: &[DVec2]) -> Self {
        let mut path = Path::new();
        let Some(&first) = points.first() else {
            return path;
        };
        path.push(PathCommand::MoveTo(first));

        for i in 0..points.len().saturating_sub(1) {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points.get(i + 2).copied().unwrap_or(p2);
            path.push(PathCommand::Cubic {
                ctrl1: p1 + (p2 - p0) / 6.0,
                ctrl2: p2 - (p3 - p1) / 6.0,
                to: p2,
            });
        }
        path
    }

    pub fn data(&self, precision: usize) -> String {
        let mut d = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            cmd.write(&mut d, precision);
        }
        d
    }
}

impl ToSvgNode for Path {
    fn to_node(&self, p: usize) -> SvgNode {
        let Paint {
            stroke,
            fill,
            stroke_width,
        } = self.style.paint(p);
        SvgNode::Path(dom::Path {
            d: Some(self.data(p)),
            stroke,
            fill,
            stroke_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn all_commands_serialize() {
        let mut path = Path::new().move_to(dvec2(0.0, 0.0)).line_to(dvec2(10.0, 0.0));
        path.push(PathCommand::Horizontal(12.5));
        path.push(PathCommand::Vertical(3.0));
        path.push(PathCommand::Quadratic {
            ctrl: dvec2(1.0, 1.0),
            to: dvec2(2.0, 2.0),
        });
        path.push(PathCommand::SmoothQuadratic(dvec2(3.0, 3.0)));
        path.push(PathCommand::SmoothCubic {
            ctrl2: dvec2(4.0, 4.0),
            to: dvec2(5.0, 5.0),
        });
        path.push(PathCommand::Arc {
            radii: dvec2(2.0, 2.0),
            rotation: 0.0,
            large_arc: true,
            sweep: false,
            to: dvec2(6.0, 6.0),
        });
        let path = path.close();
        assert_eq!(
            path.data(3),
            "M0,0 L10,0 H12.5 V3 Q1,1 2,2 T3,3 S4,4 5,5 A2,2 0 1 0 6,6 Z"
        );
    }

    #[test]
    fn smooth_curve_passes_through_points() {
        let pts = [dvec2(0.0, 0.0), dvec2(10.0, 5.0), dvec2(20.0, 0.0)];
        let path = Path::smooth_through(&pts);
        assert_eq!(path.commands.len(), 3);
        assert_eq!(path.commands[0], PathCommand::MoveTo(pts[0]));
        assert!(matches!(path.commands[2], PathCommand::Cubic { to, .. } if to == pts[2]));
    }

    #[test]
    fn smooth_curve_of_nothing_is_empty() {
        assert!(Path::smooth_through(&[]).commands.is_empty());
    }
}
