//! Tick marks, grid lines and tick value labels.

use crate::defaults;
use crate::style::{Color, NumberFormat, Rotation, TextStyle, TickDirection};
use crate::text;

/// Where tick value labels are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickLabelPlacement {
    /// No tick values
    None,
    /// Beside the axis line, wherever it crosses the window
    OnAxis,
    /// Along the plot window border; layout reserves room for them
    #[default]
    WindowEdge,
}

/// Appearance of one axis' ticks, tick labels and grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TickStyle {
    pub major_length: f64,
    pub minor_length: f64,
    pub major_width: f64,
    pub minor_width: f64,
    pub direction: TickDirection,
    pub color: Color,
    pub labels: TickLabelPlacement,
    pub label_rotation: Rotation,
    pub format: NumberFormat,
    pub label_text: TextStyle,
    pub major_grid: Option<Color>,
    pub minor_grid: Option<Color>,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            major_length: defaults::MAJOR_TICK_LENGTH,
            minor_length: defaults::MINOR_TICK_LENGTH,
            major_width: defaults::MAJOR_TICK_WIDTH,
            minor_width: defaults::MINOR_TICK_WIDTH,
            direction: TickDirection::default(),
            color: Color::BLACK,
            labels: TickLabelPlacement::default(),
            label_rotation: Rotation::Horizontal,
            format: NumberFormat::default(),
            label_text: TextStyle::new().size(defaults::TICK_LABEL_FONT_SIZE),
            major_grid: None,
            minor_grid: None,
        }
    }
}

impl TickStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: TickDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn lengths(mut self, major: f64, minor: f64) -> Self {
        self.major_length = major;
        self.minor_length = minor;
        self
    }

    pub fn widths(mut self, major: f64, minor: f64) -> Self {
        self.major_width = major;
        self.minor_width = minor;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn labels(mut self, placement: TickLabelPlacement) -> Self {
        self.labels = placement;
        self
    }

    pub fn label_rotation(mut self, rotation: Rotation) -> Self {
        self.label_rotation = rotation;
        self
    }

    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn label_text(mut self, text: TextStyle) -> Self {
        self.label_text = text;
        self
    }

    pub fn major_grid(mut self, color: Color) -> Self {
        self.major_grid = Some(color);
        self
    }

    pub fn minor_grid(mut self, color: Color) -> Self {
        self.minor_grid = Some(color);
        self
    }

    /// How far major ticks stick out of the plot window
    pub fn outside_reach(&self) -> f64 {
        if self.direction.reaches_outside() {
            self.major_length
        } else {
            0.0
        }
    }

    /// Space the labels need across the axis: height under a horizontal
    /// axis, width beside a vertical one.
    pub fn label_extent(&self, labels: &[String], horizontal_axis: bool) -> f64 {
        if labels.is_empty() || self.labels == TickLabelPlacement::None {
            return 0.0;
        }
        let widest = text::max_width(labels.iter().map(String::as_str), &self.label_text);
        let font_size = self.label_text.font_size;
        if horizontal_axis {
            self.label_rotation.vertical_extent(widest, font_size)
        } else {
            self.label_rotation.horizontal_extent(widest, font_size)
        }
    }
}

/// Labels for tick values. Precision is raised until neighbours differ.
pub fn format_tick_labels(ticks: &[f64], format: &NumberFormat) -> Vec<String> {
    let mut fmt = *format;
    loop {
        let labels: Vec<String> = ticks.iter().map(|&t| fmt.format(t)).collect();
        let distinct = labels.windows(2).all(|w| w[0] != w[1]);
        if distinct || fmt.precision >= 15 {
            return labels;
        }
        fmt.precision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_for_simple_ticks() {
        let labels = format_tick_labels(&[0.0, 2.0, 4.0, 10.0], &NumberFormat::default());
        assert_eq!(labels, vec!["0", "2", "4", "10"]);
    }

    #[test]
    fn precision_grows_until_labels_differ() {
        let ticks = [1000.0, 1001.0, 1002.0];
        let labels = format_tick_labels(&ticks, &NumberFormat::default());
        assert_eq!(labels, vec!["1000", "1001", "1002"]);
    }

    #[test]
    fn rotated_labels_take_more_height() {
        let labels: Vec<String> = vec!["12345".into(), "6".into()];
        let flat = TickStyle::new();
        let upright = TickStyle::new().label_rotation(Rotation::Upward);
        assert!(upright.label_extent(&labels, true) > flat.label_extent(&labels, true));
        assert_eq!(
            TickStyle::new().labels(TickLabelPlacement::None).label_extent(&labels, true),
            0.0
        );
    }

    #[test]
    fn inward_ticks_do_not_reach_out() {
        assert_eq!(TickStyle::new().direction(TickDirection::Inward).outside_reach(), 0.0);
        assert_eq!(TickStyle::new().outside_reach(), defaults::MAJOR_TICK_LENGTH);
    }
}
