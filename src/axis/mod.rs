//! Axis ranges, autoscaling and tick placement.

mod scale;
mod ticks;

pub use scale::{AutoscaleConfig, AxisScale, StepFamily, nice_interval, scale_axis, scale_axis_range};
pub use ticks::{TickLabelPlacement, TickStyle, format_tick_labels};

use crate::defaults;
use crate::errors::{PlotError, PlotResult};

/// Smallest span accepted between `min` and `max`.
pub fn range_threshold(min: f64, max: f64) -> f64 {
    defaults::RANGE_EPSILON * min.abs().max(max.abs()).max(1.0)
}

/// A validated `[min, max]` data interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Fails unless both limits are finite, `max > min`, and the span exceeds
    /// [`range_threshold`]. Stores exactly the given bounds otherwise.
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        for value in [min, max] {
            if !value.is_finite() {
                return Err(PlotError::NonFiniteLimit { value });
            }
        }
        if max < min {
            return Err(PlotError::InvertedRange { min, max });
        }
        let threshold = range_threshold(min, max);
        if max - min < threshold || max == min {
            return Err(PlotError::DegenerateRange { min, max, threshold });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive containment with a little slack for rounding
    pub fn contains(&self, v: f64) -> bool {
        let slack = self.span() * 1e-9;
        v >= self.min - slack && v <= self.max + slack
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Where the orthogonal axis line crosses this axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisCross {
    /// At zero when zero is in range, else at the nearer end
    #[default]
    Zero,
    /// At the minimum
    Low,
    /// At the maximum
    High,
}

impl AxisCross {
    /// Data value at which the crossing axis line is drawn
    pub fn value(self, range: &AxisRange) -> f64 {
        match self {
            AxisCross::Zero => range.clamp(0.0),
            AxisCross::Low => range.min(),
            AxisCross::High => range.max(),
        }
    }
}

/// A resolved axis: range, major tick interval and minor subdivision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub range: AxisRange,
    pub major_interval: f64,
    /// Minor ticks between two majors
    pub minor_count: u32,
    pub cross: AxisCross,
}

impl Axis {
    pub fn new(range: AxisRange, major_interval: f64) -> PlotResult<Self> {
        let too_many = range.span() / major_interval > defaults::MAX_TICKS as f64;
        if !major_interval.is_finite() || major_interval <= 0.0 || too_many {
            return Err(PlotError::InvalidTickInterval {
                interval: major_interval,
                min: range.min(),
                max: range.max(),
                max_ticks: defaults::MAX_TICKS,
            });
        }
        Ok(Self {
            range,
            major_interval,
            minor_count: defaults::MINOR_TICKS_PER_MAJOR,
            cross: AxisCross::default(),
        })
    }

    /// Axis over an explicit range with a nice interval chosen for it
    pub fn fitted(range: AxisRange, config: &AutoscaleConfig) -> PlotResult<Self> {
        let interval = nice_interval(range.min(), range.max(), config.min_ticks, config.steps);
        Axis::new(range, interval)
    }

    pub fn from_scale(scale: &AxisScale) -> PlotResult<Self> {
        Axis::new(AxisRange::new(scale.min, scale.max)?, scale.interval)
    }

    pub fn minor_count(mut self, count: u32) -> Self {
        self.minor_count = count;
        self
    }

    pub fn cross(mut self, cross: AxisCross) -> Self {
        self.cross = cross;
        self
    }

    /// Major tick values inside the range, as exact multiples of the interval
    pub fn major_ticks(&self) -> Vec<f64> {
        multiples_in(self.range, self.major_interval)
    }

    /// Minor tick values inside the range, excluding major positions
    pub fn minor_ticks(&self) -> Vec<f64> {
        if self.minor_count == 0 {
            return Vec::new();
        }
        let step = self.major_interval / f64::from(self.minor_count + 1);
        let per_major = i64::from(self.minor_count) + 1;
        let first = (self.range.min() / step - 1e-9).ceil() as i64;
        let last = (self.range.max() / step + 1e-9).floor() as i64;
        (first..=last)
            .filter(|k| k.rem_euclid(per_major) != 0)
            .map(|k| k as f64 * step)
            .collect()
    }

    /// Value at which the orthogonal axis line crosses this one
    pub fn cross_value(&self) -> f64 {
        self.cross.value(&self.range)
    }
}

fn multiples_in(range: AxisRange, interval: f64) -> Vec<f64> {
    let first = (range.min() / interval - 1e-9).ceil() as i64;
    let last = (range.max() / interval + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * interval;
            // keep 0 exact so it formats without sign or exponent
            if v.abs() < interval * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_inverted_and_degenerate() {
        assert!(matches!(
            AxisRange::new(2.0, 1.0),
            Err(PlotError::InvertedRange { .. })
        ));
        assert!(matches!(
            AxisRange::new(1.0, 1.0),
            Err(PlotError::DegenerateRange { .. })
        ));
        assert!(matches!(
            AxisRange::new(1.0, 1.0 + 1e-14),
            Err(PlotError::DegenerateRange { .. })
        ));
        assert!(matches!(
            AxisRange::new(f64::NAN, 1.0),
            Err(PlotError::NonFiniteLimit { .. })
        ));
    }

    #[test]
    fn range_stores_exact_bounds() {
        let r = AxisRange::new(-1.0, 11.0).unwrap();
        assert_eq!((r.min(), r.max()), (-1.0, 11.0));
        let tiny = AxisRange::new(1e-9, 2e-9).unwrap();
        assert_eq!(tiny.min(), 1e-9);
    }

    #[test]
    fn major_ticks_are_multiples() {
        let axis = Axis::new(AxisRange::new(-1.0, 11.0).unwrap(), 2.0).unwrap();
        assert_eq!(axis.major_ticks(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn fractional_ticks_snap_zero() {
        let axis = Axis::new(AxisRange::new(-0.3, 0.3).unwrap(), 0.1).unwrap();
        let ticks = axis.major_ticks();
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks[3], 0.0);
    }

    #[test]
    fn minor_ticks_skip_majors() {
        let axis = Axis::new(AxisRange::new(0.0, 2.0).unwrap(), 1.0)
            .unwrap()
            .minor_count(4);
        let minors = axis.minor_ticks();
        assert_eq!(minors.len(), 8);
        assert!(minors.iter().all(|m| (m - m.round()).abs() > 1e-9));
        assert!(axis.minor_count(0).minor_ticks().is_empty());
    }

    #[test]
    fn bad_interval_is_rejected() {
        let r = AxisRange::new(0.0, 10.0).unwrap();
        assert!(Axis::new(r, 0.0).is_err());
        assert!(Axis::new(r, -1.0).is_err());
        assert!(Axis::new(r, 1e-6).is_err());
    }

    #[test]
    fn cross_clamps_zero() {
        let r = AxisRange::new(2.0, 5.0).unwrap();
        assert_eq!(AxisCross::Zero.value(&r), 2.0);
        assert_eq!(AxisCross::High.value(&r), 5.0);
        let r = AxisRange::new(-2.0, 5.0).unwrap();
        assert_eq!(AxisCross::Zero.value(&r), 0.0);
    }
}
