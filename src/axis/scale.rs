//! Autoscaling: nice ranges and tick intervals from data.

use crate::data::{Uncertain, scaling_values};
use crate::defaults;
use crate::errors::{PlotError, PlotResult};

use super::range_threshold;

/// Which decimal steps a tick interval may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepFamily {
    /// 1, 2, 5, 10, 20, 50...
    #[default]
    Any,
    /// 1, 2, 10, 20...
    Base2,
    /// 1, 5, 10, 50...
    Base5,
    /// Powers of ten only
    Base10,
}

impl StepFamily {
    fn mantissas(self) -> &'static [f64] {
        match self {
            StepFamily::Any => &[1.0, 2.0, 5.0],
            StepFamily::Base2 => &[1.0, 2.0],
            StepFamily::Base5 => &[1.0, 5.0],
            StepFamily::Base10 => &[1.0],
        }
    }

    /// Steps of this family from the first one at least `span`, decreasing
    fn descending_from(self, span: f64) -> impl Iterator<Item = f64> {
        let mantissas = self.mantissas();
        let mut exponent = span.log10().ceil() as i32;
        let mut index = 0usize;
        std::iter::from_fn(move || {
            // dividing keeps 0.2, 0.05... nearest to their decimal value
            let step = if exponent < 0 {
                mantissas[index] / 10f64.powi(-exponent)
            } else {
                mantissas[index] * 10f64.powi(exponent)
            };
            if index == 0 {
                exponent -= 1;
                index = mantissas.len() - 1;
            } else {
                index -= 1;
            }
            Some(step)
        })
    }
}

/// Settings for [`scale_axis`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoscaleConfig {
    /// Skip NaN and infinite values instead of failing on them
    pub check_limits: bool,
    /// Widen each uncertain value by this many standard deviations
    pub uncertainty_multiplier: f64,
    pub include_zero: bool,
    pub min_ticks: u32,
    /// Fraction of an interval data may reach past the last tick before
    /// another tick is added. The axis itself still ends at the data.
    pub outside_tolerance: f64,
    pub steps: StepFamily,
}

impl Default for AutoscaleConfig {
    fn default() -> Self {
        Self {
            check_limits: true,
            uncertainty_multiplier: defaults::UNCERTAINTY_MULTIPLIER,
            include_zero: false,
            min_ticks: defaults::MIN_TICKS,
            outside_tolerance: defaults::OUTSIDE_TOLERANCE,
            steps: StepFamily::Any,
        }
    }
}

impl AutoscaleConfig {
    pub fn check_limits(mut self, check: bool) -> Self {
        self.check_limits = check;
        self
    }

    pub fn uncertainty_multiplier(mut self, k: f64) -> Self {
        self.uncertainty_multiplier = k;
        self
    }

    pub fn include_zero(mut self, include: bool) -> Self {
        self.include_zero = include;
        self
    }

    pub fn min_ticks(mut self, n: u32) -> Self {
        self.min_ticks = n;
        self
    }

    pub fn outside_tolerance(mut self, tolerance: f64) -> Self {
        self.outside_tolerance = tolerance;
        self
    }

    pub fn steps(mut self, steps: StepFamily) -> Self {
        self.steps = steps;
        self
    }
}

/// Result of autoscaling one axis.
///
/// `min` and `max` always cover the data. They sit on a tick unless the
/// data reaches past the outermost tick by no more than the tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub interval: f64,
    pub tick_count: u32,
}

/// Autoscale from data values.
pub fn scale_axis(data: &[Uncertain], config: &AutoscaleConfig) -> PlotResult<AxisScale> {
    let (min, max) = if config.check_limits {
        scaling_values(data, config.uncertainty_multiplier)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or(PlotError::NoFiniteValues)?
    } else {
        let mut bounds: Option<(f64, f64)> = None;
        for u in data {
            if !u.value.is_finite() {
                return Err(PlotError::NonFiniteLimit { value: u.value });
            }
            let (lo, hi) = u.spread(config.uncertainty_multiplier);
            bounds = Some(match bounds {
                None => (lo, hi),
                Some((a, b)) => (a.min(lo), b.max(hi)),
            });
        }
        bounds.ok_or(PlotError::NoFiniteValues)?
    };

    scale_axis_range(min, max, config)
}

/// Autoscale from a raw `[min, max]`: widen to nice tick boundaries.
pub fn scale_axis_range(min: f64, max: f64, config: &AutoscaleConfig) -> PlotResult<AxisScale> {
    for value in [min, max] {
        if !value.is_finite() {
            return Err(PlotError::NonFiniteLimit { value });
        }
    }
    if max < min {
        return Err(PlotError::InvertedRange { min, max });
    }

    let (min, max) = if config.include_zero {
        (min.min(0.0), max.max(0.0))
    } else {
        (min, max)
    };

    let threshold = range_threshold(min, max);
    let span = max - min;
    if span < threshold || span == 0.0 {
        return Err(PlotError::DegenerateRange { min, max, threshold });
    }

    let wanted = config.min_ticks.max(2);
    let tolerance = config.outside_tolerance.clamp(0.0, 0.5);
    let mut best = None;

    for interval in config.steps.descending_from(span).take(64) {
        let lo = (min / interval + tolerance).floor();
        let hi = (max / interval - tolerance).ceil();
        let (lo, hi) = if hi > lo { (lo, hi) } else { (lo, lo + 1.0) };
        let tick_count = (hi - lo) as u32 + 1;

        let candidate = AxisScale {
            min: (lo * interval).min(min),
            max: (hi * interval).max(max),
            interval,
            tick_count,
        };
        best = Some(candidate);
        if tick_count >= wanted {
            break;
        }
    }

    let scale = best.ok_or(PlotError::DegenerateRange { min, max, threshold })?;
    crate::log::debug!(
        data_min = min,
        data_max = max,
        axis_min = scale.min,
        axis_max = scale.max,
        interval = scale.interval,
        ticks = scale.tick_count,
        "autoscaled axis"
    );
    Ok(scale)
}

/// Largest interval of the family giving at least `min_ticks` ticks inside
/// a fixed `[min, max]`.
pub fn nice_interval(min: f64, max: f64, min_ticks: u32, steps: StepFamily) -> f64 {
    let span = max - min;
    let wanted = i64::from(min_ticks.max(2));
    let mut chosen = span;
    for interval in steps.descending_from(span).take(64) {
        chosen = interval;
        let first = (min / interval - 1e-9).ceil() as i64;
        let last = (max / interval + 1e-9).floor() as i64;
        if last - first + 1 >= wanted {
            break;
        }
    }
    chosen
}
