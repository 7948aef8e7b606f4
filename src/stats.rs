//! Small statistics needed for labels and boxplots: confidence intervals
//! and sample quantiles.

use std::f64::consts::{FRAC_PI_2, PI};

/// Distribution assumed when turning a standard deviation into an interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Distribution {
    Gaussian,
    /// Student's t with the value's degrees of freedom (Gaussian when unknown)
    #[default]
    StudentT,
    Uniform,
    Triangular,
}

/// Two-sided interval `(lo, hi)` around `value` at significance `alpha`.
pub fn confidence_interval(
    value: f64,
    std_dev: f64,
    df: Option<u32>,
    alpha: f64,
    distribution: Distribution,
) -> (f64, f64) {
    let alpha = alpha.clamp(1e-12, 1.0 - 1e-12);
    let half_width = match distribution {
        Distribution::Gaussian => normal_quantile(1.0 - alpha / 2.0) * std_dev,
        Distribution::StudentT => match df {
            Some(n) if n > 0 => student_t_quantile(alpha, n) * std_dev,
            _ => normal_quantile(1.0 - alpha / 2.0) * std_dev,
        },
        Distribution::Uniform => 3f64.sqrt() * std_dev * (1.0 - alpha),
        Distribution::Triangular => 6f64.sqrt() * std_dev * (1.0 - alpha.sqrt()),
    };
    (value - half_width, value + half_width)
}

/// Inverse of the standard normal CDF (Acklam's rational approximation,
/// relative error below 1.2e-9).
pub fn normal_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// Critical value `t` with `P(|T| > t) = p` for Student's t on `n` degrees
/// of freedom (Hill, CACM algorithm 396).
pub fn student_t_quantile(p: f64, n: u32) -> f64 {
    let nf = n as f64;
    if n == 1 {
        let a = p * FRAC_PI_2;
        return a.cos() / a.sin();
    }
    if n == 2 {
        return (2.0 / (p * (2.0 - p)) - 2.0).sqrt();
    }

    let a = 1.0 / (nf - 0.5);
    let b = 48.0 / (a * a);
    let mut c = ((20700.0 * a / b - 98.0) * a - 16.0) * a + 96.36;
    let d = ((94.5 / (b + c) - 3.0) / b + 1.0) * (a * PI / 2.0).sqrt() * nf;
    let x = d * p;
    let mut y = x.powf(2.0 / nf);

    if y > 0.05 + a {
        let x = normal_quantile(p * 0.5);
        y = x * x;
        if n < 5 {
            c += 0.3 * (nf - 4.5) * (x + 0.6);
        }
        c = (((0.05 * d * x - 5.0) * x - 7.0) * x - 2.0) * x + b + c;
        y = (((((0.4 * y + 6.3) * y + 36.0) * y + 94.5) / c - y - 3.0) / b + 1.0) * x;
        y = a * y * y;
        y = if y > 0.002 { y.exp() - 1.0 } else { 0.5 * y * y + y };
    } else {
        y = ((1.0 / (((nf + 6.0) / (nf * y) - 0.089 * d - 0.822) * (nf + 2.0) * 3.0)
            + 0.5 / (nf + 4.0))
            * y
            - 1.0)
            * (nf + 1.0)
            / (nf + 2.0)
            + 1.0 / y;
    }

    (nf * y).sqrt()
}

/// Sample quantile definitions of Hyndman and Fan (1996).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuantileDefinition {
    /// Piecewise linear, `p(k) = (k - 0.5) / n`
    Type5,
    /// `p(k) = k / (n + 1)` (Minitab, SPSS)
    Type6,
    /// `p(k) = (k - 1) / (n - 1)` (spreadsheets, R default)
    Type7,
    /// Median-unbiased, `p(k) = (k - 1/3) / (n + 1/3)`
    #[default]
    Type8,
    /// Approximately unbiased for normal data, `p(k) = (k - 3/8) / (n + 1/4)`
    Type9,
}

impl QuantileDefinition {
    /// 1-based fractional rank of quantile `p` in a sample of `n`
    fn rank(self, n: f64, p: f64) -> f64 {
        match self {
            QuantileDefinition::Type5 => n * p + 0.5,
            QuantileDefinition::Type6 => (n + 1.0) * p,
            QuantileDefinition::Type7 => (n - 1.0) * p + 1.0,
            QuantileDefinition::Type8 => (n + 1.0 / 3.0) * p + 1.0 / 3.0,
            QuantileDefinition::Type9 => (n + 0.25) * p + 0.375,
        }
    }
}

/// Quantile `p` of already sorted data. `None` for empty input.
pub fn quantile(sorted: &[f64], p: f64, definition: QuantileDefinition) -> Option<f64> {
    let (first, last) = (*sorted.first()?, *sorted.last()?);
    let n = sorted.len() as f64;
    let h = definition.rank(n, p.clamp(0.0, 1.0));

    if h <= 1.0 {
        return Some(first);
    }
    if h >= n {
        return Some(last);
    }

    let lo = h.floor();
    let frac = h - lo;
    let i = lo as usize - 1;
    Some(sorted[i] + frac * (sorted[i + 1] - sorted[i]))
}

/// Arithmetic mean, `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn normal_quantile_known_values() {
        assert!(close(normal_quantile(0.5), 0.0, 1e-9));
        assert!(close(normal_quantile(0.975), 1.959964, 1e-5));
        assert!(close(normal_quantile(0.025), -1.959964, 1e-5));
        assert!(close(normal_quantile(0.001), -3.090232, 1e-5));
        assert_eq!(normal_quantile(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn student_t_exact_small_df() {
        assert!(close(student_t_quantile(0.05, 1), 12.7062, 1e-3));
        assert!(close(student_t_quantile(0.05, 2), 4.3027, 1e-3));
    }

    #[test]
    fn student_t_approaches_normal() {
        assert!(close(student_t_quantile(0.05, 10), 2.2281, 1e-2));
        assert!(close(student_t_quantile(0.05, 30), 2.0423, 1e-2));
        assert!(close(student_t_quantile(0.05, 10_000), 1.96, 1e-2));
    }

    #[test]
    fn interval_is_symmetric_around_value() {
        let (lo, hi) = confidence_interval(10.0, 1.0, None, 0.05, Distribution::Gaussian);
        assert!(close(10.0 - lo, hi - 10.0, 1e-12));
        assert!(close(hi, 11.959964, 1e-4));
    }

    #[test]
    fn student_t_widens_interval_for_few_df() {
        let (_, hi_t) = confidence_interval(0.0, 1.0, Some(3), 0.05, Distribution::StudentT);
        let (_, hi_n) = confidence_interval(0.0, 1.0, Some(3), 0.05, Distribution::Gaussian);
        assert!(hi_t > hi_n);
        let (_, hi_fallback) = confidence_interval(0.0, 1.0, None, 0.05, Distribution::StudentT);
        assert!(close(hi_fallback, hi_n, 1e-12));
    }

    #[test]
    fn bounded_distributions() {
        let (_, hi) = confidence_interval(0.0, 1.0, None, 0.05, Distribution::Uniform);
        assert!(close(hi, 3f64.sqrt() * 0.95, 1e-12));
        let (_, hi) = confidence_interval(0.0, 1.0, None, 0.05, Distribution::Triangular);
        assert!(hi < 6f64.sqrt());
    }

    #[test]
    fn quartiles_type7_match_spreadsheets() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&data, 0.25, QuantileDefinition::Type7), Some(2.0));
        assert_eq!(quantile(&data, 0.5, QuantileDefinition::Type7), Some(3.0));
        assert_eq!(quantile(&data, 0.75, QuantileDefinition::Type7), Some(4.0));
    }

    #[test]
    fn quartiles_type6() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        // h = 8 * 0.25 = 2
        assert_eq!(quantile(&data, 0.25, QuantileDefinition::Type6), Some(2.0));
        assert_eq!(quantile(&data, 0.75, QuantileDefinition::Type6), Some(6.0));
    }

    #[test]
    fn median_is_definition_independent_for_odd_n() {
        let data = [3.0, 5.0, 9.0];
        for def in [
            QuantileDefinition::Type5,
            QuantileDefinition::Type6,
            QuantileDefinition::Type7,
            QuantileDefinition::Type8,
            QuantileDefinition::Type9,
        ] {
            let median = quantile(&data, 0.5, def).unwrap_or(f64::NAN);
            assert!(close(median, 5.0, 1e-12), "{def:?}: {median}");
        }
    }

    #[test]
    fn quantile_edges() {
        assert_eq!(quantile(&[], 0.5, QuantileDefinition::Type8), None);
        assert_eq!(quantile(&[4.0], 0.25, QuantileDefinition::Type8), Some(4.0));
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }
}
