//! Data records and their classification into plottable and limit values.

use std::fmt;

/// A value with optional uncertainty and provenance.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Uncertain {
    pub value: f64,
    /// Standard deviation
    pub std_dev: Option<f64>,
    /// Degrees of freedom behind `std_dev`
    pub df: Option<u32>,
    pub id: Option<String>,
    pub timestamp: Option<String>,
    /// Position in an original sequence
    pub order: Option<i64>,
}

impl Uncertain {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn std_dev(mut self, sd: f64) -> Self {
        self.std_dev = Some(sd);
        self
    }

    pub fn df(mut self, df: u32) -> Self {
        self.df = Some(df);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Standard deviation usable for drawing: finite and positive.
    pub fn usable_std_dev(&self) -> Option<f64> {
        self.std_dev.filter(|sd| sd.is_finite() && *sd > 0.0)
    }

    /// `(value - k*sd, value + k*sd)`, or `(value, value)` without uncertainty
    pub fn spread(&self, k: f64) -> (f64, f64) {
        match self.usable_std_dev() {
            Some(sd) => (self.value - k * sd, self.value + k * sd),
            None => (self.value, self.value),
        }
    }
}

impl From<f64> for Uncertain {
    fn from(value: f64) -> Self {
        Uncertain::new(value)
    }
}

/// Where a raw value can be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Normal,
    NaN,
    PlusInfinity,
    MinusInfinity,
}

impl Classification {
    pub fn is_normal(self) -> bool {
        self == Classification::Normal
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Normal => write!(f, "normal"),
            Classification::NaN => write!(f, "NaN"),
            Classification::PlusInfinity => write!(f, "+infinity"),
            Classification::MinusInfinity => write!(f, "-infinity"),
        }
    }
}

pub fn classify(v: f64) -> Classification {
    if v.is_nan() {
        Classification::NaN
    } else if v == f64::INFINITY {
        Classification::PlusInfinity
    } else if v == f64::NEG_INFINITY {
        Classification::MinusInfinity
    } else {
        Classification::Normal
    }
}

/// Anything that can be sorted into the normal or the limit bucket.
pub trait Classify {
    fn is_plottable(&self) -> bool;
}

impl Classify for f64 {
    fn is_plottable(&self) -> bool {
        self.is_finite()
    }
}

impl Classify for Uncertain {
    fn is_plottable(&self) -> bool {
        self.value.is_finite()
    }
}

/// A 2D point is a limit point when either coordinate is.
impl<A: Classify, B: Classify> Classify for (A, B) {
    fn is_plottable(&self) -> bool {
        self.0.is_plottable() && self.1.is_plottable()
    }
}

/// A series split into plottable values and limit values, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition<T> {
    pub normal: Vec<T>,
    pub limits: Vec<T>,
}

impl<T> Partition<T> {
    pub fn len(&self) -> usize {
        self.normal.len() + self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every item lands in exactly one bucket.
pub fn partition<T: Classify + Clone>(items: &[T]) -> Partition<T> {
    let (normal, limits): (Vec<T>, Vec<T>) = items.iter().cloned().partition(Classify::is_plottable);
    Partition { normal, limits }
}

/// Values taking part in autoscaling: finite values, optionally widened by
/// `multiplier` standard deviations.
pub fn scaling_values(items: &[Uncertain], multiplier: f64) -> impl Iterator<Item = f64> + '_ {
    items
        .iter()
        .filter(|u| u.value.is_finite())
        .flat_map(move |u| {
            let (lo, hi) = u.spread(multiplier);
            [lo, hi]
        })
        .filter(|v| v.is_finite())
}
