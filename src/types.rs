//! Geometry primitives in output pixel units.
//!
//! All layout happens in SVG user units (pixels, origin top-left, Y down).
//! Cartesian data values only become pixels through an axis transform.

use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject anything that is not a finite, strictly positive number.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Image or box size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Create a size with validation (both sides finite and positive)
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Size {
            width: check_positive(width)?,
            height: check_positive(height)?,
        })
    }
}

/// Axis-aligned rectangle in SVG coordinates (`top < bottom`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Bounds { left, top, right, bottom }
    }

    /// Rectangle covering a whole image
    pub const fn from_size(size: Size) -> Self {
        Bounds::new(0.0, 0.0, size.width, size.height)
    }

    /// Rectangle from top-left corner and size
    pub fn from_origin(origin: DVec2, size: Size) -> Self {
        Bounds::new(origin.x, origin.y, origin.x + size.width, origin.y + size.height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Shrink every edge inwards by `amount`
    pub fn inset(self, amount: f64) -> Self {
        Bounds {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
        }
    }

    /// True when both width and height are strictly positive
    pub fn is_positive(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn top_left(&self) -> DVec2 {
        dvec2(self.left, self.top)
    }

    pub fn center(&self) -> DVec2 {
        dvec2(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Whether a point lies inside or on the edge
    pub fn contains_point(&self, p: DVec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether `other` lies completely inside this rectangle
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert_eq!(check_finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(check_finite(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_finite(f64::NEG_INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_finite(-3.5), Ok(-3.5));
    }

    #[test]
    fn check_positive_rejects_zero_and_negative() {
        assert_eq!(check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(check_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(check_positive(2.0), Ok(2.0));
    }

    #[test]
    fn size_try_new() {
        assert!(Size::try_new(500.0, 200.0).is_ok());
        assert_eq!(Size::try_new(0.0, 200.0), Err(NumericError::Zero));
        assert_eq!(Size::try_new(500.0, f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn bounds_width_height() {
        let b = Bounds::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 50.0);
        assert_eq!(b.center(), dvec2(60.0, 45.0));
    }

    #[test]
    fn bounds_inset() {
        let b = Bounds::from_size(Size::new(100.0, 50.0)).inset(5.0);
        assert_eq!(b, Bounds::new(5.0, 5.0, 95.0, 45.0));
        assert!(b.is_positive());
        assert!(!Bounds::from_size(Size::new(8.0, 8.0)).inset(5.0).is_positive());
    }

    #[test]
    fn bounds_containment() {
        let outer = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Bounds::new(10.0, 10.0, 90.0, 90.0)));
        assert!(!outer.contains(&Bounds::new(10.0, 10.0, 101.0, 90.0)));
        assert!(outer.contains_point(dvec2(100.0, 0.0)));
        assert!(!outer.contains_point(dvec2(-0.1, 50.0)));
    }
}
