//! Closed intervals of real numbers and the bound arithmetic used by the
//! quantity operators
//!
//! Addition and subtraction are exact interval arithmetic. Multiplication,
//! division and squaring pair the bounds directly (min with min, max with
//! max) rather than taking the extremes of every combination. That is exact
//! for ranges that stay on one side of zero, and an approximation for ranges
//! that straddle it.

use std::ops;

/// The sign of the values an interval covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `min >= 0`
    NonNegative,
    /// `max <= 0` and `min < 0`
    NonPositive,
    /// `min < 0 < max`
    Straddling,
}

/// A closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates a new interval
    ///
    /// # Panics
    ///
    /// Panics if either bound is NaN or if `min > max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        assert!(!min.is_nan(), "min must not be NaN in ({min}, {max})");
        assert!(!max.is_nan(), "max must not be NaN in ({min}, {max})");
        assert!(
            min <= max,
            "min must be less than or equal to max in ({min}, {max})"
        );

        Self { min, max }
    }

    /// Creates an interval from two bounds given in either order
    ///
    /// Returns `None` if either bound is NaN.
    #[must_use]
    pub fn from_unordered(a: f64, b: f64) -> Option<Self> {
        if a.is_nan() || b.is_nan() {
            return None;
        }

        Some(Self {
            min: a.min(b),
            max: a.max(b),
        })
    }

    /// The degenerate interval `[value, value]`
    #[must_use]
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// The lower bound
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// The midpoint of the bounds
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.min, self.max)
    }

    /// Half the distance between the bounds
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Returns `true` if both bounds are finite
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns `true` if the interval covers more than a single value
    #[must_use]
    pub fn has_spread(&self) -> bool {
        self.min < self.max
    }

    /// Returns `true` if either bound is exactly zero
    #[must_use]
    pub fn has_zero_bound(&self) -> bool {
        self.min == 0.0 || self.max == 0.0
    }

    /// Classifies the interval by the sign of the values it covers
    #[must_use]
    pub fn sign(&self) -> Sign {
        if self.min >= 0.0 {
            Sign::NonNegative
        } else if self.max <= 0.0 {
            Sign::NonPositive
        } else {
            Sign::Straddling
        }
    }

    /// Multiplies bound by bound: `[min * rhs.min, max * rhs.max]`
    ///
    /// The result is reordered if the products come out reversed. Returns
    /// `None` if a product is NaN.
    #[must_use]
    pub fn mul_bounds(self, rhs: Self) -> Option<Self> {
        Self::from_unordered(self.min * rhs.min, self.max * rhs.max)
    }

    /// Divides with the divisor bounds swapped: `[min / rhs.max, max / rhs.min]`
    ///
    /// The result is reordered if the quotients come out reversed. Returns
    /// `None` if a quotient is NaN.
    #[must_use]
    pub fn div_bounds(self, rhs: Self) -> Option<Self> {
        Self::from_unordered(self.min / rhs.max, self.max / rhs.min)
    }

    /// Squares each bound
    #[must_use]
    pub fn square_bounds(self) -> Self {
        Self {
            min: self.min * self.min,
            max: self.max * self.max,
        }
        .reordered()
    }

    /// Multiplies both bounds by a scalar
    ///
    /// Returns `None` if the scalar is NaN or a product is NaN.
    #[must_use]
    pub fn scale(self, factor: f64) -> Option<Self> {
        Self::from_unordered(self.min * factor, self.max * factor)
    }

    /// Divides both bounds by a scalar
    ///
    /// Returns `None` if the scalar is NaN or a quotient is NaN.
    #[must_use]
    pub fn scale_down(self, divisor: f64) -> Option<Self> {
        Self::from_unordered(self.min / divisor, self.max / divisor)
    }

    /// Adds a scalar to both bounds
    ///
    /// Returns `None` if the scalar is NaN.
    #[must_use]
    pub fn shift(self, offset: f64) -> Option<Self> {
        Self::from_unordered(self.min + offset, self.max + offset)
    }

    /// Combines two positive ranges like parallel resistors:
    /// `[a.min * b.min / (a.min + b.min), a.max * b.max / (a.max + b.max)]`
    ///
    /// Returns `None` if a bound is NaN.
    #[must_use]
    pub fn parallel(self, rhs: Self) -> Option<Self> {
        let min = self.min * rhs.min / (self.min + rhs.min);
        let max = self.max * rhs.max / (self.max + rhs.max);
        Self::from_unordered(min, max)
    }

    fn reordered(self) -> Self {
        Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        }
    }
}

impl ops::Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min + rhs.min,
            max: self.max + rhs.max,
        }
    }
}

impl ops::Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min - rhs.max,
            max: self.max - rhs.min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_is_close;

    #[test]
    fn add_pairs_like_bounds() {
        let sum = Interval::new(1.0, 2.0) + Interval::new(10.0, 20.0);
        assert_eq!(sum, Interval::new(11.0, 22.0));
    }

    #[test]
    fn sub_swaps_rhs_bounds() {
        let difference = Interval::new(10.0, 20.0) - Interval::new(1.0, 2.0);
        assert_eq!(difference, Interval::new(8.0, 19.0));
    }

    #[test]
    fn from_unordered_sorts_bounds() {
        let interval = Interval::from_unordered(3.0, 2.0).expect("bounds are not NaN");
        assert_eq!(interval, Interval::new(2.0, 3.0));
        assert!(Interval::from_unordered(f64::NAN, 1.0).is_none());
    }

    #[test]
    fn mul_bounds_on_positive_ranges() {
        let product = Interval::new(2.0, 3.0)
            .mul_bounds(Interval::new(4.0, 5.0))
            .expect("product is finite");
        assert_eq!(product, Interval::new(8.0, 15.0));
    }

    #[test]
    fn mul_bounds_reorders_negative_results() {
        // [-11, -9] * [1, 2] pairs to (-11, -18)
        let product = Interval::new(-11.0, -9.0)
            .mul_bounds(Interval::new(1.0, 2.0))
            .expect("product is finite");
        assert_eq!(product, Interval::new(-18.0, -11.0));
    }

    #[test]
    fn div_bounds_swaps_divisor() {
        let quotient = Interval::new(10.0, 20.0)
            .div_bounds(Interval::new(2.0, 5.0))
            .expect("quotient is finite");
        assert_eq!(quotient, Interval::new(2.0, 10.0));
    }

    #[test]
    fn square_bounds_of_straddling_range_is_approximate() {
        // the true square of [-2, 1] is [0, 4]
        let squared = Interval::new(-2.0, 1.0).square_bounds();
        assert_eq!(squared, Interval::new(1.0, 4.0));
    }

    #[test]
    fn parallel_of_equal_ranges_halves() {
        let combined = Interval::new(100.0, 200.0)
            .parallel(Interval::new(100.0, 200.0))
            .expect("bounds are positive");
        assert_is_close!(50.0, combined.min());
        assert_is_close!(100.0, combined.max());
    }

    #[test]
    fn scale_by_negative_reorders() {
        let scaled = Interval::new(1.0, 2.0).scale(-2.0).expect("scalar is a number");
        assert_eq!(scaled, Interval::new(-4.0, -2.0));
        assert!(Interval::new(1.0, 2.0).scale(f64::NAN).is_none());
    }

    #[test]
    fn sign_classification() {
        assert_eq!(Interval::new(0.0, 1.0).sign(), Sign::NonNegative);
        assert_eq!(Interval::new(-1.0, 0.0).sign(), Sign::NonPositive);
        assert_eq!(Interval::new(-1.0, 1.0).sign(), Sign::Straddling);
        assert!(Interval::new(0.0, 1.0).has_zero_bound());
        assert!(Interval::new(-1.0, 0.0).has_zero_bound());
        assert!(!Interval::new(-1.0, 1.0).has_zero_bound());
    }

    #[test]
    fn midpoint_and_half_width() {
        let interval = Interval::new(11.4, 12.6);
        assert_is_close!(12.0, interval.midpoint());
        assert_is_close!(0.6, interval.half_width());
        assert!(interval.has_spread());
        assert!(!Interval::point(3.0).has_spread());
    }
}
