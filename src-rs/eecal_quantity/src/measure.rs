use crate::{error::QuantityError, interval::Interval};

/// The relative spread of a measure around its mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// A fraction of the mean, so `0.05` is ±5%
    Relative(f64),
    /// The bounds cannot be described as a symmetric percentage of the mean
    ///
    /// This happens when the mean is zero but the range is not, when the
    /// spread exceeds 100%, or when a nonzero range collapses to a single
    /// value.
    Undefined,
}

impl Tolerance {
    /// Returns the relative tolerance, if it is defined
    #[must_use]
    pub const fn relative(self) -> Option<f64> {
        match self {
            Self::Relative(tolerance) => Some(tolerance),
            Self::Undefined => None,
        }
    }
}

/// Recovers a mean and a symmetric relative tolerance from a pair of bounds.
///
/// The bounds may be given in either order. See [`Tolerance::Undefined`] for
/// the cases where no relative tolerance exists; the mean is still the
/// midpoint of the bounds in those cases.
///
/// ```
/// use eecal_quantity::{Interval, Tolerance, mean_and_tolerance};
///
/// let (mean, tolerance) = mean_and_tolerance(Interval::new(2.0, 3.0));
/// assert_eq!(mean, 2.5);
/// assert_eq!(tolerance, Tolerance::Relative(0.2));
///
/// let (mean, tolerance) = mean_and_tolerance(Interval::new(-1.0, 1.0));
/// assert_eq!(mean, 0.0);
/// assert_eq!(tolerance, Tolerance::Undefined);
/// ```
#[must_use]
#[expect(
    clippy::float_cmp,
    reason = "the degenerate cases are defined by exact equality of the bounds"
)]
pub fn mean_and_tolerance(bounds: Interval) -> (f64, Tolerance) {
    let (low, high) = (bounds.min(), bounds.max());

    if low == 0.0 && high == 0.0 {
        return (0.0, Tolerance::Relative(0.0));
    }

    if low == -high {
        return (0.0, Tolerance::Undefined);
    }

    let mean = bounds.midpoint();

    if low == high {
        return (mean, Tolerance::Undefined);
    }

    let tolerance = ((high - mean) / mean).abs();
    if tolerance > 1.0 {
        return (mean, Tolerance::Undefined);
    }

    (mean, Tolerance::Relative(tolerance))
}

/// The numeric part of a quantity: a mean, its tolerance, and the bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    mean: f64,
    tolerance: Tolerance,
    bounds: Interval,
}

impl Measure {
    /// Creates a measure from a nominal value and a relative tolerance
    ///
    /// The bounds are `mean * (1 - tolerance)` and `mean * (1 + tolerance)`,
    /// ordered so that negative means work as expected.
    ///
    /// # Errors
    ///
    /// Returns an error if `mean` is not finite or if `tolerance` is
    /// negative or NaN.
    pub fn new(mean: f64, tolerance: f64) -> Result<Self, QuantityError> {
        if !mean.is_finite() {
            return Err(QuantityError::InvalidValue { value: mean });
        }

        if tolerance.is_nan() || tolerance < 0.0 || tolerance.is_infinite() {
            return Err(QuantityError::InvalidTolerance { tolerance });
        }

        let low = mean * (1.0 - tolerance);
        let high = mean * (1.0 + tolerance);

        Ok(Self {
            mean,
            tolerance: Tolerance::Relative(tolerance),
            bounds: Interval::new(low.min(high), low.max(high)),
        })
    }

    /// Creates a measure from its bounds
    ///
    /// The mean and tolerance are recovered with [`mean_and_tolerance`]. The
    /// bounds are stored exactly as given, so `min` and `max` always match
    /// the input.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite.
    pub fn from_bounds(bounds: Interval) -> Result<Self, QuantityError> {
        for value in [bounds.min(), bounds.max()] {
            if !value.is_finite() {
                return Err(QuantityError::InvalidValue { value });
            }
        }

        let (mean, tolerance) = mean_and_tolerance(bounds);

        Ok(Self {
            mean,
            tolerance,
            bounds,
        })
    }

    /// Returns the same measure with a different relative tolerance
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or NaN.
    pub fn with_tolerance(&self, tolerance: f64) -> Result<Self, QuantityError> {
        Self::new(self.mean, tolerance)
    }

    /// Moves the measure to a new mean
    ///
    /// A relative tolerance is kept as is. Bounds without a relative
    /// tolerance are scaled by the same ratio as the mean.
    pub(crate) fn rescaled_to(&self, mean: f64) -> Result<Self, QuantityError> {
        match self.tolerance {
            Tolerance::Relative(tolerance) => Self::new(mean, tolerance),
            Tolerance::Undefined => {
                let ratio = mean / self.mean;
                let bounds = self
                    .bounds
                    .scale(ratio)
                    .ok_or(QuantityError::InvalidValue { value: ratio })?;
                Ok(Self {
                    mean,
                    tolerance: Tolerance::Undefined,
                    bounds,
                })
            }
        }
    }

    /// The nominal value
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// The relative tolerance
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// The absolute bounds
    #[must_use]
    pub const fn bounds(&self) -> Interval {
        self.bounds
    }

    /// The lower bound
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.bounds.min()
    }

    /// The upper bound
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.bounds.max()
    }
}
