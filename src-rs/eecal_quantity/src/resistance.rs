use std::{fmt, ops};

use crate::{
    error::{Operation, QuantityError},
    interval::Interval,
    measure::{Measure, Tolerance},
};

/// The temperature at which the reference resistance is defined, in °C
pub const REFERENCE_TEMPERATURE: f64 = 20.0;

/// The temperature a resistance value applies to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    /// A single temperature in °C
    Celsius(f64),
    /// A combination of resistances at different temperatures
    Mixed,
}

impl Temperature {
    /// The temperature of a series or parallel combination
    #[expect(
        clippy::float_cmp,
        reason = "temperatures are labels that match only when set to the same value"
    )]
    const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Celsius(lhs), Self::Celsius(rhs)) if lhs == rhs => self,
            _ => Self::Mixed,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius(temperature) => write!(f, "{temperature}°C"),
            Self::Mixed => write!(f, "mixed temperature"),
        }
    }
}

/// A resistance with an optional linear temperature coefficient
///
/// The reference resistance is the value at [`REFERENCE_TEMPERATURE`]. It is
/// fixed at construction, so shifting a resistance to another temperature
/// always starts from the same base value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistance {
    measure: Measure,
    alpha_ppm: Option<i32>,
    reference: f64,
    temperature: Temperature,
}

impl Resistance {
    /// Creates a resistance at the reference temperature
    ///
    /// `alpha_ppm` is the temperature coefficient in parts per million per
    /// °C.
    ///
    /// # Errors
    ///
    /// Returns an error if `mean` is not greater than zero or if the
    /// tolerance is invalid.
    pub fn new(mean: f64, tolerance: f64, alpha_ppm: Option<i32>) -> Result<Self, QuantityError> {
        let measure = Measure::new(mean, tolerance)?;
        Self::from_measure(
            measure,
            alpha_ppm,
            Temperature::Celsius(REFERENCE_TEMPERATURE),
        )
    }

    /// Creates a resistance at the reference temperature from its bounds
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or if the recovered mean is
    /// not greater than zero.
    pub fn from_bounds(
        low: f64,
        high: f64,
        alpha_ppm: Option<i32>,
    ) -> Result<Self, QuantityError> {
        let bounds = Interval::from_unordered(low, high)
            .ok_or(QuantityError::InvalidValue { value: f64::NAN })?;
        let measure = Measure::from_bounds(bounds)?;
        Self::from_measure(
            measure,
            alpha_ppm,
            Temperature::Celsius(REFERENCE_TEMPERATURE),
        )
    }

    /// Creates a resistance whose reference value is its own mean
    pub(crate) fn from_measure(
        measure: Measure,
        alpha_ppm: Option<i32>,
        temperature: Temperature,
    ) -> Result<Self, QuantityError> {
        if measure.mean() <= 0.0 {
            return Err(QuantityError::InvalidResistance {
                value: measure.mean(),
            });
        }

        Ok(Self {
            measure,
            alpha_ppm,
            reference: measure.mean(),
            temperature,
        })
    }

    /// Returns the resistance at another temperature
    ///
    /// The new value is `R0 * (1 + alpha * (T - 20°C))`, where `R0` is the
    /// reference resistance. The tolerance, coefficient and reference are
    /// carried over. `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no temperature coefficient, or if the
    /// shifted value is not greater than zero.
    pub fn at_temperature(&self, temperature: f64) -> Result<Self, QuantityError> {
        let Some(alpha_ppm) = self.alpha_ppm else {
            tracing::warn!(temperature, "temperature shift without a coefficient");
            return Err(QuantityError::MissingCoefficient);
        };

        if !temperature.is_finite() {
            return Err(QuantityError::InvalidValue { value: temperature });
        }

        let alpha = f64::from(alpha_ppm) * 1e-6;
        let value = self.reference * alpha.mul_add(temperature - REFERENCE_TEMPERATURE, 1.0);

        if value <= 0.0 {
            return Err(QuantityError::InvalidResistance { value });
        }

        let measure = self.measure.rescaled_to(value)?;

        Ok(Self {
            measure,
            alpha_ppm: self.alpha_ppm,
            reference: self.reference,
            temperature: Temperature::Celsius(temperature),
        })
    }

    /// Connects two resistances in series
    ///
    /// The bounds add. The result has no temperature coefficient, and its
    /// temperature is mixed unless both operands share one.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined bounds are not finite.
    pub fn series(&self, rhs: &Self) -> Result<Self, QuantityError> {
        let bounds = self.bounds() + rhs.bounds();
        self.combined(rhs, bounds, Operation::Add)
    }

    /// Connects two resistances in parallel
    ///
    /// Each bound is `a * b / (a + b)` of the corresponding operand bounds.
    /// Temperature handling matches [`Resistance::series`].
    ///
    /// # Errors
    ///
    /// Returns an error if the combined bounds are not finite.
    pub fn parallel(&self, rhs: &Self) -> Result<Self, QuantityError> {
        let bounds = self
            .bounds()
            .parallel(rhs.bounds())
            .ok_or(QuantityError::NonFiniteResult {
                op: Operation::Parallel,
            })?;
        self.combined(rhs, bounds, Operation::Parallel)
    }

    fn combined(
        &self,
        rhs: &Self,
        bounds: Interval,
        op: Operation,
    ) -> Result<Self, QuantityError> {
        if !bounds.is_finite() {
            return Err(QuantityError::NonFiniteResult { op });
        }

        let measure = Measure::from_bounds(bounds)?;
        let temperature = self.temperature.combine(rhs.temperature);
        Self::from_measure(measure, None, temperature)
    }

    /// The worst-case ratio `self / (self + rhs)` of a voltage divider with
    /// `self` as the bottom resistor
    ///
    /// Every combination of the operand bounds is evaluated, and the result
    /// spans the smallest and largest ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the resistances are at different temperatures.
    pub fn divider_ratio(&self, rhs: &Self) -> Result<Measure, QuantityError> {
        if self.temperature != rhs.temperature {
            tracing::warn!(
                lhs = %self.temperature,
                rhs = %rhs.temperature,
                "voltage divider across different temperatures"
            );
            return Err(QuantityError::TemperatureMismatch {
                lhs: self.temperature,
                rhs: rhs.temperature,
            });
        }

        let ratios = [self.min(), self.max()].into_iter().flat_map(|lower| {
            [rhs.min(), rhs.max()]
                .into_iter()
                .map(move |upper| lower / (lower + upper))
        });

        let (low, high) = ratios.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), ratio| {
            (low.min(ratio), high.max(ratio))
        });

        let bounds = Interval::from_unordered(low, high).ok_or(QuantityError::NonFiniteResult {
            op: Operation::VoltageDivider,
        })?;
        Measure::from_bounds(bounds)
    }

    /// Returns the same resistance with a different relative tolerance
    ///
    /// The coefficient, reference and temperature are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or NaN.
    pub fn with_tolerance(&self, tolerance: f64) -> Result<Self, QuantityError> {
        Ok(Self {
            measure: self.measure.with_tolerance(tolerance)?,
            ..*self
        })
    }

    /// The numeric part of the resistance
    #[must_use]
    pub const fn measure(&self) -> &Measure {
        &self.measure
    }

    /// The nominal value in ohms
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.measure.mean()
    }

    /// The relative tolerance
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.measure.tolerance()
    }

    /// The absolute bounds in ohms
    #[must_use]
    pub const fn bounds(&self) -> Interval {
        self.measure.bounds()
    }

    /// The lower bound in ohms
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.measure.min()
    }

    /// The upper bound in ohms
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.measure.max()
    }

    /// The temperature coefficient in ppm/°C
    #[must_use]
    pub const fn alpha_ppm(&self) -> Option<i32> {
        self.alpha_ppm
    }

    /// The value at the reference temperature
    #[must_use]
    pub const fn reference_resistance(&self) -> f64 {
        self.reference
    }

    /// The temperature this value applies to
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }
}

impl ops::BitOr for &Resistance {
    type Output = Result<Resistance, QuantityError>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.parallel(rhs)
    }
}
