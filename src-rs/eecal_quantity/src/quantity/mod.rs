//! Quantities and the type-directed operators that combine them

use std::fmt;

use tracing::debug;

use crate::{
    error::{Operation, QuantityError},
    interval::{Interval, Sign},
    kind::Kind,
    measure::{Measure, Tolerance},
    render::{self, RenderOptions},
    resistance::{REFERENCE_TEMPERATURE, Resistance, Temperature},
};

mod outcome;
pub use outcome::{Operand, Outcome};

/// A physical quantity with a worst-case tolerance
///
/// Quantities are immutable; every operator returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// Volts
    Voltage(Measure),
    /// Amperes
    Current(Measure),
    /// Ohms, with a temperature model
    Resistance(Resistance),
    /// Watts
    Power(Measure),
    /// Joules
    Energy(Measure),
    /// Seconds
    Time(Measure),
    /// A dimensionless ratio
    Factor(Measure),
    /// Volts squared
    SqVoltage(Measure),
    /// Amperes squared
    SqCurrent(Measure),
}

impl Quantity {
    /// Creates a quantity from a nominal value and a relative tolerance
    ///
    /// Resistances are created at the reference temperature without a
    /// temperature coefficient; use [`Resistance::new`] to give one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value or tolerance is invalid, or if a
    /// resistance is not greater than zero.
    pub fn new(kind: Kind, mean: f64, tolerance: f64) -> Result<Self, QuantityError> {
        let measure = Measure::new(mean, tolerance)?;
        Self::build(kind, measure, Temperature::Celsius(REFERENCE_TEMPERATURE))
    }

    /// Creates a quantity from its bounds, given in either order
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, or if a resistance is not
    /// greater than zero.
    pub fn from_bounds(kind: Kind, low: f64, high: f64) -> Result<Self, QuantityError> {
        let bounds = Interval::from_unordered(low, high)
            .ok_or(QuantityError::InvalidValue { value: f64::NAN })?;
        let measure = Measure::from_bounds(bounds)?;
        Self::build(kind, measure, Temperature::Celsius(REFERENCE_TEMPERATURE))
    }

    fn build(
        kind: Kind,
        measure: Measure,
        temperature: Temperature,
    ) -> Result<Self, QuantityError> {
        let quantity = match kind {
            Kind::Voltage => Self::Voltage(measure),
            Kind::Current => Self::Current(measure),
            Kind::Resistance => {
                Self::Resistance(Resistance::from_measure(measure, None, temperature)?)
            }
            Kind::Power => Self::Power(measure),
            Kind::Energy => Self::Energy(measure),
            Kind::Time => Self::Time(measure),
            Kind::Factor => Self::Factor(measure),
            Kind::SqVoltage => Self::SqVoltage(measure),
            Kind::SqCurrent => Self::SqCurrent(measure),
        };

        Ok(quantity)
    }

    /// Builds the result of an operator from its bounds
    fn from_result(
        kind: Kind,
        bounds: Interval,
        temperature: Temperature,
        op: Operation,
    ) -> Result<Self, QuantityError> {
        if !bounds.is_finite() {
            return Err(QuantityError::NonFiniteResult { op });
        }

        let measure = Measure::from_bounds(bounds)?;
        Self::build(kind, measure, temperature)
    }

    /// Returns the same quantity with a different relative tolerance
    ///
    /// For resistances the temperature model is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or NaN.
    pub fn with_tolerance(&self, tolerance: f64) -> Result<Self, QuantityError> {
        match self {
            Self::Resistance(resistance) => {
                Ok(Self::Resistance(resistance.with_tolerance(tolerance)?))
            }
            Self::Voltage(_)
            | Self::Current(_)
            | Self::Power(_)
            | Self::Energy(_)
            | Self::Time(_)
            | Self::Factor(_)
            | Self::SqVoltage(_)
            | Self::SqCurrent(_) => {
                let measure = self.measure().with_tolerance(tolerance)?;
                Self::build(
                    self.kind(),
                    measure,
                    Temperature::Celsius(REFERENCE_TEMPERATURE),
                )
            }
        }
    }

    /// The physical kind of the quantity
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Voltage(_) => Kind::Voltage,
            Self::Current(_) => Kind::Current,
            Self::Resistance(_) => Kind::Resistance,
            Self::Power(_) => Kind::Power,
            Self::Energy(_) => Kind::Energy,
            Self::Time(_) => Kind::Time,
            Self::Factor(_) => Kind::Factor,
            Self::SqVoltage(_) => Kind::SqVoltage,
            Self::SqCurrent(_) => Kind::SqCurrent,
        }
    }

    /// The numeric part of the quantity
    #[must_use]
    pub const fn measure(&self) -> &Measure {
        match self {
            Self::Resistance(resistance) => resistance.measure(),
            Self::Voltage(measure)
            | Self::Current(measure)
            | Self::Power(measure)
            | Self::Energy(measure)
            | Self::Time(measure)
            | Self::Factor(measure)
            | Self::SqVoltage(measure)
            | Self::SqCurrent(measure) => measure,
        }
    }

    /// The resistance, if this quantity is one
    #[must_use]
    pub const fn as_resistance(&self) -> Option<&Resistance> {
        match self {
            Self::Resistance(resistance) => Some(resistance),
            Self::Voltage(_)
            | Self::Current(_)
            | Self::Power(_)
            | Self::Energy(_)
            | Self::Time(_)
            | Self::Factor(_)
            | Self::SqVoltage(_)
            | Self::SqCurrent(_) => None,
        }
    }

    /// The nominal value
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.measure().mean()
    }

    /// The relative tolerance
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.measure().tolerance()
    }

    /// The absolute bounds
    #[must_use]
    pub const fn bounds(&self) -> Interval {
        self.measure().bounds()
    }

    /// The lower bound
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.measure().min()
    }

    /// The upper bound
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.measure().max()
    }

    /// The unit symbol of the quantity's kind
    #[must_use]
    pub const fn unit_label(&self) -> &'static str {
        self.kind().unit_label()
    }

    /// Renders the quantity, see [`RenderOptions`] for the available clauses
    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        render::render(self, options)
    }

    /// Adds two quantities of the same kind, or offsets by a scalar.
    ///
    /// Two resistances are connected in series. Factors cannot be added, so
    /// any addition to a factor is [`Outcome::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are quantities of different kinds or
    /// if the result is not finite.
    pub fn checked_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Outcome, QuantityError> {
        if matches!(self, Self::Factor(_)) {
            return Ok(Outcome::Undefined);
        }

        match rhs.into() {
            Operand::Scalar(offset) => Self::scalar_result(Operation::Add, self.bounds().shift(offset)),
            Operand::Quantity(rhs) => {
                self.require_same_kind(Operation::Add, rhs)?;

                if let (Self::Resistance(lhs), Self::Resistance(rhs)) = (self, rhs) {
                    return Ok(Self::Resistance(lhs.series(rhs)?).into());
                }

                let bounds = self.bounds() + rhs.bounds();
                let quantity = Self::from_result(
                    self.kind(),
                    bounds,
                    Temperature::Celsius(REFERENCE_TEMPERATURE),
                    Operation::Add,
                )?;
                Ok(quantity.into())
            }
        }
    }

    /// Subtracts a quantity of the same kind, or offsets by a scalar.
    ///
    /// The difference of two resistances is not a resistance, and factors
    /// cannot be subtracted, so both are [`Outcome::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are quantities of different kinds or
    /// if the result is not finite.
    pub fn checked_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Outcome, QuantityError> {
        if matches!(self, Self::Factor(_)) {
            return Ok(Outcome::Undefined);
        }

        match rhs.into() {
            Operand::Scalar(offset) => {
                Self::scalar_result(Operation::Sub, self.bounds().shift(-offset))
            }
            Operand::Quantity(rhs) => {
                self.require_same_kind(Operation::Sub, rhs)?;

                if matches!(self, Self::Resistance(_)) {
                    return Ok(Outcome::Undefined);
                }

                let bounds = self.bounds() - rhs.bounds();
                let quantity = Self::from_result(
                    self.kind(),
                    bounds,
                    Temperature::Celsius(REFERENCE_TEMPERATURE),
                    Operation::Sub,
                )?;
                Ok(quantity.into())
            }
        }
    }

    /// Multiplies by another quantity or a scalar.
    ///
    /// The result kind comes from [`MUL_CONVERSIONS`](crate::MUL_CONVERSIONS)
    /// and the bounds pair up as `[min * min, max * max]`. A scalar scales the
    /// bounds and yields [`Outcome::Bounds`].
    ///
    /// # Errors
    ///
    /// Returns an error if the kinds have no product or if the result is not
    /// finite.
    pub fn checked_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Outcome, QuantityError> {
        match rhs.into() {
            Operand::Scalar(factor) => {
                debug!(kind = %self.kind(), factor, "no conversion for a scalar, scaling bounds");
                Self::scalar_result(Operation::Mul, self.bounds().scale(factor))
            }
            Operand::Quantity(rhs) => {
                let kind = self
                    .kind()
                    .product_with(rhs.kind())
                    .ok_or_else(|| self.incompatible(Operation::Mul, rhs))?;

                Self::note_sign_approximation(Operation::Mul, self.bounds(), rhs.bounds());

                let bounds = self
                    .bounds()
                    .mul_bounds(rhs.bounds())
                    .ok_or(QuantityError::NonFiniteResult { op: Operation::Mul })?;
                let quantity =
                    Self::from_result(kind, bounds, Self::temperature_of(self, rhs), Operation::Mul)?;
                Ok(quantity.into())
            }
        }
    }

    /// Divides by another quantity or a scalar.
    ///
    /// The result kind comes from [`DIV_CONVERSIONS`](crate::DIV_CONVERSIONS)
    /// and the bounds pair up as `[min / rhs.max, max / rhs.min]`. A scalar
    /// scales the bounds and yields [`Outcome::Bounds`].
    ///
    /// # Errors
    ///
    /// Returns an error if the kinds have no quotient, if a bound of the
    /// divisor is zero, or if the result is not finite.
    pub fn checked_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Outcome, QuantityError> {
        match rhs.into() {
            Operand::Scalar(divisor) => {
                if divisor == 0.0 {
                    return Err(QuantityError::DivisionByZero);
                }

                debug!(kind = %self.kind(), divisor, "no conversion for a scalar, scaling bounds");
                Self::scalar_result(Operation::Div, self.bounds().scale_down(divisor))
            }
            Operand::Quantity(rhs) => {
                let kind = self
                    .kind()
                    .quotient_by(rhs.kind())
                    .ok_or_else(|| self.incompatible(Operation::Div, rhs))?;

                if rhs.bounds().has_zero_bound() {
                    return Err(QuantityError::DivisionByZero);
                }

                Self::note_sign_approximation(Operation::Div, self.bounds(), rhs.bounds());

                let bounds = self
                    .bounds()
                    .div_bounds(rhs.bounds())
                    .ok_or(QuantityError::NonFiniteResult { op: Operation::Div })?;
                let quantity =
                    Self::from_result(kind, bounds, Self::temperature_of(self, rhs), Operation::Div)?;
                Ok(quantity.into())
            }
        }
    }

    /// Raises a voltage or current to a power.
    ///
    /// Only an exponent of 2 is defined; any other exponent is
    /// [`Outcome::Undefined`]. The bounds are squared directly, which is only
    /// exact for ranges that do not cross zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not a voltage or a current.
    pub fn checked_pow(&self, exponent: f64) -> Result<Outcome, QuantityError> {
        let kind = self
            .kind()
            .squared()
            .ok_or(QuantityError::UnsupportedOperation {
                op: Operation::Pow,
                kind: self.kind(),
            })?;

        #[expect(
            clippy::float_cmp,
            reason = "only an exact exponent of two is supported"
        )]
        if exponent != 2.0 {
            return Ok(Outcome::Undefined);
        }

        if self.bounds().sign() == Sign::Straddling {
            debug!(kind = %self.kind(), "squaring a range that crosses zero");
        }

        let quantity = Self::from_result(
            kind,
            self.bounds().square_bounds(),
            Temperature::Celsius(REFERENCE_TEMPERATURE),
            Operation::Pow,
        )?;
        Ok(quantity.into())
    }

    /// Squares a voltage or current, see [`Quantity::checked_pow`]
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not a voltage or a current.
    pub fn checked_square(&self) -> Result<Outcome, QuantityError> {
        self.checked_pow(2.0)
    }

    /// Connects two resistances in parallel, see [`Resistance::parallel`]
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is not a resistance or if the
    /// result is not finite.
    pub fn parallel(&self, rhs: &Self) -> Result<Self, QuantityError> {
        match (self, rhs) {
            (Self::Resistance(lhs), Self::Resistance(rhs)) => {
                Ok(Self::Resistance(lhs.parallel(rhs)?))
            }
            _ => Err(self.incompatible(Operation::Parallel, rhs)),
        }
    }

    /// The worst-case voltage divider ratio with `self` as the bottom
    /// resistor, see [`Resistance::divider_ratio`]
    ///
    /// Without a `voltage` the result is the ratio as a factor. With one, the
    /// result is `voltage * ratio`.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is not a resistance, if the
    /// resistances are at different temperatures, or if the voltage cannot be
    /// multiplied by a factor.
    pub fn voltage_divider(
        &self,
        rhs: &Self,
        voltage: Option<&Self>,
    ) -> Result<Outcome, QuantityError> {
        let (Self::Resistance(lhs), Self::Resistance(rhs_resistance)) = (self, rhs) else {
            return Err(self.incompatible(Operation::VoltageDivider, rhs));
        };

        let ratio = Self::Factor(lhs.divider_ratio(rhs_resistance)?);

        match voltage {
            Some(voltage) => voltage.checked_mul(&ratio),
            None => Ok(ratio.into()),
        }
    }

    /// Shifts a resistance to another temperature, see
    /// [`Resistance::at_temperature`]
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not a resistance or has no
    /// temperature coefficient.
    pub fn at_temperature(&self, temperature: f64) -> Result<Self, QuantityError> {
        match self {
            Self::Resistance(resistance) => {
                Ok(Self::Resistance(resistance.at_temperature(temperature)?))
            }
            Self::Voltage(_)
            | Self::Current(_)
            | Self::Power(_)
            | Self::Energy(_)
            | Self::Time(_)
            | Self::Factor(_)
            | Self::SqVoltage(_)
            | Self::SqCurrent(_) => Err(QuantityError::UnsupportedOperation {
                op: Operation::AtTemperature,
                kind: self.kind(),
            }),
        }
    }

    fn require_same_kind(&self, op: Operation, rhs: &Self) -> Result<(), QuantityError> {
        if self.kind() == rhs.kind() {
            Ok(())
        } else {
            Err(self.incompatible(op, rhs))
        }
    }

    fn incompatible(&self, op: Operation, rhs: &Self) -> QuantityError {
        QuantityError::IncompatibleOperands {
            op,
            lhs: self.kind(),
            rhs: rhs.kind(),
        }
    }

    fn scalar_result(op: Operation, bounds: Option<Interval>) -> Result<Outcome, QuantityError> {
        match bounds {
            Some(bounds) if bounds.is_finite() => Ok(Outcome::Bounds(bounds)),
            Some(_) | None => Err(QuantityError::NonFiniteResult { op }),
        }
    }

    /// The temperature a converted resistance inherits: that of the first
    /// resistance operand, or the reference temperature
    fn temperature_of(lhs: &Self, rhs: &Self) -> Temperature {
        lhs.as_resistance()
            .or_else(|| rhs.as_resistance())
            .map_or(
                Temperature::Celsius(REFERENCE_TEMPERATURE),
                Resistance::temperature,
            )
    }

    fn note_sign_approximation(op: Operation, lhs: Interval, rhs: Interval) {
        if lhs.sign() == Sign::Straddling || rhs.sign() == Sign::Straddling {
            debug!(%op, "pairing bounds of a range that crosses zero");
        }
    }
}

impl From<Resistance> for Quantity {
    fn from(resistance: Resistance) -> Self {
        Self::Resistance(resistance)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DIV_CONVERSIONS, MUL_CONVERSIONS, assert_is_close};

    fn quantity(kind: Kind, mean: f64, tolerance: f64) -> Quantity {
        Quantity::new(kind, mean, tolerance).expect("valid quantity")
    }

    fn resistance(mean: f64, tolerance: f64, alpha_ppm: Option<i32>) -> Quantity {
        Resistance::new(mean, tolerance, alpha_ppm)
            .expect("valid resistance")
            .into()
    }

    fn typed(outcome: Result<Outcome, QuantityError>) -> Quantity {
        outcome
            .expect("operation should succeed")
            .into_quantity()
            .expect("operation should produce a quantity")
    }

    #[test]
    fn bounds_from_tolerance() {
        let voltage = quantity(Kind::Voltage, 10.0, 0.1);
        assert_is_close!(9.0, voltage.min());
        assert_is_close!(11.0, voltage.max());

        let r = resistance(2.0, 0.01, None);
        assert_is_close!(1.98, r.min());
        assert_is_close!(2.02, r.max());

        let current = quantity(Kind::Current, -10.0, 0.1);
        assert_is_close!(-11.0, current.min());
        assert_is_close!(-9.0, current.max());
    }

    #[test]
    fn from_bounds_recovers_tolerance() {
        let r = Quantity::from_bounds(Kind::Resistance, 3.0, 2.0).expect("finite bounds");
        assert_is_close!(0.2, r.tolerance().relative().expect("tolerance is defined"));
    }

    #[test]
    fn every_multiplication_in_the_table_produces_its_kind() {
        for (lhs, rhs, result) in MUL_CONVERSIONS {
            let product = typed(quantity(*lhs, 1.0, 0.0).checked_mul(&quantity(*rhs, 1.0, 0.0)));
            assert_eq!(product.kind(), *result, "{lhs} * {rhs}");
        }
    }

    #[test]
    fn every_division_in_the_table_produces_its_kind() {
        for (lhs, rhs, result) in DIV_CONVERSIONS {
            let quotient = typed(quantity(*lhs, 1.0, 0.0).checked_div(&quantity(*rhs, 1.0, 0.0)));
            assert_eq!(quotient.kind(), *result, "{lhs} / {rhs}");
        }
    }

    #[test]
    fn ohms_law_bounds() {
        let r = resistance(1e3, 0.01, None);
        let current = quantity(Kind::Current, 1e-3, 0.05);

        let voltage = typed(r.checked_mul(&current));
        assert_eq!(voltage.kind(), Kind::Voltage);
        assert_is_close!(990.0 * 0.95e-3, voltage.min());
        assert_is_close!(1010.0 * 1.05e-3, voltage.max());

        let back = typed(voltage.checked_div(&current));
        assert_eq!(back.kind(), Kind::Resistance);
        assert_is_close!(990.0 * 0.95e-3 / 1.05e-3, back.min());
    }

    #[test]
    fn same_kind_addition_and_subtraction() {
        let a = quantity(Kind::Voltage, 10.0, 0.1);
        let b = quantity(Kind::Voltage, 5.0, 0.0);

        let sum = typed(a.checked_add(&b));
        assert_is_close!(14.0, sum.min());
        assert_is_close!(16.0, sum.max());

        let difference = typed(a.checked_sub(&b));
        assert_is_close!(4.0, difference.min());
        assert_is_close!(6.0, difference.max());
    }

    #[test]
    fn mismatched_kinds_are_incompatible() {
        let voltage = quantity(Kind::Voltage, 1.0, 0.0);
        let current = quantity(Kind::Current, 1.0, 0.0);

        assert_eq!(
            voltage.checked_add(&current),
            Err(QuantityError::IncompatibleOperands {
                op: Operation::Add,
                lhs: Kind::Voltage,
                rhs: Kind::Current,
            })
        );

        let r = resistance(1.0, 0.0, None);
        assert_eq!(
            r.checked_mul(&r),
            Err(QuantityError::IncompatibleOperands {
                op: Operation::Mul,
                lhs: Kind::Resistance,
                rhs: Kind::Resistance,
            })
        );
    }

    fn bounds_of(outcome: Result<Outcome, QuantityError>) -> Interval {
        match outcome {
            Ok(Outcome::Bounds(bounds)) => bounds,
            other => panic!("expected bare bounds, got {other:?}"),
        }
    }

    #[test]
    fn scalars_degrade_to_bounds() {
        let voltage = quantity(Kind::Voltage, 10.0, 0.1);

        let scaled = bounds_of(voltage.checked_mul(2.0));
        assert_is_close!(18.0, scaled.min());
        assert_is_close!(22.0, scaled.max());

        let halved = bounds_of(voltage.checked_div(2.0));
        assert_is_close!(4.5, halved.min());
        assert_is_close!(5.5, halved.max());

        let raised = bounds_of(voltage.checked_add(1.0));
        assert_is_close!(10.0, raised.min());
        assert_is_close!(12.0, raised.max());

        let lowered = bounds_of(voltage.checked_sub(1.0));
        assert_is_close!(8.0, lowered.min());
        assert_is_close!(10.0, lowered.max());

        let r = resistance(1e3, 0.0, None);
        let doubled = bounds_of(r.checked_mul(2.0));
        assert_is_close!(2e3, doubled.min());

        assert_eq!(voltage.checked_div(0.0), Err(QuantityError::DivisionByZero));
    }

    #[test]
    fn factor_addition_is_undefined() {
        let factor = quantity(Kind::Factor, 1.0, 0.01);
        assert_eq!(factor.checked_add(&factor), Ok(Outcome::Undefined));
        assert_eq!(factor.checked_sub(&factor), Ok(Outcome::Undefined));
        assert_eq!(factor.checked_add(1.0), Ok(Outcome::Undefined));
    }

    #[test]
    fn resistance_difference_is_undefined() {
        let r = resistance(1e3, 0.01, None);
        assert_eq!(r.checked_sub(&r), Ok(Outcome::Undefined));
    }

    #[test]
    fn factor_scaling_works_in_both_orders() {
        let factor = quantity(Kind::Factor, 2.0, 0.0);
        let current = quantity(Kind::Current, 1e-3, 0.0);

        let left = typed(factor.checked_mul(&current));
        let right = typed(current.checked_mul(&factor));
        assert_eq!(left.kind(), Kind::Current);
        assert_eq!(left.bounds(), right.bounds());
    }

    #[test]
    fn series_through_addition() {
        let sum = typed(resistance(1e3, 0.01, None).checked_add(&resistance(2e3, 0.01, None)));
        assert_eq!(sum.kind(), Kind::Resistance);
        assert_is_close!(2970.0, sum.min());
        assert_is_close!(3030.0, sum.max());
    }

    #[test]
    fn temperature_propagation_through_series() {
        let hot = resistance(1e3, 0.01, Some(200))
            .at_temperature(100.0)
            .expect("coefficient is present");

        let mixed = typed(hot.checked_add(&resistance(2e3, 0.01, Some(150))));
        assert_eq!(
            mixed.as_resistance().map(Resistance::temperature),
            Some(Temperature::Mixed)
        );

        let other_hot = resistance(2e3, 0.01, Some(150))
            .at_temperature(100.0)
            .expect("coefficient is present");
        let same = typed(hot.checked_add(&other_hot));
        assert_eq!(
            same.as_resistance().map(Resistance::temperature),
            Some(Temperature::Celsius(100.0))
        );
    }

    #[test]
    fn conversions_to_resistance_inherit_temperature() {
        let hot = resistance(1e3, 0.01, Some(200))
            .at_temperature(60.0)
            .expect("coefficient is present");
        let factor = quantity(Kind::Factor, 2.0, 0.0);

        for scaled in [typed(hot.checked_mul(&factor)), typed(hot.checked_div(&factor))] {
            let scaled = scaled.as_resistance().expect("result is a resistance");
            assert_eq!(scaled.temperature(), Temperature::Celsius(60.0));
            assert_eq!(scaled.alpha_ppm(), None);
        }

        let r = typed(quantity(Kind::Voltage, 5.0, 0.0).checked_div(&quantity(Kind::Current, 1e-3, 0.0)));
        let r = r.as_resistance().expect("result is a resistance");
        assert_eq!(r.temperature(), Temperature::Celsius(REFERENCE_TEMPERATURE));
        assert_is_close!(5e3, r.mean());
    }

    #[test]
    fn negative_resistance_from_conversion_is_rejected() {
        let voltage = quantity(Kind::Voltage, -5.0, 0.0);
        let current = quantity(Kind::Current, 1e-3, 0.0);
        assert!(matches!(
            voltage.checked_div(&current),
            Err(QuantityError::InvalidResistance { .. })
        ));
    }

    #[test]
    fn division_by_range_through_zero_pairs_bounds() {
        let voltage = quantity(Kind::Voltage, 10.0, 0.0);
        let through_zero =
            Quantity::from_bounds(Kind::Voltage, -1.0, 2.0).expect("finite bounds");

        // [10 / 2, 10 / -1], reordered
        let ratio = typed(voltage.checked_div(&through_zero));
        assert_eq!(ratio.kind(), Kind::Factor);
        assert_is_close!(-10.0, ratio.min());
        assert_is_close!(5.0, ratio.max());
    }

    #[test]
    fn division_by_a_zero_bound() {
        let voltage = quantity(Kind::Voltage, 5.0, 0.0);

        for (low, high) in [(0.0, 1.0), (-1.0, 0.0)] {
            let divisor = Quantity::from_bounds(Kind::Voltage, low, high).expect("finite bounds");
            assert_eq!(
                voltage.checked_div(&divisor),
                Err(QuantityError::DivisionByZero)
            );
        }
    }

    #[test]
    fn squaring() {
        let voltage = quantity(Kind::Voltage, 10.0, 0.1);
        let squared = typed(voltage.checked_square());
        assert_eq!(squared.kind(), Kind::SqVoltage);
        assert_is_close!(81.0, squared.min());
        assert_is_close!(121.0, squared.max());

        let current = quantity(Kind::Current, 2.0, 0.0);
        assert_eq!(typed(current.checked_square()).kind(), Kind::SqCurrent);

        assert_eq!(voltage.checked_pow(3.0), Ok(Outcome::Undefined));
        assert_eq!(
            resistance(1.0, 0.0, None).checked_square(),
            Err(QuantityError::UnsupportedOperation {
                op: Operation::Pow,
                kind: Kind::Resistance,
            })
        );
    }

    #[test]
    fn power_from_squared_voltage() {
        let voltage = quantity(Kind::Voltage, 10.0, 0.0);
        let squared = typed(voltage.checked_square());
        let power = typed(squared.checked_div(&resistance(100.0, 0.0, None)));
        assert_eq!(power.kind(), Kind::Power);
        assert_is_close!(1.0, power.mean());
    }

    #[test]
    fn parallel_of_twelve_and_twenty_four_k() {
        let r1 = resistance(12e3, 0.0, None);
        let r2 = resistance(24e3, 0.0, None);

        let combined = r1.parallel(&r2).expect("both are resistances");
        assert_is_close!(8000.0, combined.min());
        assert_is_close!(8000.0, combined.max());
    }

    #[test]
    fn parallel_requires_resistances() {
        let voltage = quantity(Kind::Voltage, 1.0, 0.0);
        assert!(matches!(
            voltage.parallel(&resistance(1.0, 0.0, None)),
            Err(QuantityError::IncompatibleOperands {
                op: Operation::Parallel,
                ..
            })
        ));
    }

    #[test]
    fn voltage_divider_as_factor_and_voltage() {
        let bottom = resistance(1e3, 0.01, None);
        let top = resistance(2e3, 0.01, None);

        let ratio = typed(bottom.voltage_divider(&top, None));
        assert_eq!(ratio.kind(), Kind::Factor);
        assert!((ratio.mean() - 1.0 / 3.0).abs() < 1e-4);

        let supply = quantity(Kind::Voltage, 3.0, 0.0);
        let output = typed(bottom.voltage_divider(&top, Some(&supply)));
        assert_eq!(output.kind(), Kind::Voltage);
        assert_is_close!(3.0 * ratio.min(), output.min());
        assert_is_close!(3.0 * ratio.max(), output.max());
    }

    #[test]
    fn voltage_divider_across_temperatures_fails() {
        let bottom = resistance(1e3, 0.01, Some(100));
        let top = resistance(2e3, 0.01, Some(100))
            .at_temperature(50.0)
            .expect("coefficient is present");

        assert!(matches!(
            bottom.voltage_divider(&top, None),
            Err(QuantityError::TemperatureMismatch { .. })
        ));
    }

    #[test]
    fn at_temperature_requires_a_resistance() {
        assert_eq!(
            quantity(Kind::Voltage, 1.0, 0.0).at_temperature(50.0),
            Err(QuantityError::UnsupportedOperation {
                op: Operation::AtTemperature,
                kind: Kind::Voltage,
            })
        );
    }

    #[test]
    fn with_tolerance_replaces_spread() {
        let voltage = quantity(Kind::Voltage, 10.0, 0.1);
        let tight = voltage.with_tolerance(0.01).expect("valid tolerance");
        assert_is_close!(9.9, tight.min());
        assert_is_close!(10.1, tight.max());
        assert_eq!(tight.kind(), Kind::Voltage);
    }
}
