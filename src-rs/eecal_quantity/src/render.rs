//! Text rendering of quantities
//!
//! A fully rendered quantity looks like
//!
//! ```text
//! 8.5kΩ ± 1.0% (± 85.0Ω) [8.4150 .. 8.5850]kΩ @ 20°C α=200ppm
//! ```
//!
//! The clauses are, in order: the value, the relative tolerance, the
//! absolute variation, the range, and for resistances the temperature.

use crate::{
    kind::Kind,
    measure::Tolerance,
    prefix::magnitude_prefix,
    quantity::Quantity,
    resistance::Temperature,
};

/// Selects which clauses of a rendered quantity are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag toggles an independent clause"
)]
pub struct RenderOptions {
    /// The value with its prefix and unit, `8.5kΩ`
    pub value: bool,
    /// The relative tolerance, `± 1.0%`
    pub tolerance: bool,
    /// The absolute variation, `(± 85.0Ω)`
    pub variation: bool,
    /// The range, `[8.4150 .. 8.5850]kΩ`
    pub range: bool,
    /// The temperature of a resistance, `@ 20°C α=200ppm`
    pub temperature: bool,
}

impl RenderOptions {
    /// Shows every clause
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: true,
            tolerance: true,
            variation: true,
            range: true,
            temperature: true,
        }
    }

    /// Shows only the value
    #[must_use]
    pub const fn value_only() -> Self {
        Self {
            value: true,
            tolerance: false,
            variation: false,
            range: false,
            temperature: false,
        }
    }

    /// Toggles the value clause
    #[must_use]
    pub const fn with_value(self, value: bool) -> Self {
        Self { value, ..self }
    }

    /// Toggles the tolerance clause
    #[must_use]
    pub const fn with_tolerance(self, tolerance: bool) -> Self {
        Self { tolerance, ..self }
    }

    /// Toggles the variation clause
    #[must_use]
    pub const fn with_variation(self, variation: bool) -> Self {
        Self { variation, ..self }
    }

    /// Toggles the range clause
    #[must_use]
    pub const fn with_range(self, range: bool) -> Self {
        Self { range, ..self }
    }

    /// Toggles the temperature clause
    #[must_use]
    pub const fn with_temperature(self, temperature: bool) -> Self {
        Self {
            temperature,
            ..self
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(quantity: &Quantity, options: RenderOptions) -> String {
    let unit = quantity.unit_label();
    let bounds = quantity.bounds();
    let mut clauses = Vec::new();

    if options.value {
        let (factor, prefix) = magnitude_prefix(quantity.mean());
        let value = round_to_hundredths(quantity.mean() / factor);
        clauses.push(format!("{value}{prefix}{unit}"));
    }

    if options.tolerance {
        match quantity.tolerance() {
            Tolerance::Relative(tolerance) if tolerance > 0.0 => {
                let percent = round_to_hundredths(tolerance * 100.0);
                clauses.push(format!("± {percent}%"));
            }
            Tolerance::Relative(_) | Tolerance::Undefined => {}
        }
    }

    if options.variation && bounds.has_spread() && quantity.kind() != Kind::Factor {
        let variation = bounds.half_width();
        let (factor, prefix) = magnitude_prefix(variation);
        let variation = round_to_hundredths((variation / factor).abs());
        clauses.push(format!("(± {variation}{prefix}{unit})"));
    }

    if options.range && bounds.has_spread() {
        // the range shares the prefix of the value
        let (factor, prefix) = magnitude_prefix(quantity.mean());
        let min = bounds.min() / factor;
        let max = bounds.max() / factor;
        clauses.push(format!("[{min:.4} .. {max:.4}]{prefix}{unit}"));
    }

    if options.temperature {
        if let Some(resistance) = quantity.as_resistance() {
            let temperature = match resistance.temperature() {
                Temperature::Celsius(temperature) => format!("@ {temperature}°C"),
                Temperature::Mixed => "@ mixed temp.".to_string(),
            };

            let clause = match resistance.alpha_ppm() {
                Some(alpha_ppm) => format!("{temperature} α={alpha_ppm}ppm"),
                None => temperature,
            };

            clauses.push(clause);
        }
    }

    clauses.join(" ")
}

/// Rounds to two decimals and always shows at least one, so 12 is `12.0`
fn round_to_hundredths(value: f64) -> String {
    // adding zero turns a rounded `-0.0` into `0.0`
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    let text = rounded.to_string();

    if text.contains('.') || !rounded.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Resistance, measure::Measure};

    fn quantity(kind: Kind, mean: f64, tolerance: f64) -> Quantity {
        Quantity::new(kind, mean, tolerance).expect("valid quantity")
    }

    fn resistance(mean: f64, tolerance: f64, alpha_ppm: Option<i32>) -> Resistance {
        Resistance::new(mean, tolerance, alpha_ppm).expect("valid resistance")
    }

    #[test]
    fn current_with_tolerance() {
        let current = quantity(Kind::Current, 12e-6, 0.05);
        assert_eq!(
            current.to_string(),
            "12.0µA ± 5.0% (± 600.0nA) [11.4000 .. 12.6000]µA"
        );
    }

    #[test]
    fn exact_values_show_only_the_value() {
        assert_eq!(quantity(Kind::Voltage, 3.0, 0.0).to_string(), "3.0V");
        assert_eq!(quantity(Kind::Voltage, -12.3, 0.0).to_string(), "-12.3V");
        assert_eq!(quantity(Kind::Voltage, 818e3, 0.0).to_string(), "818.0kV");
    }

    #[test]
    fn microvolt_variation_keeps_its_prefix() {
        assert_eq!(
            quantity(Kind::Voltage, 10e-6, 0.1).to_string(),
            "10.0µV ± 10.0% (± 1.0µV) [9.0000 .. 11.0000]µV"
        );
    }

    #[test]
    fn millivolts() {
        assert_eq!(
            quantity(Kind::Voltage, 200e-3, 0.1).to_string(),
            "200.0mV ± 10.0% (± 20.0mV) [180.0000 .. 220.0000]mV"
        );
    }

    #[test]
    fn resistance_with_coefficient() {
        let r = Quantity::from(resistance(8.5e3, 0.01, Some(200)));
        assert_eq!(
            r.to_string(),
            "8.5kΩ ± 1.0% (± 85.0Ω) [8.4150 .. 8.5850]kΩ @ 20°C α=200ppm"
        );
    }

    #[test]
    fn mixed_temperature_series() {
        let hot = resistance(1e3, 0.01, Some(200))
            .at_temperature(100.0)
            .expect("coefficient is present");
        let sum = Quantity::from(hot)
            .checked_add(&Quantity::from(resistance(2e3, 0.01, Some(150))))
            .expect("both are resistances");
        assert_eq!(
            sum.to_string(),
            "3.02kΩ ± 1.0% (± 30.16Ω) [2.9858 .. 3.0462]kΩ @ mixed temp."
        );
    }

    #[test]
    fn factors_have_no_variation_or_unit() {
        assert_eq!(
            quantity(Kind::Factor, 1.0, 0.01).to_string(),
            "1.0 ± 1.0% [0.9900 .. 1.0100]"
        );
        assert_eq!(
            Quantity::from_bounds(Kind::Factor, 2.0, 3.0)
                .expect("finite bounds")
                .to_string(),
            "2.5 ± 20.0% [2.0000 .. 3.0000]"
        );
    }

    #[test]
    fn undefined_tolerance_keeps_variation_and_range() {
        let voltage = Quantity::from_bounds(Kind::Voltage, -1.0, 1.0).expect("finite bounds");
        assert_eq!(
            voltage.to_string(),
            "0.0pV (± 1.0V) [-1000000000000.0000 .. 1000000000000.0000]pV"
        );
    }

    #[test]
    fn clauses_toggle_independently() {
        let r = Quantity::from(resistance(8.5e3, 0.01, Some(200)));

        assert_eq!(r.render(RenderOptions::value_only()), "8.5kΩ");
        assert_eq!(
            r.render(RenderOptions::new().with_variation(false).with_range(false)),
            "8.5kΩ ± 1.0% @ 20°C α=200ppm"
        );
        assert_eq!(
            r.render(RenderOptions::new().with_value(false).with_temperature(false)),
            "± 1.0% (± 85.0Ω) [8.4150 .. 8.5850]kΩ"
        );
        assert_eq!(
            r.render(
                RenderOptions::value_only()
                    .with_value(false)
                    .with_temperature(true)
            ),
            "@ 20°C α=200ppm"
        );
    }

    #[test]
    fn shifted_temperature_label() {
        let options = RenderOptions::value_only().with_temperature(true);

        let cold = resistance(1e3, 0.0, Some(-50))
            .at_temperature(70.0)
            .expect("coefficient is present");
        assert_eq!(
            Quantity::from(cold).render(options),
            "997.5Ω @ 70°C α=-50ppm"
        );

        let warm = resistance(1e3, 0.0, Some(100))
            .at_temperature(25.5)
            .expect("coefficient is present");
        assert_eq!(
            Quantity::from(warm).render(options),
            "1.0kΩ @ 25.5°C α=100ppm"
        );
    }

    #[test]
    fn rounding_helper() {
        assert_eq!(round_to_hundredths(12.0), "12.0");
        assert_eq!(round_to_hundredths(30.156), "30.16");
        assert_eq!(round_to_hundredths(-0.001), "0.0");
        assert_eq!(round_to_hundredths(600.000_000_1), "600.0");
    }

    #[test]
    fn rendering_a_measure_of_every_kind_uses_its_unit() {
        let measure = Measure::new(2.0, 0.0).expect("valid measure");
        assert_eq!(Quantity::Power(measure).to_string(), "2.0W");
        assert_eq!(Quantity::Energy(measure).to_string(), "2.0J");
        assert_eq!(Quantity::Time(measure).to_string(), "2.0s");
        assert_eq!(Quantity::SqVoltage(measure).to_string(), "2.0V²");
        assert_eq!(Quantity::SqCurrent(measure).to_string(), "2.0A²");
    }
}
