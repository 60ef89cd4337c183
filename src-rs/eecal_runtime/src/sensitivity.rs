//! Tolerance sensitivity sweeps
//!
//! A sweep answers the question "which component's tolerance matters most
//! for this result?". Each variable in turn is given every tolerance of a
//! ladder while the others keep their own, and the tolerance of the target
//! expression is recorded.

use std::fmt;

use eecal_ast::expression::ExprNode;
use eecal_quantity::{Outcome, mean_and_tolerance};
use indexmap::IndexMap;
use tracing::debug;

use crate::{environment::Environment, error::EvalError, eval::eval_expr};

/// A sweep of every variable of an environment over a tolerance ladder
#[derive(Debug, Clone, Copy)]
pub struct SensitivityAnalysis<'a> {
    environment: &'a Environment,
    tolerances: &'a [f64],
}

impl<'a> SensitivityAnalysis<'a> {
    /// Creates a sweep over `tolerances`, given as fractions
    #[must_use]
    pub const fn new(environment: &'a Environment, tolerances: &'a [f64]) -> Self {
        Self {
            environment,
            tolerances,
        }
    }

    /// Runs the sweep for `target`
    ///
    /// Only one variable differs from the environment at a time. Its
    /// original value is restored before the next variable is swept.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` cannot be evaluated, or if a variable
    /// cannot take one of the tolerances.
    pub fn run(&self, target: &ExprNode) -> Result<SensitivityReport, EvalError> {
        // fail on the unchanged environment before sweeping anything
        eval_expr(target, self.environment)?;

        let mut environment = self.environment.clone();
        let mut per_variable = IndexMap::with_capacity(self.environment.len());

        for (name, original) in self.environment.iter() {
            let mut row = Vec::with_capacity(self.tolerances.len());

            for &tolerance in self.tolerances {
                let varied = original
                    .with_tolerance(tolerance)
                    .map_err(EvalError::quantity(target.span()))?;
                environment.assign(name, varied);

                let outcome = eval_expr(target, &environment)?;
                let result = outcome_tolerance(&outcome);
                debug!(variable = name, tolerance, result, "sensitivity step");

                row.push(result);
            }

            environment.assign(name, original.clone());
            per_variable.insert(name.to_string(), row);
        }

        Ok(SensitivityReport {
            tolerances: self.tolerances.to_vec(),
            per_variable,
        })
    }
}

/// The relative tolerance of a result, if it has one
fn outcome_tolerance(outcome: &Outcome) -> Option<f64> {
    match outcome {
        Outcome::Quantity(quantity) => quantity.tolerance().relative(),
        Outcome::Bounds(bounds) => mean_and_tolerance(*bounds).1.relative(),
        Outcome::Undefined => None,
    }
}

/// The tolerances of a target expression, per swept variable
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityReport {
    /// The tolerance ladder, as fractions
    pub tolerances: Vec<f64>,
    /// For every variable, the tolerance of the target at each step of the
    /// ladder, or `None` when it is undefined
    pub per_variable: IndexMap<String, Vec<Option<f64>>>,
}

impl SensitivityReport {
    /// The variable whose tolerance has the largest effect at the top of
    /// the ladder
    #[must_use]
    pub fn most_sensitive(&self) -> Option<&str> {
        self.per_variable
            .iter()
            .filter_map(|(name, row)| Some((name, row.last().copied().flatten()?)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(name, _)| name.as_str())
    }
}

impl fmt::Display for SensitivityReport {
    /// Renders the report as a table with one row per variable and one
    /// column per tolerance, all in percent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .per_variable
            .keys()
            .map(|name| name.chars().count())
            .chain([8])
            .max()
            .unwrap_or_default();

        write!(f, "{:<name_width$}", "variable")?;
        for tolerance in &self.tolerances {
            write!(f, " {:>8}", format_percent(Some(*tolerance)))?;
        }

        for (name, row) in &self.per_variable {
            writeln!(f)?;
            write!(f, "{name:<name_width$}")?;
            for result in row {
                write!(f, " {:>8}", format_percent(*result))?;
            }
        }

        Ok(())
    }
}

fn format_percent(fraction: Option<f64>) -> String {
    fraction.map_or_else(|| "-".to_string(), |fraction| format!("{:.2}%", fraction * 100.0))
}

#[cfg(test)]
mod tests {
    use eecal_parser::parse_expression;
    use eecal_quantity::util::is_close;

    use super::*;
    use crate::{Runtime, RuntimeConfig};

    fn runtime(script: &str) -> Runtime {
        let mut runtime = Runtime::new(RuntimeConfig::new());
        let report = runtime.run_script(script);
        assert!(!report.has_errors(), "script should run cleanly");
        runtime
    }

    #[test]
    fn sweep_shape_follows_variables_and_ladder() {
        let runtime = runtime("i1 = 3mA\nr1 = 120k\nr2 = 440k\n");
        let report = runtime
            .sensitivity("(r1 | r2) * i1")
            .expect("target should evaluate");

        assert_eq!(report.tolerances.len(), 6);
        let names: Vec<_> = report.per_variable.keys().map(String::as_str).collect();
        assert_eq!(names, ["i1", "r1", "r2"]);
        assert!(report.per_variable.values().all(|row| row.len() == 6));
    }

    #[test]
    fn current_tolerance_passes_straight_through() {
        let runtime = runtime("i1 = 3mA\nr1 = 120k\nr2 = 440k\n");
        let report = runtime
            .sensitivity("(r1 | r2) * i1")
            .expect("target should evaluate");

        let row = &report.per_variable["i1"];
        for (result, tolerance) in row.iter().zip(&report.tolerances) {
            let result = result.expect("voltage tolerance is defined");
            assert!(is_close(result, *tolerance));
        }

        // a single resistor of a parallel pair has a damped effect
        let r1 = report.per_variable["r1"][5].expect("defined");
        assert!(r1 < 0.1);
        assert!(r1 > 0.0);
        assert_eq!(report.most_sensitive(), Some("i1"));
    }

    #[test]
    fn environment_is_restored_between_variables() {
        let runtime = runtime("a = 1k 5%\nb = 1k 5%\n");
        let environment = runtime.environment().clone();
        let target = parse_expression("a + b", None).expect("valid expression");

        let report = SensitivityAnalysis::new(&environment, &[0.01])
            .run(&target)
            .expect("target should evaluate");

        // the other resistor keeps its 5%
        let a = report.per_variable["a"][0].expect("defined");
        assert!(is_close(a, 0.03));
        assert_eq!(&environment, runtime.environment());
    }

    #[test]
    fn undefined_targets_are_recorded_as_none() {
        let runtime = runtime("k = 2f 1%\n");
        let report = runtime.sensitivity("k + k").expect("target should evaluate");

        assert_eq!(report.per_variable["k"], vec![None; 6]);
        assert_eq!(report.most_sensitive(), None);
    }

    #[test]
    fn table_rendering() {
        let mut per_variable = IndexMap::new();
        per_variable.insert("r1".to_string(), vec![Some(0.004), None]);
        let report = SensitivityReport {
            tolerances: vec![0.01, 0.05],
            per_variable,
        };

        assert_eq!(
            report.to_string(),
            "variable    1.00%    5.00%\nr1          0.40%        -"
        );
    }
}
