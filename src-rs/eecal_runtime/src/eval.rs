//! Evaluation of syntax trees against an environment

use eecal_ast::{
    Expr,
    expression::{BinaryOp, ExprNode},
    literal::{Literal, Unit},
};
use eecal_quantity::{Kind, Operation, Outcome, Quantity, Resistance};
use eecal_shared::span::Span;

use crate::{
    environment::Environment,
    error::{EvalError, Untyped},
};

/// Evaluates an expression
///
/// Variables are looked up in `environment`. Only typed quantities can be
/// used as operands, so a sub-expression that yields bare bounds or an
/// undefined result is an error unless it is the whole expression.
///
/// # Errors
///
/// Returns an error if a variable is unknown, an operand is not a typed
/// quantity, or the quantity algebra rejects an operation.
pub fn eval_expr(expr: &ExprNode, environment: &Environment) -> Result<Outcome, EvalError> {
    let span = expr.span();

    match &**expr {
        Expr::BinaryOp { op, left, right } => {
            let operation = operation_of(**op);
            let lhs = eval_operand(left, operation, environment)?;
            let rhs = eval_operand(right, operation, environment)?;
            eval_binary_op(**op, &lhs, &rhs).map_err(EvalError::quantity(span))
        }
        Expr::Power { base, exponent } => {
            let base = eval_operand(base, Operation::Pow, environment)?;
            base.checked_pow(**exponent)
                .map_err(EvalError::quantity(span))
        }
        Expr::AtTemperature { expr, temperature } => {
            let resistance = eval_operand(expr, Operation::AtTemperature, environment)?;
            resistance
                .at_temperature(**temperature)
                .map(Outcome::from)
                .map_err(EvalError::quantity(span))
        }
        Expr::Parenthesized { expr } => eval_expr(expr, environment),
        Expr::Variable(name) => {
            let name = name.as_str();
            environment
                .get(name)
                .cloned()
                .map(Outcome::from)
                .ok_or_else(|| EvalError::UnknownVariable {
                    name: name.to_string(),
                    span,
                })
        }
        Expr::Literal(literal) => eval_literal(literal, span).map(Outcome::from),
    }
}

/// Evaluates an expression that must produce a typed quantity
fn eval_operand(
    expr: &ExprNode,
    op: Operation,
    environment: &Environment,
) -> Result<Quantity, EvalError> {
    let outcome = eval_expr(expr, environment)?;

    into_quantity(outcome).map_err(|untyped| EvalError::UntypedOperand {
        op,
        untyped,
        span: expr.span(),
    })
}

/// Splits an outcome into a quantity or the kind of untyped result it is
///
/// # Errors
///
/// Returns the kind of untyped result if the outcome is not a quantity.
pub fn into_quantity(outcome: Outcome) -> Result<Quantity, Untyped> {
    match outcome {
        Outcome::Quantity(quantity) => Ok(quantity),
        Outcome::Bounds(_) => Err(Untyped::Bounds),
        Outcome::Undefined => Err(Untyped::Undefined),
    }
}

fn eval_binary_op(
    op: BinaryOp,
    lhs: &Quantity,
    rhs: &Quantity,
) -> Result<Outcome, eecal_quantity::QuantityError> {
    match op {
        BinaryOp::Add => lhs.checked_add(rhs),
        BinaryOp::Sub => lhs.checked_sub(rhs),
        BinaryOp::Mul => lhs.checked_mul(rhs),
        BinaryOp::Div => lhs.checked_div(rhs),
        BinaryOp::Parallel => lhs.parallel(rhs).map(Outcome::from),
        BinaryOp::VoltageDivider => lhs.voltage_divider(rhs, None),
    }
}

const fn operation_of(op: BinaryOp) -> Operation {
    match op {
        BinaryOp::Add => Operation::Add,
        BinaryOp::Sub => Operation::Sub,
        BinaryOp::Mul => Operation::Mul,
        BinaryOp::Div => Operation::Div,
        BinaryOp::Parallel => Operation::Parallel,
        BinaryOp::VoltageDivider => Operation::VoltageDivider,
    }
}

/// The kind of quantity a unit suffix denotes
#[must_use]
pub const fn kind_of(unit: Unit) -> Kind {
    match unit {
        Unit::Volt => Kind::Voltage,
        Unit::Ampere => Kind::Current,
        Unit::Ohm => Kind::Resistance,
        Unit::Watt => Kind::Power,
        Unit::Joule => Kind::Energy,
        Unit::Second => Kind::Time,
        Unit::Factor => Kind::Factor,
    }
}

/// Builds the quantity a literal denotes
///
/// A literal without a unit is a resistance. The tolerance is written in
/// percent and the coefficient in ppm per °C.
fn eval_literal(literal: &Literal, span: Span) -> Result<Quantity, EvalError> {
    let tolerance = literal
        .tolerance_percent()
        .map_or(0.0, |percent| **percent / 100.0);
    let coefficient = literal.coefficient_ppm().map(|ppm| **ppm);
    let kind = literal.unit().map_or(Kind::Resistance, |unit| kind_of(**unit));

    match (kind, literal.unit()) {
        (Kind::Resistance, _) => Resistance::new(literal.value(), tolerance, coefficient)
            .map(Quantity::from)
            .map_err(EvalError::quantity(span)),
        (_, Some(unit)) if coefficient.is_some() => Err(EvalError::CoefficientWithoutResistance {
            unit: **unit,
            span: unit.span(),
        }),
        (
            Kind::Voltage
            | Kind::Current
            | Kind::Power
            | Kind::Energy
            | Kind::Time
            | Kind::Factor
            | Kind::SqVoltage
            | Kind::SqCurrent,
            _,
        ) => Quantity::new(kind, literal.value(), tolerance).map_err(EvalError::quantity(span)),
    }
}

#[cfg(test)]
mod tests {
    use eecal_parser::parse_expression;
    use eecal_quantity::{Temperature, Tolerance, util::is_close};

    use super::*;

    fn eval(source: &str, environment: &Environment) -> Result<Outcome, EvalError> {
        let expr = parse_expression(source, None).expect("valid expression");
        eval_expr(&expr, environment)
    }

    fn eval_quantity(source: &str, environment: &Environment) -> Quantity {
        let outcome = eval(source, environment).expect("expression should evaluate");
        outcome.into_quantity().expect("expression should be typed")
    }

    fn divider_environment() -> Environment {
        let mut environment = Environment::new();
        for (name, source) in [("r1", "12k 1%"), ("r2", "24k 1%"), ("vin", "5V 2%")] {
            let quantity = eval_quantity(source, &environment);
            environment.assign(name, quantity);
        }
        environment
    }

    #[test]
    fn literal_without_unit_is_a_resistance() {
        let environment = Environment::new();
        let quantity = eval_quantity("351 5.5% 200ppm", &environment);

        let resistance = quantity.as_resistance().expect("should be a resistance");
        assert!(is_close(resistance.mean(), 351.0));
        assert_eq!(resistance.alpha_ppm(), Some(200));
        assert_eq!(resistance.temperature(), Temperature::Celsius(20.0));
        assert!(matches!(
            resistance.tolerance(),
            Tolerance::Relative(t) if is_close(t, 0.055)
        ));
    }

    #[test]
    fn literal_units_select_the_kind() {
        let environment = Environment::new();
        assert_eq!(eval_quantity("12V", &environment).kind(), Kind::Voltage);
        assert_eq!(eval_quantity("10µA 10%", &environment).kind(), Kind::Current);
        assert_eq!(eval_quantity("4.7kΩ", &environment).kind(), Kind::Resistance);
        assert_eq!(eval_quantity("2W", &environment).kind(), Kind::Power);
        assert_eq!(eval_quantity("3J", &environment).kind(), Kind::Energy);
        assert_eq!(eval_quantity("1ms", &environment).kind(), Kind::Time);
        assert_eq!(eval_quantity("0.5f", &environment).kind(), Kind::Factor);
    }

    #[test]
    fn coefficient_on_a_voltage() {
        let environment = Environment::new();
        let error = eval("12V 1% 100ppm", &environment).expect_err("not a resistance");

        let EvalError::CoefficientWithoutResistance { unit, span } = error else {
            panic!("expected a coefficient error");
        };
        assert_eq!(unit, Unit::Volt);
        assert_eq!(span.start().offset, 2);
    }

    #[test]
    fn zero_resistance_is_rejected() {
        let environment = Environment::new();
        let error = eval("0", &environment).expect_err("zero resistance");
        assert!(matches!(
            error,
            EvalError::Quantity {
                error: eecal_quantity::QuantityError::InvalidResistance { .. },
                ..
            }
        ));
    }

    #[test]
    fn parallel_of_variables() {
        let environment = divider_environment();
        let quantity = eval_quantity("r1 | r2", &environment);

        assert_eq!(quantity.kind(), Kind::Resistance);
        assert!(is_close(quantity.mean(), 8000.0));
    }

    #[test]
    fn ohms_law_through_parentheses() {
        let environment = divider_environment();
        let quantity = eval_quantity("vin / (r1 + r2)", &environment);

        assert_eq!(quantity.kind(), Kind::Current);
    }

    #[test]
    fn voltage_divider_as_factor_and_voltage() {
        let environment = divider_environment();

        let ratio = eval_quantity("r1 // r2", &environment);
        assert_eq!(ratio.kind(), Kind::Factor);

        let vout = eval_quantity("vin * (r1 // r2)", &environment);
        assert_eq!(vout.kind(), Kind::Voltage);
        assert!(vout.min() < vout.max());
    }

    #[test]
    fn squaring_and_power() {
        let environment = divider_environment();
        let power = eval_quantity("vin ^ 2 / r1", &environment);
        assert_eq!(power.kind(), Kind::Power);
    }

    #[test]
    fn temperature_shift_requires_a_coefficient() {
        let environment = divider_environment();
        let error = eval("r1 @ 85°C", &environment).expect_err("no coefficient");

        assert!(matches!(
            error,
            EvalError::Quantity {
                error: eecal_quantity::QuantityError::MissingCoefficient,
                ..
            }
        ));
        assert_eq!(error.span().end().offset, 10);
    }

    #[test]
    fn temperature_shift_of_a_literal() {
        let environment = Environment::new();
        let quantity = eval_quantity("(1k 0% 100ppm) @ 120", &environment);

        let resistance = quantity.as_resistance().expect("should be a resistance");
        assert_eq!(resistance.temperature(), Temperature::Celsius(120.0));
        assert!(is_close(resistance.mean(), 1010.0));
    }

    #[test]
    fn unknown_variable_span() {
        let environment = divider_environment();
        let error = eval("r1 + r3", &environment).expect_err("r3 is unknown");

        assert_eq!(
            error,
            EvalError::UnknownVariable {
                name: "r3".to_string(),
                span: error.span(),
            }
        );
        assert_eq!(error.span().start().offset, 5);
        assert_eq!(error.span().end().offset, 7);
    }

    #[test]
    fn undefined_result_as_a_whole_expression() {
        let environment = Environment::new();
        let outcome = eval("1f + 2f", &environment).expect("factor addition is undefined");
        assert_eq!(outcome, Outcome::Undefined);
    }

    #[test]
    fn undefined_result_as_an_operand() {
        let environment = divider_environment();
        let error = eval("(1f + 2f) * vin", &environment).expect_err("untyped operand");

        let EvalError::UntypedOperand { op, untyped, span } = error else {
            panic!("expected an untyped operand");
        };
        assert_eq!(op, Operation::Mul);
        assert_eq!(untyped, Untyped::Undefined);
        assert_eq!(span.start().offset, 0);
        assert_eq!(span.end().offset, 9);
    }

    #[test]
    fn incompatible_kinds() {
        let environment = divider_environment();
        let error = eval("vin + r1", &environment).expect_err("voltage plus resistance");
        assert!(matches!(
            error,
            EvalError::Quantity {
                error: eecal_quantity::QuantityError::IncompatibleOperands { .. },
                ..
            }
        ));
    }
}
