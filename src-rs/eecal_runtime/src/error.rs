//! Errors raised while evaluating a line

use std::fmt;

use eecal_ast::literal::Unit;
use eecal_parser::error::ParserError;
use eecal_quantity::{Operation, QuantityError};
use eecal_shared::{
    error::{AsEecalError, Context, ErrorLocation},
    span::Span,
};
use thiserror::Error;

/// A result that carries no unit and cannot be used as an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Untyped {
    /// Bare bounds from a scalar fallback
    Bounds,
    /// The result of an undefined operation, such as adding two factors
    Undefined,
}

impl fmt::Display for Untyped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds => write!(f, "bare bounds"),
            Self::Undefined => write!(f, "an undefined result"),
        }
    }
}

/// An error raised while evaluating an expression
///
/// Each error carries the span of the expression it was raised for.
#[derive(Debug, Clone, PartialEq, Error)]
#[expect(missing_docs, reason = "the error messages document the fields")]
pub enum EvalError {
    /// A variable that has not been assigned
    #[error("unknown variable `{name}`")]
    UnknownVariable { name: String, span: Span },

    /// An operand that is not a typed quantity
    #[error("`{op}` needs a quantity with a unit, found {untyped}")]
    UntypedOperand {
        op: Operation,
        untyped: Untyped,
        span: Span,
    },

    /// An assignment of a value that is not a typed quantity
    #[error("cannot assign {untyped} to `{name}`")]
    UntypedAssignment {
        name: String,
        untyped: Untyped,
        span: Span,
    },

    /// A temperature coefficient on a literal that is not a resistance
    #[error("a temperature coefficient only applies to resistances, not to `{unit}` values")]
    CoefficientWithoutResistance { unit: Unit, span: Span },

    /// A failure of the quantity algebra
    #[error("{error}")]
    Quantity { error: QuantityError, span: Span },
}

impl EvalError {
    pub(crate) fn quantity(span: Span) -> impl Fn(QuantityError) -> Self {
        move |error| Self::Quantity { error, span }
    }

    /// The span of the expression the error was raised for
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnknownVariable { span, .. }
            | Self::UntypedOperand { span, .. }
            | Self::UntypedAssignment { span, .. }
            | Self::CoefficientWithoutResistance { span, .. }
            | Self::Quantity { span, .. } => *span,
        }
    }
}

impl AsEecalError for EvalError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownVariable { name, .. } => vec![Context::Help(format!(
                "assign it on an earlier line, as in `{name} = 1k`"
            ))],
            Self::UntypedOperand { .. } | Self::UntypedAssignment { .. } => {
                vec![Context::Note(
                    "adding or subtracting factors, or a power other than 2, has no typed result"
                        .to_string(),
                )]
            }
            Self::CoefficientWithoutResistance { .. } => vec![Context::Help(
                "write the literal without a unit, or with `Ω`, to make it a resistance"
                    .to_string(),
            )],
            Self::Quantity { error, .. } => quantity_context(error),
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let span = self.span();
        let location = if span.is_empty() {
            ErrorLocation::from_source_and_offset(source, span.start().offset)
        } else {
            ErrorLocation::from_source_and_span(source, span.start().offset, span.len())
        };

        Some(location)
    }
}

fn quantity_context(error: &QuantityError) -> Vec<Context> {
    match error {
        QuantityError::MissingCoefficient => vec![Context::Help(
            "give the resistance a temperature coefficient, as in `1k 1% 100ppm`".to_string(),
        )],
        QuantityError::TemperatureMismatch { .. } => vec![Context::Help(
            "shift both resistances to the same temperature with `@`".to_string(),
        )],
        QuantityError::UnsupportedOperation {
            op: Operation::Pow,
            ..
        } => vec![Context::Note(
            "only voltages and currents can be squared".to_string(),
        )],
        QuantityError::IncompatibleOperands {
            op: Operation::Parallel | Operation::VoltageDivider,
            ..
        } => vec![Context::Note(
            "`|` and `//` only combine resistances".to_string(),
        )],
        QuantityError::InvalidResistance { .. }
        | QuantityError::InvalidTolerance { .. }
        | QuantityError::InvalidValue { .. }
        | QuantityError::IncompatibleOperands { .. }
        | QuantityError::UnsupportedOperation { .. }
        | QuantityError::DivisionByZero
        | QuantityError::NonFiniteResult { .. } => vec![],
    }
}

/// Why a line produced no output
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The line asked to end the session
    #[error("exit requested")]
    Exit,
    /// The line is not a valid statement
    #[error(transparent)]
    Parse(#[from] ParserError),
    /// The statement could not be evaluated
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl AsEecalError for LineError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Exit => vec![],
            Self::Parse(error) => error.context(),
            Self::Eval(error) => error.context(),
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::Exit => None,
            Self::Parse(error) => error.error_location(source),
            Self::Eval(error) => error.error_location(source),
        }
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        match self {
            Self::Exit => vec![],
            Self::Parse(error) => error.context_with_source(source),
            Self::Eval(error) => error.context_with_source(source),
        }
    }
}

/// A line error within a script
///
/// Locations are reported against the whole script rather than the line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    line_start: usize,
    line_len: usize,
    error: LineError,
}

impl ScriptError {
    pub(crate) const fn new(line_start: usize, line_len: usize, error: LineError) -> Self {
        Self {
            line_start,
            line_len,
            error,
        }
    }

    /// The error of the line
    #[must_use]
    pub const fn error(&self) -> &LineError {
        &self.error
    }

    fn line<'a>(&self, script: &'a str) -> &'a str {
        script
            .get(self.line_start..self.line_start + self.line_len)
            .unwrap_or_default()
    }
}

impl AsEecalError for ScriptError {
    fn message(&self) -> String {
        self.error.message()
    }

    fn context(&self) -> Vec<Context> {
        self.error.context()
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        self.error
            .error_location(self.line(source))
            .map(|location| location.relocate(source, self.line_start))
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        self.error
            .context_with_source(self.line(source))
            .into_iter()
            .map(|(context, location)| {
                let location = location.map(|location| location.relocate(source, self.line_start));
                (context, location)
            })
            .collect()
    }
}
