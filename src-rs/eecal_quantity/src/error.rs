use std::fmt;

use thiserror::Error;

use crate::{kind::Kind, resistance::Temperature};

/// An operator of the quantity algebra, used to describe failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition, or series connection of resistances
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division
    Div,
    /// Raising to a power
    Pow,
    /// Parallel connection of resistances
    Parallel,
    /// Voltage divider ratio of two resistances
    VoltageDivider,
    /// Temperature shift of a resistance
    AtTemperature,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Parallel => "|",
            Self::VoltageDivider => "//",
            Self::AtTemperature => "@",
        };

        write!(f, "{symbol}")
    }
}

/// Errors raised while constructing or combining quantities
#[derive(Debug, Clone, PartialEq, Error)]
#[expect(missing_docs, reason = "the error messages document the fields")]
pub enum QuantityError {
    /// A resistance with a mean of zero or less
    #[error("resistance must be greater than zero, got {value}")]
    InvalidResistance { value: f64 },

    /// A negative or NaN tolerance
    #[error("tolerance must be a non-negative number, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },

    /// A NaN or infinite nominal value
    #[error("value must be a finite number, got {value}")]
    InvalidValue { value: f64 },

    /// A temperature shift of a resistance that has no coefficient
    #[error("cannot change the temperature of a resistance without a temperature coefficient")]
    MissingCoefficient,

    /// A voltage divider across resistances at different temperatures
    #[error("voltage divider needs both resistances at the same temperature, got {lhs} and {rhs}")]
    TemperatureMismatch { lhs: Temperature, rhs: Temperature },

    /// Two quantities that the operator's conversion table does not combine
    #[error("cannot apply `{op}` to {lhs} and {rhs}")]
    IncompatibleOperands { op: Operation, lhs: Kind, rhs: Kind },

    /// An operator that is not defined for the quantity kind at all
    #[error("`{op}` is not supported for {kind}")]
    UnsupportedOperation { op: Operation, kind: Kind },

    /// A division whose divisor bounds include zero
    #[error("cannot divide by a range that includes zero")]
    DivisionByZero,

    /// A result whose bounds overflowed or became NaN
    #[error("result of `{op}` is not a finite number")]
    NonFiniteResult { op: Operation },
}
