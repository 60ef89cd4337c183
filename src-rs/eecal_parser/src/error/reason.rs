//! Why a line failed to parse
//!
//! - **Expect**: a construct was required but something else was found
//! - **Incomplete**: a construct started and was cut off, with the span of
//!   the part that started it
//! - **InvalidNumber**: a number was well formed but cannot be represented
//! - **UnexpectedToken**: input was left over after a complete statement
//! - **TokenError** and **NomError**: low-level errors

use std::fmt;

use eecal_ast::expression::BinaryOp;
use eecal_shared::span::Span;

use crate::token::error::TokenErrorKind;

/// The different kinds of errors that can occur during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// Expected a construct but found something else
    Expect(ExpectKind),
    /// Found an incomplete construct
    Incomplete {
        /// The span of the part that started the construct
        cause: Span,
        /// What was missing
        kind: IncompleteKind,
    },
    /// A number that cannot be represented
    InvalidNumber {
        /// The span of the number
        cause: Span,
        /// Where the number appeared
        kind: NumberKind,
    },
    /// Found an unexpected token
    UnexpectedToken,
    /// A token-level error occurred
    TokenError(TokenErrorKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

impl ParserErrorReason {
    pub(crate) const fn expect_expr() -> Self {
        Self::Expect(ExpectKind::Expr)
    }

    pub(crate) const fn binary_op_missing_second_operand(
        operator_span: Span,
        operator: BinaryOp,
    ) -> Self {
        Self::Incomplete {
            cause: operator_span,
            kind: IncompleteKind::BinaryOpMissingSecondOperand { operator },
        }
    }

    pub(crate) const fn paren_missing_expr(paren_left_span: Span) -> Self {
        Self::Incomplete {
            cause: paren_left_span,
            kind: IncompleteKind::ParenMissingExpr,
        }
    }

    pub(crate) const fn unclosed_paren(paren_left_span: Span) -> Self {
        Self::Incomplete {
            cause: paren_left_span,
            kind: IncompleteKind::UnclosedParen,
        }
    }

    pub(crate) const fn power_missing_exponent(caret_span: Span) -> Self {
        Self::Incomplete {
            cause: caret_span,
            kind: IncompleteKind::PowerMissingExponent,
        }
    }

    pub(crate) const fn at_missing_temperature(at_span: Span) -> Self {
        Self::Incomplete {
            cause: at_span,
            kind: IncompleteKind::AtMissingTemperature,
        }
    }

    pub(crate) const fn assign_missing_value(equals_span: Span) -> Self {
        Self::Incomplete {
            cause: equals_span,
            kind: IncompleteKind::AssignMissingValue,
        }
    }

    pub(crate) const fn invalid_number(cause: Span, kind: NumberKind) -> Self {
        Self::InvalidNumber { cause, kind }
    }

    pub(crate) const fn unexpected_token() -> Self {
        Self::UnexpectedToken
    }

    pub(crate) const fn token_error(kind: TokenErrorKind) -> Self {
        Self::TokenError(kind)
    }

    pub(crate) const fn nom_error(kind: nom::error::ErrorKind) -> Self {
        Self::NomError(kind)
    }
}

/// The constructs that can be expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// An expression: a quantity, a variable or a parenthesized expression
    Expr,
}

/// The ways a construct can be cut off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// `a +` without the right-hand side
    BinaryOpMissingSecondOperand {
        /// The operator that needs an operand
        operator: BinaryOp,
    },
    /// `(` followed by something other than an expression
    ParenMissingExpr,
    /// `(` without a matching `)`
    UnclosedParen,
    /// `^` without an exponent
    PowerMissingExponent,
    /// `@` without a temperature
    AtMissingTemperature,
    /// `name =` without a value
    AssignMissingValue,
}

/// Where an unrepresentable number appeared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// The value of a quantity, an exponent or a temperature
    Value,
    /// A tolerance percentage
    Tolerance,
    /// A temperature coefficient, which must fit in 32 bits
    Coefficient,
}

const fn operator_symbol(operator: BinaryOp) -> &'static str {
    match operator {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Parallel => "|",
        BinaryOp::VoltageDivider => "//",
    }
}

impl fmt::Display for ParserErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expect(ExpectKind::Expr) => write!(f, "expected a quantity or a variable"),
            Self::Incomplete { cause: _, kind } => match kind {
                IncompleteKind::BinaryOpMissingSecondOperand { operator } => write!(
                    f,
                    "expected second operand after `{}`",
                    operator_symbol(*operator)
                ),
                IncompleteKind::ParenMissingExpr => {
                    write!(f, "expected expression inside parentheses")
                }
                IncompleteKind::UnclosedParen => write!(f, "unclosed `(`"),
                IncompleteKind::PowerMissingExponent => write!(f, "expected exponent after `^`"),
                IncompleteKind::AtMissingTemperature => {
                    write!(f, "expected temperature after `@`")
                }
                IncompleteKind::AssignMissingValue => write!(f, "expected value after `=`"),
            },
            Self::InvalidNumber { cause: _, kind } => match kind {
                NumberKind::Value => write!(f, "number is out of range"),
                NumberKind::Tolerance => write!(f, "tolerance is out of range"),
                NumberKind::Coefficient => write!(f, "temperature coefficient is out of range"),
            },
            Self::UnexpectedToken => write!(f, "unexpected token"),
            Self::TokenError(kind) => write!(f, "{kind}"),
            Self::NomError(kind) => write!(
                f,
                "unexpected parser error `{}`, please report this as a bug",
                kind.description()
            ),
        }
    }
}
