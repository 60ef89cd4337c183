//! Error handling for the token parsers

use std::fmt;

use nom::error::ParseError;

use super::InputSpan;

pub use crate::error::ErrorHandlingParser;

/// An error that occurred during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the source where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific token
    Expect(ExpectKind),
    /// A token that started but could not be finished
    Incomplete(IncompleteKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected a temperature coefficient such as `100ppm`
    Coefficient,
    /// Expected a variable name
    Identifier,
    /// Expected a number with an optional prefix and unit
    Magnitude,
    /// Expected a plain number
    Number,
    /// Expected a tolerance such as `5%`
    Percentage,
    /// Expected a symbol
    Symbol(ExpectSymbol),
}

/// The different symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// Expected '@' symbol
    At,
    /// Expected '|' symbol
    Bar,
    /// Expected '^' symbol
    Caret,
    /// Expected '°C' symbol
    DegreeCelsius,
    /// Expected '=' symbol
    Equals,
    /// Expected '-' symbol
    Minus,
    /// Expected '(' symbol
    ParenLeft,
    /// Expected ')' symbol
    ParenRight,
    /// Expected '+' symbol
    Plus,
    /// Expected '/' symbol
    Slash,
    /// Expected '//' symbol
    SlashSlash,
    /// Expected '*' symbol
    Star,
}

/// Tokens that started but were left unfinished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// A decimal point without digits after it
    InvalidDecimalPart {
        /// The offset of the decimal point
        decimal_point_offset: usize,
    },
    /// An exponent marker without digits after it
    InvalidExponentPart {
        /// The offset of the exponent 'e' character
        e_offset: usize,
    },
}

impl TokenError {
    /// Updates the error kind
    ///
    /// Only a nom error may be updated. Anything else means a `token` parser
    /// was nested inside another one.
    fn update_kind(self, kind: TokenErrorKind) -> Self {
        let is_nom_error = matches!(self.kind, TokenErrorKind::NomError(_));
        assert!(
            is_nom_error,
            "Cannot update an error that is not a nom error! (attempting to update {} to {})",
            self.kind, kind
        );

        Self { kind, ..self }
    }

    pub fn expected_coefficient(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Coefficient))
    }

    pub fn expected_identifier(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Identifier))
    }

    pub fn expected_magnitude(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Magnitude))
    }

    pub fn expected_number(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Number))
    }

    pub fn expected_percentage(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Percentage))
    }

    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }

    pub fn invalid_decimal_part(decimal_point_span: InputSpan<'_>) -> impl Fn(Self) -> Self {
        let decimal_point_offset = decimal_point_span.location_offset();
        move |error: Self| {
            error.update_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidDecimalPart {
                    decimal_point_offset,
                },
            ))
        }
    }

    pub fn invalid_exponent_part(e_span: InputSpan<'_>) -> impl Fn(Self) -> Self {
        let e_offset = e_span.location_offset();
        move |error: Self| {
            error.update_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidExponentPart { e_offset },
            ))
        }
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: TokenErrorKind::NomError(kind),
            offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<nom::error::Error<InputSpan<'a>>> for TokenError {
    fn from(e: nom::error::Error<InputSpan<'a>>) -> Self {
        Self::from_error_kind(e.input, e.code)
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expect(expect) => write!(f, "expected {expect}"),
            Self::Incomplete(IncompleteKind::InvalidDecimalPart { .. }) => {
                write!(f, "expected digits after the decimal point")
            }
            Self::Incomplete(IncompleteKind::InvalidExponentPart { .. }) => {
                write!(f, "expected digits in the exponent")
            }
            Self::NomError(kind) => write!(f, "unexpected input ({})", kind.description()),
        }
    }
}

impl fmt::Display for ExpectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coefficient => write!(f, "temperature coefficient"),
            Self::Identifier => write!(f, "variable name"),
            Self::Magnitude => write!(f, "quantity"),
            Self::Number => write!(f, "number"),
            Self::Percentage => write!(f, "tolerance"),
            Self::Symbol(symbol) => write!(f, "`{symbol}`"),
        }
    }
}

impl fmt::Display for ExpectSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::At => "@",
            Self::Bar => "|",
            Self::Caret => "^",
            Self::DegreeCelsius => "°C",
            Self::Equals => "=",
            Self::Minus => "-",
            Self::ParenLeft => "(",
            Self::ParenRight => ")",
            Self::Plus => "+",
            Self::Slash => "/",
            Self::SlashSlash => "//",
            Self::Star => "*",
        };
        write!(f, "{symbol}")
    }
}
