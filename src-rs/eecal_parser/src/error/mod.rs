//! Error handling for the eecal parser.

use std::fmt;

use eecal_ast::expression::BinaryOpNode;
use eecal_shared::error::{AsEecalError, Context, ErrorLocation};

use crate::{
    InputSpan,
    token::{Token, error::TokenError},
};

mod context;

pub mod reason;
use reason::{NumberKind, ParserErrorReason};

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserError {
    /// The location in the source where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    /// Replaces the reason, keeping the offset
    const fn with_reason(self, reason: ParserErrorReason) -> Self {
        Self { reason, ..self }
    }

    const fn new_from_token_error(error: TokenError, reason: ParserErrorReason) -> Self {
        Self {
            reason,
            error_offset: error.offset,
        }
    }

    pub(crate) const fn expect_expr(error: Self) -> Self {
        error.with_reason(ParserErrorReason::expect_expr())
    }

    pub(crate) fn binary_op_missing_second_operand(
        operator: &BinaryOpNode,
    ) -> impl Fn(Self) -> Self {
        let reason =
            ParserErrorReason::binary_op_missing_second_operand(operator.span(), **operator);
        move |error| error.with_reason(reason)
    }

    pub(crate) fn paren_missing_expr(paren_left: &Token<'_>) -> impl Fn(Self) -> Self {
        let reason = ParserErrorReason::paren_missing_expr(paren_left.lexeme_span);
        move |error| error.with_reason(reason)
    }

    pub(crate) fn unclosed_paren(paren_left: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let reason = ParserErrorReason::unclosed_paren(paren_left.lexeme_span);
        move |error| Self::new_from_token_error(error, reason)
    }

    pub(crate) fn power_missing_exponent(caret: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let reason = ParserErrorReason::power_missing_exponent(caret.lexeme_span);
        move |error| Self::new_from_token_error(error, reason)
    }

    pub(crate) fn at_missing_temperature(at: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let reason = ParserErrorReason::at_missing_temperature(at.lexeme_span);
        move |error| Self::new_from_token_error(error, reason)
    }

    pub(crate) fn assign_missing_value(equals: &Token<'_>) -> impl Fn(Self) -> Self {
        let reason = ParserErrorReason::assign_missing_value(equals.lexeme_span);
        move |error| error.with_reason(reason)
    }

    pub(crate) fn invalid_number(number: &Token<'_>, kind: NumberKind) -> Self {
        Self {
            error_offset: number.lexeme_span.start().offset,
            reason: ParserErrorReason::invalid_number(number.lexeme_span, kind),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ParserError {}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "this will only ever care about the EOF error kind"
        )]
        let reason = match kind {
            // `all_consuming` reports leftover input as `Eof`
            nom::error::ErrorKind::Eof => ParserErrorReason::unexpected_token(),
            _ => ParserErrorReason::nom_error(kind),
        };

        Self {
            reason,
            error_offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<TokenError> for ParserError {
    fn from(e: TokenError) -> Self {
        Self {
            reason: ParserErrorReason::token_error(e.kind),
            error_offset: e.offset,
        }
    }
}

impl AsEecalError for ParserError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let location = ErrorLocation::from_source_and_offset(source, self.error_offset);
        Some(location)
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        context::from_source(self.error_offset, &self.reason, source)
    }
}
