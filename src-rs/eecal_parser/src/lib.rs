#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Parser for the eecal calculator language

use eecal_ast::{expression::ExprNode, statement::StatementNode};

mod config;
pub mod error;
mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

mod expression;
mod statement;

pub use config::Config;

/// Parses a single line as a statement.
///
/// # Errors
///
/// Returns an error if the line is not a valid assignment or expression.
pub fn parse_statement(
    input: &str,
    config: Option<Config>,
) -> Result<StatementNode, error::ParserError> {
    parse(input, config, statement::parse_complete)
}

/// Parses a single expression.
///
/// # Errors
///
/// Returns an error if the input is not a valid expression.
pub fn parse_expression(
    input: &str,
    config: Option<Config>,
) -> Result<ExprNode, error::ParserError> {
    parse(input, config, expression::parse_complete)
}

fn parse<T, E>(
    input: &str,
    config: Option<Config>,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, E>,
) -> Result<T, E> {
    let config = config.unwrap_or_default();
    let input = InputSpan::new_extra(input, config);
    let result = parser(input);

    match result {
        Ok((_rest, ast)) => Ok(ast),
        Err(nom::Err::Incomplete(_needed)) => unreachable!(
            "This should never happen because we use `complete` combinators rather than `stream` combinators"
        ),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
    }
}
