//! Parser for statements, one per line.
//!
//! A line is either an assignment (`r1 = 4.7k 1%`) or an expression whose
//! result is displayed (`r1 | r2`).

use eecal_ast::{
    naming::Identifier,
    statement::{Statement, StatementNode},
};
use nom::{
    Parser as _,
    branch::alt,
    combinator::all_consuming,
};

use crate::{
    error::{ErrorHandlingParser, ParserError},
    expression,
    token::{inline_whitespace, naming::identifier, symbol::equals},
    util::{InputSpan, Result, node_from_token, node_spanning},
};

/// Parses a statement
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, StatementNode, ParserError> {
    let (rest, _) = inline_whitespace.convert_errors::<ParserError>().parse(input)?;
    all_consuming(statement).parse(rest)
}

fn statement(input: InputSpan<'_>) -> Result<'_, StatementNode, ParserError> {
    alt((assignment, expression_statement)).parse(input)
}

/// Parses `name = expression`
///
/// Once the `=` has been seen, a missing value is a failure rather than a
/// reason to try the line as an expression.
fn assignment(input: InputSpan<'_>) -> Result<'_, StatementNode, ParserError> {
    let (rest, name_token) = identifier.convert_errors::<ParserError>().parse(input)?;
    let (rest, equals_token) = equals.convert_errors::<ParserError>().parse(rest)?;

    let (rest, value) = expression::parse
        .or_fail_with(ParserError::assign_missing_value(&equals_token))
        .parse(rest)?;

    let name = node_from_token(
        &name_token,
        Identifier::new(name_token.lexeme_str.to_string()),
    );

    let (value_span, whitespace_span) = (value.span(), value.whitespace_span());
    let statement = node_spanning(
        name_token.lexeme_span,
        value_span,
        whitespace_span,
        Statement::assign(name, value),
    );

    Ok((rest, statement))
}

fn expression_statement(input: InputSpan<'_>) -> Result<'_, StatementNode, ParserError> {
    let (rest, expr) = expression::parse(input)?;
    Ok((rest, expr.wrap(Statement::expr)))
}
