//! Operators and delimiters

use nom::{
    Parser as _,
    bytes::complete::tag,
    character::complete::{char, satisfy},
    combinator::{eof, peek, value},
};

use crate::token::{
    InputSpan, Parser, Result,
    error::{ExpectSymbol, TokenError},
    util::{Token, token},
};

/// Succeeds without consuming input when the next character is not `c`, or
/// at the end of the input.
///
/// This keeps `/` from matching the first half of `//`.
fn next_char_is_not<'a>(c: char) -> impl Parser<'a, (), TokenError> {
    let next_char_is_not_c = peek(satisfy(move |next_char: char| next_char != c)).map(|_| ());
    let reached_end_of_file = eof.map(|_| ());
    let mut parser = value((), next_char_is_not_c.or(reached_end_of_file));

    move |input: InputSpan<'a>| parser.parse(input)
}

/// Parses the '@' symbol token.
pub fn at(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('@'), TokenError::expected_symbol(ExpectSymbol::At)).parse(input)
}

/// Parses the '|' symbol token.
pub fn bar(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('|'), TokenError::expected_symbol(ExpectSymbol::Bar)).parse(input)
}

/// Parses the '^' symbol token.
pub fn caret(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('^'), TokenError::expected_symbol(ExpectSymbol::Caret)).parse(input)
}

/// Parses the '°C' symbol token.
pub fn degree_celsius(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        tag("°C"),
        TokenError::expected_symbol(ExpectSymbol::DegreeCelsius),
    )
    .parse(input)
}

/// Parses the '=' symbol token.
pub fn equals(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('='), TokenError::expected_symbol(ExpectSymbol::Equals)).parse(input)
}

/// Parses the '-' symbol token.
pub fn minus(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('-'), TokenError::expected_symbol(ExpectSymbol::Minus)).parse(input)
}

/// Parses the '(' symbol token.
pub fn paren_left(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char('('),
        TokenError::expected_symbol(ExpectSymbol::ParenLeft),
    )
    .parse(input)
}

/// Parses the ')' symbol token.
pub fn paren_right(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char(')'),
        TokenError::expected_symbol(ExpectSymbol::ParenRight),
    )
    .parse(input)
}

/// Parses the '+' symbol token.
pub fn plus(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('+'), TokenError::expected_symbol(ExpectSymbol::Plus)).parse(input)
}

/// Parses the '/' symbol token, but not the first half of '//'.
pub fn slash(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        (char('/'), next_char_is_not('/')),
        TokenError::expected_symbol(ExpectSymbol::Slash),
    )
    .parse(input)
}

/// Parses the '//' symbol token.
pub fn slash_slash(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        tag("//"),
        TokenError::expected_symbol(ExpectSymbol::SlashSlash),
    )
    .parse(input)
}

/// Parses the '*' symbol token.
pub fn star(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('*'), TokenError::expected_symbol(ExpectSymbol::Star)).parse(input)
}
