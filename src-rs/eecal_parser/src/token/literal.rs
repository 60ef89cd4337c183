//! Numbers and the parts of a quantity literal.
//!
//! A quantity literal is written as up to three tokens:
//!
//! - a magnitude: a number with an optional SI prefix and unit attached,
//!   such as `4.7kΩ`, `-12V` or `351`
//! - a tolerance percentage, such as `5.5%`
//! - a temperature coefficient, such as `-50ppm`
//!
//! No whitespace is allowed inside a token.

use eecal_ast::literal::Unit;
use nom::{
    Parser as _,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of, satisfy},
    combinator::opt,
};

use crate::token::{
    InputSpan, Result,
    error::{ErrorHandlingParser, TokenError},
    util::{Token, token},
};

/// Parses a decimal point followed by digits
fn decimal_part(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    let (rest, decimal_point_span) = tag::<_, _, TokenError>(".").parse(input)?;
    let (rest, _) = digit1
        .or_fail_with(TokenError::invalid_decimal_part(decimal_point_span))
        .parse(rest)?;
    Ok((rest, ()))
}

/// Parses an exponent such as `e10` or `E-3`
fn exponent_part(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    let (rest, e_span) = tag::<_, _, TokenError>("e").or(tag("E")).parse(input)?;
    let (rest, _) = opt(one_of::<_, _, TokenError>("+-")).parse(rest)?;
    let (rest, _) = digit1
        .or_fail_with(TokenError::invalid_exponent_part(e_span))
        .parse(rest)?;
    Ok((rest, ()))
}

/// Parses the digits, decimal part and exponent of a number, without a sign
/// and without consuming whitespace.
fn unsigned_number_body(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    let (rest, _) = (digit1, opt(decimal_part), opt(exponent_part)).parse(input)?;
    Ok((rest, ()))
}

fn number_body(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    let (rest, _) = (opt(one_of("+-")), unsigned_number_body).parse(input)?;
    Ok((rest, ()))
}

/// Parses a number literal, supporting an optional sign, decimal part and
/// exponent.
///
/// The accepted forms are a subset of what `f64::from_str` accepts, so the
/// lexeme can always be parsed with `str::parse::<f64>`.
pub fn number(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(number_body, TokenError::expected_number).parse(input)
}

/// Checks whether a character is an SI prefix in this configuration
fn is_prefix(c: char, allow_ascii_micro: bool) -> bool {
    match c {
        'u' => allow_ascii_micro,
        'p' | 'n' | 'µ' | 'μ' | 'm' | 'k' | 'M' | 'G' | 'T' => true,
        _ => false,
    }
}

fn magnitude_body(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    let allow_ascii_micro = input.extra.allow_ascii_micro;
    let prefix = satisfy::<_, _, TokenError>(|c| is_prefix(c, allow_ascii_micro));
    let unit = satisfy::<_, _, TokenError>(|c| Unit::from_symbol(c).is_some());

    let (rest, ()) = number_body(input)?;
    let (rest, _) = (opt(prefix), opt(unit)).parse(rest)?;
    Ok((rest, ()))
}

/// Parses a number with an optional SI prefix and unit written directly
/// after it, such as `4.7kΩ`.
pub fn magnitude(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(magnitude_body, TokenError::expected_magnitude).parse(input)
}

/// Parses a tolerance percentage, such as `5%` or `0.1%`.
pub fn percentage(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        (unsigned_number_body, char('%')),
        TokenError::expected_percentage,
    )
    .parse(input)
}

/// Parses a temperature coefficient in ppm per °C, such as `200ppm`.
pub fn coefficient(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        (opt(one_of("+-")), digit1, tag("ppm")),
        TokenError::expected_coefficient,
    )
    .parse(input)
}

/// The pieces of a magnitude lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeParts<'a> {
    pub number: &'a str,
    pub prefix: Option<char>,
    pub unit: Option<char>,
}

impl<'a> MagnitudeParts<'a> {
    /// Splits a lexeme matched by [`magnitude`].
    ///
    /// A number always ends in a digit, so any trailing non-digit characters
    /// are the unit and the prefix, in that order from the end.
    pub fn split(lexeme: &'a str) -> Self {
        let mut number = lexeme;

        let unit = Self::pop_if(&mut number, |c| Unit::from_symbol(c).is_some());
        let prefix = Self::pop_if(&mut number, |c| !c.is_ascii_digit());

        Self {
            number,
            prefix,
            unit,
        }
    }

    fn pop_if(text: &mut &'a str, predicate: impl Fn(char) -> bool) -> Option<char> {
        let current: &'a str = *text;
        let last = current.chars().next_back().filter(|c| predicate(*c))?;
        *text = &current[..current.len() - last.len_utf8()];
        Some(last)
    }
}
