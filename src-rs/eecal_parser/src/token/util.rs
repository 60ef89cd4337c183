use eecal_shared::span::Span;
use nom::{Parser as NomParser, character::complete::space0, combinator::recognize};

use crate::{
    token::{
        InputSpan, Parser, Result,
        error::{ErrorHandlingParser, TokenError},
    },
    util::source_location_from,
};

/// A lexical element of a line.
///
/// The lexeme is the matched text; the whitespace is whatever inline
/// whitespace followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme_str: &'a str,
    pub lexeme_span: Span,
    pub whitespace_span: Span,
}

/// Parses inline whitespace (spaces and tabs). Always succeeds.
pub fn inline_whitespace(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    space0.parse(input)
}

/// Wraps a parser so that it produces a [`Token`] and consumes the trailing
/// whitespace.
///
/// Errors from `f` go through `convert_error`, which should name the token
/// that was expected.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input: InputSpan<'a>| {
        // capture the parser and convert the error function
        let f = |input| (&mut f).parse(input);
        let convert_error = |error| (&convert_error)(error);

        let (rest, lexeme) = recognize(f).convert_error_to(convert_error).parse(input)?;
        let lexeme_span = Span::new(source_location_from(lexeme), source_location_from(rest));

        let (rest, whitespace) = inline_whitespace.parse(rest)?;
        let whitespace_span =
            Span::new(source_location_from(whitespace), source_location_from(rest));

        let token = Token {
            lexeme_str: lexeme.fragment(),
            lexeme_span,
            whitespace_span,
        };

        Ok((rest, token))
    }
}
