use eecal_ast::Node;
use eecal_shared::span::{SourceLocation, Span};
use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;

use crate::{config::Config, token::Token};

/// A span of text in the input string.
///
/// The span carries the parser configuration along with the text.
pub type InputSpan<'a> = LocatedSpan<&'a str, Config>;

pub fn source_location_from(input_span: InputSpan<'_>) -> SourceLocation {
    SourceLocation {
        offset: input_span.location_offset(),
        line: usize::try_from(input_span.location_line())
            .expect("usize should be greater than or equal to u32"),
        column: input_span.get_column(),
    }
}

/// Wraps a value in a node covering a single token
pub fn node_from_token<T>(token: &Token<'_>, value: T) -> Node<T> {
    Node::new(value, token.lexeme_span, token.whitespace_span)
}

/// Wraps a value in a node that runs from the start of `first` to the end of
/// `last`, followed by `whitespace_span`
pub fn node_spanning<T>(first: Span, last: Span, whitespace_span: Span, value: T) -> Node<T> {
    let span = Span::new(*first.start(), *last.end());
    Node::new(value, span, whitespace_span)
}

/// A result type for parser operations.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A nom parser over [`InputSpan`]
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}
