//! Variable names

use nom::{
    Parser as _,
    bytes::complete::take_while,
    character::complete::satisfy,
};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    util::{Token, token},
};

fn identifier_body(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    let (rest, _) = satisfy::<_, _, TokenError>(|c: char| c.is_ascii_alphabetic()).parse(input)?;
    let (rest, _) =
        take_while::<_, _, TokenError>(|c: char| c.is_ascii_alphanumeric() || c == '_')
            .parse(rest)?;
    Ok((rest, ()))
}

/// Parses a variable name: an ASCII letter followed by ASCII letters,
/// digits or underscores.
pub fn identifier(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(identifier_body, TokenError::expected_identifier).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Config,
        token::error::{ExpectKind, TokenErrorKind},
    };

    #[test]
    fn simple_identifier() {
        let input = InputSpan::new_extra("r1 = 5", Config::default());
        let (rest, matched) = identifier(input).expect("should parse identifier");
        assert_eq!(matched.lexeme_str, "r1");
        assert_eq!(rest.fragment(), &"= 5");
    }

    #[test]
    fn underscores_after_first_letter() {
        let input = InputSpan::new_extra("v_out_2", Config::default());
        let (rest, matched) = identifier(input).expect("should parse identifier");
        assert_eq!(matched.lexeme_str, "v_out_2");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn leading_underscore_is_rejected() {
        let input = InputSpan::new_extra("_r", Config::default());
        let Err(nom::Err::Error(error)) = identifier(input) else {
            panic!("expected a recoverable error");
        };
        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::Identifier));
    }

    #[test]
    fn leading_digit_is_rejected() {
        let input = InputSpan::new_extra("1r", Config::default());
        assert!(matches!(identifier(input), Err(nom::Err::Error(_))));
    }
}
