use nom::{Parser, error::ParseError};

/// Error conversions for nom parsers.
///
/// nom distinguishes recoverable errors (`Err::Error`), which let an `alt` or
/// `opt` try something else, from unrecoverable ones (`Err::Failure`). These
/// methods change the error type of a parser and decide which of the two a
/// recoverable error becomes. Failures always keep their content and are only
/// converted with `From`.
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Maps recoverable errors with `convert_error`, keeping them recoverable.
    ///
    /// ```ignore
    /// let parser = recognize(f).convert_error_to(TokenError::expected_number);
    /// ```
    fn convert_error_to<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Maps recoverable errors with `convert_error` and makes them failures.
    ///
    /// Used once a construct has clearly started, such as after an operator
    /// or an opening parenthesis, so the error is reported where the
    /// construct broke off instead of being backtracked over.
    ///
    /// ```ignore
    /// let parser = paren_right.or_fail_with(ParserError::unclosed_paren(&paren_left));
    /// ```
    fn or_fail_with<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Failure(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Converts both kinds of error with `From`.
    fn convert_errors<E2>(mut self) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(e.into()),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }
}

impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}
