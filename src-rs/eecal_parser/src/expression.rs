//! Expression parsing.
//!
//! Operators from loosest to tightest binding:
//!
//! - `+` and `-`
//! - `*`, `/`, `//` (voltage divider) and `|` (parallel)
//! - postfix `^ n` (power) and `@ T°C` (temperature shift)
//!
//! Binary operators are left associative, so `r1 | r2 + r3` is
//! `(r1 | r2) + r3`.

use eecal_ast::{
    Node,
    expression::{BinaryOp, BinaryOpNode, Expr, ExprNode},
    literal::{Literal, Unit, UnitNode},
    naming::Identifier,
};
use eecal_quantity::prefix::prefix_factor;
use eecal_shared::span::{SourceLocation, Span};
use nom::{
    Parser as _,
    branch::alt,
    combinator::{all_consuming, map, opt},
    multi::many0,
};

use crate::{
    error::{ErrorHandlingParser, ParserError, reason::NumberKind},
    token::{
        Token, inline_whitespace,
        literal::{MagnitudeParts, coefficient, magnitude, number, percentage},
        naming::identifier,
        symbol::{
            at, bar, caret, degree_celsius, minus, paren_left, paren_right, plus, slash,
            slash_slash, star,
        },
    },
    util::{InputSpan, Parser, Result, node_from_token, node_spanning},
};

fn left_associative_binary_op<'a>(
    mut operand: impl Parser<'a, ExprNode, ParserError> + Copy,
    mut operator: impl Parser<'a, BinaryOpNode, ParserError>,
) -> impl Parser<'a, ExprNode, ParserError> {
    move |input: InputSpan<'a>| {
        let (rest, first_operand) = operand.parse(input)?;
        let (rest, rest_operands) = many0(
            |input: InputSpan<'a>| -> Result<'a, (BinaryOpNode, ExprNode), ParserError> {
                let (rest, operator) = operator.parse(input)?;
                let (rest, operand) = operand
                    .or_fail_with(ParserError::binary_op_missing_second_operand(&operator))
                    .parse(rest)?;
                Ok((rest, (operator, operand)))
            },
        )
        .parse(rest)?;

        let expr = rest_operands
            .into_iter()
            .fold(first_operand, |left, (op, right)| {
                node_spanning(
                    left.span(),
                    right.span(),
                    right.whitespace_span(),
                    Expr::binary_op(op, left, right),
                )
            });

        Ok((rest, expr))
    }
}

/// Parses an expression
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    additive_expr(input)
}

/// Parses an expression, allowing leading whitespace
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let (rest, _) = inline_whitespace.convert_errors::<ParserError>().parse(input)?;
    all_consuming(additive_expr).parse(rest)
}

/// Parses `+` and `-`
fn additive_expr(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let op = alt((
        map(plus, |token| node_from_token(&token, BinaryOp::add())),
        map(minus, |token| node_from_token(&token, BinaryOp::sub())),
    ))
    .convert_errors::<ParserError>();

    left_associative_binary_op(multiplicative_expr, op).parse(input)
}

/// Parses `*`, `/`, `//` and `|`
fn multiplicative_expr(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let op = alt((
        map(star, |token| node_from_token(&token, BinaryOp::mul())),
        map(slash_slash, |token| {
            node_from_token(&token, BinaryOp::voltage_divider())
        }),
        map(slash, |token| node_from_token(&token, BinaryOp::div())),
        map(bar, |token| node_from_token(&token, BinaryOp::parallel())),
    ))
    .convert_errors::<ParserError>();

    left_associative_binary_op(postfix_expr, op).parse(input)
}

/// A postfix operator and its argument
enum PostfixOp {
    Power(Node<f64>),
    AtTemperature(Node<f64>),
}

/// Parses an operand followed by any number of `^ n` and `@ T°C`
fn postfix_expr(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let (rest, operand) = primary_expr(input)?;
    let (rest, ops) = many0(alt((power_op, at_temperature_op))).parse(rest)?;

    let expr = ops.into_iter().fold(operand, |operand, op| {
        let (last, whitespace) = (op.span(), op.whitespace_span());
        let first = operand.span();

        let expr = match op.take_value() {
            PostfixOp::Power(exponent) => Expr::power(operand, exponent),
            PostfixOp::AtTemperature(temperature) => Expr::at_temperature(operand, temperature),
        };

        node_spanning(first, last, whitespace, expr)
    });

    Ok((rest, expr))
}

fn power_op(input: InputSpan<'_>) -> Result<'_, Node<PostfixOp>, ParserError> {
    let (rest, caret_token) = caret.convert_errors::<ParserError>().parse(input)?;
    let (rest, exponent_token) = number
        .or_fail_with(ParserError::power_missing_exponent(&caret_token))
        .parse(rest)?;

    let exponent = parse_f64(&exponent_token, exponent_token.lexeme_str, NumberKind::Value)?;
    let exponent = node_from_token(&exponent_token, exponent);

    Ok((rest, exponent.wrap(PostfixOp::Power)))
}

fn at_temperature_op(input: InputSpan<'_>) -> Result<'_, Node<PostfixOp>, ParserError> {
    let (rest, at_token) = at.convert_errors::<ParserError>().parse(input)?;
    let (rest, temperature_token) = number
        .or_fail_with(ParserError::at_missing_temperature(&at_token))
        .parse(rest)?;
    let (rest, degree_token) = opt(degree_celsius.convert_errors::<ParserError>()).parse(rest)?;

    let temperature = parse_f64(
        &temperature_token,
        temperature_token.lexeme_str,
        NumberKind::Value,
    )?;

    let last_token = degree_token.unwrap_or(temperature_token);
    let temperature = node_spanning(
        temperature_token.lexeme_span,
        last_token.lexeme_span,
        last_token.whitespace_span,
        temperature,
    );

    Ok((rest, temperature.wrap(PostfixOp::AtTemperature)))
}

/// Parses a quantity literal, a variable or a parenthesized expression
fn primary_expr(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    alt((literal, variable, parenthesized_expr))
        .convert_error_to(ParserError::expect_expr)
        .parse(input)
}

/// Parses a quantity literal such as `4.7kΩ 1% 100ppm`
fn literal(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let (rest, magnitude_token) = magnitude.convert_errors::<ParserError>().parse(input)?;
    let (rest, tolerance_token) = opt(percentage.convert_errors::<ParserError>()).parse(rest)?;
    let (rest, coefficient_token) =
        opt(coefficient.convert_errors::<ParserError>()).parse(rest)?;

    let parts = MagnitudeParts::split(magnitude_token.lexeme_str);
    let number = parse_f64(&magnitude_token, parts.number, NumberKind::Value)?;
    let scale = parts.prefix.and_then(prefix_factor).unwrap_or(1.0);

    let unit = parts
        .unit
        .and_then(|symbol| Some((symbol, Unit::from_symbol(symbol)?)))
        .map(|(symbol, unit)| unit_node(&magnitude_token, symbol, unit));

    let tolerance = tolerance_token
        .as_ref()
        .map(tolerance_node)
        .transpose()?;
    let coefficient = coefficient_token
        .as_ref()
        .map(coefficient_node)
        .transpose()?;

    let last_token = coefficient_token
        .or(tolerance_token)
        .unwrap_or(magnitude_token);

    let literal = Literal::new(number * scale, unit, tolerance, coefficient);
    let literal = node_spanning(
        magnitude_token.lexeme_span,
        last_token.lexeme_span,
        last_token.whitespace_span,
        literal,
    );

    Ok((rest, literal.wrap(Expr::literal)))
}

fn tolerance_node(token: &Token<'_>) -> std::result::Result<Node<f64>, nom::Err<ParserError>> {
    let text = token.lexeme_str.strip_suffix('%').unwrap_or(token.lexeme_str);
    let percent = parse_f64(token, text, NumberKind::Tolerance)?;
    Ok(node_from_token(token, percent))
}

fn coefficient_node(token: &Token<'_>) -> std::result::Result<Node<i32>, nom::Err<ParserError>> {
    let text = token.lexeme_str.strip_suffix("ppm").unwrap_or(token.lexeme_str);
    let ppm = text.parse::<i32>().map_err(|_| {
        nom::Err::Failure(ParserError::invalid_number(token, NumberKind::Coefficient))
    })?;
    Ok(node_from_token(token, ppm))
}

/// The unit is the last character of the magnitude lexeme
fn unit_node(magnitude_token: &Token<'_>, symbol: char, unit: Unit) -> UnitNode {
    let end = *magnitude_token.lexeme_span.end();
    let width = symbol.len_utf8();
    let start = SourceLocation {
        offset: end.offset - width,
        line: end.line,
        column: end.column - width,
    };

    Node::new(
        unit,
        Span::new(start, end),
        magnitude_token.whitespace_span,
    )
}

fn parse_f64(
    token: &Token<'_>,
    text: &str,
    kind: NumberKind,
) -> std::result::Result<f64, nom::Err<ParserError>> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| nom::Err::Failure(ParserError::invalid_number(token, kind)))
}

fn variable(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let (rest, name_token) = identifier.convert_errors::<ParserError>().parse(input)?;
    let name = node_from_token(
        &name_token,
        Identifier::new(name_token.lexeme_str.to_string()),
    );

    Ok((rest, name.wrap(Expr::variable)))
}

fn parenthesized_expr(input: InputSpan<'_>) -> Result<'_, ExprNode, ParserError> {
    let (rest, paren_left_token) = paren_left.convert_errors::<ParserError>().parse(input)?;

    let (rest, expr) = additive_expr
        .or_fail_with(ParserError::paren_missing_expr(&paren_left_token))
        .parse(rest)?;

    let (rest, paren_right_token) = paren_right
        .or_fail_with(ParserError::unclosed_paren(&paren_left_token))
        .parse(rest)?;

    let expr = node_spanning(
        paren_left_token.lexeme_span,
        paren_right_token.lexeme_span,
        paren_right_token.whitespace_span,
        Expr::parenthesized(expr),
    );

    Ok((rest, expr))
}
