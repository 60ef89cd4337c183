use eecal_ast::literal::Unit;
use eecal_quantity::prefix::prefix_factor;
use eecal_shared::error::{Context, ErrorLocation};

use crate::{
    error::reason::{IncompleteKind, NumberKind, ParserErrorReason},
    token::error::{IncompleteKind as TokenIncompleteKind, TokenErrorKind},
};

pub fn from_source(
    offset: usize,
    reason: &ParserErrorReason,
    source: &str,
) -> Vec<(Context, Option<ErrorLocation>)> {
    let preceding_source = &source[..offset];
    let remaining_source = &source[offset..];

    [
        opened_here(reason, source),
        detached_prefix_or_unit(preceding_source, remaining_source),
        detached_percent_sign(remaining_source),
        double_star(reason, remaining_source),
        coefficient_range(reason),
        invalid_number_literal(reason, source),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Points at the start of a construct that was cut off
fn opened_here(reason: &ParserErrorReason, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
    let ParserErrorReason::Incomplete { cause, kind } = reason else {
        return vec![];
    };

    let message = match kind {
        IncompleteKind::UnclosedParen | IncompleteKind::ParenMissingExpr => "`(` opened here",
        IncompleteKind::BinaryOpMissingSecondOperand { .. }
        | IncompleteKind::PowerMissingExponent
        | IncompleteKind::AtMissingTemperature
        | IncompleteKind::AssignMissingValue => return vec![],
    };

    let location = ErrorLocation::from_source_and_span(source, cause.start().offset, cause.len());
    vec![(Context::Note(message.to_string()), Some(location))]
}

/// `4.7 kΩ` instead of `4.7kΩ`
fn detached_prefix_or_unit(
    preceding_source: &str,
    remaining_source: &str,
) -> Vec<(Context, Option<ErrorLocation>)> {
    let Some(next_char) = remaining_source.chars().next() else {
        return vec![];
    };

    let is_prefix_or_unit =
        prefix_factor(next_char).is_some() || Unit::from_symbol(next_char).is_some();
    // identifiers start with a letter, numbers with a digit or `.`
    let last_token = preceding_source
        .trim_end_matches([' ', '\t'])
        .rsplit(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
        .next()
        .unwrap_or_default();
    let follows_number = last_token.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && last_token.ends_with(|c: char| c.is_ascii_digit());
    let is_detached = preceding_source.ends_with([' ', '\t']);

    if is_prefix_or_unit && follows_number && is_detached {
        let help_message = "write the prefix and unit directly after the number, as in `4.7kΩ`";
        vec![(Context::Help(help_message.to_string()), None)]
    } else {
        vec![]
    }
}

/// `5 %` instead of `5%`
fn detached_percent_sign(remaining_source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
    if remaining_source.starts_with('%') {
        let help_message = "write the tolerance directly after its number, as in `5%`";
        vec![(Context::Help(help_message.to_string()), None)]
    } else {
        vec![]
    }
}

/// `v ** 2` instead of `v ^ 2`
fn double_star(
    reason: &ParserErrorReason,
    remaining_source: &str,
) -> Vec<(Context, Option<ErrorLocation>)> {
    let is_missing_operand = matches!(
        reason,
        ParserErrorReason::Incomplete {
            kind: IncompleteKind::BinaryOpMissingSecondOperand { .. },
            ..
        }
    );

    if is_missing_operand && remaining_source.starts_with('*') {
        let help_message = "use `^` for powers, as in `v ^ 2`";
        vec![(Context::Help(help_message.to_string()), None)]
    } else {
        vec![]
    }
}

fn coefficient_range(reason: &ParserErrorReason) -> Vec<(Context, Option<ErrorLocation>)> {
    let is_coefficient = matches!(
        reason,
        ParserErrorReason::InvalidNumber {
            kind: NumberKind::Coefficient,
            ..
        }
    );

    if is_coefficient {
        let note_message = "temperature coefficients are whole numbers of ppm per °C";
        vec![(Context::Note(note_message.to_string()), None)]
    } else {
        vec![]
    }
}

fn invalid_number_literal(
    reason: &ParserErrorReason,
    source: &str,
) -> Vec<(Context, Option<ErrorLocation>)> {
    let ParserErrorReason::TokenError(TokenErrorKind::Incomplete(kind)) = reason else {
        return vec![];
    };

    match kind {
        TokenIncompleteKind::InvalidDecimalPart {
            decimal_point_offset,
        } => {
            let message = "because of `.` here";
            let location = ErrorLocation::from_source_and_offset(source, *decimal_point_offset);
            vec![(Context::Note(message.to_string()), Some(location))]
        }
        TokenIncompleteKind::InvalidExponentPart { e_offset } => {
            let message = "because of `e` here";
            let location = ErrorLocation::from_source_and_offset(source, *e_offset);
            vec![(Context::Note(message.to_string()), Some(location))]
        }
    }
}
