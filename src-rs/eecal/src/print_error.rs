//! Error reporting in the style of `rustc`
//!
//! ```text
//! error: unknown variable `c`
//!  --> divider.ee:2:9
//!   |
//! 2 | b = a + c
//!   |         ^
//!   = help: assign it on an earlier line, as in `c = 1k`
//! ```

use anstream::eprintln;
use eecal_shared::error::{Context, EecalError, ErrorLocation};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints an error to stderr
pub fn print(error: &EecalError) {
    eprintln!("{}", error_to_string(error));
}

fn error_to_string(error: &EecalError) -> String {
    let mut lines = vec![
        message_line("error", stylesheet::ERROR_COLOR, error.message()),
        location_line(error.origin(), error.location()),
    ];

    match error.location() {
        Some(location) => lines.push(source_lines(
            location,
            error.context(),
            stylesheet::ERROR_COLOR,
        )),
        None => lines.extend(error.context().iter().map(|context| {
            let (equals, message) = context_parts(context);
            format!("  {equals} {message}")
        })),
    }
    lines.push(String::new());

    for (context, location) in error.context_with_source() {
        let (message, color) = match context {
            Context::Note(message) => (
                message_line("note", stylesheet::NOTE_COLOR, message),
                stylesheet::NOTE_COLOR,
            ),
            Context::Help(message) => (
                message_line("help", stylesheet::HELP_COLOR, message),
                stylesheet::HELP_COLOR,
            ),
        };

        lines.push(message);
        lines.push(location_line(error.origin(), Some(location)));
        lines.push(source_lines(location, &[], color));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `<kind>: <message>`, in bold
fn message_line(kind: &str, kind_color: Style, message: &str) -> String {
    let kind = kind_color.style(kind);
    format!("{kind}: {message}").bold().to_string()
}

/// ` --> <origin>` or ` --> <origin>:<line>:<column>`
fn location_line(origin: &str, location: Option<&ErrorLocation>) -> String {
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");

    location.map_or_else(
        || format!(" {arrow} {origin}"),
        |location| {
            format!(
                " {arrow} {origin}:{}:{}",
                location.line(),
                location.column()
            )
        },
    )
}

/// The source line with the error underlined, followed by the context
fn source_lines(location: &ErrorLocation, context: &[Context], highlight: Style) -> String {
    let line = location.line();

    // one column per digit of the line number
    let margin = " ".repeat(line.ilog10() as usize + 1);
    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(location.column().saturating_sub(1));
    let pointer = highlight.bold().style("^");
    let pointer_rest = highlight
        .bold()
        .style("-".repeat(location.length().saturating_sub(1)));

    let mut lines = vec![
        format!("{margin} {bar} "),
        format!("{line_label} {bar} {}", location.line_source()),
        format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}"),
    ];

    lines.extend(context.iter().map(|context| {
        let (equals, message) = context_parts(context);
        format!("{margin} {equals} {message}")
    }));

    lines.join("\n")
}

fn context_parts(context: &Context) -> (String, String) {
    match context {
        Context::Note(message) => (
            stylesheet::NOTE_COLOR.bold().style("=").to_string(),
            message_line("note", stylesheet::NOTE_COLOR, message),
        ),
        Context::Help(message) => (
            stylesheet::HELP_COLOR.bold().style("=").to_string(),
            message_line("help", stylesheet::HELP_COLOR, message),
        ),
    }
}

#[cfg(test)]
mod tests {
    use eecal_shared::error::AsEecalError;

    use super::*;

    fn plain(error: &EecalError) -> String {
        anstream::adapter::strip_str(&error_to_string(error)).to_string()
    }

    struct UnknownVariable;

    impl AsEecalError for UnknownVariable {
        fn message(&self) -> String {
            "unknown variable `c`".to_string()
        }

        fn context(&self) -> Vec<Context> {
            vec![Context::Help("assign it first".to_string())]
        }

        fn error_location(&self, source: &str) -> Option<ErrorLocation> {
            Some(ErrorLocation::from_source_and_span(source, 8, 1))
        }
    }

    #[test]
    fn error_with_location() {
        let error = EecalError::from_error_with_source(&UnknownVariable, "<console>", "b = a + c");

        assert_eq!(
            plain(&error),
            [
                "error: unknown variable `c`",
                " --> <console>:1:9",
                "  | ",
                "1 | b = a + c",
                "  |         ^",
                "  = help: assign it first",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn error_without_location() {
        let error = EecalError::from_error(&UnknownVariable, "divider.ee");

        assert_eq!(
            plain(&error),
            [
                "error: unknown variable `c`",
                " --> divider.ee",
                "  = help: assign it first",
                "",
            ]
            .join("\n")
        );
    }
}
