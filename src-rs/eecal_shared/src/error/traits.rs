use crate::error::{Context, ErrorLocation};

/// Trait for types that can be converted to eecal error messages.
///
/// This gives every error type in the workspace (parser, evaluator, CLI) a
/// single interface for exposing its message, context and location, so the
/// CLI can report all of them the same way.
pub trait AsEecalError {
    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error in the source code.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }

    /// Returns context with optional source code locations.
    ///
    /// Similar to `context()`, but each context item can optionally point at
    /// a specific part of the source, such as the parenthesis that was never
    /// closed.
    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        let _ = source;
        vec![]
    }
}
