/// Extra information attached to an error message.
///
/// A `Note` explains what was going on when the error happened, a `Help`
/// suggests how to fix it.
///
/// # Examples
///
/// ```rust
/// use eecal_shared::error::Context;
///
/// let note = Context::Note("`r1` was last assigned at 25°C".to_string());
/// let help = Context::Help("shift both resistors with `@` first".to_string());
///
/// let contexts = vec![note, help];
/// assert_eq!(contexts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary details about the error
    Note(String),

    /// An actionable suggestion for resolving the error
    Help(String),
}
