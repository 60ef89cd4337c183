//! Errors for eecal
//!
//! Every failure that reaches the user, whether from parsing a line, evaluating
//! it, or reading a script, is converted into an [`EecalError`] before it is
//! printed.

mod context;
mod location;
mod traits;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsEecalError;

/// Unified error representation for eecal
///
/// This struct represents errors in a format suitable for display to users.
/// It records where the input came from (a script path or `<console>`), a
/// human-readable message, and optional source location information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EecalError {
    /// The name of the input the error occurred in
    origin: String,
    /// Human-readable error message
    message: String,
    /// Optional source location information for precise error reporting
    location: Option<ErrorLocation>,
    /// Context information without a location
    context: Vec<Context>,
    /// Context information pointing into the source
    context_with_source: Vec<(Context, ErrorLocation)>,
}

impl EecalError {
    /// Creates a new `EecalError` without source location information
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eecal_shared::error::{AsEecalError, EecalError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsEecalError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("could not read file".to_string());
    /// let error = EecalError::from_error(&error, "divider.ee");
    /// assert!(error.location().is_none());
    /// ```
    pub fn from_error(error: &impl AsEecalError, origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: error.message(),
            location: None,
            context: error.context(),
            context_with_source: vec![],
        }
    }

    /// Creates a new `EecalError` with line and column information
    ///
    /// `source` must be the complete text the error's offsets refer to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eecal_shared::error::{AsEecalError, EecalError, ErrorLocation};
    ///
    /// struct UnknownVariable {
    ///     offset: usize,
    /// }
    ///
    /// impl AsEecalError for UnknownVariable {
    ///     fn message(&self) -> String {
    ///         "unknown variable `c`".to_string()
    ///     }
    ///
    ///     fn error_location(&self, source: &str) -> Option<ErrorLocation> {
    ///         Some(ErrorLocation::from_source_and_offset(source, self.offset))
    ///     }
    /// }
    ///
    /// let error = EecalError::from_error_with_source(&UnknownVariable { offset: 4 }, "<console>", "a + c");
    /// assert_eq!(error.location().map(ErrorLocation::column), Some(5));
    /// ```
    pub fn from_error_with_source(
        error: &impl AsEecalError,
        origin: impl Into<String>,
        source: &str,
    ) -> Self {
        let message = error.message();
        let location = error.error_location(source);

        let mut context = error.context();
        let mut context_with_source = vec![];

        for (context_item, location) in error.context_with_source(source) {
            match location {
                Some(location) => context_with_source.push((context_item, location)),
                None => context.push(context_item),
            }
        }

        Self {
            origin: origin.into(),
            message,
            location,
            context,
            context_with_source,
        }
    }

    /// Returns the name of the input the error occurred in
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional source location information
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }

    /// Returns the context information with source locations
    #[must_use]
    pub fn context_with_source(&self) -> &[(Context, ErrorLocation)] {
        &self.context_with_source
    }
}
