/// Configuration for the eecal parser.
///
/// The configuration travels with the input through every parser, so token
/// parsers can consult it without extra arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Accept `u` as an ASCII spelling of the `µ` prefix
    pub allow_ascii_micro: bool,
}

impl Config {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_ascii_micro: true,
        }
    }

    /// Sets whether `u` is accepted as the `µ` prefix
    #[must_use]
    pub const fn with_ascii_micro(self, allow_ascii_micro: bool) -> Self {
        Self {
            allow_ascii_micro,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
