use eecal_parser::Config as ParserConfig;
use eecal_quantity::RenderOptions;

/// The tolerances tried for every variable by a sensitivity sweep, as
/// fractions (0.1% to 10%)
pub const DEFAULT_TOLERANCES: [f64; 6] = [0.001, 0.005, 0.01, 0.02, 0.05, 0.1];

/// Settings for a [`Runtime`](crate::Runtime)
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// How statement results are rendered
    pub render: RenderOptions,
    /// How lines are parsed
    pub parser: ParserConfig,
    /// The tolerance ladder of the sensitivity sweep, as fractions
    pub tolerances: Vec<f64>,
}

impl RuntimeConfig {
    /// Creates a configuration that renders every clause and sweeps the
    /// default tolerances
    #[must_use]
    pub fn new() -> Self {
        Self {
            render: RenderOptions::new(),
            parser: ParserConfig::new(),
            tolerances: DEFAULT_TOLERANCES.to_vec(),
        }
    }

    /// Sets the render options for statement output
    #[must_use]
    pub fn with_render(self, render: RenderOptions) -> Self {
        Self { render, ..self }
    }

    /// Sets the parser configuration
    #[must_use]
    pub fn with_parser(self, parser: ParserConfig) -> Self {
        Self { parser, ..self }
    }

    /// Sets the tolerance ladder of the sensitivity sweep
    #[must_use]
    pub fn with_tolerances(self, tolerances: Vec<f64>) -> Self {
        Self { tolerances, ..self }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}
