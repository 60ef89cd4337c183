use eecal_ast::Statement;
use eecal_parser::{parse_expression, parse_statement};
use eecal_quantity::Outcome;
use tracing::{debug, trace, warn};

use crate::{
    config::RuntimeConfig,
    environment::Environment,
    error::{EvalError, LineError, ScriptError},
    eval::{eval_expr, into_quantity},
    sensitivity::{SensitivityAnalysis, SensitivityReport},
};

/// A calculator session
///
/// The runtime owns the variables assigned so far. Lines are executed one at
/// a time, either interactively or from a script.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    config: RuntimeConfig,
    environment: Environment,
}

impl Runtime {
    /// Creates a runtime with no variables
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            environment: Environment::new(),
        }
    }

    /// Returns the configuration of the session
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Returns the variables assigned so far
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes a single line
    ///
    /// Blank lines and lines starting with `#` produce `Ok(None)`. An
    /// assignment produces `name = <value>` and an expression produces its
    /// value, rendered with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::Exit`] for a line whose first word is `exit`, and
    /// a parse or evaluation error otherwise. A failed line leaves the
    /// variables unchanged.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<String>, LineError> {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        if trimmed.split_whitespace().next() == Some("exit") {
            return Err(LineError::Exit);
        }

        trace!(line = trimmed, "evaluating statement");
        let statement = parse_statement(line, Some(self.config.parser))?;

        match &*statement {
            Statement::Assign { name, value } => {
                let outcome = eval_expr(value, &self.environment)?;
                let quantity =
                    into_quantity(outcome).map_err(|untyped| EvalError::UntypedAssignment {
                        name: name.as_str().to_string(),
                        untyped,
                        span: value.span(),
                    })?;

                let rendered = quantity.render(self.config.render);
                debug!(name = name.as_str(), value = %rendered, "assigned variable");

                let output = format!("{} = {rendered}", name.as_str());
                self.environment.assign(name.as_str(), quantity);
                Ok(Some(output))
            }
            Statement::Expr(expr) => {
                let outcome = eval_expr(expr, &self.environment)?;
                Ok(Some(outcome.render(self.config.render)))
            }
        }
    }

    /// Evaluates an expression against the current variables without
    /// changing them
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be parsed or evaluated.
    pub fn evaluate(&self, expression: &str) -> Result<Outcome, LineError> {
        let expr = parse_expression(expression, Some(self.config.parser))?;
        Ok(eval_expr(&expr, &self.environment)?)
    }

    /// Runs every line of a script
    ///
    /// Failed lines are recorded and the script continues with the next
    /// line. An `exit` line ends the script.
    pub fn run_script(&mut self, script: &str) -> ScriptReport {
        let mut lines = Vec::new();
        let mut line_start = 0;

        for (index, raw_line) in script.split_inclusive('\n').enumerate() {
            let start = line_start;
            line_start += raw_line.len();

            let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            let number = index + 1;

            let result = match self.execute_line(line) {
                Ok(None) => continue,
                Ok(Some(output)) => Ok(output),
                Err(LineError::Exit) => break,
                Err(error) => {
                    warn!(line = number, %error, "script line failed");
                    Err(ScriptError::new(start, line.len(), error))
                }
            };

            lines.push(ScriptLine { number, result });
        }

        ScriptReport { lines }
    }

    /// Sweeps the tolerance of every variable and records the tolerance of
    /// `target`, see [`SensitivityAnalysis`]
    ///
    /// # Errors
    ///
    /// Returns an error if `target` cannot be parsed or evaluated.
    pub fn sensitivity(&self, target: &str) -> Result<SensitivityReport, LineError> {
        let target = parse_expression(target, Some(self.config.parser))?;
        let analysis = SensitivityAnalysis::new(&self.environment, &self.config.tolerances);
        Ok(analysis.run(&target)?)
    }
}

/// The result of one line of a script that produced output or failed
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// The 1-indexed line number
    pub number: usize,
    /// The rendered output, or why there was none
    pub result: Result<String, ScriptError>,
}

/// The results of running a script, in line order
///
/// Blank lines and comments are not included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptReport {
    lines: Vec<ScriptLine>,
}

impl ScriptReport {
    /// Returns every line that produced output or failed
    #[must_use]
    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    /// Returns the outputs of the successful lines
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter_map(|line| line.result.as_ref().ok())
            .map(String::as_str)
    }

    /// Returns the errors of the failed lines
    pub fn errors(&self) -> impl Iterator<Item = &ScriptError> {
        self.lines
            .iter()
            .filter_map(|line| line.result.as_ref().err())
    }

    /// Returns `true` if any line failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}
