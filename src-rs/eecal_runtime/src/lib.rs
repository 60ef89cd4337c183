#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Runtime for the eecal calculator language

mod config;
mod environment;
pub mod error;
mod eval;
mod runtime;
mod sensitivity;

pub use config::{DEFAULT_TOLERANCES, RuntimeConfig};
pub use environment::Environment;
pub use error::{EvalError, LineError, ScriptError};
pub use eval::{eval_expr, kind_of};
pub use runtime::{Runtime, ScriptLine, ScriptReport};
pub use sensitivity::{SensitivityAnalysis, SensitivityReport};
