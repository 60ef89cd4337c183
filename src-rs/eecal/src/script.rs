use std::{fs, path::Path, process::ExitCode};

use anstream::println;
use eecal_runtime::{Runtime, RuntimeConfig, ScriptReport};
use eecal_shared::error::EecalError;
use owo_colors::OwoColorize;
use tracing::info;

use crate::{file_error::FileError, print_error};

/// Origin shown in the location line of `--target` errors
const TARGET_ORIGIN: &str = "<target>";

/// Runs a script, printing every output and error
///
/// Fails if the script cannot be read or any of its lines fails.
pub fn run(path: &Path, config: RuntimeConfig) -> ExitCode {
    let Some(source) = read(path) else {
        return ExitCode::FAILURE;
    };

    let mut runtime = Runtime::new(config);
    let report = runtime.run_script(&source);
    print_report(path, &source, &report, true);

    exit_code(&report)
}

/// Runs a script for its variables, then sweeps their tolerances for `target`
///
/// Script outputs are not printed, only its errors and the sweep.
pub fn sensitivity(path: &Path, target: &str, config: RuntimeConfig) -> ExitCode {
    let Some(source) = read(path) else {
        return ExitCode::FAILURE;
    };

    let mut runtime = Runtime::new(config);
    let report = runtime.run_script(&source);
    print_report(path, &source, &report, false);

    if report.has_errors() {
        return ExitCode::FAILURE;
    }

    info!(
        variables = runtime.environment().len(),
        expression = target,
        "running sensitivity sweep"
    );

    match runtime.sensitivity(target) {
        Ok(report) => {
            println!("{report}");
            if let Some(name) = report.most_sensitive() {
                println!();
                println!("most sensitive: {}", name.bold());
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            let error = EecalError::from_error_with_source(&error, TARGET_ORIGIN, target);
            print_error::print(&error);
            ExitCode::FAILURE
        }
    }
}

fn read(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(error) => {
            let error = FileError::new(path, error);
            print_error::print(&EecalError::from_error(&error, path.display().to_string()));
            None
        }
    }
}

fn print_report(path: &Path, source: &str, report: &ScriptReport, print_outputs: bool) {
    let origin = path.display().to_string();

    for line in report.lines() {
        match &line.result {
            Ok(output) if print_outputs => println!("{output}"),
            Ok(_) => {}
            Err(error) => {
                let error = EecalError::from_error_with_source(error, origin.as_str(), source);
                print_error::print(&error);
            }
        }
    }
}

fn exit_code(report: &ScriptReport) -> ExitCode {
    if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
