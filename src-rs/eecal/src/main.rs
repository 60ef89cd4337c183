//! Command line for the eecal tolerance calculator

use std::{io, process::ExitCode};

use clap::Parser;
use eecal_quantity::RenderOptions;
use eecal_runtime::RuntimeConfig;

use crate::command::{CliCommand, Commands};

mod command;
mod console;
mod file_error;
mod logging;
mod print_error;
mod script;
mod stylesheet;

fn main() -> io::Result<ExitCode> {
    let cli = CliCommand::parse();

    let use_colors = !cli.no_colors;
    if !use_colors {
        anstream::ColorChoice::Never.write_global();
    }
    logging::init(cli.verbose, use_colors);

    match cli.command {
        Commands::Console => {
            console::run(RuntimeConfig::new())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Script {
            file,
            no_variation,
            no_range,
            no_temperature,
        } => {
            let render = RenderOptions::new()
                .with_variation(!no_variation)
                .with_range(!no_range)
                .with_temperature(!no_temperature);
            let config = RuntimeConfig::new().with_render(render);

            Ok(script::run(&file, config))
        }
        Commands::Sensitivity { file, target } => {
            Ok(script::sensitivity(&file, &target, RuntimeConfig::new()))
        }
    }
}
