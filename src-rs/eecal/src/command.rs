use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// eecal command line
#[derive(Parser)]
#[command(name = "eecal")]
#[command(version, about = "Worst-case tolerance calculator for electronics", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Log more details to stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session
    Console,
    /// Run every line of a script
    Script {
        /// Path to the script
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Hide the `(± x)` variation of each result
        #[arg(long)]
        no_variation: bool,

        /// Hide the `[min .. max]` range of each result
        #[arg(long)]
        no_range: bool,

        /// Hide the temperature of resistances
        #[arg(long)]
        no_temperature: bool,
    },
    /// Sweep the tolerance of every variable of a script
    Sensitivity {
        /// Path to the script that assigns the variables
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Expression whose tolerance is recorded
        #[arg(long, value_name = "EXPR")]
        target: String,
    },
}
