use std::io::{self, Write};

use anstream::{print, println};
use eecal_runtime::{LineError, Runtime, RuntimeConfig};
use eecal_shared::error::EecalError;
use tracing::info;

use crate::{print_error, stylesheet};

/// Origin shown in the location line of console errors
const CONSOLE_ORIGIN: &str = "<console>";

/// Reads lines from stdin until `exit` or the end of input
pub fn run(config: RuntimeConfig) -> io::Result<()> {
    let mut runtime = Runtime::new(config);
    let stdin = io::stdin();
    let mut buffer = String::new();

    info!("console started");

    loop {
        print!("{} ", stylesheet::PROMPT.style("»"));
        io::stdout().flush()?;

        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            // keep the shell prompt off the calculator's line
            println!();
            break;
        }

        let line = buffer.trim_end_matches(['\n', '\r']);

        match runtime.execute_line(line) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(LineError::Exit) => break,
            Err(error) => {
                let error = EecalError::from_error_with_source(&error, CONSOLE_ORIGIN, line);
                print_error::print(&error);
            }
        }
    }

    info!(variables = runtime.environment().len(), "console ended");
    Ok(())
}
