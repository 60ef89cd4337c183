use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter
const LOG_ENV: &str = "EECAL_LOG";

/// Installs the stderr logger
///
/// The filter comes from `EECAL_LOG` when it is set, and from the number of
/// `-v` flags otherwise.
pub fn init(verbose: u8, use_colors: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_colors),
        )
        .with(filter)
        .init();
}

const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }
}
