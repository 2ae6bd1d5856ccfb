//! Diagnostic logging on stderr.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BINDER_CONFIG_LOG";

/// Install the global subscriber.
///
/// `-v`/`-vv` take precedence over `BINDER_CONFIG_LOG`; without either only
/// warnings are shown. Output goes to stderr so `-` output stays clean YAML.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("binder_config=info"),
        _ => EnvFilter::new("binder_config=debug"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
