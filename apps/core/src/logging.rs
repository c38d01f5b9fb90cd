//! Tracing subscriber setup for the terminal front end.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";
const ENV_LOG_FORMAT: &str = "BLUEPRINT_LOG_FORMAT";

/// Installs the global subscriber. `RUST_LOG` overrides the default level and
/// `BLUEPRINT_LOG_FORMAT=json` switches to structured output. Safe to call
/// more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let json = std::env::var(ENV_LOG_FORMAT)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // Logs go to stderr so stdout stays clean for chat output.
    let _ = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };
}
