//! Tracing setup for the storeline binary
//!
//! The filter is read from `STORELINE_LOG_LEVEL` (same syntax as `RUST_LOG`).
//! Output goes to stderr so it never mixes with the rendered screen.

use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "STORELINE_LOG_LEVEL";

const QUIET_CRATES: &[&str] = &[
    "reqwest", "hyper", "hyper_util", "h2", "rustls", "tokio", "tower", "tracing",
];

/// Build the filter from the environment, capping noisy dependencies at `warn`.
pub fn env_filter() -> EnvFilter {
    QUIET_CRATES.iter().fold(
        EnvFilter::from_env(LOG_LEVEL_ENV_VAR),
        |filter, krate| match format!("{krate}=warn").parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        },
    )
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init();
}
