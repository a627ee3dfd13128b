use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `LIMBADD_LOG_LEVEL`, which wins over the level implied by `verbose`.
/// `LIMBADD_LOG_FORMAT` selects `pretty` (default), `compact` or `json` output.
pub fn init(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let log_level = env::var("LIMBADD_LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    let log_format = env::var("LIMBADD_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_current_span(true)
            .with_thread_ids(true)
            .with_env_filter(env_filter)
            .try_init(),
        "compact" => tracing_subscriber::fmt()
            .compact()
            .with_target(true)
            .with_thread_ids(true)
            .with_env_filter(env_filter)
            .try_init(),
        _ => tracing_subscriber::fmt().with_target(false).with_env_filter(env_filter).try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
