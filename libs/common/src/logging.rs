//! Tracing subscriber setup shared by the services

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber
///
/// The filter is read from `RUST_LOG` and falls back to `info` for every
/// target when the variable is unset or invalid.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
