//! Logger setup for Parkways binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a binary.
///
/// Binary names use hyphens while tracing targets use the crate name,
/// so `-` is mapped to `_`.
pub fn default_directive(bin_name: &str, default_level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={default_level},parkways_cli={default_level},parkways_core={default_level}")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Output goes to stderr so
/// that stdout stays reserved for program output.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
