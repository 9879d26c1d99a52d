//! Diagnostics initialization.
//!
//! Warnings and the end-of-run summary go to stderr through `tracing`,
//! keeping stdout clean for conflict output. The filter defaults to
//! `info` and is overridable via `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Call once, before any scanning.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
