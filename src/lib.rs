//! decolint library crate — re-exports for integration tests.
//!
//! The primary interface is the `decolint` binary. This lib.rs exposes the
//! scan pipeline so that integration tests can drive it against real file
//! trees without going through the CLI.

pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod walk;

// Private modules only used by the binary — not re-exported.
// format, telemetry
