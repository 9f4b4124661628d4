//! Timing harness around the relaxation engine.
//!
//! Builds a seeded grid per configuration, relaxes it inside a
//! thread pool sized to the configuration, appends the elapsed time
//! to the times file and spot checks the result.

mod args;
mod error;
mod run;
mod spot_check;
mod times_log;

pub use args::*;
pub use error::*;
pub use run::*;
pub use spot_check::*;
pub use times_log::*;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
/// Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
