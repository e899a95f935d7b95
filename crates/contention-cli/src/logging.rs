//! Tracing setup for the `contention` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Output goes to
/// stderr so JSON on stdout stays machine-readable.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
