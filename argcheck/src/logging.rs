//! Tracing setup for the `argcheck` binary and embedding applications.
//!
//! The check functions themselves emit nothing; events come from
//! [`crate::boundary`] and [`crate::config`].

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (usually the
/// configured `log_filter`) applies. Calling this twice is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=argcheck=debug argcheck not-empty "$DATABASE_URL"
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .compact(),
        )
        .try_init();
}
