//! Logging initialization for host applications.
//!
//! The core itself only emits `tracing` events; installing a subscriber is the
//! host's job. Hosts that have no subscriber of their own can call
//! [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `default_level` (typically
/// [`Config::log_level`](crate::Config)) is used. Logs go to stderr so a host
/// that talks a protocol on stdout stays clean.
///
/// Safe to call when a subscriber is already installed: the attempt is simply
/// ignored.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
