//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events; the binary decides whether a
//! subscriber is installed. Output goes to stderr so suggestions on stdout
//! stay pipeable.

use std::sync::OnceLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wordle_clues=warn",
        1 => "wordle_clues=info",
        _ => "wordle_clues=debug",
    }
}

/// Install the stderr subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flag. Safe to call more
/// than once; only the first call has effect.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // A subscriber may already be set (e.g. by a test harness)
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
