//! Diagnostic logging.
//!
//! Events go to stderr, filtered by `SCRAMBLEPASS_LOG` (same syntax as
//! `RUST_LOG`). The interactive widget defaults to `off` because stderr
//! shares its screen; redirect stderr to a file to trace it.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const ENV_VAR: &str = "SCRAMBLEPASS_LOG";

pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
