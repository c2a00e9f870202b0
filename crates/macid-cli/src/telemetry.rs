//! Log output for the `macid` binary.
//!
//! Events are written to stderr so stdout carries nothing but ids. The level
//! defaults to `warn` (which still reports a random fingerprint fallback) and
//! can be raised with `RUST_LOG`, e.g. `RUST_LOG=macid=info`.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .try_init()
        .context("failed to install the tracing subscriber")
}
