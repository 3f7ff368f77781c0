// src/telemetry.rs
// =============================================================================
// Logging setup.
//
// Logs go to stderr so stdout only ever contains visited URLs (handy for
// piping). The level comes from RUST_LOG, e.g. RUST_LOG=debug.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
