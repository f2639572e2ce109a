//! Logging setup for the CLI.
//!
//! Stdout carries the mask, so every event goes to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    layer::SubscriberExt as _,
    util::{SubscriberInitExt as _, TryInitError},
    EnvFilter, Layer as _,
};

#[derive(Debug)]
pub struct TelemetryConfig {
    global_filter: EnvFilter,
}

impl Default for TelemetryConfig {
    /// Reads the filter from `RUST_LOG`, defaulting to `info`.
    fn default() -> Self {
        Self {
            global_filter: EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        }
    }
}

impl TelemetryConfig {
    /// Installs the global subscriber.
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(self) -> Result<(), TryInitError> {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(self.global_filter);

        tracing_subscriber::registry().with(stderr_layer).try_init()
    }
}
