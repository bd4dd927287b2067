pub mod app;
pub mod config;
pub mod content;
pub mod email_client;
mod error;
pub mod templ_manager;
pub mod web;

// re-exports
pub use app::{serve, App, AppState};
pub use email_client::EmailClient;
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Compact human readable logs for local development, defaults to `debug`.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

/// Production logs, filtered with `RUST_LOG` and defaulting to `info`.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
