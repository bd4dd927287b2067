//! Tries to create an `AppConfig` from config files and the environment.
//! Sources are layered with `figment`, later sources override earlier ones:
//! - `config/base.toml`
//! - `config/{local|production}.toml`, picked with `APP_ENVIRONMENT`
//! - `APP_` prefixed environment variables, `__` separates nested keys
//! - `RESEND_API_KEY` and `YOUR_EMAIL`, mapped into `waitlist_config`
//!
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod error;
mod types;

use std::sync::OnceLock;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use types::{
    AppConfig, EmailConfig, Environment, NetConfig, RelaySecrets, SenderIdentity, WaitlistConfig,
};

pub const API_KEY_VAR: &str = "RESEND_API_KEY";
pub const RECIPIENT_VAR: &str = "YOUR_EMAIL";

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!(
            "{:<20} - Initializing the configuration",
            "get_or_init_config"
        );
        load_config().unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"))
    })
}

/// Builds the `AppConfig` from the `config` directory in the current working directory
/// and the process environment.
pub fn load_config() -> ConfigResult<AppConfig> {
    let config_dir = std::env::current_dir()?.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;
    let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

    let config = Figment::new()
        .merge(Toml::file(config_dir.join("base.toml")))
        .merge(Toml::file(config_dir.join(environment_filename)))
        .merge(Env::prefixed("APP_").split("__"))
        .merge(waitlist_secrets_env())
        .extract::<AppConfig>()?;

    // Fail early on a malformed sender, the secrets are checked per request.
    config.email_config.valid_sender()?;

    Ok(config)
}

/// Maps the two raw secret variables into the `waitlist_config` table.
fn waitlist_secrets_env() -> Env {
    Env::raw().only(&[API_KEY_VAR, RECIPIENT_VAR]).map(|key| {
        if key.as_str().eq_ignore_ascii_case(API_KEY_VAR) {
            "waitlist_config.api_key".into()
        } else {
            "waitlist_config.recipient".into()
        }
    })
}
