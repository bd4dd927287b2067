//! The configuration structs used to build the AppConfig, and their impls.
use lazy_regex::regex_captures;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};
use crate::web::types::ValidEmail;

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub email_config: EmailConfig,
    /// Filled from `RESEND_API_KEY` and `YOUR_EMAIL`, both may be missing at startup.
    #[serde(default)]
    pub waitlist_config: WaitlistConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct EmailConfig {
    /// Base url of the provider API, the send endpoint is `{url}/emails`.
    pub url: String,
    /// Sender identity in the `Display Name <address>` form.
    pub sender: String,
    pub timeout_millis: u64,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct WaitlistConfig {
    pub api_key: Option<SecretString>,
    pub recipient: Option<String>,
}

/// The secrets needed to relay a submission, only available once both are set.
#[derive(Debug)]
pub struct RelaySecrets<'a> {
    pub api_key: &'a SecretString,
    pub recipient: ValidEmail,
}

/// A sender identity split into its display name and validated address.
#[derive(Debug, Clone)]
pub struct SenderIdentity {
    pub display_name: String,
    pub address: ValidEmail,
}

// ###################################
// ->   IMPLs
// ###################################
impl EmailConfig {
    pub fn valid_sender(&self) -> ConfigResult<SenderIdentity> {
        SenderIdentity::parse(&self.sender)
    }
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_millis)
    }
}

impl WaitlistConfig {
    pub fn new(api_key: Option<SecretString>, recipient: Option<String>) -> Self {
        Self { api_key, recipient }
    }

    /// Returns the secrets if both are present, non-empty and the recipient is a valid address.
    /// Checked on every submission so a misconfigured server still starts and serves the page.
    pub fn relay_secrets(&self) -> ConfigResult<RelaySecrets<'_>> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingWaitlistSecrets)?;
        let recipient = self
            .recipient
            .as_deref()
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .ok_or(ConfigError::MissingWaitlistSecrets)?;
        let recipient = ValidEmail::parse(recipient)
            .map_err(|er| ConfigError::InvalidEmail(er.to_string()))?;

        Ok(RelaySecrets { api_key, recipient })
    }
}

impl SenderIdentity {
    pub fn parse(value: &str) -> ConfigResult<Self> {
        // {display name} <{address}>
        let (_whole, display_name, address) =
            regex_captures!(r#"^\s*([^<>]+?)\s*<([^<>\s]+)>\s*$"#, value)
                .ok_or_else(|| ConfigError::InvalidSender(value.to_string()))?;

        let address =
            ValidEmail::parse(address).map_err(|er| ConfigError::InvalidEmail(er.to_string()))?;

        Ok(SenderIdentity {
            display_name: display_name.to_string(),
            address,
        })
    }
}

impl std::fmt::Display for SenderIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.display_name, self.address.as_ref())
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
