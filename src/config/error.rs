pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to build the 'Environment' from the provided string.")]
    StringToEnvironmentFail,
    #[error("invalid sender identity, expected 'Display Name <address>': {0}")]
    InvalidSender(String),
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    #[error("missing RESEND_API_KEY or YOUR_EMAIL")]
    MissingWaitlistSecrets,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("figment extraction error: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}
