use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::routes::WaitlistError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("waitlist error: {0}")]
    Waitlist(#[from] WaitlistError),

    #[error("templating error: {0}")]
    Tera(#[from] tera::Error),
    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    /// Maps the error to the status code and the message the client is allowed to see.
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Waitlist(WaitlistError::InvalidPayload(_) | WaitlistError::DataParsing(_)) => {
                (StatusCode::BAD_REQUEST, InvalidFormData)
            }
            Error::Waitlist(WaitlistError::Config(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MissingConfig)
            }
            Error::Waitlist(WaitlistError::EmailClient(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, EmailDelivery)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The only messages a client ever sees, none of them carry error internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Invalid form data")]
    InvalidFormData,
    #[display("Missing RESEND_API_KEY or YOUR_EMAIL")]
    MissingConfig,
    #[display("Failed to send email")]
    EmailDelivery,
    #[display("Server error")]
    ServiceError,
}
