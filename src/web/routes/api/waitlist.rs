use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::{
    config::ConfigError,
    email_client,
    web::{
        types::{DataParsingError, DeserSubmission, Envelope, ValidSubmission},
        WebResult,
    },
    AppState,
};

pub const SIGNUP_SUBJECT: &str = "New StackOptimizer Waitlist Signup";

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("payload could not be read: {0}")]
    InvalidPayload(String),
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("email client error: {0}")]
    EmailClient(#[from] email_client::Error),
    #[error("tera template render error: {0}")]
    Tera(#[from] tera::Error),
}

// ###################################
// ->   API
// ###################################
/// `POST /api/waitlist`
/// Any body that can't be read as a submission is a client error, same as an invalid email.
pub async fn waitlist(
    State(app_state): State<AppState>,
    payload: Result<Json<DeserSubmission>, JsonRejection>,
) -> WebResult<Json<Envelope>> {
    let Json(submission) =
        payload.map_err(|rejection| WaitlistError::InvalidPayload(rejection.body_text()))?;

    relay_submission(&app_state, submission).await?;

    Ok(Json(Envelope::success()))
}

/// Validates the submission and forwards it to the configured mailbox.
/// At most one send is attempted, nothing is retried.
#[tracing::instrument(
    name = "Relaying waitlist submission",
    skip(app_state, submission),
    fields(submitter_email = %submission.email)
)]
pub async fn relay_submission(
    app_state: &AppState,
    submission: DeserSubmission,
) -> Result<(), WaitlistError> {
    let submission = ValidSubmission::try_from(submission)?;
    let secrets = app_state.waitlist_config.relay_secrets()?;

    let text_body = app_state.templ_mgr.render_signup_email(&submission)?;

    app_state
        .email_client
        .send_email(
            secrets.api_key,
            &secrets.recipient,
            SIGNUP_SUBJECT,
            text_body.as_str(),
        )
        .await?;

    info!(
        anonymous = submission.name.is_placeholder(),
        "waitlist signup relayed"
    );
    Ok(())
}
