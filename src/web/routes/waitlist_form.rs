use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use tracing::warn;

use super::{api::waitlist::relay_submission, home::render_landing_page, WaitlistError};
use crate::{
    web::{types::DeserSubmission, types::FormState, Error, WebResult},
    AppState,
};

/// `POST /waitlist`
/// Fallback for browsers without scripts: runs the same relay as the API route and
/// re-renders the landing page with the settled form state.
pub async fn waitlist_form(
    State(app_state): State<AppState>,
    payload: Result<Form<DeserSubmission>, FormRejection>,
) -> WebResult<(StatusCode, Html<String>)> {
    let (result, submission) = match payload {
        Ok(Form(submission)) => (
            relay_submission(&app_state, submission.clone()).await,
            submission,
        ),
        Err(rejection) => (
            Err(WaitlistError::InvalidPayload(rejection.body_text())),
            DeserSubmission::default(),
        ),
    };

    let (status, form_state) = match result {
        Ok(()) => (StatusCode::OK, FormState::Succeeded),
        Err(er) => {
            let web_error = Error::from(er);
            let (status, client_error) = web_error.status_code_and_client_error();
            warn!("{:<20} - {web_error}", "waitlist_form");
            (status, FormState::failed(client_error.to_string(), &submission))
        }
    };

    let body = render_landing_page(&app_state, &form_state)?;

    Ok((status, Html(body)))
}
