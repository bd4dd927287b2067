use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::SenderIdentity, web::types::ValidEmail};

/// A thin client for the Resend `POST /emails` endpoint.
/// The API key is passed per call because it is only resolved when a submission arrives.
#[derive(Debug)]
pub struct EmailClient {
    pub http_client: Client,
    pub url: reqwest::Url,
    pub sender: SenderIdentity,
}

impl EmailClient {
    pub fn new<S: AsRef<str>>(
        url: S,
        sender: SenderIdentity,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let url =
            reqwest::Url::parse(url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(EmailClient {
            http_client,
            url,
            sender,
        })
    }

    pub async fn send_email<S>(
        &self,
        api_key: &SecretString,
        recepient: &ValidEmail,
        subject: S,
        text_content: S,
    ) -> Result<()>
    where
        S: AsRef<str>,
    {
        let url = self
            .url
            .join("emails")
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let sender = self.sender.to_string();
        let email_content = EmailContent {
            from: &sender,
            to: [recepient.as_ref()],
            subject: subject.as_ref(),
            text: text_content.as_ref(),
        };

        let resp = self
            .http_client
            .post(url)
            .bearer_auth(api_key.expose_secret())
            .json(&email_content)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            // The provider explains failures in a JSON body, fall back to the raw text.
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|er| er.message)
                .unwrap_or(body);
            return Err(Error::Provider { status, message });
        }

        debug!("{:<20} - provider accepted the email", "send_email");
        Ok(())
    }
}

#[derive(Serialize)]
pub struct EmailContent<'a> {
    pub from: &'a str,
    pub to: [&'a str; 1],
    pub subject: &'a str,
    pub text: &'a str,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: String,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("provider responded with {status}: {message}")]
    Provider { status: StatusCode, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
