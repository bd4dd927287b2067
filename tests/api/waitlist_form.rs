//! Tests for the `POST /waitlist` no-script fallback.
use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use stackoptimizer::config::WaitlistConfig;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

#[tokio::test]
async fn form_submission_relays_and_renders_success() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_123" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let res = app
        .post_waitlist_form(&[("name", ""), ("email", "jamie@example.com")])
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await?;
    assert!(html.contains("data-state=\"succeeded\""));
    assert!(html.contains("on the list!"));

    let sent = app.sent_emails().await?;
    assert_eq!(
        sent[0]["text"].as_str(),
        Some("Name: Anonymous\nEmail: jamie@example.com")
    );

    Ok(())
}

#[tokio::test]
async fn invalid_form_renders_error_and_keeps_values() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let res = app
        .post_waitlist_form(&[("name", "Jamie"), ("email", "not-an-email")])
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let html = res.text().await?;
    assert!(html.contains("data-state=\"failed\""));
    assert!(html.contains("Invalid form data"));
    assert!(html.contains("value=\"Jamie\""));
    assert!(html.contains("value=\"not-an-email\""));

    Ok(())
}

#[tokio::test]
async fn form_without_secrets_renders_config_error() -> Result<()> {
    let app = TestApp::spawn_with(WaitlistConfig::default()).await?;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let res = app
        .post_waitlist_form(&[("email", "jamie@example.com")])
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = res.text().await?;
    assert!(html.contains("data-state=\"failed\""));
    assert!(html.contains("Missing RESEND_API_KEY or YOUR_EMAIL"));

    Ok(())
}
