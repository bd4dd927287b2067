//! Spawns the application on a random port with the email provider replaced by a `MockServer`.
use std::{net::SocketAddr, sync::OnceLock};

use anyhow::Result;
use reqwest::Response;
use secrecy::SecretString;
use stackoptimizer::{
    config::{get_or_init_config, WaitlistConfig},
    init_dbg_tracing, App,
};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "re_test_api_key";
pub const TEST_RECIPIENT: &str = "owner@stackoptimizer.test";

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    pub email_server: MockServer,
}

/// Set `TEST_LOG` to see the application logs while testing.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

impl TestApp {
    /// Spawns the app with both waitlist secrets configured.
    pub async fn spawn() -> Result<Self> {
        let waitlist_config = WaitlistConfig::new(
            Some(SecretString::from(TEST_API_KEY.to_string())),
            Some(TEST_RECIPIENT.to_string()),
        );
        Self::spawn_with(waitlist_config).await
    }

    /// A helper function that tries to spawn a separate task to serve our app,
    /// with the provided waitlist secrets instead of the ones from the environment.
    pub async fn spawn_with(waitlist_config: WaitlistConfig) -> Result<Self> {
        init_test_subscriber();

        let email_server = MockServer::start().await;

        let mut config = get_or_init_config().clone();
        // Trying to bind port 0 will trigger an OS scan for an available port
        config.net_config.host = [127, 0, 0, 1];
        config.net_config.app_port = 0;
        config.email_config.url = email_server.uri();
        config.email_config.timeout_millis = 200;
        config.waitlist_config = waitlist_config;

        let app = App::build_from_config(config).await?;
        let addr = app.local_addr()?;

        tokio::spawn(stackoptimizer::serve(app));

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(TestApp {
            addr,
            http_client,
            email_server,
        })
    }

    pub async fn get_home(&self) -> Result<Response> {
        let res = self
            .http_client
            .get(format!("http://{}/", self.addr))
            .send()
            .await?;
        Ok(res)
    }

    pub async fn post_waitlist(&self, body: &serde_json::Value) -> Result<Response> {
        let res = self
            .http_client
            .post(format!("http://{}/api/waitlist", self.addr))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    /// Posts a raw body to the API route, for payloads that aren't valid JSON.
    pub async fn post_waitlist_raw(&self, body: &'static str, content_type: &str) -> Result<Response> {
        let res = self
            .http_client
            .post(format!("http://{}/api/waitlist", self.addr))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        Ok(res)
    }

    /// Posts to the no-script fallback route like a plain HTML form would.
    pub async fn post_waitlist_form(&self, fields: &[(&str, &str)]) -> Result<Response> {
        let res = self
            .http_client
            .post(format!("http://{}/waitlist", self.addr))
            .form(fields)
            .send()
            .await?;
        Ok(res)
    }

    /// JSON bodies of every request the mocked provider received.
    pub async fn sent_emails(&self) -> Result<Vec<serde_json::Value>> {
        let requests = self
            .email_server
            .received_requests()
            .await
            .unwrap_or_default();

        let bodies = requests
            .iter()
            .map(|req| serde_json::from_slice(&req.body))
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(bodies)
    }
}
