pub mod serve;

// re-export
pub use serve::serve;

use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{AppConfig, WaitlistConfig},
    content::LandingContent,
    templ_manager::TemplateManager,
    EmailClient, Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let sender = config.email_config.valid_sender()?;

        let tm = TemplateManager::init();
        let email_client = EmailClient::new(
            &config.email_config.url,
            sender,
            config.email_config.timeout(),
        )?;

        if config.waitlist_config.relay_secrets().is_err() {
            tracing::warn!(
                "{:<20} - RESEND_API_KEY or YOUR_EMAIL missing, waitlist submissions will fail",
                "build_from_config"
            );
        }

        let app_state = AppState::new(
            tm,
            email_client,
            config.waitlist_config,
            LandingContent::default(),
        );

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

pub struct InternalState {
    pub templ_mgr: TemplateManager,
    pub email_client: EmailClient,
    pub waitlist_config: WaitlistConfig,
    pub content: LandingContent,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(
        templ_mgr: TemplateManager,
        email_client: EmailClient,
        waitlist_config: WaitlistConfig,
        content: LandingContent,
    ) -> Self {
        AppState(Arc::new(InternalState {
            templ_mgr,
            email_client,
            waitlist_config,
            content,
        }))
    }
}
