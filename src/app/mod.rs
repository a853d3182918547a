use crate::adapters::console::ConsoleView;
use crate::adapters::http::{build_http_client, ApiClient};
use crate::adapters::storage::FileTokenStore;
use crate::config::AurumConfig;
use crate::core::carousel::Carousel;
use crate::core::contact::ContactForm;
use crate::core::dashboard::Dashboard;
use crate::core::session::SessionManager;
use crate::domain::model::SessionUser;
use crate::domain::ports::{Confirmer, DashboardView, SessionView, SlideView, TokenStore};
use crate::utils::error::{AurumError, Result};
use std::sync::Arc;
use url::Url;

/// Wires the session manager, the API client and the dashboard around one HTTP client.
pub struct AurumApp {
    config: AurumConfig,
    session: Arc<SessionManager>,
    dashboard: Dashboard,
    contact: ContactForm,
}

impl AurumApp {
    pub fn new(
        config: AurumConfig,
        store: Arc<dyn TokenStore>,
        session_view: Arc<dyn SessionView>,
        dashboard_view: Arc<dyn DashboardView>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.server.base_url)?;
        let http = build_http_client(config.timeout())?;

        let session = Arc::new(SessionManager::new(http, base_url, store, session_view));
        let api = ApiClient::new(session.clone());
        let contact =
            ContactForm::new(dashboard_view.clone()).with_toast_settings(config.toast_settings());
        let dashboard = Dashboard::new(api, dashboard_view, confirmer)
            .with_toast_settings(config.toast_settings());

        tracing::debug!("Aurum client ready for {}", config.server.base_url);
        Ok(Self {
            config,
            session,
            dashboard,
            contact,
        })
    }

    /// Terminal setup: session file on disk, console output for every view.
    pub fn console(config: AurumConfig, confirmer: Arc<dyn Confirmer>) -> Result<Self> {
        let store = Arc::new(FileTokenStore::new(config.session_path()));
        let view = Arc::new(ConsoleView::new());
        Self::new(config, store, view.clone(), view, confirmer)
    }

    pub fn config(&self) -> &AurumConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Page load: a valid stored session opens the dashboard.
    pub async fn bootstrap(&self) -> Result<Option<SessionUser>> {
        let user = self.session.validate_session().await?;
        if user.is_some() {
            self.dashboard.initialize().await?;
        }
        Ok(user)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser> {
        let user = self.session.login(email, password).await?;
        self.dashboard.initialize().await?;
        Ok(user)
    }

    /// The stored session, checked against the backend; none means the caller must log in.
    pub async fn require_session(&self) -> Result<SessionUser> {
        self.session
            .validate_session()
            .await?
            .ok_or(AurumError::SessionExpired)
    }

    pub fn carousel(
        &self,
        preset: &str,
        item_count: usize,
        viewport_width: u32,
        view: Option<Arc<dyn SlideView>>,
    ) -> Result<Carousel> {
        let config = self.config.carousel_preset(preset).ok_or_else(|| {
            AurumError::InvalidConfigValueError {
                field: "carousel".to_string(),
                value: preset.to_string(),
                reason: "Valid presets: services, hero, clients".to_string(),
            }
        })?;
        Ok(Carousel::new(config, item_count, view, viewport_width))
    }
}
