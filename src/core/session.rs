use crate::adapters::http::endpoint_url;
use crate::domain::model::{LoginRequest, LoginResponse, MeResponse, SessionUser, StoredSession};
use crate::domain::ports::{SessionView, TokenStore};
use crate::utils::error::{AurumError, Result};
use reqwest::Client;
use std::sync::{Arc, Mutex};
use url::Url;

/// 後端以 cookie 維持 session 且未回傳 token 時所存的標記
pub const COOKIE_SESSION_TOKEN: &str = "cookie-session";

pub const MSG_EMPTY_FIELDS: &str = "Por favor, preencha todos os campos.";
pub const MSG_INVALID_CREDENTIALS: &str = "Credenciais inválidas. Tente novamente.";
pub const MSG_CONNECTION_ERROR: &str = "Erro de conexão. Tente novamente.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut { error: Option<String> },
    Validating,
    LoggedIn(SessionUser),
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }
}

pub struct SessionManager {
    http: Client,
    base_url: Url,
    store: Arc<dyn TokenStore>,
    view: Arc<dyn SessionView>,
    state: Mutex<SessionState>,
}

impl SessionManager {
    pub fn new(
        http: Client,
        base_url: Url,
        store: Arc<dyn TokenStore>,
        view: Arc<dyn SessionView>,
    ) -> Self {
        Self {
            http,
            base_url,
            store,
            view,
            state: Mutex::new(SessionState::LoggedOut { error: None }),
        }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn state(&self) -> SessionState {
        self.state
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(SessionState::LoggedOut { error: None })
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        match self.state() {
            SessionState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Token currently persisted; a store that cannot be read counts as no token.
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(session) => session.map(|s| s.token),
            Err(e) => {
                tracing::warn!("Could not read stored session: {}", e);
                None
            }
        }
    }

    fn set_state(&self, next: SessionState) {
        if let Ok(mut guard) = self.state.lock() {
            tracing::debug!("Session state: {:?} -> {:?}", *guard, next);
            *guard = next;
        }
    }

    fn fail_login(&self, message: &str) {
        self.view.show_login_error(message);
        self.set_state(SessionState::LoggedOut {
            error: Some(message.to_string()),
        });
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser> {
        if email.trim().is_empty() {
            self.fail_login(MSG_EMPTY_FIELDS);
            return Err(AurumError::validation("email", MSG_EMPTY_FIELDS));
        }
        if password.is_empty() {
            self.fail_login(MSG_EMPTY_FIELDS);
            return Err(AurumError::validation("password", MSG_EMPTY_FIELDS));
        }

        self.view.set_loading(true);
        self.view.clear_login_error();
        self.set_state(SessionState::Validating);

        let result = self.submit_credentials(email.trim(), password).await;
        self.view.set_loading(false);

        match result {
            Ok(user) => {
                tracing::info!("Logged in as {} ({})", user.username, user.profile.as_str());
                self.set_state(SessionState::LoggedIn(user.clone()));
                self.view.show_dashboard(&user);
                Ok(user)
            }
            Err(e) => {
                let message = match &e {
                    AurumError::Http(_) | AurumError::SerializationError(_) => {
                        MSG_CONNECTION_ERROR.to_string()
                    }
                    other => other.user_friendly_message(),
                };
                tracing::warn!("Login failed: {}", e);
                self.fail_login(&message);
                Err(e)
            }
        }
    }

    async fn submit_credentials(&self, email: &str, password: &str) -> Result<SessionUser> {
        let url = endpoint_url(&self.base_url, "/api/auth/login")?;
        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        // 空白 body 視為沒有訊息；非 JSON (例如 proxy 的 HTML 錯誤頁) 視為連線問題
        let data: LoginResponse = if body.trim().is_empty() {
            LoginResponse::default()
        } else {
            serde_json::from_str(&body)?
        };

        if !status.is_success() || data.message.is_none() {
            return Err(AurumError::ApiError {
                status: status.as_u16(),
                message: data
                    .error
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MSG_INVALID_CREDENTIALS.to_string()),
            });
        }

        let user = data
            .user
            .ok_or_else(|| AurumError::unexpected("login response without user"))?;
        let token = data
            .token
            .unwrap_or_else(|| COOKIE_SESSION_TOKEN.to_string());

        self.store.save(&StoredSession::from_user(token, &user))?;
        Ok(user)
    }

    /// On load: a stored token is checked against `/api/auth/me`; anything but a user logs out.
    pub async fn validate_session(&self) -> Result<Option<SessionUser>> {
        let Some(token) = self.token() else {
            tracing::debug!("No stored token, staying logged out");
            self.set_state(SessionState::LoggedOut { error: None });
            return Ok(None);
        };

        self.set_state(SessionState::Validating);
        let url = endpoint_url(&self.base_url, "/api/auth/me")?;

        let outcome = match self.http.get(url).bearer_auth(&token).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<MeResponse>().await {
                    Ok(MeResponse { user: Some(user) }) => Some(user),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::warn!("Invalid /me payload: {}", e);
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::info!("Stored session rejected ({})", response.status());
                None
            }
            Err(e) => {
                tracing::warn!("Token validation error: {}", e);
                None
            }
        };

        match outcome {
            Some(user) => {
                self.set_state(SessionState::LoggedIn(user.clone()));
                self.view.show_dashboard(&user);
                Ok(Some(user))
            }
            None => {
                self.logout();
                Ok(None)
            }
        }
    }

    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        self.view.hide_dashboard();
        self.view.clear_login_error();
        self.view.set_loading(false);
        self.set_state(SessionState::LoggedOut { error: None });
    }

    /// Tells the backend to drop its session (best effort), then logs out locally.
    pub async fn sign_out(&self) {
        if let Some(token) = self.token() {
            match endpoint_url(&self.base_url, "/api/auth/logout") {
                Ok(url) => {
                    if let Err(e) = self.http.post(url).bearer_auth(token).send().await {
                        tracing::debug!("Backend logout failed: {}", e);
                    }
                }
                Err(e) => tracing::debug!("Backend logout skipped: {}", e),
            }
        }
        self.logout();
    }
}
