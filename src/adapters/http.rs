use crate::core::session::SessionManager;
use crate::domain::model::ErrorBody;
use crate::utils::error::{AurumError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// 建立共用的 HTTP client；cookie jar 保存後端的 session cookie
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .cookie_store(true)
        .timeout(timeout)
        .user_agent(concat!("aurum-client/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Joins an absolute API path onto the base URL, keeping any path prefix of the base.
pub fn endpoint_url(base_url: &Url, path: &str) -> Result<Url> {
    let base = base_url.as_str().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Ok(Url::parse(&format!("{}/{}", base, path))?)
}

/// Wraps outbound requests with the bearer token; a 401 forces logout.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Arc<SessionManager>,
}

impl ApiClient {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self {
            http: session.http().clone(),
            base_url: session.base_url().clone(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = endpoint_url(&self.base_url, path)?;
        tracing::debug!("API request: {} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("API request error: {} {}: {}", method, path, e);
            AurumError::Http(e)
        })?;

        tracing::debug!("API response status: {} for {} {}", response.status(), method, path);

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session rejected by backend on {} {}", method, path);
            self.session.logout();
            return Err(AurumError::SessionExpired);
        }

        Ok(response)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request::<()>(Method::GET, path, None).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request::<()>(Method::DELETE, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Loads an HTML form partial; partials are public, so no token is attached.
    pub async fn fetch_partial(&self, path: &str) -> Result<String> {
        let url = endpoint_url(&self.base_url, path)?;
        tracing::debug!("Loading form partial: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AurumError::ApiError {
                status: status.as_u16(),
                message: format!(
                    "Failed to load form: {}",
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            });
        }

        Ok(response.text().await?)
    }
}

pub async fn read_json(response: Response) -> Result<serde_json::Value> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

/// Server-provided `error` field, or the fallback when the body carries none.
pub async fn read_error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { error: Some(message) }) if !message.trim().is_empty() => message,
        _ => {
            tracing::debug!("No error message in {} response body", status);
            fallback.to_string()
        }
    }
}
