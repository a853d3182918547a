use crate::domain::model::{SessionUser, StoredSession, TicketStats};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Persistent home of the session fields (token, profile, username, email).
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>>;
    fn save(&self, session: &StoredSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Login screen and dashboard visibility.
pub trait SessionView: Send + Sync {
    fn show_dashboard(&self, user: &SessionUser);
    fn hide_dashboard(&self);
    fn show_login_error(&self, message: &str);
    fn clear_login_error(&self);
    fn set_loading(&self, loading: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// Transient notification; the view hides it after `dismiss_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub dismiss_after: Duration,
}

pub trait DashboardView: Send + Sync {
    /// Replace the content of a card container (`ticketsContainer`, ...).
    fn render(&self, container: &str, html: &str);
    fn update_stats(&self, stats: &TicketStats);
    fn show_modal(&self, title: &str, html: &str);
    fn hide_modal(&self);
    /// Fill form fields by element id.
    fn prefill_form(&self, values: &BTreeMap<String, String>);
    fn render_options(&self, select_id: &str, html: &str);
    fn toast(&self, toast: &Toast);
}

#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// What a carousel pushes to its track on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFrame {
    pub index: usize,
    pub total: usize,
    pub translate_percent: i64,
}

/// Called after the carousel releases its state, so implementations may navigate it.
pub trait SlideView: Send + Sync {
    fn apply(&self, frame: &SlideFrame);
    fn rebuild_indicators(&self, count: usize);
}
