#![allow(dead_code)]

use aurum_client::adapters::console::AutoConfirm;
use aurum_client::adapters::http::{build_http_client, ApiClient};
use aurum_client::adapters::storage::MemoryTokenStore;
use aurum_client::core::dashboard::Dashboard;
use aurum_client::core::session::SessionManager;
use aurum_client::domain::model::{Profile, SessionUser, StoredSession, TicketStats};
use aurum_client::domain::ports::{
    DashboardView, SessionView, SlideFrame, SlideView, Toast, ToastLevel, TokenStore,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// 記錄所有畫面操作，供測試斷言
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ShowDashboard(String),
    HideDashboard,
    LoginError(String),
    ClearLoginError,
    Loading(bool),
    Render { container: String, html: String },
    Stats(TicketStats),
    ShowModal { title: String, html: String },
    HideModal,
    Prefill(BTreeMap<String, String>),
    Options { select_id: String, html: String },
    Toast(Toast),
    Slide(SlideFrame),
    Indicators(usize),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Toast(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn toasts_of(&self, level: ToastLevel) -> Vec<String> {
        self.toasts()
            .into_iter()
            .filter(|t| t.level == level)
            .map(|t| t.message)
            .collect()
    }

    pub fn renders(&self, container: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Render { container: c, html } if c == container => Some(html),
                _ => None,
            })
            .collect()
    }

    pub fn modals(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::ShowModal { title, html } => Some((title, html)),
                _ => None,
            })
            .collect()
    }

    pub fn options(&self, select_id: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Options { select_id: s, html } if s == select_id => Some(html),
                _ => None,
            })
            .collect()
    }

    pub fn stats(&self) -> Vec<TicketStats> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Stats(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn dashboard_shown(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, ViewEvent::ShowDashboard(_)))
    }

    pub fn slides(&self) -> Vec<SlideFrame> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Slide(f) => Some(f),
                _ => None,
            })
            .collect()
    }
}

impl SessionView for RecordingView {
    fn show_dashboard(&self, user: &SessionUser) {
        self.push(ViewEvent::ShowDashboard(user.username.clone()));
    }

    fn hide_dashboard(&self) {
        self.push(ViewEvent::HideDashboard);
    }

    fn show_login_error(&self, message: &str) {
        self.push(ViewEvent::LoginError(message.to_string()));
    }

    fn clear_login_error(&self) {
        self.push(ViewEvent::ClearLoginError);
    }

    fn set_loading(&self, loading: bool) {
        self.push(ViewEvent::Loading(loading));
    }
}

impl DashboardView for RecordingView {
    fn render(&self, container: &str, html: &str) {
        self.push(ViewEvent::Render {
            container: container.to_string(),
            html: html.to_string(),
        });
    }

    fn update_stats(&self, stats: &TicketStats) {
        self.push(ViewEvent::Stats(stats.clone()));
    }

    fn show_modal(&self, title: &str, html: &str) {
        self.push(ViewEvent::ShowModal {
            title: title.to_string(),
            html: html.to_string(),
        });
    }

    fn hide_modal(&self) {
        self.push(ViewEvent::HideModal);
    }

    fn prefill_form(&self, values: &BTreeMap<String, String>) {
        self.push(ViewEvent::Prefill(values.clone()));
    }

    fn render_options(&self, select_id: &str, html: &str) {
        self.push(ViewEvent::Options {
            select_id: select_id.to_string(),
            html: html.to_string(),
        });
    }

    fn toast(&self, toast: &Toast) {
        self.push(ViewEvent::Toast(toast.clone()));
    }
}

impl SlideView for RecordingView {
    fn apply(&self, frame: &SlideFrame) {
        self.push(ViewEvent::Slide(*frame));
    }

    fn rebuild_indicators(&self, count: usize) {
        self.push(ViewEvent::Indicators(count));
    }
}

pub fn stored_session(token: &str) -> StoredSession {
    StoredSession::from_user(
        token.to_string(),
        &SessionUser {
            username: "admin".to_string(),
            email: "admin@aurum.com".to_string(),
            profile: Profile::Administrator,
        },
    )
}

pub struct Harness {
    pub view: Arc<RecordingView>,
    pub store: Arc<MemoryTokenStore>,
    pub session: Arc<SessionManager>,
    pub dashboard: Dashboard,
}

/// 以 mock server 位址建立 session 與 dashboard；`token` 為 None 時從未登入狀態開始
pub fn harness(base_url: &str, token: Option<&str>, confirm: bool) -> Harness {
    let view = RecordingView::new();
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_session(stored_session(token)),
        None => MemoryTokenStore::new(),
    });
    let http = build_http_client(Duration::from_secs(5)).unwrap();
    let session = Arc::new(SessionManager::new(
        http,
        Url::parse(base_url).unwrap(),
        store.clone(),
        view.clone(),
    ));
    let dashboard = Dashboard::new(
        ApiClient::new(session.clone()),
        view.clone(),
        Arc::new(AutoConfirm { answer: confirm }),
    );

    Harness {
        view,
        store,
        session,
        dashboard,
    }
}

pub fn stored_token(store: &MemoryTokenStore) -> Option<String> {
    store.load().unwrap().map(|s| s.token)
}
