//! Landing page contact form: client-side checks and the confirmation toast.

use crate::core::dashboard::{ActionOutcome, ToastSettings};
use crate::core::forms::FormData;
use crate::core::session::MSG_EMPTY_FIELDS;
use crate::domain::ports::{DashboardView, Toast, ToastLevel};
use crate::utils::error::{AurumError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

pub const MSG_INVALID_EMAIL: &str = "Por favor, insira um email válido.";
pub const MSG_CONTACT_SENT: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";

/// Simulated delivery time before the confirmation shows.
pub const SEND_DELAY: Duration = Duration::from_millis(2000);

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn from_form(form: &FormData) -> Self {
        let field = |name: &str| form.get(name).unwrap_or_default().to_string();
        Self {
            name: field("name"),
            email: field("email"),
            message: field("message"),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(AurumError::validation(field, MSG_EMPTY_FIELDS));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(AurumError::validation("email", MSG_INVALID_EMAIL));
        }
        Ok(())
    }
}

pub struct ContactForm {
    view: Arc<dyn DashboardView>,
    toasts: ToastSettings,
    send_delay: Duration,
}

impl ContactForm {
    pub fn new(view: Arc<dyn DashboardView>) -> Self {
        Self {
            view,
            toasts: ToastSettings::default(),
            send_delay: SEND_DELAY,
        }
    }

    pub fn with_toast_settings(mut self, toasts: ToastSettings) -> Self {
        self.toasts = toasts;
        self
    }

    pub fn with_send_delay(mut self, delay: Duration) -> Self {
        self.send_delay = delay;
        self
    }

    /// Invalid input toasts the first problem; valid input toasts the confirmation after the send delay.
    pub async fn submit(&self, message: &ContactMessage) -> ActionOutcome {
        if let Err(e) = message.validate() {
            tracing::debug!("Contact form rejected: {}", e);
            self.view.toast(&Toast {
                level: ToastLevel::Error,
                message: e.user_friendly_message(),
                dismiss_after: self.toasts.error,
            });
            return ActionOutcome::Failed;
        }

        tracing::info!("Contact message from {} <{}>", message.name, message.email);
        tokio::time::sleep(self.send_delay).await;
        self.view.toast(&Toast {
            level: ToastLevel::Success,
            message: MSG_CONTACT_SENT.to_string(),
            dismiss_after: self.toasts.success,
        });
        ActionOutcome::Succeeded
    }
}
