use crate::domain::model::{SessionUser, TicketStats};
use crate::domain::ports::{
    Confirmer, DashboardView, SessionView, SlideFrame, SlideView, Toast, ToastLevel,
};
use async_trait::async_trait;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Reduces rendered HTML to readable terminal text.
pub fn html_to_text(html: &str) -> String {
    static BLOCK: OnceLock<Regex> = OnceLock::new();
    static TAG: OnceLock<Regex> = OnceLock::new();
    static BLANK: OnceLock<Regex> = OnceLock::new();

    let block = BLOCK.get_or_init(|| {
        Regex::new(r"(?i)</?(div|p|h[1-6]|br|form|option|small|label)[^>]*>").unwrap()
    });
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]+>").unwrap());
    let blank = BLANK.get_or_init(|| Regex::new(r"\n\s*\n+").unwrap());

    let text = block.replace_all(html, "\n");
    let text = tag.replace_all(&text, "");
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    blank.replace_all(&lines.join("\n"), "\n").trim().to_string()
}

/// Terminal rendition of the login screen, the dashboard and the carousels.
#[derive(Debug, Default, Clone)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl SessionView for ConsoleView {
    fn show_dashboard(&self, user: &SessionUser) {
        println!(
            "Bem-vindo, {} ({})",
            user.username,
            user.profile.label()
        );
    }

    fn hide_dashboard(&self) {
        tracing::debug!("Dashboard hidden");
    }

    fn show_login_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn clear_login_error(&self) {}

    fn set_loading(&self, loading: bool) {
        if loading {
            tracing::info!("Entrando...");
        }
    }
}

impl DashboardView for ConsoleView {
    fn render(&self, container: &str, html: &str) {
        tracing::debug!("Rendering {}", container);
        println!("{}", html_to_text(html));
    }

    fn update_stats(&self, stats: &TicketStats) {
        println!(
            "Total: {} | Abertos: {} | Em andamento: {} | Fechados: {}",
            stats.total, stats.aberto, stats.em_andamento, stats.fechado
        );
    }

    fn show_modal(&self, title: &str, html: &str) {
        println!("== {} ==", title);
        let body = html_to_text(html);
        if !body.is_empty() {
            println!("{}", body);
        }
    }

    fn hide_modal(&self) {
        tracing::debug!("Modal closed");
    }

    fn prefill_form(&self, values: &BTreeMap<String, String>) {
        for (field, value) in values {
            println!("  {} = {}", field, value);
        }
    }

    fn render_options(&self, select_id: &str, html: &str) {
        println!("[{}]", select_id);
        println!("{}", html_to_text(html));
    }

    fn toast(&self, toast: &Toast) {
        match toast.level {
            ToastLevel::Success => println!("✔ {}", toast.message),
            ToastLevel::Error => eprintln!("✖ {}", toast.message),
        }
    }
}

impl SlideView for ConsoleView {
    fn apply(&self, frame: &SlideFrame) {
        let dots: String = (0..frame.total)
            .map(|i| if i == frame.index { '●' } else { '○' })
            .collect();
        println!(
            "slide {}/{} {} (translateX({}%))",
            frame.index + 1,
            frame.total,
            dots,
            frame.translate_percent
        );
    }

    fn rebuild_indicators(&self, count: usize) {
        tracing::debug!("Carousel indicators rebuilt: {}", count);
    }
}

/// Asks on stdin; anything but s/sim/y/yes declines.
#[derive(Debug, Default, Clone)]
pub struct StdinConfirmer;

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        if stdout
            .write_all(format!("{} [s/N] ", prompt).as_bytes())
            .await
            .is_err()
        {
            return false;
        }
        let _ = stdout.flush().await;

        let mut answer = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        if let Err(e) = reader.read_line(&mut answer).await {
            tracing::warn!("Could not read confirmation: {}", e);
            return false;
        }
        matches!(
            answer.trim().to_lowercase().as_str(),
            "s" | "sim" | "y" | "yes"
        )
    }
}

/// Fixed answer, for `--yes` and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    pub answer: bool,
}

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!("Auto-answering '{}' with {}", prompt, self.answer);
        self.answer
    }
}
