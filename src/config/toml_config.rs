use crate::core::carousel::CarouselConfig;
use crate::core::dashboard::ToastSettings;
use crate::utils::error::{AurumError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SESSION_FILE: &str = ".aurum/session.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AurumConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub carousel: CarouselSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub store_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_SESSION_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub success_toast_ms: u64,
    pub error_toast_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_toast_ms: 3000,
            error_toast_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub services_delay_ms: u64,
    pub hero_delay_ms: u64,
    pub clients_delay_ms: u64,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            services_delay_ms: 4000,
            hero_delay_ms: 3000,
            clients_delay_ms: 3000,
            swipe_threshold_px: 50.0,
        }
    }
}

impl AurumConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AurumError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未提供的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AurumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AURUM_BASE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_seconds)
    }

    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(&self.session.store_path)
    }

    pub fn toast_settings(&self) -> ToastSettings {
        ToastSettings {
            success: Duration::from_millis(self.ui.success_toast_ms),
            error: Duration::from_millis(self.ui.error_toast_ms),
        }
    }

    /// Preset by name with the configured delay and swipe threshold.
    pub fn carousel_preset(&self, name: &str) -> Option<CarouselConfig> {
        let preset = CarouselConfig::preset(name)?;
        let delay_ms = match preset.name.as_str() {
            "services" => self.carousel.services_delay_ms,
            "hero" => self.carousel.hero_delay_ms,
            _ => self.carousel.clients_delay_ms,
        };
        Some(
            preset
                .with_delay(Duration::from_millis(delay_ms))
                .with_swipe_threshold(self.carousel.swipe_threshold_px),
        )
    }
}

impl Validate for AurumConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.base_url", &self.server.base_url)?;
        validation::validate_range("server.timeout_seconds", self.server.timeout_seconds, 1, 300)?;
        validation::validate_path("session.store_path", &self.session.store_path)?;
        validation::validate_positive_number("ui.success_toast_ms", self.ui.success_toast_ms, 1)?;
        validation::validate_positive_number("ui.error_toast_ms", self.ui.error_toast_ms, 1)?;
        validation::validate_positive_number(
            "carousel.services_delay_ms",
            self.carousel.services_delay_ms,
            100,
        )?;
        validation::validate_positive_number(
            "carousel.hero_delay_ms",
            self.carousel.hero_delay_ms,
            100,
        )?;
        validation::validate_positive_number(
            "carousel.clients_delay_ms",
            self.carousel.clients_delay_ms,
            100,
        )?;
        validation::validate_range(
            "carousel.swipe_threshold_px",
            self.carousel.swipe_threshold_px,
            1.0,
            500.0,
        )?;
        Ok(())
    }
}
