use thiserror::Error;

#[derive(Error, Debug)]
pub enum AurumError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    #[error("Session expired")]
    SessionExpired,
}

/// 錯誤分類，對應網路失敗 / 應用錯誤 / 授權過期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Application,
    Auth,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AurumError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AurumError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        AurumError::UnexpectedResponse {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AurumError::Http(_) => ErrorCategory::Network,
            AurumError::ApiError { .. } => ErrorCategory::Application,
            AurumError::SessionExpired => ErrorCategory::Auth,
            AurumError::ConfigError { .. }
            | AurumError::ConfigValidationError { .. }
            | AurumError::InvalidConfigValueError { .. }
            | AurumError::MissingConfigError { .. }
            | AurumError::UrlParse(_) => ErrorCategory::Configuration,
            AurumError::IoError(_)
            | AurumError::SerializationError(_)
            | AurumError::ValidationError { .. }
            | AurumError::UnexpectedResponse { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Application | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Auth => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 介面上顯示給使用者的訊息（葡萄牙文）
    pub fn user_friendly_message(&self) -> String {
        match self {
            AurumError::Http(_) => "Erro de conexão. Tente novamente.".to_string(),
            AurumError::ApiError { message, .. } => message.clone(),
            AurumError::SessionExpired => "Sessão expirada. Faça login novamente.".to_string(),
            AurumError::ValidationError { message, .. } => message.clone(),
            AurumError::UnexpectedResponse { .. } | AurumError::SerializationError(_) => {
                "Resposta inesperada do servidor.".to_string()
            }
            AurumError::IoError(_) => "Erro ao acessar os dados locais da sessão.".to_string(),
            AurumError::ConfigError { .. }
            | AurumError::ConfigValidationError { .. }
            | AurumError::InvalidConfigValueError { .. }
            | AurumError::MissingConfigError { .. }
            | AurumError::UrlParse(_) => format!("Configuração inválida: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the Aurum backend is reachable and try again",
            ErrorCategory::Application => "Review the submitted data and repeat the action",
            ErrorCategory::Auth => "Run `aurum login` to start a new session",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::Data => "Check the session file and the backend response format",
        }
    }
}

pub type Result<T> = std::result::Result<T, AurumError>;
