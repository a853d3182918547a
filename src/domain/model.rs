use crate::utils::error::{AurumError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// 後端實體種類，決定端點、表單片段與容器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ticket,
    User,
    Client,
    ServiceType,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Ticket,
        EntityKind::User,
        EntityKind::Client,
        EntityKind::ServiceType,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            EntityKind::Ticket => "/api/tickets",
            EntityKind::User => "/api/users",
            EntityKind::Client => "/api/clients",
            EntityKind::ServiceType => "/api/service_types",
        }
    }

    pub fn item_endpoint(self, id: i64) -> String {
        format!("{}/{}", self.endpoint(), id)
    }

    pub fn form_path(self) -> &'static str {
        match self {
            EntityKind::Ticket => "/forms/ticket_form.html",
            EntityKind::User => "/forms/user_form.html",
            EntityKind::Client => "/forms/client_form.html",
            EntityKind::ServiceType => "/forms/service_type_form.html",
        }
    }

    /// 列表回應外層包裝的鍵
    pub fn collection_key(self) -> &'static str {
        match self {
            EntityKind::Ticket => "tickets",
            EntityKind::User => "users",
            EntityKind::Client => "clients",
            EntityKind::ServiceType => "service_types",
        }
    }

    pub fn item_key(self) -> &'static str {
        match self {
            EntityKind::Ticket => "ticket",
            EntityKind::User => "user",
            EntityKind::Client => "client",
            EntityKind::ServiceType => "service_type",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            EntityKind::Ticket => "ticketsContainer",
            EntityKind::User => "usersContainer",
            EntityKind::Client => "clientsContainer",
            EntityKind::ServiceType => "servicesContainer",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ticket" | "tickets" => Some(EntityKind::Ticket),
            "user" | "users" => Some(EntityKind::User),
            "client" | "clients" => Some(EntityKind::Client),
            "service_type" | "service_types" | "service" | "services" => {
                Some(EntityKind::ServiceType)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.item_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
    Other(String),
}

impl TicketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Open => "aberto",
            TicketStatus::InProgress => "em_andamento",
            TicketStatus::Closed => "fechado",
            TicketStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TicketStatus::Open => "Aberto",
            TicketStatus::InProgress => "Em Andamento",
            TicketStatus::Closed => "Fechado",
            TicketStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for TicketStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "aberto" => TicketStatus::Open,
            "em_andamento" => TicketStatus::InProgress,
            "fechado" => TicketStatus::Closed,
            _ => TicketStatus::Other(raw),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "baixa",
            Priority::Medium => "media",
            Priority::High => "alta",
            Priority::Urgent => "urgente",
            Priority::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Média",
            Priority::High => "Alta",
            Priority::Urgent => "Urgente",
            Priority::Other(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "baixa" => Priority::Low,
            "media" => Priority::Medium,
            "alta" => Priority::High,
            "urgente" => Priority::Urgent,
            _ => Priority::Other(raw),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Profile {
    Administrator,
    Technician,
    Regular,
    Other(String),
}

impl Profile {
    pub fn as_str(&self) -> &str {
        match self {
            Profile::Administrator => "administrador",
            Profile::Technician => "tecnico",
            Profile::Regular => "usuario",
            Profile::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Profile::Administrator => "Administrador",
            Profile::Technician => "Técnico",
            Profile::Regular => "Usuário",
            Profile::Other(raw) => raw,
        }
    }
}

impl From<String> for Profile {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "administrador" => Profile::Administrator,
            "tecnico" => Profile::Technician,
            "usuario" => Profile::Regular,
            _ => Profile::Other(raw),
        }
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub ticket_id: Option<i64>,
    #[serde(default, alias = "user")]
    pub username: Option<String>,
    pub message: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    #[serde(default, alias = "company_id")]
    pub client_id: Option<i64>,
    #[serde(default, alias = "company_name")]
    pub client_name: Option<String>,
    #[serde(default)]
    pub service_type_id: Option<i64>,
    #[serde(default, alias = "service_type")]
    pub service_type_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub responses: Vec<TicketResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub profile: Profile,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// 各狀態的工單數量，缺少的欄位視為 0
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default, alias = "abertos")]
    pub aberto: u64,
    #[serde(default)]
    pub em_andamento: u64,
    #[serde(default, alias = "fechados")]
    pub fechado: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    pub profile: Profile,
}

/// 持久化的 session 欄位，一起寫入、一起清除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub profile: String,
    pub username: String,
    pub email: String,
}

impl StoredSession {
    pub fn from_user(token: String, user: &SessionUser) -> Self {
        Self {
            token,
            profile: user.profile.as_str().to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub profile: String,
    pub client_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceTypePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketPayload {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub client_id: i64,
    pub service_type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsePayload {
    pub message: String,
    pub is_internal: bool,
}

/// 列表端點可能回傳裸陣列或 `{ "<key>": [...] }`
pub fn narrow_list<T: DeserializeOwned>(value: serde_json::Value, key: &str) -> Result<Vec<T>> {
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(mut map) => match map.remove(key) {
            Some(inner @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(inner)?),
            Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(other) => Err(AurumError::unexpected(format!(
                "'{}' is not a list: {}",
                key, other
            ))),
            None => Err(AurumError::unexpected(format!(
                "list response without '{}' key",
                key
            ))),
        },
        serde_json::Value::Null => Ok(Vec::new()),
        other => Err(AurumError::unexpected(format!(
            "expected a list response, got {}",
            other
        ))),
    }
}

/// 單筆端點可能回傳裸物件或 `{ "<key>": {...} }`
pub fn narrow_item<T: DeserializeOwned>(value: serde_json::Value, key: &str) -> Result<T> {
    match value {
        serde_json::Value::Object(mut map) => {
            if matches!(map.get(key), Some(serde_json::Value::Object(_))) {
                let inner = map.remove(key).unwrap_or_default();
                Ok(serde_json::from_value(inner)?)
            } else {
                Ok(serde_json::from_value(serde_json::Value::Object(map))?)
            }
        }
        other => Err(AurumError::unexpected(format!(
            "expected an object response, got {}",
            other
        ))),
    }
}

pub fn narrow_stats(value: serde_json::Value) -> Result<TicketStats> {
    narrow_item(value, "stats")
}
