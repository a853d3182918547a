use crate::domain::model::{
    ClientPayload, EntityKind, ServiceTypePayload, TicketPayload, UserPayload,
};
use crate::utils::error::{AurumError, Result};
use std::collections::BTreeMap;

/// Submitted form fields, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    /// Parses `name=value` pairs, as given on the command line.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut form = FormData::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                AurumError::validation(pair, "Campo deve estar no formato nome=valor.")
            })?;
            form.insert(name.trim(), value);
        }
        Ok(form)
    }

    /// Starts from existing values, e.g. the fields pre-filled for an edit.
    pub fn from_values(values: &BTreeMap<String, String>) -> Self {
        Self {
            fields: values.clone(),
        }
    }

    /// Overlays `other` on top of these fields.
    pub fn merged(mut self, other: &FormData) -> Self {
        for (name, value) in &other.fields {
            self.fields.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn required(&self, name: &str, message: &str) -> Result<String> {
        self.optional(name)
            .ok_or_else(|| AurumError::validation(name, message))
    }

    /// Empty means "no value"; anything else must be an integer.
    fn optional_id(&self, name: &str) -> Result<Option<i64>> {
        match self.optional(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| AurumError::validation(name, format!("Valor inválido para {}.", name))),
        }
    }

    fn required_id(&self, name: &str, message: &str) -> Result<i64> {
        self.optional_id(name)?
            .ok_or_else(|| AurumError::validation(name, message))
    }

    pub fn to_user_payload(&self) -> Result<UserPayload> {
        Ok(UserPayload {
            username: self.required("username", "Nome de usuário é obrigatório")?,
            email: self.required("email", "Email é obrigatório")?,
            password: self.optional("password"),
            profile: self
                .optional("profile")
                .unwrap_or_else(|| "usuario".to_string()),
            client_id: self.optional_id("client_id")?,
        })
    }

    pub fn to_client_payload(&self) -> Result<ClientPayload> {
        Ok(ClientPayload {
            name: self.required("name", "Nome é obrigatório")?,
            email: self.required("email", "Email é obrigatório")?,
            phone: self.optional("phone"),
            company: self.optional("company"),
            address: self.optional("address"),
        })
    }

    pub fn to_service_type_payload(&self) -> Result<ServiceTypePayload> {
        Ok(ServiceTypePayload {
            name: self.required("name", "Nome é obrigatório")?,
            description: self.optional("description"),
        })
    }

    pub fn to_ticket_payload(&self) -> Result<TicketPayload> {
        Ok(TicketPayload {
            title: self.required("title", "Título é obrigatório")?,
            description: self.required("description", "Descrição é obrigatória")?,
            priority: self.optional("priority"),
            status: self.optional("status"),
            client_id: self.required_id("client_id", "Cliente é obrigatório")?,
            service_type_id: self.required_id("service_type_id", "Tipo de serviço é obrigatório")?,
        })
    }

    /// Typed JSON body for the given kind.
    pub fn to_payload(&self, kind: EntityKind) -> Result<serde_json::Value> {
        let value = match kind {
            EntityKind::Ticket => serde_json::to_value(self.to_ticket_payload()?)?,
            EntityKind::User => serde_json::to_value(self.to_user_payload()?)?,
            EntityKind::Client => serde_json::to_value(self.to_client_payload()?)?,
            EntityKind::ServiceType => serde_json::to_value(self.to_service_type_payload()?)?,
        };
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
    /// Ticket detail view with its response form.
    TicketDetail(i64),
}

/// The form currently open in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenForm {
    pub kind: EntityKind,
    pub mode: FormMode,
    pub title: String,
    /// Values the form was pre-filled with.
    pub values: BTreeMap<String, String>,
}

/// Flattens a fetched record into element-id → value pairs for pre-filling.
pub fn prefill_values<T: serde::Serialize>(record: &T) -> Result<BTreeMap<String, String>> {
    let value = serde_json::to_value(record)?;
    let mut values = BTreeMap::new();
    if let serde_json::Value::Object(map) = value {
        for (key, field) in map {
            let text = match field {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                // 陣列與巢狀物件不對應任何輸入欄位
                _ => continue,
            };
            values.insert(key, text);
        }
    }
    Ok(values)
}
