use crate::adapters::http::{read_error_message, read_json, ApiClient};
use crate::core::forms::{prefill_values, FormData, FormMode, OpenForm};
use crate::core::templates;
use crate::domain::model::{
    narrow_item, narrow_list, narrow_stats, Client, EntityKind, ResponsePayload, ServiceType,
    Ticket, TicketStats, User,
};
use crate::domain::ports::{Confirmer, DashboardView, Toast, ToastLevel};
use crate::utils::error::{AurumError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const MSG_SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
pub const MSG_FORM_LOAD_ERROR: &str = "Erro ao carregar formulário.";
pub const MSG_CLIENTS_FOR_FORM_ERROR: &str = "Erro ao carregar clientes para o formulário.";
pub const MSG_SERVICE_TYPES_FOR_FORM_ERROR: &str =
    "Erro ao carregar tipos de serviço para o formulário.";
pub const MSG_NO_CLIENT_OPTION: &str = "Nenhum cliente";
pub const MSG_EMPTY_RESPONSE: &str = "Por favor, escreva uma resposta.";

pub const CLIENT_SELECT_ID: &str = "client_id";
pub const SERVICE_TYPE_SELECT_ID: &str = "service_type_id";

/// Dashboard sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tickets,
    Users,
    Clients,
    Services,
}

impl Section {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "tickets" => Some(Section::Tickets),
            "users" => Some(Section::Users),
            "clients" => Some(Section::Clients),
            "services" => Some(Section::Services),
            _ => None,
        }
    }

    pub fn kind(self) -> EntityKind {
        match self {
            Section::Tickets => EntityKind::Ticket,
            Section::Users => EntityKind::User,
            Section::Clients => EntityKind::Client,
            Section::Services => EntityKind::ServiceType,
        }
    }
}

/// Result of a user action that did not end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    /// The failure was already reported through an error toast.
    Failed,
    /// Declined confirmation, no open form, unknown section.
    Cancelled,
}

/// Per-kind wording used in titles, toasts and prompts.
struct KindText {
    label: &'static str,
    noun: &'static str,
    plural: &'static str,
}

fn kind_text(kind: EntityKind) -> KindText {
    match kind {
        EntityKind::Ticket => KindText {
            label: "Chamado",
            noun: "chamado",
            plural: "chamados",
        },
        EntityKind::User => KindText {
            label: "Usuário",
            noun: "usuário",
            plural: "usuários",
        },
        EntityKind::Client => KindText {
            label: "Cliente",
            noun: "cliente",
            plural: "clientes",
        },
        EntityKind::ServiceType => KindText {
            label: "Tipo de serviço",
            noun: "tipo de serviço",
            plural: "tipos de serviço",
        },
    }
}

fn create_title(kind: EntityKind) -> String {
    match kind {
        EntityKind::ServiceType => "Criar Novo Tipo de Serviço".to_string(),
        other => format!("Criar Novo {}", kind_text(other).label),
    }
}

fn edit_title(kind: EntityKind) -> String {
    match kind {
        EntityKind::ServiceType => "Editar Tipo de Serviço".to_string(),
        other => format!("Editar {}", kind_text(other).label),
    }
}

/// `(infinitive, participle)` for the toast wording of a mutation.
fn verbs(mode: FormMode) -> (&'static str, &'static str) {
    match mode {
        FormMode::Create => ("criar", "criado"),
        _ => ("atualizar", "atualizado"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub success: Duration,
    pub error: Duration,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(3000),
            error: Duration::from_millis(5000),
        }
    }
}

/// CRUD controller for tickets, users, clients and service types.
pub struct Dashboard {
    api: ApiClient,
    view: Arc<dyn DashboardView>,
    confirmer: Arc<dyn Confirmer>,
    toasts: ToastSettings,
    open_form: Mutex<Option<OpenForm>>,
    active_section: Mutex<Option<Section>>,
}

impl Dashboard {
    pub fn new(api: ApiClient, view: Arc<dyn DashboardView>, confirmer: Arc<dyn Confirmer>) -> Self {
        Self {
            api,
            view,
            confirmer,
            toasts: ToastSettings::default(),
            open_form: Mutex::new(None),
            active_section: Mutex::new(None),
        }
    }

    pub fn with_toast_settings(mut self, toasts: ToastSettings) -> Self {
        self.toasts = toasts;
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn open_form(&self) -> Option<OpenForm> {
        self.open_form.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active_section.lock().ok().and_then(|guard| *guard)
    }

    fn set_open_form(&self, form: Option<OpenForm>) {
        if let Ok(mut guard) = self.open_form.lock() {
            *guard = form;
        }
    }

    fn toast_success(&self, message: &str) {
        self.view.toast(&Toast {
            level: ToastLevel::Success,
            message: message.to_string(),
            dismiss_after: self.toasts.success,
        });
    }

    fn toast_error(&self, message: &str) {
        self.view.toast(&Toast {
            level: ToastLevel::Error,
            message: message.to_string(),
            dismiss_after: self.toasts.error,
        });
    }

    fn fail(&self, message: &str) -> ActionOutcome {
        self.toast_error(message);
        ActionOutcome::Failed
    }

    /// Session expiry is the only error handed back to the caller; the rest become toasts.
    fn absorb(&self, error: AurumError, message: &str) -> Result<ActionOutcome> {
        match error {
            AurumError::SessionExpired => {
                self.toast_error(MSG_SESSION_EXPIRED);
                Err(AurumError::SessionExpired)
            }
            other => {
                tracing::error!("{}: {}", message, other);
                Ok(self.fail(message))
            }
        }
    }

    /// Loads the stats counters and the tickets section.
    pub async fn initialize(&self) -> Result<ActionOutcome> {
        tracing::info!("Initializing dashboard");
        self.load_stats().await?;
        self.show_section(Section::Tickets).await
    }

    /// Sidebar navigation by section name; unknown names are logged and ignored.
    pub async fn navigate(&self, section_name: &str) -> Result<ActionOutcome> {
        match Section::parse(section_name) {
            Some(section) => self.show_section(section).await,
            None => {
                tracing::info!("Ignoring unknown dashboard section: {}", section_name);
                Ok(ActionOutcome::Cancelled)
            }
        }
    }

    pub async fn show_section(&self, section: Section) -> Result<ActionOutcome> {
        if let Ok(mut guard) = self.active_section.lock() {
            *guard = Some(section);
        }
        self.list(section.kind()).await
    }

    pub async fn list(&self, kind: EntityKind) -> Result<ActionOutcome> {
        let load_error = format!("Erro ao carregar {}", kind_text(kind).plural);

        let response = match self.api.get(kind.endpoint()).await {
            Ok(response) => response,
            Err(e) => return self.absorb(e, &load_error),
        };
        if !response.status().is_success() {
            let message = read_error_message(response, &load_error).await;
            return Ok(self.fail(&message));
        }

        let html = match read_json(response)
            .await
            .and_then(|value| render_list(kind, value))
        {
            Ok(html) => html,
            Err(e) => return self.absorb(e, &load_error),
        };

        self.view.render(kind.container_id(), &html);
        Ok(ActionOutcome::Succeeded)
    }

    /// Refreshes the status counters; failures are only logged.
    pub async fn load_stats(&self) -> Result<ActionOutcome> {
        match self.fetch_stats().await {
            Ok(stats) => {
                tracing::debug!("Ticket stats: {:?}", stats);
                self.view.update_stats(&stats);
                Ok(ActionOutcome::Succeeded)
            }
            Err(AurumError::SessionExpired) => {
                self.toast_error(MSG_SESSION_EXPIRED);
                Err(AurumError::SessionExpired)
            }
            Err(e) => {
                tracing::warn!("Error loading ticket stats: {}", e);
                Ok(ActionOutcome::Failed)
            }
        }
    }

    async fn fetch_stats(&self) -> Result<TicketStats> {
        let response = self.api.get("/api/tickets/stats").await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AurumError::ApiError {
                status: status.as_u16(),
                message: "stats unavailable".to_string(),
            });
        }
        narrow_stats(read_json(response).await?)
    }

    pub async fn open_create(&self, kind: EntityKind) -> Result<ActionOutcome> {
        let html = match self.api.fetch_partial(kind.form_path()).await {
            Ok(html) => html,
            Err(e) => return self.absorb(e, MSG_FORM_LOAD_ERROR),
        };

        let title = create_title(kind);
        self.view.show_modal(&title, &html);
        self.set_open_form(Some(OpenForm {
            kind,
            mode: FormMode::Create,
            title,
            values: BTreeMap::new(),
        }));

        self.populate_dropdowns(kind, &BTreeMap::new()).await?;
        Ok(ActionOutcome::Succeeded)
    }

    pub async fn open_edit(&self, kind: EntityKind, id: i64) -> Result<ActionOutcome> {
        let text = kind_text(kind);
        let fetch_error = format!("Erro ao carregar dados do {} para edição.", text.noun);

        let response = match self.api.get(&kind.item_endpoint(id)).await {
            Ok(response) => response,
            Err(e) => return self.absorb(e, &fetch_error),
        };
        if !response.status().is_success() {
            tracing::warn!("{} {} not found ({})", kind, id, response.status());
            return Ok(self.fail(&format!("{} não encontrado.", text.label)));
        }

        let values = match read_json(response)
            .await
            .and_then(|value| record_values(kind, value))
        {
            Ok(values) => values,
            Err(e) => return self.absorb(e, &fetch_error),
        };

        let html = match self.api.fetch_partial(kind.form_path()).await {
            Ok(html) => html,
            Err(e) => return self.absorb(e, MSG_FORM_LOAD_ERROR),
        };

        let title = edit_title(kind);
        self.view.show_modal(&title, &html);
        self.view.prefill_form(&values);
        self.set_open_form(Some(OpenForm {
            kind,
            mode: FormMode::Edit(id),
            title,
            values: values.clone(),
        }));

        self.populate_dropdowns(kind, &values).await?;
        Ok(ActionOutcome::Succeeded)
    }

    /// Tickets pick a client and a service type; users optionally pick a client.
    async fn populate_dropdowns(
        &self,
        kind: EntityKind,
        values: &BTreeMap<String, String>,
    ) -> Result<()> {
        let selected = |name: &str| values.get(name).and_then(|v| v.parse::<i64>().ok());

        match kind {
            EntityKind::Ticket => {
                self.populate_select(
                    EntityKind::Client,
                    CLIENT_SELECT_ID,
                    selected(CLIENT_SELECT_ID),
                    None,
                    MSG_CLIENTS_FOR_FORM_ERROR,
                )
                .await?;
                self.populate_select(
                    EntityKind::ServiceType,
                    SERVICE_TYPE_SELECT_ID,
                    selected(SERVICE_TYPE_SELECT_ID),
                    None,
                    MSG_SERVICE_TYPES_FOR_FORM_ERROR,
                )
                .await
            }
            EntityKind::User => {
                self.populate_select(
                    EntityKind::Client,
                    CLIENT_SELECT_ID,
                    selected(CLIENT_SELECT_ID),
                    Some(MSG_NO_CLIENT_OPTION),
                    MSG_CLIENTS_FOR_FORM_ERROR,
                )
                .await
            }
            EntityKind::Client | EntityKind::ServiceType => Ok(()),
        }
    }

    async fn populate_select(
        &self,
        source: EntityKind,
        select_id: &str,
        selected: Option<i64>,
        placeholder: Option<&str>,
        error_message: &str,
    ) -> Result<()> {
        match self.fetch_options(source).await {
            Ok(options) => {
                let html = templates::select_options(&options, selected, placeholder);
                self.view.render_options(select_id, &html);
                Ok(())
            }
            Err(AurumError::SessionExpired) => {
                self.toast_error(MSG_SESSION_EXPIRED);
                Err(AurumError::SessionExpired)
            }
            Err(e) => {
                tracing::warn!("Could not populate '{}': {}", select_id, e);
                self.toast_error(error_message);
                Ok(())
            }
        }
    }

    async fn fetch_options(&self, source: EntityKind) -> Result<Vec<(i64, String)>> {
        let response = self.api.get(source.endpoint()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AurumError::ApiError {
                status: status.as_u16(),
                message: format!("{} unavailable", source.endpoint()),
            });
        }
        let value = read_json(response).await?;
        let key = source.collection_key();
        let options = match source {
            EntityKind::ServiceType => narrow_list::<ServiceType>(value, key)?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect(),
            _ => narrow_list::<Client>(value, key)?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect(),
        };
        Ok(options)
    }

    /// Sends the open form: POST on create, PUT on edit.
    pub async fn submit(&self, form: &FormData) -> Result<ActionOutcome> {
        let Some(open) = self.open_form() else {
            tracing::warn!("Submit without an open form");
            return Ok(ActionOutcome::Cancelled);
        };

        let (kind, path) = match open.mode {
            FormMode::Create => (open.kind, open.kind.endpoint().to_string()),
            FormMode::Edit(id) => (open.kind, open.kind.item_endpoint(id)),
            FormMode::TicketDetail(id) => {
                let message = form
                    .get("message")
                    .or_else(|| form.get("responseMessage"))
                    .unwrap_or_default();
                let is_internal = form
                    .get("is_internal")
                    .or_else(|| form.get("isInternal"))
                    .is_some_and(|v| matches!(v, "true" | "on" | "1"));
                return self.submit_response(id, message, is_internal).await;
            }
        };

        let payload = match form.to_payload(kind) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Invalid {} form: {}", kind, e);
                return Ok(self.fail(&e.user_friendly_message()));
            }
        };

        let text = kind_text(kind);
        let (verb, done) = verbs(open.mode);

        let sent = match open.mode {
            FormMode::Create => self.api.post(&path, &payload).await,
            _ => self.api.put(&path, &payload).await,
        };
        let response = match sent {
            Ok(response) => response,
            Err(e) => return self.absorb(e, &format!("Erro de conexão ao {} {}.", verb, text.noun)),
        };

        if !response.status().is_success() {
            let fallback = format!("Erro ao {} {}.", verb, text.noun);
            let message = read_error_message(response, &fallback).await;
            tracing::warn!("{} {} rejected: {}", verb, kind, message);
            return Ok(self.fail(&message));
        }

        tracing::info!("{} {} via {}", done, kind, path);
        self.toast_success(&format!("{} {} com sucesso!", text.label, done));
        self.close_modal();
        self.refresh(kind).await?;
        Ok(ActionOutcome::Succeeded)
    }

    /// Re-lists the kind; ticket changes also move the counters.
    async fn refresh(&self, kind: EntityKind) -> Result<()> {
        self.list(kind).await?;
        if kind == EntityKind::Ticket {
            self.load_stats().await?;
        }
        Ok(())
    }

    pub async fn delete(&self, kind: EntityKind, id: i64) -> Result<ActionOutcome> {
        let text = kind_text(kind);
        let prompt = format!("Tem certeza que deseja excluir este {}?", text.noun);
        if !self.confirmer.confirm(&prompt).await {
            tracing::debug!("Delete of {} {} declined", kind, id);
            return Ok(ActionOutcome::Cancelled);
        }

        let response = match self.api.delete(&kind.item_endpoint(id)).await {
            Ok(response) => response,
            Err(e) => return self.absorb(e, &format!("Erro de conexão ao excluir {}.", text.noun)),
        };

        if !response.status().is_success() {
            let fallback = format!("Erro ao excluir {}.", text.noun);
            let message = read_error_message(response, &fallback).await;
            return Ok(self.fail(&message));
        }

        tracing::info!("Deleted {} {}", kind, id);
        self.toast_success(&format!("{} excluído com sucesso!", text.label));
        self.refresh(kind).await?;
        Ok(ActionOutcome::Succeeded)
    }

    /// Detail view of a ticket with its responses and the response form.
    pub async fn view_ticket(&self, id: i64) -> Result<ActionOutcome> {
        let load_error = "Erro ao carregar detalhes do chamado.";

        let response = match self.api.get(&EntityKind::Ticket.item_endpoint(id)).await {
            Ok(response) => response,
            Err(e) => return self.absorb(e, load_error),
        };
        if !response.status().is_success() {
            return Ok(self.fail("Chamado não encontrado."));
        }

        let ticket: Ticket = match read_json(response)
            .await
            .and_then(|value| narrow_item(value, EntityKind::Ticket.item_key()))
        {
            Ok(ticket) => ticket,
            Err(e) => return self.absorb(e, load_error),
        };

        let title = format!("Chamado #{}", ticket.id);
        self.view.show_modal(&title, &templates::ticket_detail(&ticket));
        self.set_open_form(Some(OpenForm {
            kind: EntityKind::Ticket,
            mode: FormMode::TicketDetail(id),
            title,
            values: BTreeMap::new(),
        }));
        Ok(ActionOutcome::Succeeded)
    }

    pub async fn submit_response(
        &self,
        ticket_id: i64,
        message: &str,
        is_internal: bool,
    ) -> Result<ActionOutcome> {
        if message.trim().is_empty() {
            return Ok(self.fail(MSG_EMPTY_RESPONSE));
        }

        let path = format!("{}/responses", EntityKind::Ticket.item_endpoint(ticket_id));
        let payload = ResponsePayload {
            message: message.trim().to_string(),
            is_internal,
        };

        let response = match self.api.post(&path, &payload).await {
            Ok(response) => response,
            Err(e) => return self.absorb(e, "Erro de conexão ao adicionar resposta."),
        };

        if !response.status().is_success() {
            let message = read_error_message(response, "Erro ao adicionar resposta.").await;
            return Ok(self.fail(&message));
        }

        self.toast_success("Resposta adicionada com sucesso!");
        self.view_ticket(ticket_id).await?;
        Ok(ActionOutcome::Succeeded)
    }

    pub fn close_modal(&self) {
        self.view.hide_modal();
        self.set_open_form(None);
    }
}

fn render_list(kind: EntityKind, value: serde_json::Value) -> Result<String> {
    let key = kind.collection_key();
    let html = match kind {
        EntityKind::Ticket => {
            templates::card_grid(kind, &narrow_list::<Ticket>(value, key)?, templates::ticket_card)
        }
        EntityKind::User => {
            templates::card_grid(kind, &narrow_list::<User>(value, key)?, templates::user_card)
        }
        EntityKind::Client => {
            templates::card_grid(kind, &narrow_list::<Client>(value, key)?, templates::client_card)
        }
        EntityKind::ServiceType => templates::card_grid(
            kind,
            &narrow_list::<ServiceType>(value, key)?,
            templates::service_type_card,
        ),
    };
    Ok(html)
}

fn record_values(kind: EntityKind, value: serde_json::Value) -> Result<BTreeMap<String, String>> {
    let key = kind.item_key();
    match kind {
        EntityKind::Ticket => prefill_values(&narrow_item::<Ticket>(value, key)?),
        EntityKind::User => prefill_values(&narrow_item::<User>(value, key)?),
        EntityKind::Client => prefill_values(&narrow_item::<Client>(value, key)?),
        EntityKind::ServiceType => prefill_values(&narrow_item::<ServiceType>(value, key)?),
    }
}
