//! HTML fragments for the dashboard card grids, ticket detail and dropdowns.
//!
//! Every value coming from the backend goes through [`escape_html`].

use crate::domain::model::{Client, EntityKind, ServiceType, Ticket, TicketResponse, User};
use chrono::{DateTime, NaiveDateTime};

pub const SITE_TITLE_SUFFIX: &str = "Aurum - Soluções Integradas em T.I.";

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => escape_html(v),
        _ => fallback.to_string(),
    }
}

/// `dd/mm/yyyy HH:MM`, the pt-BR short form used across the dashboard.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    escape_html(raw)
}

pub fn hero_page_title(slide_title: &str) -> String {
    format!("{} | {}", slide_title.trim(), SITE_TITLE_SUFFIX)
}

pub fn empty_state(kind: EntityKind) -> String {
    let (icon, title, hint) = match kind {
        EntityKind::Ticket => (
            "-&gt;",
            "Nenhum chamado encontrado",
            "Clique em \"Novo Chamado\" para criar seu primeiro ticket",
        ),
        EntityKind::User => (
            "👥",
            "Nenhum usuário encontrado",
            "Clique em \"Novo Usuário\" para adicionar usuários",
        ),
        EntityKind::Client => (
            "🏢",
            "Nenhum cliente encontrado",
            "Clique em \"Novo Cliente\" para adicionar clientes",
        ),
        EntityKind::ServiceType => (
            "⚙️",
            "Nenhum tipo de serviço encontrado",
            "Clique em \"Novo Tipo de Serviço\" para adicionar serviços",
        ),
    };

    format!(
        r#"<div class="empty-state">
    <div class="empty-icon">{icon}</div>
    <h3>{title}</h3>
    <p>{hint}</p>
</div>"#
    )
}

pub fn ticket_card(ticket: &Ticket) -> String {
    format!(
        r#"<div class="ticket-card" data-ticket-id="{id}">
    <div class="ticket-header">
        <h4>{title}</h4>
        <span class="ticket-status status-{status_class}">{status}</span>
    </div>
    <div class="ticket-info">
        <p><strong>Cliente:</strong> {client}</p>
        <p><strong>Serviço:</strong> {service}</p>
        <p><strong>Prioridade:</strong> {priority}</p>
        <p><strong>Criado em:</strong> {created}</p>
    </div>
    <div class="ticket-actions">
        <button data-action="view" data-id="{id}" class="btn-secondary">Ver</button>
        <button data-action="edit" data-id="{id}" class="btn-primary">Editar</button>
    </div>
</div>"#,
        id = ticket.id,
        title = escape_html(&ticket.title),
        status_class = escape_html(ticket.status.as_str()),
        status = escape_html(ticket.status.label()),
        client = or_default(ticket.client_name.as_deref(), "N/A"),
        service = or_default(ticket.service_type_name.as_deref(), "N/A"),
        priority = escape_html(ticket.priority.label()),
        created = format_date(ticket.created_at.as_deref()),
    )
}

pub fn user_card(user: &User) -> String {
    format!(
        r#"<div class="user-card" data-user-id="{id}">
    <div class="user-info">
        <h4>{username}</h4>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Cliente:</strong> {client}</p>
        <span class="user-profile profile-{profile_class}">{profile}</span>
    </div>
    <div class="user-actions">
        <button data-action="edit" data-id="{id}" class="btn-primary">Editar</button>
        <button data-action="delete" data-id="{id}" class="btn-danger">Excluir</button>
    </div>
</div>"#,
        id = user.id,
        username = escape_html(&user.username),
        email = escape_html(&user.email),
        client = or_default(user.client_name.as_deref(), "Nenhum"),
        profile_class = escape_html(user.profile.as_str()),
        profile = escape_html(user.profile.label()),
    )
}

pub fn client_card(client: &Client) -> String {
    format!(
        r#"<div class="client-card" data-client-id="{id}">
    <div class="client-info">
        <h4>{name}</h4>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Empresa:</strong> {company}</p>
        <p><strong>Telefone:</strong> {phone}</p>
    </div>
    <div class="client-actions">
        <button data-action="edit" data-id="{id}" class="btn-primary">Editar</button>
        <button data-action="delete" data-id="{id}" class="btn-danger">Excluir</button>
    </div>
</div>"#,
        id = client.id,
        name = escape_html(&client.name),
        email = or_default(client.email.as_deref(), "N/A"),
        company = or_default(client.company.as_deref(), "N/A"),
        phone = or_default(client.phone.as_deref(), "N/A"),
    )
}

pub fn service_type_card(service: &ServiceType) -> String {
    format!(
        r#"<div class="service-card" data-service-id="{id}">
    <div class="service-info">
        <h4>{name}</h4>
        <p>{description}</p>
    </div>
    <div class="service-actions">
        <button data-action="edit" data-id="{id}" class="btn-primary">Editar</button>
        <button data-action="delete" data-id="{id}" class="btn-danger">Excluir</button>
    </div>
</div>"#,
        id = service.id,
        name = escape_html(&service.name),
        description = or_default(service.description.as_deref(), "Sem descrição"),
    )
}

/// Card grid for a list, or the kind's empty state when there is nothing to show.
pub fn card_grid<T>(kind: EntityKind, items: &[T], card: fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty_state(kind);
    }
    items.iter().map(card).collect::<Vec<_>>().join("\n")
}

fn response_card(response: &TicketResponse) -> String {
    let internal_class = if response.is_internal { " internal" } else { "" };
    let internal_tag = if response.is_internal { " (Interno)" } else { "" };
    format!(
        r#"<div class="response-card{internal_class}">
    <p><strong>{author}:</strong> {message}</p>
    <small>{created}{internal_tag}</small>
</div>"#,
        author = or_default(response.username.as_deref(), "Sistema"),
        message = escape_html(&response.message),
        created = format_date(response.created_at.as_deref()),
    )
}

pub fn ticket_detail(ticket: &Ticket) -> String {
    let responses = if ticket.responses.is_empty() {
        "<p>Nenhuma resposta ainda.</p>".to_string()
    } else {
        ticket
            .responses
            .iter()
            .map(response_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<div class="ticket-view-modal">
    <h3>Detalhes do Chamado #{id}</h3>
    <p><strong>Título:</strong> {title}</p>
    <p><strong>Descrição:</strong> {description}</p>
    <p><strong>Cliente:</strong> {client}</p>
    <p><strong>Tipo de Serviço:</strong> {service}</p>
    <p><strong>Prioridade:</strong> {priority}</p>
    <p><strong>Status:</strong> {status}</p>
    <p><strong>Criado em:</strong> {created}</p>
    <p><strong>Última Atualização:</strong> {updated}</p>

    <h4>Respostas:</h4>
    <div class="ticket-responses-container">
{responses}
    </div>

    <form id="responseForm" class="response-form">
        <textarea id="responseMessage" placeholder="Adicionar resposta..." required></textarea>
        <label><input type="checkbox" id="isInternal"> Resposta Interna</label>
        <button type="submit" class="btn btn-primary">Enviar Resposta</button>
    </form>
</div>"#,
        id = ticket.id,
        title = escape_html(&ticket.title),
        description = escape_html(&ticket.description),
        client = or_default(ticket.client_name.as_deref(), "N/A"),
        service = or_default(ticket.service_type_name.as_deref(), "N/A"),
        priority = escape_html(ticket.priority.label()),
        status = escape_html(ticket.status.label()),
        created = format_date(ticket.created_at.as_deref()),
        updated = format_date(ticket.updated_at.as_deref()),
    )
}

/// `<option>` list for a select; `placeholder` adds a leading empty-value option.
pub fn select_options(
    options: &[(i64, String)],
    selected: Option<i64>,
    placeholder: Option<&str>,
) -> String {
    let mut html = String::new();
    if let Some(label) = placeholder {
        html.push_str(&format!(r#"<option value="">{}</option>"#, escape_html(label)));
    }
    for (id, name) in options {
        let selected_attr = if selected == Some(*id) { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{id}"{selected_attr}>{}</option>"#,
            escape_html(name)
        ));
    }
    html
}
