mod common;

use anyhow::Result;
use aurum_client::core::dashboard::{
    Section, MSG_FORM_LOAD_ERROR, MSG_NO_CLIENT_OPTION, MSG_SESSION_EXPIRED,
};
use aurum_client::core::forms::FormMode;
use aurum_client::domain::model::{EntityKind, TicketStats};
use aurum_client::domain::ports::ToastLevel;
use aurum_client::{ActionOutcome, AurumError, FormData};
use common::{harness, stored_token, ViewEvent};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const CLIENT_FORM: &str = r#"<form id="clientForm"><input id="name"><input id="email"></form>"#;
const TICKET_FORM: &str =
    r#"<form id="ticketForm"><select id="client_id"></select><select id="service_type_id"></select></form>"#;
const USER_FORM: &str = r#"<form id="userForm"><select id="client_id"></select></form>"#;

fn ticket_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Impressora offline",
        "description": "Setor financeiro sem impressão",
        "status": "aberto",
        "priority": "alta",
        "company_name": "ACME",
        "service_type": "Suporte",
        "created_at": "2024-03-05T14:30:00",
        "responses": [
            {"user": "tecnico1", "message": "Verificando o driver", "is_internal": true, "created_at": "2024-03-05T15:00:00"}
        ]
    })
}

/// 建立成功：一次成功提示、關閉 modal、重新載入列表一次
#[tokio::test]
async fn test_create_client_success_refreshes_once() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/client_form.html");
            then.status(200).body(CLIENT_FORM);
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/clients")
                .header("Authorization", "Bearer tok-1")
                .json_body(json!({"name": "ACME", "email": "contato@acme.com"}));
            then.status(201).json_body(json!({"id": 1, "name": "ACME"}));
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(200)
                .json_body(json!([{"id": 1, "name": "ACME", "email": "contato@acme.com"}]));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(h.dashboard.open_create(EntityKind::Client).await?, ActionOutcome::Succeeded);
    assert_eq!(h.view.modals()[0].0, "Criar Novo Cliente");

    let form = FormData::new()
        .with("name", "ACME")
        .with("email", "contato@acme.com")
        .with("phone", "");
    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Succeeded);

    create.assert_async().await;
    assert_eq!(list.hits_async().await, 1);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Success),
        vec!["Cliente criado com sucesso!".to_string()]
    );
    let toast = &h.view.toasts()[0];
    assert_eq!(toast.dismiss_after, Duration::from_millis(3000));
    assert!(h.view.events().contains(&ViewEvent::HideModal));
    assert!(h.dashboard.open_form().is_none());
    assert!(h.view.renders("clientsContainer")[0].contains("ACME"));
    Ok(())
}

/// 後端 400：顯示後端訊息，不刷新列表，modal 保持開啟
#[tokio::test]
async fn test_create_rejected_keeps_modal_open() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/client_form.html");
            then.status(200).body(CLIENT_FORM);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/clients");
            then.status(400).json_body(json!({"error": "Email já cadastrado"}));
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(200).json_body(json!([]));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    h.dashboard.open_create(EntityKind::Client).await?;
    let form = FormData::new()
        .with("name", "ACME")
        .with("email", "contato@acme.com");

    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Failed);
    assert_eq!(list.hits_async().await, 0);

    let errors = h.view.toasts_of(ToastLevel::Error);
    assert_eq!(errors, vec!["Email já cadastrado".to_string()]);
    assert_eq!(h.view.toasts()[0].dismiss_after, Duration::from_millis(5000));
    assert!(h.view.toasts_of(ToastLevel::Success).is_empty());
    assert_eq!(
        h.dashboard.open_form().map(|f| f.mode),
        Some(FormMode::Create)
    );
    Ok(())
}

#[tokio::test]
async fn test_update_rejected_without_body_uses_fallback() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/service_types/4");
            then.status(200)
                .json_body(json!({"id": 4, "name": "Redes", "description": "Cabeamento"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/service_type_form.html");
            then.status(200).body("<form></form>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/service_types/4");
            then.status(500);
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    h.dashboard.open_edit(EntityKind::ServiceType, 4).await?;
    assert_eq!(h.view.modals()[0].0, "Editar Tipo de Serviço");

    let form = FormData::new().with("name", "Redes e Wi-Fi");
    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Failed);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Erro ao atualizar tipo de serviço.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_invalid_form_sends_no_request() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/ticket_form.html");
            then.status(200).body(TICKET_FORM);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/service_types");
            then.status(200).json_body(json!([]));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/tickets");
            then.status(201);
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    h.dashboard.open_create(EntityKind::Ticket).await?;

    let form = FormData::new()
        .with("title", "Sem rede")
        .with("description", "Andar 2")
        .with("client_id", "abc")
        .with("service_type_id", "1");
    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Failed);
    assert_eq!(create.hits_async().await, 0);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Valor inválido para client_id.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_declined_sends_nothing() -> Result<()> {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/users/3");
            then.status(200);
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), false);
    assert_eq!(
        h.dashboard.delete(EntityKind::User, 3).await?,
        ActionOutcome::Cancelled
    );
    assert_eq!(delete.hits_async().await, 0);
    assert!(h.view.toasts().is_empty());
    Ok(())
}

/// 刪除工單後同時刷新列表與統計
#[tokio::test]
async fn test_delete_ticket_refreshes_list_and_stats() -> Result<()> {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/tickets/7");
            then.status(200).json_body(json!({"message": "ok"}));
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets");
            then.status(200).json_body(json!({"tickets": []}));
        })
        .await;
    let stats = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets/stats");
            then.status(200)
                .json_body(json!({"stats": {"total": 0, "aberto": 0, "em_andamento": 0, "fechado": 0}}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.delete(EntityKind::Ticket, 7).await?,
        ActionOutcome::Succeeded
    );

    delete.assert_async().await;
    assert_eq!(list.hits_async().await, 1);
    assert_eq!(stats.hits_async().await, 1);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Success),
        vec!["Chamado excluído com sucesso!".to_string()]
    );
    assert!(h.view.renders("ticketsContainer")[0].contains("Nenhum chamado encontrado"));
    Ok(())
}

#[tokio::test]
async fn test_delete_rejected_shows_server_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/clients/2");
            then.status(409)
                .json_body(json!({"error": "Cliente possui chamados vinculados"}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.delete(EntityKind::Client, 2).await?,
        ActionOutcome::Failed
    );
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Cliente possui chamados vinculados".to_string()]
    );
    Ok(())
}

/// 401 會登出並回傳 SessionExpired
#[tokio::test]
async fn test_unauthorized_expires_session() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(401).json_body(json!({"error": "Token expirado"}));
        })
        .await;

    let h = harness(&server.base_url(), Some("old"), true);
    let result = h.dashboard.list(EntityKind::User).await;

    assert!(matches!(result, Err(AurumError::SessionExpired)));
    assert_eq!(stored_token(&h.store), None);
    assert!(h.view.events().contains(&ViewEvent::HideDashboard));
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec![MSG_SESSION_EXPIRED.to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_requests_without_token_omit_authorization() -> Result<()> {
    let server = MockServer::start_async().await;
    let with_auth = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients").header_exists("Authorization");
            then.status(200).json_body(json!([]));
        })
        .await;
    let without_auth = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(200).json_body(json!([]));
        })
        .await;

    let h = harness(&server.base_url(), None, true);
    h.dashboard.list(EntityKind::Client).await?;

    assert_eq!(with_auth.hits_async().await, 0);
    assert_eq!(without_auth.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_list_renders_empty_state() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([]));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.navigate("users").await?,
        ActionOutcome::Succeeded
    );
    assert_eq!(h.dashboard.active_section(), Some(Section::Users));
    let html = &h.view.renders("usersContainer")[0];
    assert!(html.contains("Nenhum usuário encontrado"));
    Ok(())
}

#[tokio::test]
async fn test_list_failure_shows_load_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/service_types");
            then.status(200).body("not json");
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.navigate("services").await?,
        ActionOutcome::Failed
    );
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Erro ao carregar tipos de serviço".to_string()]
    );
    assert!(h.view.renders("servicesContainer").is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_section_is_ignored() -> Result<()> {
    let server = MockServer::start_async().await;
    let h = harness(&server.base_url(), Some("tok-1"), true);

    assert_eq!(
        h.dashboard.navigate("reports").await?,
        ActionOutcome::Cancelled
    );
    assert!(h.view.events().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_load_stats_accepts_wrapped_payload() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets/stats");
            then.status(200)
                .json_body(json!({"stats": {"total": 5, "aberto": 2, "em_andamento": 1, "fechado": 2}}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(h.dashboard.load_stats().await?, ActionOutcome::Succeeded);
    assert_eq!(
        h.view.stats(),
        vec![TicketStats {
            total: 5,
            aberto: 2,
            em_andamento: 1,
            fechado: 2
        }]
    );
    Ok(())
}

#[tokio::test]
async fn test_initialize_loads_stats_and_tickets() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets/stats");
            then.status(200).json_body(json!({"total": 1, "aberto": 1}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets");
            then.status(200).json_body(json!({"tickets": [ticket_json(7)]}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(h.dashboard.initialize().await?, ActionOutcome::Succeeded);

    assert_eq!(h.view.stats()[0].aberto, 1);
    assert_eq!(h.view.stats()[0].fechado, 0);
    let html = &h.view.renders("ticketsContainer")[0];
    assert!(html.contains("Impressora offline"));
    assert_eq!(h.dashboard.active_section(), Some(Section::Tickets));
    Ok(())
}

/// 編輯使用者：預填欄位、客戶下拉選單含「Nenhum cliente」並選中目前的客戶
#[tokio::test]
async fn test_open_edit_user_prefills_and_selects_client() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/3");
            then.status(200).json_body(json!({
                "id": 3, "username": "bia", "email": "bia@aurum.com",
                "profile": "usuario", "client_id": 5
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/user_form.html");
            then.status(200).body(USER_FORM);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(200)
                .json_body(json!([{"id": 4, "name": "Beta"}, {"id": 5, "name": "ACME"}]));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/users/3").json_body(json!({
                "username": "bia", "email": "bia@aurum.com",
                "profile": "tecnico", "client_id": 5
            }));
            then.status(200).json_body(json!({"id": 3}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([]));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.open_edit(EntityKind::User, 3).await?,
        ActionOutcome::Succeeded
    );

    assert_eq!(h.view.modals()[0].0, "Editar Usuário");
    let prefill = h
        .view
        .events()
        .into_iter()
        .find_map(|e| match e {
            ViewEvent::Prefill(values) => Some(values),
            _ => None,
        })
        .unwrap();
    assert_eq!(prefill["username"], "bia");

    let options = &h.view.options("client_id")[0];
    assert!(options.starts_with(&format!(r#"<option value="">{}</option>"#, MSG_NO_CLIENT_OPTION)));
    assert!(options.contains(r#"<option value="5" selected>ACME</option>"#));

    let open = h.dashboard.open_form().unwrap();
    assert_eq!(open.mode, FormMode::Edit(3));
    let form = FormData::from_values(&open.values).merged(&FormData::new().with("profile", "tecnico"));
    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Succeeded);
    update.assert_async().await;
    assert_eq!(
        h.view.toasts_of(ToastLevel::Success),
        vec!["Usuário atualizado com sucesso!".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_open_edit_missing_record() -> Result<()> {
    let server = MockServer::start_async().await;
    let form = server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/user_form.html");
            then.status(200).body(USER_FORM);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/99");
            then.status(404).json_body(json!({"error": "not found"}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.open_edit(EntityKind::User, 99).await?,
        ActionOutcome::Failed
    );
    assert_eq!(form.hits_async().await, 0);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Usuário não encontrado.".to_string()]
    );
    assert!(h.dashboard.open_form().is_none());
    Ok(())
}

#[tokio::test]
async fn test_open_create_ticket_populates_dropdowns() -> Result<()> {
    let server = MockServer::start_async().await;
    let partial = server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/ticket_form.html");
            then.status(200).body(TICKET_FORM);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(200).json_body(json!({"clients": [{"id": 1, "name": "ACME"}]}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/service_types");
            then.status(200)
                .json_body(json!([{"id": 2, "name": "Suporte <Remoto>"}]));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.open_create(EntityKind::Ticket).await?,
        ActionOutcome::Succeeded
    );

    partial.assert_async().await;
    assert_eq!(h.view.modals()[0], ("Criar Novo Chamado".to_string(), TICKET_FORM.to_string()));
    assert_eq!(
        h.view.options("client_id")[0],
        r#"<option value="1">ACME</option>"#
    );
    assert_eq!(
        h.view.options("service_type_id")[0],
        r#"<option value="2">Suporte &lt;Remoto&gt;</option>"#
    );
    Ok(())
}

#[tokio::test]
async fn test_dropdown_failure_keeps_form_open() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/user_form.html");
            then.status(200).body(USER_FORM);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clients");
            then.status(500);
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.open_create(EntityKind::User).await?,
        ActionOutcome::Succeeded
    );
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Erro ao carregar clientes para o formulário.".to_string()]
    );
    assert!(h.dashboard.open_form().is_some());
    Ok(())
}

#[tokio::test]
async fn test_form_partial_failure() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/forms/client_form.html");
            then.status(404);
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.open_create(EntityKind::Client).await?,
        ActionOutcome::Failed
    );
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec![MSG_FORM_LOAD_ERROR.to_string()]
    );
    assert!(h.view.modals().is_empty());
    Ok(())
}

/// 工單詳情與新增回覆
#[tokio::test]
async fn test_view_ticket_and_respond() -> Result<()> {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets/7");
            then.status(200).json_body(json!({"ticket": ticket_json(7)}));
        })
        .await;
    let respond = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/tickets/7/responses")
                .json_body(json!({"message": "Driver atualizado", "is_internal": false}));
            then.status(201).json_body(json!({"message": "ok"}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(h.dashboard.view_ticket(7).await?, ActionOutcome::Succeeded);

    let (title, html) = h.view.modals()[0].clone();
    assert_eq!(title, "Chamado #7");
    assert!(html.contains("Detalhes do Chamado #7"));
    assert!(html.contains("response-card internal"));
    assert!(html.contains("tecnico1"));
    assert_eq!(
        h.dashboard.open_form().map(|f| f.mode),
        Some(FormMode::TicketDetail(7))
    );

    let form = FormData::new().with("message", "Driver atualizado");
    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Succeeded);

    respond.assert_async().await;
    assert_eq!(detail.hits_async().await, 2);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Success),
        vec!["Resposta adicionada com sucesso!".to_string()]
    );
    assert_eq!(h.view.modals().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_view_missing_ticket() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/tickets/404");
            then.status(404);
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(h.dashboard.view_ticket(404).await?, ActionOutcome::Failed);
    assert_eq!(
        h.view.toasts_of(ToastLevel::Error),
        vec!["Chamado não encontrado.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_respond_rejected_and_empty_message() -> Result<()> {
    let server = MockServer::start_async().await;
    let respond = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/tickets/7/responses");
            then.status(403)
                .json_body(json!({"error": "Chamado fechado não aceita respostas"}));
        })
        .await;

    let h = harness(&server.base_url(), Some("tok-1"), true);
    assert_eq!(
        h.dashboard.submit_response(7, "   ", false).await?,
        ActionOutcome::Failed
    );
    assert_eq!(respond.hits_async().await, 0);

    assert_eq!(
        h.dashboard.submit_response(7, "Reabrir?", true).await?,
        ActionOutcome::Failed
    );
    assert_eq!(respond.hits_async().await, 1);
    let errors = h.view.toasts_of(ToastLevel::Error);
    assert_eq!(errors.last().map(String::as_str), Some("Chamado fechado não aceita respostas"));
    Ok(())
}

#[tokio::test]
async fn test_submit_without_open_form_is_cancelled() -> Result<()> {
    let server = MockServer::start_async().await;
    let h = harness(&server.base_url(), Some("tok-1"), true);

    let form = FormData::new().with("name", "ACME");
    assert_eq!(h.dashboard.submit(&form).await?, ActionOutcome::Cancelled);

    h.dashboard.close_modal();
    assert!(h.dashboard.open_form().is_none());
    assert_eq!(h.view.events(), vec![ViewEvent::HideModal]);
    Ok(())
}
