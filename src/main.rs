use aurum_client::adapters::console::{AutoConfirm, ConsoleView, StdinConfirmer};
use aurum_client::config::Command;
use aurum_client::core::templates::hero_page_title;
use aurum_client::domain::model::EntityKind;
use aurum_client::domain::ports::Confirmer;
use aurum_client::utils::error::ErrorSeverity;
use aurum_client::utils::{logger, validation::Validate};
use aurum_client::{
    ActionOutcome, AurumApp, AurumError, CliConfig, ContactMessage, FormData, Result,
};
use clap::Parser;
use std::sync::Arc;

fn parse_kind(kind: &str) -> Result<EntityKind> {
    EntityKind::parse(kind).ok_or_else(|| {
        AurumError::validation(
            "kind",
            format!("Tipo desconhecido: {} (ticket, user, client, service_type)", kind),
        )
    })
}

async fn run(cli: &CliConfig) -> Result<ActionOutcome> {
    let config = cli.resolve()?;

    let confirmer: Arc<dyn Confirmer> = match &cli.command {
        Command::Delete { yes: true, .. } => Arc::new(AutoConfirm { answer: true }),
        _ => Arc::new(StdinConfirmer),
    };
    let app = AurumApp::console(config, confirmer)?;
    let dashboard = app.dashboard();

    match &cli.command {
        Command::Login { email, password } => {
            app.sign_in(email, password).await?;
            Ok(ActionOutcome::Succeeded)
        }
        Command::Logout => {
            app.session().sign_out().await;
            println!("Sessão encerrada.");
            Ok(ActionOutcome::Succeeded)
        }
        Command::Whoami => {
            let user = app.require_session().await?;
            println!("{} <{}> ({})", user.username, user.email, user.profile.label());
            Ok(ActionOutcome::Succeeded)
        }
        Command::List { section } => {
            app.require_session().await?;
            let outcome = dashboard.navigate(section).await?;
            if outcome == ActionOutcome::Cancelled {
                eprintln!("Seções disponíveis: tickets, users, clients, services");
            }
            Ok(outcome)
        }
        Command::Stats => {
            app.require_session().await?;
            dashboard.load_stats().await
        }
        Command::ViewTicket { id } => {
            app.require_session().await?;
            dashboard.view_ticket(*id).await
        }
        Command::Respond {
            id,
            message,
            internal,
        } => {
            app.require_session().await?;
            dashboard.submit_response(*id, message, *internal).await
        }
        Command::Create { kind, fields } => {
            let kind = parse_kind(kind)?;
            let form = FormData::from_pairs(fields)?;
            app.require_session().await?;
            let outcome = dashboard.open_create(kind).await?;
            if outcome != ActionOutcome::Succeeded || fields.is_empty() {
                return Ok(outcome);
            }
            dashboard.submit(&form).await
        }
        Command::Edit { kind, id, fields } => {
            let kind = parse_kind(kind)?;
            let overrides = FormData::from_pairs(fields)?;
            app.require_session().await?;
            let outcome = dashboard.open_edit(kind, *id).await?;
            if outcome != ActionOutcome::Succeeded || fields.is_empty() {
                return Ok(outcome);
            }
            let Some(open) = dashboard.open_form() else {
                return Ok(ActionOutcome::Cancelled);
            };
            let form = FormData::from_values(&open.values).merged(&overrides);
            dashboard.submit(&form).await
        }
        Command::Delete { kind, id, .. } => {
            let kind = parse_kind(kind)?;
            app.require_session().await?;
            dashboard.delete(kind, *id).await
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let message = ContactMessage::new(name, email, message);
            Ok(app.contact().submit(&message).await)
        }
        Command::Carousel {
            preset,
            items,
            width,
            ticks,
        } => {
            let carousel = app.carousel(preset, *items, *width, Some(Arc::new(ConsoleView::new())))?;
            if carousel.name() == "hero" {
                println!("{}", hero_page_title("Slide 1"));
            }
            let delay = app
                .config()
                .carousel_preset(preset)
                .map(|c| c.autoplay_delay)
                .unwrap_or_default();

            carousel.start_autoplay();
            tokio::time::sleep(delay * *ticks + delay / 2).await;
            carousel.stop_autoplay();
            Ok(ActionOutcome::Succeeded)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting aurum CLI");
    if cli.verbose {
        tracing::debug!("Base URL override: {:?}, config file: {:?}", cli.base_url, cli.config);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&cli).await {
        Ok(ActionOutcome::Failed) => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
