use crate::config::AurumConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "aurum")]
#[command(about = "Terminal client for the Aurum support portal")]
pub struct CliConfig {
    #[arg(long, env = "AURUM_BASE_URL", help = "Backend base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Where the session is persisted")]
    pub session_file: Option<String>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AURUM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session locally and on the backend
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List a dashboard section: tickets, users, clients or services
    List { section: String },
    /// Ticket counters by status
    Stats,
    /// Ticket detail with its responses
    ViewTicket { id: i64 },
    /// Add a response to a ticket
    Respond {
        id: i64,
        #[arg(long, short)]
        message: String,
        #[arg(long)]
        internal: bool,
    },
    /// Create a record from name=value fields
    Create {
        kind: String,
        #[arg(long = "field", short = 'f')]
        fields: Vec<String>,
    },
    /// Edit a record; without fields only the pre-filled form is shown
    Edit {
        kind: String,
        id: i64,
        #[arg(long = "field", short = 'f')]
        fields: Vec<String>,
    },
    /// Delete a record after confirmation
    Delete {
        kind: String,
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
    /// Send the landing page contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, short)]
        message: String,
    },
    /// Run a carousel preset (services, hero, clients) in the terminal
    Carousel {
        preset: String,
        #[arg(long, default_value = "6")]
        items: usize,
        #[arg(long, default_value = "1280")]
        width: u32,
        #[arg(long, default_value = "3", help = "Auto-advance ticks before exiting")]
        ticks: u32,
    },
}

impl CliConfig {
    /// File configuration (or defaults) with command line overrides applied.
    pub fn resolve(&self) -> Result<AurumConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                AurumConfig::from_file(path)?
            }
            None => AurumConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(session_file) = &self.session_file {
            config.session.store_path = session_file.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        }
        if let Some(session_file) = &self.session_file {
            validation::validate_path("session_file", session_file)?;
        }
        match &self.command {
            Command::Create { kind, .. } | Command::Edit { kind, .. } | Command::Delete { kind, .. } => {
                validation::validate_non_empty_string("kind", kind)
            }
            Command::Carousel { items, .. } => {
                validation::validate_positive_number("items", *items as u64, 1)
            }
            _ => Ok(()),
        }
    }
}
