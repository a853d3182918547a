pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::AurumApp;
pub use config::AurumConfig;
pub use core::{
    ActionOutcome, Carousel, CarouselConfig, ContactForm, ContactMessage, Dashboard, FormData,
    SessionManager,
};
pub use utils::error::{AurumError, Result};
