// Adapters layer: concrete implementations for external systems (http, storage, terminal)

pub mod console;
pub mod http;
pub mod storage;

pub use console::{AutoConfirm, ConsoleView, StdinConfirmer};
pub use http::{build_http_client, ApiClient};
pub use storage::{FileTokenStore, MemoryTokenStore};
