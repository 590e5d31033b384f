pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::server::{build_router, serve};
pub use app::state::AppState;
pub use config::{AppConfig, CliConfig};
pub use utils::error::{ApiError, Result};
