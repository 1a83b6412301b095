//! Rollcall Attendance Console
//!
//! Headless admin console core for a youth group's Sunday attendance. This
//! library provides the typed client for the remote attendance API, one
//! view-state controller per screen, and the shared screen/navigation state,
//! so a front end only has to render what the controllers hold.

pub mod api;
pub mod config;
pub mod controllers;
pub mod models;
pub mod shell;
pub mod utils;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Settings;
pub use utils::errors::{Result, RollcallError};

// Re-export main components for easy access
pub use shell::{Screen, UiState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
