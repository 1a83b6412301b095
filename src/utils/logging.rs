//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for the rollcall application.

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the file appender's worker guard; the caller must keep it alive
/// for the lifetime of the program or file logging stops silently.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "rollcall.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log attendance mutations with structured data
pub fn log_status_change(subject_id: i64, date: &str, status: &str) {
    info!(
        subject_id = subject_id,
        date = date,
        status = status,
        "Attendance status submitted"
    );
}

/// Log a failed mutation that will be reconciled by re-fetch
pub fn log_reconciliation(subject_id: i64, error: &str) {
    warn!(
        subject_id = subject_id,
        error = error,
        "Mutation failed, re-fetching server state"
    );
}
