//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub roster: RosterConfig,
    pub fallback: FallbackConfig,
    pub logging: LoggingConfig,
}

/// Remote attendance API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Roster and calendar configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    /// School year every roster/attendance query is scoped to
    pub school_year: i32,
    /// Fixed UTC offset (hours) used for "today", regardless of host zone
    pub timezone_offset_hours: i32,
}

/// Default dataset shown by the self-check screen when the live roster
/// fetch fails
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    pub members: Vec<FallbackMember>,
}

/// One entry of the fallback self-check roster
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackMember {
    pub student_id: i64,
    pub class_student_id: i64,
    pub name: String,
    pub class_label: String,
    pub teacher_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ROLLCALL"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::RollcallError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://pw3api.porogramr.site".to_string(),
                timeout_seconds: 10,
            },
            roster: RosterConfig {
                school_year: 2025,
                timezone_offset_hours: 9,
            },
            fallback: FallbackConfig {
                members: default_fallback_members(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "./logs".to_string(),
            },
        }
    }
}

fn default_fallback_members() -> Vec<FallbackMember> {
    let seed: [(i64, &str, &str, &str); 8] = [
        (1, "김은혜 학생", "중1-A", "장미령"),
        (2, "박요한 학생", "중1-B", "장미령"),
        (3, "이사랑 학생", "중2-A", "장미령"),
        (4, "최믿음 학생", "중2-B", "장미령"),
        (5, "정소망 학생", "중3-A", "안유빈"),
        (6, "한기쁨 학생", "중3-B", "안유빈"),
        (7, "윤은총 학생", "고1-A", "안유빈"),
        (8, "오다윗 학생", "고1-B", "안유빈"),
    ];

    seed.iter()
        .map(|(id, name, class_label, teacher_name)| FallbackMember {
            student_id: *id,
            class_student_id: *id,
            name: name.to_string(),
            class_label: class_label.to_string(),
            teacher_name: teacher_name.to_string(),
        })
        .collect()
}
