//! Teacher attendance screen
//!
//! Same shape as the student screens but the read model already carries the
//! per-teacher status, so there is nothing to merge. Mutations go through a
//! query-parameter endpoint and are followed by the usual re-fetch.

use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::models::UiStatus;
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;
use crate::utils::time::format_date;

#[derive(Debug, Clone)]
pub struct TeacherEntry {
    pub teacher_id: i64,
    pub name: String,
    pub status: UiStatus,
}

#[derive(Debug, Clone)]
pub struct TeacherAttendanceController {
    api: ApiClient,
    selected_date: NaiveDate,
    search_term: String,
    entries: Vec<TeacherEntry>,
    loaded: bool,
    error: Option<String>,
}

impl TeacherAttendanceController {
    pub fn new(api: ApiClient, date: NaiveDate) -> Self {
        Self {
            api,
            selected_date: date,
            search_term: String::new(),
            entries: Vec::new(),
            loaded: false,
            error: None,
        }
    }

    /// Fetch the per-teacher rows for the selected date, sorted by name
    pub async fn load(&mut self) -> Result<()> {
        let rows = match self.api.teacher_attendance_by_date(self.selected_date).await {
            Ok(rows) => rows,
            Err(e) => {
                logging::log_api_error("teacher_attendance_by_date", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.entries = rows
            .into_iter()
            .map(|row| TeacherEntry {
                teacher_id: row.teacher_id,
                name: row.teacher_name,
                status: UiStatus::from(row.attendance_status),
            })
            .collect();
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.loaded = true;
        self.error = None;
        Ok(())
    }

    /// Mark one teacher, then re-fetch regardless of the outcome
    pub async fn set_status(&mut self, teacher_id: i64, status: UiStatus) -> Result<()> {
        let code = status.to_code().ok_or_else(|| {
            RollcallError::Validation("unset status cannot be submitted".to_string())
        })?;

        let outcome = self
            .api
            .mark_teacher_attendance(teacher_id, code, self.selected_date)
            .await;

        match &outcome {
            Ok(()) => logging::log_status_change(
                teacher_id,
                &format_date(self.selected_date),
                code.as_code(),
            ),
            Err(e) => logging::log_reconciliation(teacher_id, &e.to_string()),
        }

        if let Err(e) = self.load().await {
            warn!(error = %e, "Re-fetch after mutation failed, keeping stale view");
        }

        outcome
    }

    pub async fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.selected_date = date;
        self.load().await
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn visible(&self) -> Vec<&TeacherEntry> {
        let needle = self.search_term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn entries(&self) -> &[TeacherEntry] {
        &self.entries
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
