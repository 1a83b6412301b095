//! Per-class attendance screen
//!
//! One class at a time: a class selector, the class roster for the selected
//! date, and the same mutate-then-re-fetch contract as the whole-roster
//! screen. The mark-all shortcut is local only and still needs a per-student
//! submit to persist.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::models::{ClassRoomInfo, UiStatus};
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;
use crate::utils::time::format_date;

#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub class_student_id: i64,
    pub student_id: i64,
    pub name: String,
    pub status: UiStatus,
}

/// Status head-count of the selected class on the selected date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub etc: usize,
    pub unset: usize,
}

#[derive(Debug, Clone)]
pub struct ClassAttendanceController {
    api: ApiClient,
    year: i32,
    selected_date: NaiveDate,
    classes: Vec<ClassRoomInfo>,
    selected_class: Option<i64>,
    search_term: String,
    entries: Vec<ClassEntry>,
    loaded: bool,
    error: Option<String>,
}

impl ClassAttendanceController {
    pub fn new(api: ApiClient, year: i32, date: NaiveDate) -> Self {
        Self {
            api,
            year,
            selected_date: date,
            classes: Vec::new(),
            selected_class: None,
            search_term: String::new(),
            entries: Vec::new(),
            loaded: false,
            error: None,
        }
    }

    /// Fetch the class list and load the first class, if any
    pub async fn load(&mut self) -> Result<()> {
        let classes = match self.api.class_rooms(self.year).await {
            Ok(classes) => classes,
            Err(e) => {
                logging::log_api_error("class_rooms", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.classes = classes;
        self.classes.sort_by(|a, b| a.label().cmp(&b.label()));

        match self.classes.first().map(|class| class.id) {
            Some(first) => self.select_class(first).await,
            None => {
                self.loaded = true;
                self.error = None;
                Ok(())
            }
        }
    }

    /// Switch the selected class and reload its roster and attendance
    pub async fn select_class(&mut self, class_id: i64) -> Result<()> {
        self.selected_class = Some(class_id);

        let students = match self.api.students_by_class(class_id, self.year).await {
            Ok(students) => students,
            Err(e) => {
                logging::log_api_error("students_by_class", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.entries = students
            .into_iter()
            .map(|student| ClassEntry {
                class_student_id: student.id,
                student_id: student.student_id,
                name: student.student_name,
                status: UiStatus::Unset,
            })
            .collect();
        self.loaded = true;
        self.error = None;

        self.refresh_attendance().await
    }

    /// Re-fetch the selected class's rows for the selected date and overwrite
    /// every entry's status
    pub async fn refresh_attendance(&mut self) -> Result<()> {
        let class_id = match self.selected_class {
            Some(id) => id,
            None => return Ok(()),
        };

        let rows = match self
            .api
            .attendance_by_class(class_id, self.year, self.selected_date)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                logging::log_api_error("attendance_by_class", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        let by_student: HashMap<i64, UiStatus> = rows
            .into_iter()
            .map(|row| (row.student_id, UiStatus::from(row.attendance_status)))
            .collect();

        for entry in &mut self.entries {
            entry.status = by_student
                .get(&entry.student_id)
                .copied()
                .unwrap_or(UiStatus::Unset);
        }
        self.error = None;
        Ok(())
    }

    /// Submit one student's status, then re-fetch regardless of the outcome
    pub async fn set_status(&mut self, class_student_id: i64, status: UiStatus) -> Result<()> {
        let code = status.to_code().ok_or_else(|| {
            RollcallError::Validation("unset status cannot be submitted".to_string())
        })?;

        let outcome = self
            .api
            .mark_student_attendance(class_student_id, self.selected_date, code)
            .await;

        match &outcome {
            Ok(()) => logging::log_status_change(
                class_student_id,
                &format_date(self.selected_date),
                code.as_code(),
            ),
            Err(e) => logging::log_reconciliation(class_student_id, &e.to_string()),
        }

        if let Err(e) = self.refresh_attendance().await {
            warn!(error = %e, "Re-fetch after mutation failed, keeping stale view");
        }

        outcome
    }

    pub async fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.selected_date = date;
        self.refresh_attendance().await
    }

    /// Flip every entry to present locally; nothing is persisted until each
    /// student is submitted individually
    pub fn mark_all_present_locally(&mut self) {
        for entry in &mut self.entries {
            entry.status = UiStatus::Present;
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn visible(&self) -> Vec<&ClassEntry> {
        let needle = self.search_term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn tally(&self) -> StatusTally {
        let mut tally = StatusTally::default();
        for entry in &self.entries {
            match entry.status {
                UiStatus::Present => tally.present += 1,
                UiStatus::Late => tally.late += 1,
                UiStatus::Absent => tally.absent += 1,
                UiStatus::Etc => tally.etc += 1,
                UiStatus::Unset => tally.unset += 1,
            }
        }
        tally
    }

    pub fn classes(&self) -> &[ClassRoomInfo] {
        &self.classes
    }

    pub fn selected_class(&self) -> Option<i64> {
        self.selected_class
    }

    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
