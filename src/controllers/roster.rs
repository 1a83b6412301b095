//! Whole-roster attendance screen (attendance by date)
//!
//! Representative of every list-style screen: fetch reference data, merge the
//! per-date attendance rows over it, and after any mutation re-fetch the
//! merged view from the server. The controller never trusts its own update
//! past the mutation call; displayed truth is always the most recent
//! successful re-fetch.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::models::{ClassLabel, UiStatus};
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;
use crate::utils::time::format_date;

/// One student line of the roster, annotated with its derived class label
#[derive(Debug, Clone)]
pub struct RosterEntry {
    /// Enrollment id, the key attendance mutations are addressed to
    pub class_student_id: i64,
    pub student_id: i64,
    pub name: String,
    pub class_label: ClassLabel,
    pub status: UiStatus,
}

/// View state of the whole-roster attendance screen
#[derive(Debug, Clone)]
pub struct RosterController {
    api: ApiClient,
    year: i32,
    selected_date: NaiveDate,
    search_term: String,
    class_filter: Option<ClassLabel>,
    entries: Vec<RosterEntry>,
    loaded: bool,
    error: Option<String>,
}

impl RosterController {
    pub fn new(api: ApiClient, year: i32, date: NaiveDate) -> Self {
        Self {
            api,
            year,
            selected_date: date,
            search_term: String::new(),
            class_filter: None,
            entries: Vec::new(),
            loaded: false,
            error: None,
        }
    }

    /// Fetch the year roster, flatten the nested class→student structure and
    /// merge the selected date's attendance over it.
    ///
    /// On failure previously loaded content stays visible; only a screen that
    /// never loaded renders the error state empty.
    pub async fn load(&mut self) -> Result<()> {
        let rosters = match self.api.roster_by_year(self.year).await {
            Ok(rosters) => rosters,
            Err(e) => {
                logging::log_api_error("roster_by_year", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.entries = rosters
            .into_iter()
            .flat_map(|class_room| {
                let label = class_room.label();
                class_room.students.into_iter().map(move |student| {
                    RosterEntry {
                        class_student_id: student.id,
                        student_id: student.student_id,
                        name: student.student_name,
                        class_label: label.clone(),
                        status: UiStatus::Unset,
                    }
                })
            })
            .collect();
        self.loaded = true;
        self.error = None;

        self.refresh_attendance().await
    }

    /// Re-fetch the selected date's attendance rows and overwrite every
    /// entry's status; subjects with no row become unset
    pub async fn refresh_attendance(&mut self) -> Result<()> {
        let rows = match self.api.attendance_by_date(self.year, self.selected_date).await {
            Ok(rows) => rows,
            Err(e) => {
                logging::log_api_error("attendance_by_date", &e.to_string(), None);
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

    /// Submit a status change, then re-fetch regardless of the outcome.
    ///
    /// A failed mutation is reverted by the re-fetch; a concurrent edit from
    /// another client shows up the same way.
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

    /// Change the selected date and reload the merged view
    pub async fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.selected_date = date;
        self.load().await
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn set_class_filter(&mut self, filter: Option<ClassLabel>) {
        self.class_filter = filter;
    }

    /// Entries matching the local search and class filter
    pub fn visible(&self) -> Vec<&RosterEntry> {
        let needle = self.search_term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .filter(|entry| match &self.class_filter {
                Some(label) => entry.class_label == *label,
                None => true,
            })
            .collect()
    }

    /// Visible entries grouped by class label in domain order
    pub fn grouped(&self) -> Vec<(ClassLabel, Vec<&RosterEntry>)> {
        let mut groups: Vec<(ClassLabel, Vec<&RosterEntry>)> = Vec::new();
        for entry in self.visible() {
            match groups.iter_mut().find(|(label, _)| *label == entry.class_label) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.class_label.clone(), vec![entry])),
            }
        }
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));
        groups
    }

    /// Sorted class labels for the filter dropdown
    pub fn class_labels(&self) -> Vec<ClassLabel> {
        let mut labels: Vec<ClassLabel> = Vec::new();
        for entry in &self.entries {
            if !labels.contains(&entry.class_label) {
                labels.push(entry.class_label.clone());
            }
        }
        labels.sort();
        labels
    }

    /// Per-class listing of present and late students, formatted for the
    /// attendance export modal
    pub fn export_present_and_late(&self) -> String {
        let mut groups: Vec<(ClassLabel, Vec<&str>)> = Vec::new();
        for entry in &self.entries {
            if !matches!(entry.status, UiStatus::Present | UiStatus::Late) {
                continue;
            }
            match groups.iter_mut().find(|(label, _)| *label == entry.class_label) {
                Some((_, names)) => names.push(&entry.name),
                None => groups.push((entry.class_label.clone(), vec![&entry.name])),
            }
        }
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));

        groups
            .iter()
            .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
