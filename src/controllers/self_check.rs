//! Self check-in kiosk screen
//!
//! Students look themselves up by name and check in. Name matching strips
//! whitespace and ignores case; "today" is computed at the configured fixed
//! offset so a mis-zoned kiosk still agrees with the group's clock. A failed
//! roster fetch falls back to the configured member list so the kiosk keeps
//! working offline.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::models::AttendanceStatus;
use crate::utils::errors::Result;
use crate::utils::logging;
use crate::utils::time::{format_date, today_at_offset};

/// Status written by every kiosk check-in. Walk-ins after the service start
/// are recorded as late regardless of the time of day.
const CHECK_IN_STATUS: AttendanceStatus = AttendanceStatus::Late;

/// One member the kiosk can check in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMember {
    pub student_id: i64,
    pub class_student_id: i64,
    pub name: String,
    pub team: String,
    pub teacher_name: String,
}

/// Result of a name lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty or whitespace-only query
    Blank,
    NotFound,
    Single(CheckMember),
    /// Several members share the name; the student picks theirs
    Multiple(Vec<CheckMember>),
}

#[derive(Debug, Clone)]
pub struct SelfCheckController {
    api: ApiClient,
    year: i32,
    offset_hours: i32,
    members: Vec<CheckMember>,
    fallback: Vec<CheckMember>,
    using_fallback: bool,
    /// Per-session cache of "already checked in today", keyed by student id
    checked_today: HashMap<i64, bool>,
    last_checked: Option<i64>,
    loaded: bool,
    error: Option<String>,
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

impl SelfCheckController {
    pub fn new(api: ApiClient, settings: &Settings) -> Self {
        let fallback = settings
            .fallback
            .members
            .iter()
            .map(|member| CheckMember {
                student_id: member.student_id,
                class_student_id: member.class_student_id,
                name: member.name.clone(),
                team: member.class_label.clone(),
                teacher_name: member.teacher_name.clone(),
            })
            .collect();
        Self {
            api,
            year: settings.roster.school_year,
            offset_hours: settings.roster.timezone_offset_hours,
            members: Vec::new(),
            fallback,
            using_fallback: false,
            checked_today: HashMap::new(),
            last_checked: None,
            loaded: false,
            error: None,
        }
    }

    /// Fetch the roster; on failure switch to the configured fallback list
    /// so the kiosk stays usable
    pub async fn load(&mut self) -> Result<()> {
        match self.api.roster_by_year(self.year).await {
            Ok(rosters) => {
                self.members = rosters
                    .into_iter()
                    .flat_map(|class_room| {
                        let team = format!("{}반", class_room.label());
                        let teacher = class_room.teacher_name.clone().unwrap_or_default();
                        class_room.students.into_iter().map(move |student| {
                            CheckMember {
                                student_id: student.student_id,
                                class_student_id: student.id,
                                name: student.student_name,
                                team: team.clone(),
                                teacher_name: teacher.clone(),
                            }
                        })
                    })
                    .collect();
                self.members.sort_by(|a, b| a.name.cmp(&b.name));
                self.using_fallback = false;
                self.error = None;
            }
            Err(e) => {
                logging::log_api_error("roster_by_year", &e.to_string(), Some("self-check"));
                self.members = self.fallback.clone();
                self.using_fallback = true;
                self.error = Some(e.user_message());
            }
        }
        self.loaded = true;
        Ok(())
    }

    /// Look a member up by name, whitespace-stripped and case-insensitive
    pub fn search(&self, query: &str) -> SearchOutcome {
        let needle = normalize(query);
        if needle.is_empty() {
            return SearchOutcome::Blank;
        }
        let mut matches: Vec<CheckMember> = self
            .members
            .iter()
            .filter(|member| normalize(&member.name).contains(&needle))
            .cloned()
            .collect();
        match matches.len() {
            0 => SearchOutcome::NotFound,
            1 => SearchOutcome::Single(matches.swap_remove(0)),
            _ => SearchOutcome::Multiple(matches),
        }
    }

    pub fn today(&self) -> NaiveDate {
        today_at_offset(self.offset_hours)
    }

    /// Whether the member already has a present or late record for today.
    ///
    /// The answer is cached for the session; a failed history fetch counts as
    /// not checked so the kiosk never blocks a legitimate check-in.
    pub async fn already_checked_today(&mut self, member: &CheckMember) -> bool {
        if let Some(&checked) = self.checked_today.get(&member.student_id) {
            return checked;
        }

        let today = self.today();
        let checked = match self.api.attendance_history(member.class_student_id).await {
            Ok(history) => history.iter().any(|entry| {
                entry.date == today
                    && matches!(
                        entry.status,
                        AttendanceStatus::Attend | AttendanceStatus::Late
                    )
            }),
            Err(e) => {
                warn!(
                    student_id = member.student_id,
                    error = %e,
                    "History lookup failed, treating as not checked in"
                );
                false
            }
        };
        self.checked_today.insert(member.student_id, checked);
        checked
    }

    /// Record today's check-in for the member, then remember it locally
    pub async fn check_in(&mut self, member: &CheckMember) -> Result<()> {
        let today = self.today();
        match self
            .api
            .mark_student_attendance(member.class_student_id, today, CHECK_IN_STATUS)
            .await
        {
            Ok(()) => {
                logging::log_status_change(
                    member.class_student_id,
                    &format_date(today),
                    CHECK_IN_STATUS.as_code(),
                );
                self.checked_today.insert(member.student_id, true);
                self.last_checked = Some(member.student_id);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                logging::log_reconciliation(member.class_student_id, &e.to_string());
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub fn members(&self) -> &[CheckMember] {
        &self.members
    }

    pub fn is_using_fallback(&self) -> bool {
        self.using_fallback
    }

    pub fn last_checked(&self) -> Option<i64> {
        self.last_checked
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
