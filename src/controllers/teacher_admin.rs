//! Teacher management screen: the teacher list with create, delete and class
//! assignment

use tracing::warn;

use crate::api::ApiClient;
use crate::models::{AssignTeacherRequest, CreateTeacherRequest, Teacher, TeacherStatus};
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct TeacherAdminController {
    api: ApiClient,
    year: i32,
    teachers: Vec<Teacher>,
    search_term: String,
    loaded: bool,
    error: Option<String>,
}

impl TeacherAdminController {
    pub fn new(api: ApiClient, year: i32) -> Self {
        Self {
            api,
            year,
            teachers: Vec::new(),
            search_term: String::new(),
            loaded: false,
            error: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let teachers = match self.api.teachers().await {
            Ok(teachers) => teachers,
            Err(e) => {
                logging::log_api_error("teachers", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.teachers = teachers;
        self.teachers.sort_by(|a, b| a.name.cmp(&b.name));
        self.loaded = true;
        self.error = None;
        Ok(())
    }

    async fn reload(&mut self) {
        if let Err(e) = self.load().await {
            warn!(error = %e, "Re-fetch after mutation failed, keeping stale view");
        }
    }

    /// Create a teacher, then re-fetch the list regardless of the outcome
    pub async fn create(&mut self, name: &str, number: Option<&str>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(RollcallError::Validation(
                "이름을 입력해주세요.".to_string(),
            ));
        }
        let request = CreateTeacherRequest {
            name: name.trim().to_string(),
            number: number.map(str::to_string),
        };
        let outcome = self.api.create_teacher(&request).await;
        if let Err(e) = &outcome {
            logging::log_api_error("create_teacher", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        self.reload().await;
        outcome
    }

    /// Delete a teacher, then re-fetch the list regardless of the outcome
    pub async fn remove(&mut self, teacher_id: i64) -> Result<()> {
        let outcome = self.api.delete_teacher(teacher_id).await;
        if let Err(e) = &outcome {
            logging::log_api_error("delete_teacher", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        self.reload().await;
        outcome
    }

    /// Put a teacher in charge of a classroom for the current school year.
    /// The teacher list itself is unaffected, so no re-fetch follows.
    pub async fn assign_class(&mut self, teacher_id: i64, class_room_id: i64) -> Result<()> {
        let request = AssignTeacherRequest {
            teacher_id,
            class_room_id,
            school_year: self.year,
        };
        match self.api.assign_teacher_class(&request).await {
            Ok(()) => Ok(()),
            Err(e) => {
                logging::log_api_error("assign_teacher_class", &e.to_string(), None);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn visible(&self) -> Vec<&Teacher> {
        let needle = self.search_term.to_lowercase();
        self.teachers
            .iter()
            .filter(|teacher| teacher.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.teachers
            .iter()
            .filter(|teacher| teacher.status == TeacherStatus::Active)
            .count()
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
