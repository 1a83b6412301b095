//! Student management screen: the flat student list with create, delete and
//! class assignment

use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::models::{
    AssignClassRequest, ClassLabel, ClassRoomInfo, CreateStudentRequest, Student,
};
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct StudentAdminController {
    api: ApiClient,
    year: i32,
    students: Vec<Student>,
    classes: Vec<ClassRoomInfo>,
    search_term: String,
    loaded: bool,
    error: Option<String>,
}

impl StudentAdminController {
    pub fn new(api: ApiClient, year: i32) -> Self {
        Self {
            api,
            year,
            students: Vec::new(),
            classes: Vec::new(),
            search_term: String::new(),
            loaded: false,
            error: None,
        }
    }

    /// Fetch the student list and the classroom list for the assignment
    /// dropdown
    pub async fn load(&mut self) -> Result<()> {
        let students = match self.api.students_with_class_info(self.year).await {
            Ok(students) => students,
            Err(e) => {
                logging::log_api_error("students_with_class_info", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        let classes = match self.api.class_rooms(self.year).await {
            Ok(classes) => classes,
            Err(e) => {
                logging::log_api_error("class_rooms", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.students = students;
        self.classes = classes;
        self.classes.sort_by(|a, b| a.label().cmp(&b.label()));
        self.loaded = true;
        self.error = None;
        Ok(())
    }

    async fn reload_students(&mut self) {
        match self.api.students_with_class_info(self.year).await {
            Ok(students) => self.students = students,
            Err(e) => {
                warn!(error = %e, "Re-fetch after mutation failed, keeping stale view");
            }
        }
    }

    /// Create a student, then re-fetch the list regardless of the outcome
    pub async fn create(
        &mut self,
        name: &str,
        birth: Option<NaiveDate>,
        phone: Option<&str>,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(RollcallError::Validation(
                "이름을 입력해주세요.".to_string(),
            ));
        }
        let request = CreateStudentRequest {
            name: name.trim().to_string(),
            birth,
            phone: phone.map(str::to_string),
        };
        let outcome = self.api.create_student(&request).await;
        if let Err(e) = &outcome {
            logging::log_api_error("create_student", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        self.reload_students().await;
        outcome
    }

    /// Delete a student, then re-fetch the list regardless of the outcome
    pub async fn remove(&mut self, student_id: i64) -> Result<()> {
        let outcome = self.api.delete_student(student_id).await;
        if let Err(e) = &outcome {
            logging::log_api_error("delete_student", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        self.reload_students().await;
        outcome
    }

    /// Enroll a student into a classroom for the current school year, then
    /// re-fetch the list regardless of the outcome
    pub async fn assign_class(&mut self, student_id: i64, class_room_id: i64) -> Result<()> {
        let request = AssignClassRequest {
            student_id,
            class_room_id,
            school_year: self.year,
        };
        let outcome = self.api.assign_student_class(&request).await;
        if let Err(e) = &outcome {
            logging::log_api_error("assign_student_class", &e.to_string(), None);
            self.error = Some(e.user_message());
        }
        self.reload_students().await;
        outcome
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn visible(&self) -> Vec<&Student> {
        let needle = self.search_term.to_lowercase();
        self.students
            .iter()
            .filter(|student| student.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Class label of a student's current enrollment, if any
    pub fn class_label_of(&self, student: &Student) -> Option<ClassLabel> {
        student.class_room_id.and_then(|id| {
            self.classes
                .iter()
                .find(|class| class.id == id)
                .map(|class| class.label())
        })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn classes(&self) -> &[ClassRoomInfo] {
        &self.classes
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
