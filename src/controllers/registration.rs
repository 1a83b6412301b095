//! New-friend registration screen
//!
//! Holds the registration form and the live referrer search. The search joins
//! the flat student list with the classroom list client-side so each
//! candidate carries its class label and homeroom teacher. Queries shorter
//! than two characters never reach the network.

use chrono::NaiveDate;

use crate::api::ApiClient;
use crate::models::{ClassLabel, InvitedFriendRequest, Student};
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging;

/// Shortest referrer query that triggers a search, counted in characters
/// rather than bytes so a single hangul syllable stays below it
const MIN_QUERY_CHARS: usize = 2;

/// Student joined with their classroom, as shown in the search dropdown
#[derive(Debug, Clone)]
pub struct ReferrerCandidate {
    pub student_id: i64,
    pub name: String,
    pub class_label: Option<ClassLabel>,
    pub teacher_name: Option<String>,
}

/// Form fields as entered, all optional until submit
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub birth: Option<NaiveDate>,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationController {
    api: ApiClient,
    year: i32,
    form: RegistrationForm,
    search_query: String,
    results: Vec<ReferrerCandidate>,
    referrer: Option<ReferrerCandidate>,
    submitted: bool,
    error: Option<String>,
}

impl RegistrationController {
    pub fn new(api: ApiClient, year: i32) -> Self {
        Self {
            api,
            year,
            form: RegistrationForm::default(),
            search_query: String::new(),
            results: Vec::new(),
            referrer: None,
            submitted: false,
            error: None,
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_birth(&mut self, birth: NaiveDate) {
        self.form.birth = Some(birth);
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.form.phone = phone.to_string();
    }

    /// Run the live referrer search.
    ///
    /// A pinned referrer suppresses the search entirely; a query below the
    /// character threshold clears the dropdown without a request.
    pub async fn search_referrer(&mut self, query: &str) -> Result<()> {
        self.search_query = query.to_string();

        if self.referrer.is_some() {
            return Ok(());
        }
        if query.trim().chars().count() < MIN_QUERY_CHARS {
            self.results.clear();
            return Ok(());
        }

        let students = match self.api.students_by_year(self.year).await {
            Ok(students) => students,
            Err(e) => {
                logging::log_api_error("students_by_year", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        let classrooms = match self.api.class_rooms(self.year).await {
            Ok(classrooms) => classrooms,
            Err(e) => {
                logging::log_api_error("class_rooms", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        let needle = query.trim().to_lowercase();
        self.results = students
            .into_iter()
            .filter(|student| student.name.to_lowercase().contains(&needle))
            .map(|student| Self::join_classroom(student, &classrooms))
            .collect();
        self.error = None;
        Ok(())
    }

    fn join_classroom(
        student: Student,
        classrooms: &[crate::models::ClassRoomInfo],
    ) -> ReferrerCandidate {
        let classroom = student
            .class_room_id
            .and_then(|id| classrooms.iter().find(|class| class.id == id));
        ReferrerCandidate {
            student_id: student.id,
            name: student.name,
            class_label: classroom.map(|class| class.label()),
            teacher_name: classroom.and_then(|class| class.teacher_name.clone()),
        }
    }

    /// Pin a search result as the chosen referrer and close the dropdown
    pub fn select_referrer(&mut self, index: usize) -> bool {
        match self.results.get(index).cloned() {
            Some(candidate) => {
                self.search_query = candidate.name.clone();
                self.referrer = Some(candidate);
                self.results.clear();
                true
            }
            None => false,
        }
    }

    /// Unpin the referrer so the live search works again
    pub fn clear_referrer(&mut self) {
        self.referrer = None;
        self.search_query.clear();
        self.results.clear();
    }

    /// Submit the registration. Every field including the referrer must be
    /// filled; an incomplete form fails locally without touching the network.
    pub async fn submit(&mut self) -> Result<()> {
        let name = self.form.name.trim();
        let phone = self.form.phone.trim();
        let (birth, referrer) = match (self.form.birth, &self.referrer) {
            (Some(birth), Some(referrer)) if !name.is_empty() && !phone.is_empty() => {
                (birth, referrer)
            }
            _ => {
                return Err(RollcallError::Validation(
                    "모든 필드를 입력해주세요.".to_string(),
                ));
            }
        };

        let request = InvitedFriendRequest {
            name: name.to_string(),
            birth,
            phone: phone.to_string(),
            student_id: referrer.student_id,
        };

        match self.api.create_invited_friend(&request).await {
            Ok(()) => {
                self.form = RegistrationForm::default();
                self.referrer = None;
                self.search_query.clear();
                self.results.clear();
                self.submitted = true;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                logging::log_api_error("create_invited_friend", &e.to_string(), None);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn results(&self) -> &[ReferrerCandidate] {
        &self.results
    }

    pub fn referrer(&self) -> Option<&ReferrerCandidate> {
        self.referrer.as_ref()
    }

    pub fn was_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn controller() -> RegistrationController {
        let api = ApiClient::new(&crate::config::ApiConfig {
            base_url: "http://localhost:1".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();
        RegistrationController::new(api, 2025)
    }

    #[tokio::test]
    async fn test_single_character_query_never_hits_the_network() {
        // A dead base URL would fail any request this might make.
        let mut controller = controller();
        controller.search_referrer("김").await.unwrap();
        assert!(controller.results().is_empty());
    }

    #[tokio::test]
    async fn test_pinned_referrer_suppresses_search() {
        let mut controller = controller();
        controller.results = vec![ReferrerCandidate {
            student_id: 1,
            name: "김은혜".to_string(),
            class_label: None,
            teacher_name: None,
        }];
        assert!(controller.select_referrer(0));
        controller.search_referrer("박요한").await.unwrap();
        assert!(controller.results().is_empty());
        assert_eq!(controller.referrer().unwrap().name, "김은혜");
    }

    #[tokio::test]
    async fn test_incomplete_form_fails_locally() {
        let mut controller = controller();
        controller.set_name("새친구");
        let err = controller.submit().await.unwrap_err();
        assert_matches!(err, RollcallError::Validation(_));
        assert!(!controller.was_submitted());
    }
}
