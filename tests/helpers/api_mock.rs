//! Mock attendance API server for testing
//!
//! This module provides a mock HTTP server that simulates the remote
//! attendance API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rollcall::config::ApiConfig;
use rollcall::ApiClient;

/// Mock attendance API server for testing
pub struct AttendanceMockServer {
    pub server: MockServer,
}

impl AttendanceMockServer {
    /// Create a new mock attendance API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Build an ApiClient pointed at the mock server
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: self.server.uri(),
            timeout_seconds: 5,
        })
        .expect("mock server URI is a valid base URL")
    }

    /// A two-class roster: 중1-1 with 김은혜(10)/박요한(11), 고1-3 with 이사랑(12).
    /// Enrollment ids are student id plus 100.
    pub fn sample_roster() -> Value {
        json!([
            {
                "id": 1,
                "schoolType": "MIDDLE",
                "grade": 1,
                "classNumber": 1,
                "teacherName": "장미령",
                "students": [
                    {"id": 110, "studentId": 10, "studentName": "김은혜"},
                    {"id": 111, "studentId": 11, "studentName": "박요한"}
                ]
            },
            {
                "id": 2,
                "schoolType": "HIGH",
                "grade": 1,
                "classNumber": 3,
                "teacherName": "안유빈",
                "students": [
                    {"id": 112, "studentId": 12, "studentName": "이사랑"}
                ]
            }
        ])
    }

    /// Setup mock for the nested roster endpoint
    pub async fn mock_roster(&self, year: i32, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/student-classes/school-year/{}", year)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup a failing mock for the nested roster endpoint
    pub async fn mock_roster_failure(&self, year: i32, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/student-classes/school-year/{}", year)))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({"message": "internal error"})),
            )
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the by-date attendance rows
    pub async fn mock_attendance_by_date(&self, year: i32, date: &str, rows: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/attendances/year/{}/date/{}", year, date)))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the mark-attendance mutation, asserting the exact
    /// status code sent in the body
    pub async fn mock_mark_attendance(
        &self,
        class_student_id: i64,
        date: &str,
        expected_status: &str,
        succeed: bool,
    ) {
        let template = if succeed {
            ResponseTemplate::new(200).set_body_json(json!({"result": "ok"}))
        } else {
            ResponseTemplate::new(500).set_body_json(json!({"message": "write failed"}))
        };
        Mock::given(method("PUT"))
            .and(path(format!("/attendances/{}/{}", class_student_id, date)))
            .and(body_json(json!({"status": expected_status})))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for one enrollment's attendance history
    pub async fn mock_attendance_history(&self, class_student_id: i64, entries: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/attendances/{}", class_student_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(entries))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the flat student list, with expectations on how often
    /// it may be called
    pub async fn mock_students(&self, year: i32, students: Value, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/students/year"))
            .and(query_param("year", year.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(students))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the classroom list
    pub async fn mock_class_rooms(&self, year: i32, classes: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/student-classes/year/{}/class-rooms", year)))
            .respond_with(ResponseTemplate::new(200).set_body_json(classes))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the per-teacher rows of one date
    pub async fn mock_teacher_attendance(&self, date: &str, rows: Value) {
        Mock::given(method("GET"))
            .and(path("/attendance/teachers/status"))
            .and(query_param("date", date))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the teacher mark mutation, addressed by query params
    pub async fn mock_mark_teacher(&self, teacher_id: i64, status: &str, date: &str) {
        Mock::given(method("POST"))
            .and(path("/attendance/teacher/mark"))
            .and(query_param("teacherId", teacher_id.to_string()))
            .and(query_param("status", status))
            .and(query_param("date", date))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }
}
