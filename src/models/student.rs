//! Student model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Student as returned by the flat student endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub school_year: Option<i32>,
    #[serde(default)]
    pub class_room_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Enrollment of a student into a classroom for one school year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignClassRequest {
    pub student_id: i64,
    pub class_room_id: i64,
    pub school_year: i32,
}

/// Students registered in one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRegistrations {
    pub month: u32,
    #[serde(default)]
    pub students: Vec<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_tolerates_missing_optionals() {
        let json = r#"{"id": 7, "name": "이사랑"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.name, "이사랑");
        assert!(student.class_room_id.is_none());
    }

    #[test]
    fn test_create_request_omits_absent_fields() {
        let req = CreateStudentRequest {
            name: "박요한".to_string(),
            birth: None,
            phone: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"name":"박요한"}"#);
    }
}
