//! Teacher model

use serde::{Deserialize, Serialize};

/// Active/inactive flag carried by teacher records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeacherStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    /// Contact phone, named `number` on the wire
    #[serde(default)]
    pub number: Option<String>,
    pub status: TeacherStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// Assignment of a teacher to a classroom for one school year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeacherRequest {
    pub teacher_id: i64,
    pub class_room_id: i64,
    pub school_year: i32,
}
