//! Invited friend model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A newly invited non-member and the student who brought them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedFriend {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    pub student_id: i64,
    /// Resolved name of the referring student, when the server includes it
    #[serde(default)]
    pub student_name: Option<String>,
}

/// Create/update body; the referrer travels by id only
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedFriendRequest {
    pub name: String,
    pub birth: NaiveDate,
    pub phone: String,
    pub student_id: i64,
}
