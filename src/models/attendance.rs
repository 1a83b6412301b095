//! Attendance record shapes exchanged with the API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::AttendanceStatus;

/// One student attendance row for a date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRow {
    pub student_id: i64,
    pub attendance_status: AttendanceStatus,
}

/// One teacher attendance row for a date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAttendanceRow {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub attendance_status: AttendanceStatus,
}

/// Body of the create-or-update student attendance mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub status: AttendanceStatus,
}

/// One entry of a subject's attendance history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceHistoryEntry {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Pre-aggregated weekly attendance of one classroom
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWeeklySummary {
    pub sunday: NaiveDate,
    pub attended_count: u32,
    pub total_count: u32,
}

/// Pre-aggregated weekly attendance across all classrooms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalWeeklySummary {
    pub attendance_date: NaiveDate,
    pub attended_count: u32,
    pub total_count: u32,
}

/// round(attended/total × 100), with zero enrolled mapping to 0 rather
/// than a division error
pub fn attendance_rate(attended: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((attended as f64 / total as f64) * 100.0).round() as u32
}
