//! Attendance record endpoints, student and teacher side

use chrono::NaiveDate;

use super::client::ApiClient;
use crate::models::{
    AttendanceHistoryEntry, AttendanceRow, AttendanceStatus, MarkAttendanceRequest,
    TeacherAttendanceRow,
};
use crate::utils::errors::Result;
use crate::utils::time::format_date;

impl ApiClient {
    /// All student attendance rows for a date within a school year
    pub async fn attendance_by_date(
        &self,
        year: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRow>> {
        self.get_json(&format!(
            "attendances/year/{}/date/{}",
            year,
            format_date(date)
        ))
        .await
    }

    /// Attendance rows of one classroom for a date
    pub async fn attendance_by_class(
        &self,
        class_id: i64,
        year: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRow>> {
        self.get_json(&format!(
            "attendances/class/{}/year/{}/date/{}",
            class_id,
            year,
            format_date(date)
        ))
        .await
    }

    /// Create-or-update a student attendance record, keyed by the enrollment
    /// id and the date
    pub async fn mark_student_attendance(
        &self,
        class_student_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<()> {
        self.put_json(
            &format!("attendances/{}/{}", class_student_id, format_date(date)),
            &MarkAttendanceRequest { status },
        )
        .await
    }

    /// Full attendance history of one enrollment
    pub async fn attendance_history(
        &self,
        class_student_id: i64,
    ) -> Result<Vec<AttendanceHistoryEntry>> {
        self.get_json(&format!("attendances/{}", class_student_id))
            .await
    }

    /// Teacher attendance rows for a date
    pub async fn teacher_attendance_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TeacherAttendanceRow>> {
        self.get_json_query("attendance/teachers/status", &[("date", format_date(date))])
            .await
    }

    /// Mark one teacher's attendance; this endpoint is addressed entirely by
    /// query parameters
    pub async fn mark_teacher_attendance(
        &self,
        teacher_id: i64,
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> Result<()> {
        self.post_query(
            "attendance/teacher/mark",
            &[
                ("teacherId", teacher_id.to_string()),
                ("status", status.as_code().to_string()),
                ("date", format_date(date)),
            ],
        )
        .await
    }
}
