//! Student and classroom endpoints

use super::client::ApiClient;
use crate::models::{
    AssignClassRequest, ClassRoomInfo, ClassRoomRoster, ClassStudentRow, CreateStudentRequest,
    MonthlyRegistrations, Student,
};
use crate::utils::errors::Result;

impl ApiClient {
    /// Full nested class→students roster for a school year
    pub async fn roster_by_year(&self, year: i32) -> Result<Vec<ClassRoomRoster>> {
        self.get_json(&format!("student-classes/school-year/{}", year))
            .await
    }

    /// Flat student list for a school year
    pub async fn students_by_year(&self, year: i32) -> Result<Vec<Student>> {
        self.get_json_query("students/year", &[("year", year.to_string())])
            .await
    }

    /// Students joined with their class assignment for a school year
    pub async fn students_with_class_info(&self, year: i32) -> Result<Vec<Student>> {
        self.get_json_query(
            "students/studentsWithClassInfo",
            &[("schoolYear", year.to_string())],
        )
        .await
    }

    /// Enrolled students of one classroom
    pub async fn students_by_class(
        &self,
        class_id: i64,
        year: i32,
    ) -> Result<Vec<ClassStudentRow>> {
        self.get_json_query(
            &format!("student-classes/classroom/{}", class_id),
            &[("schoolYear", year.to_string())],
        )
        .await
    }

    /// Classroom list for a school year
    pub async fn class_rooms(&self, year: i32) -> Result<Vec<ClassRoomInfo>> {
        self.get_json(&format!("student-classes/year/{}/class-rooms", year))
            .await
    }

    pub async fn create_student(&self, request: &CreateStudentRequest) -> Result<()> {
        self.post_json("students", request).await
    }

    pub async fn delete_student(&self, student_id: i64) -> Result<()> {
        self.delete(&format!("students/{}", student_id)).await
    }

    /// Enroll a student into a classroom for a school year
    pub async fn assign_student_class(&self, request: &AssignClassRequest) -> Result<()> {
        self.post_json("student-classes", request).await
    }

    /// Registration lists bucketed by calendar month
    pub async fn registrations_by_year(&self, year: i32) -> Result<Vec<MonthlyRegistrations>> {
        self.get_json(&format!("students/registrations/by-year/{}", year))
            .await
    }
}
