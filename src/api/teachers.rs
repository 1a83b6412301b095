//! Teacher roster endpoints

use super::client::ApiClient;
use crate::models::{AssignTeacherRequest, CreateTeacherRequest, Teacher};
use crate::utils::errors::Result;

impl ApiClient {
    /// All teachers, active and inactive
    pub async fn teachers(&self) -> Result<Vec<Teacher>> {
        self.get_json("teacher").await
    }

    pub async fn create_teacher(&self, request: &CreateTeacherRequest) -> Result<()> {
        self.post_json("teacher", request).await
    }

    pub async fn delete_teacher(&self, teacher_id: i64) -> Result<()> {
        self.delete(&format!("teacher/{}", teacher_id)).await
    }

    /// Assign a teacher as homeroom of a classroom for a school year
    pub async fn assign_teacher_class(&self, request: &AssignTeacherRequest) -> Result<()> {
        self.post_json("teacher-classes", request).await
    }
}
