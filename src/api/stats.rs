//! Pre-aggregated attendance summary endpoints

use super::client::ApiClient;
use crate::models::{ClassRoomInfo, ClassWeeklySummary, TotalWeeklySummary};
use crate::utils::errors::Result;

impl ApiClient {
    /// Classroom list used by the statistics screen
    pub async fn stat_classrooms(&self) -> Result<Vec<ClassRoomInfo>> {
        self.get_json("classrooms").await
    }

    /// Per-Sunday attendance counts of one classroom, newest first
    pub async fn class_weekly_summary(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<ClassWeeklySummary>> {
        self.get_json(&format!(
            "attendances/classrooms/{}/sundays/summary",
            classroom_id
        ))
        .await
    }

    /// Per-Sunday attendance counts across the whole group, newest first
    pub async fn total_weekly_summary(&self) -> Result<Vec<TotalWeeklySummary>> {
        self.get_json("attendances/summary/sundays").await
    }
}
