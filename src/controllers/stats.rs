//! Attendance statistics screen
//!
//! Aggregates the server's weekly summaries into the three read models the
//! screen shows: the per-class weekly series, the grade cards built from each
//! class's most recent week, and the count-weighted monthly trend. Summaries
//! arrive newest-first; index zero is always the latest week.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::api::ApiClient;
use crate::models::{attendance_rate, ClassRoomInfo, SchoolType};
use crate::utils::errors::Result;
use crate::utils::logging;

/// One week of one series, with the rate already derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyPoint {
    pub date: NaiveDate,
    pub attended: u32,
    pub total: u32,
    pub rate: u32,
}

/// One grade card, summed over every class of that grade's latest week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSummary {
    pub school_type: SchoolType,
    pub grade: u8,
    pub attended: u32,
    pub total: u32,
    pub class_count: usize,
    pub rate: u32,
}

/// One month of the trend line; months with no recorded weeks are omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPoint {
    pub year: i32,
    pub month: u32,
    pub rate: u32,
}

#[derive(Debug, Clone)]
pub struct StatsController {
    api: ApiClient,
    classrooms: Vec<ClassRoomInfo>,
    class_series: HashMap<i64, Vec<WeeklyPoint>>,
    total_series: Vec<WeeklyPoint>,
    selected_class: Option<i64>,
    loaded: bool,
    error: Option<String>,
}

impl StatsController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            classrooms: Vec::new(),
            class_series: HashMap::new(),
            total_series: Vec::new(),
            selected_class: None,
            loaded: false,
            error: None,
        }
    }

    /// Fetch the classroom list and the school-wide weekly series, then the
    /// per-class series one class at a time
    pub async fn load(&mut self) -> Result<()> {
        let classrooms = match self.api.stat_classrooms().await {
            Ok(classrooms) => classrooms,
            Err(e) => {
                logging::log_api_error("stat_classrooms", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.classrooms = classrooms;
        self.classrooms.sort_by(|a, b| a.label().cmp(&b.label()));

        let totals = match self.api.total_weekly_summary().await {
            Ok(totals) => totals,
            Err(e) => {
                logging::log_api_error("total_weekly_summary", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.total_series = totals
            .into_iter()
            .map(|week| WeeklyPoint {
                date: week.attendance_date,
                attended: week.attended_count,
                total: week.total_count,
                rate: attendance_rate(week.attended_count, week.total_count),
            })
            .collect();

        // Grade cards need every class series, so fetch them all up front.
        let class_ids: Vec<i64> = self.classrooms.iter().map(|class| class.id).collect();
        for class_id in class_ids {
            self.load_class_series(class_id).await?;
        }

        self.selected_class = self.classrooms.first().map(|class| class.id);
        self.loaded = true;
        self.error = None;
        Ok(())
    }

    async fn load_class_series(&mut self, class_id: i64) -> Result<()> {
        let weeks = match self.api.class_weekly_summary(class_id).await {
            Ok(weeks) => weeks,
            Err(e) => {
                logging::log_api_error(
                    "class_weekly_summary",
                    &e.to_string(),
                    Some(&class_id.to_string()),
                );
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        let series = weeks
            .into_iter()
            .map(|week| WeeklyPoint {
                date: week.sunday,
                attended: week.attended_count,
                total: week.total_count,
                rate: attendance_rate(week.attended_count, week.total_count),
            })
            .collect();
        self.class_series.insert(class_id, series);
        Ok(())
    }

    pub fn select_class(&mut self, class_id: i64) {
        if self.classrooms.iter().any(|class| class.id == class_id) {
            self.selected_class = Some(class_id);
        }
    }

    /// Weekly series of the selected class, newest week first
    pub fn selected_class_series(&self) -> &[WeeklyPoint] {
        self.selected_class
            .and_then(|id| self.class_series.get(&id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The six grade cards, middle 1-3 then high 1-3.
    ///
    /// Each card sums the latest-week counts of every class in that grade;
    /// classes with no recorded weeks contribute nothing, and a grade where
    /// no class reported shows a zero rate.
    pub fn grade_summary(&self) -> Vec<GradeSummary> {
        let grades = [
            (SchoolType::Middle, 1),
            (SchoolType::Middle, 2),
            (SchoolType::Middle, 3),
            (SchoolType::High, 1),
            (SchoolType::High, 2),
            (SchoolType::High, 3),
        ];

        grades
            .into_iter()
            .map(|(school_type, grade)| {
                let mut attended = 0;
                let mut total = 0;
                let mut class_count = 0;
                for class in &self.classrooms {
                    if class.school_type != school_type || class.grade != grade {
                        continue;
                    }
                    class_count += 1;
                    if let Some(latest) = self
                        .class_series
                        .get(&class.id)
                        .and_then(|series| series.first())
                    {
                        attended += latest.attended;
                        total += latest.total;
                    }
                }
                GradeSummary {
                    school_type,
                    grade,
                    attended,
                    total,
                    class_count,
                    rate: attendance_rate(attended, total),
                }
            })
            .collect()
    }

    /// Monthly trend over the school-wide series.
    ///
    /// Each month's rate weights weeks by head count: summed attended over
    /// summed total, not an average of weekly rates. Months without any
    /// recorded week do not appear.
    pub fn monthly_trend(&self) -> Vec<MonthPoint> {
        let mut buckets: Vec<((i32, u32), (u32, u32))> = Vec::new();
        for point in &self.total_series {
            let key = (point.date.year(), point.date.month());
            match buckets.iter_mut().find(|(k, _)| *k == key) {
                Some((_, (attended, total))) => {
                    *attended += point.attended;
                    *total += point.total;
                }
                None => buckets.push((key, (point.attended, point.total))),
            }
        }
        buckets.sort_by_key(|(key, _)| *key);
        buckets
            .into_iter()
            .map(|((year, month), (attended, total))| MonthPoint {
                year,
                month,
                rate: attendance_rate(attended, total),
            })
            .collect()
    }

    /// Latest school-wide week, if any has been recorded
    pub fn latest_total(&self) -> Option<WeeklyPoint> {
        self.total_series.first().copied()
    }

    pub fn classrooms(&self) -> &[ClassRoomInfo] {
        &self.classrooms
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(y: i32, m: u32, d: u32, attended: u32, total: u32) -> WeeklyPoint {
        WeeklyPoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            attended,
            total,
            rate: attendance_rate(attended, total),
        }
    }

    fn bare_controller() -> StatsController {
        let api = ApiClient::new(&crate::config::ApiConfig {
            base_url: "http://localhost:1".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();
        StatsController::new(api)
    }

    fn classroom(id: i64, school_type: SchoolType, grade: u8) -> ClassRoomInfo {
        ClassRoomInfo {
            id,
            school_type,
            grade,
            class_number: 1,
            name: None,
            teacher_name: None,
        }
    }

    #[test]
    fn test_monthly_trend_weights_by_head_count() {
        let mut controller = bare_controller();
        // 10/20 and 30/40 in March: (10+30)/(20+40) = 67%, not (50+75)/2.
        controller.total_series = vec![
            point(2025, 3, 16, 30, 40),
            point(2025, 3, 9, 10, 20),
            point(2025, 2, 23, 5, 10),
        ];
        let trend = controller.monthly_trend();
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0], MonthPoint { year: 2025, month: 2, rate: 50 });
        assert_eq!(trend[1], MonthPoint { year: 2025, month: 3, rate: 67 });
    }

    #[test]
    fn test_monthly_trend_omits_empty_months() {
        let mut controller = bare_controller();
        controller.total_series = vec![point(2025, 5, 4, 8, 10), point(2025, 3, 9, 7, 10)];
        let months: Vec<u32> = controller.monthly_trend().iter().map(|p| p.month).collect();
        assert_eq!(months, vec![3, 5]);
    }

    #[test]
    fn test_grade_summary_sums_latest_weeks() {
        let mut controller = bare_controller();
        controller.classrooms = vec![
            classroom(1, SchoolType::Middle, 1),
            classroom(2, SchoolType::Middle, 1),
            classroom(3, SchoolType::High, 2),
        ];
        controller
            .class_series
            .insert(1, vec![point(2025, 3, 16, 8, 10), point(2025, 3, 9, 2, 10)]);
        controller
            .class_series
            .insert(2, vec![point(2025, 3, 16, 5, 10)]);
        controller.class_series.insert(3, vec![]);

        let summary = controller.grade_summary();
        assert_eq!(summary.len(), 6);

        let middle_one = &summary[0];
        assert_eq!(middle_one.attended, 13);
        assert_eq!(middle_one.total, 20);
        assert_eq!(middle_one.class_count, 2);
        assert_eq!(middle_one.rate, 65);

        // High 2 has a class but no recorded weeks: zero rate, not a division.
        let high_two = &summary[4];
        assert_eq!(high_two.class_count, 1);
        assert_eq!(high_two.total, 0);
        assert_eq!(high_two.rate, 0);
    }

    #[test]
    fn test_grade_summary_keeps_school_types_apart() {
        let mut controller = bare_controller();
        controller.classrooms = vec![
            classroom(1, SchoolType::Middle, 1),
            classroom(2, SchoolType::High, 1),
        ];
        controller.class_series.insert(1, vec![point(2025, 3, 9, 9, 10)]);
        controller.class_series.insert(2, vec![point(2025, 3, 9, 1, 10)]);

        let summary = controller.grade_summary();
        assert_eq!(summary[0].rate, 90);
        assert_eq!(summary[3].rate, 10);
    }
}
