//! Monthly registration screen: new students grouped by the calendar month
//! they joined

use crate::api::ApiClient;
use crate::models::{MonthlyRegistrations, Student};
use crate::utils::errors::Result;
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct MonthlyController {
    api: ApiClient,
    year: i32,
    months: Vec<MonthlyRegistrations>,
    selected_month: Option<u32>,
    loaded: bool,
    error: Option<String>,
}

impl MonthlyController {
    pub fn new(api: ApiClient, year: i32) -> Self {
        Self {
            api,
            year,
            months: Vec::new(),
            selected_month: None,
            loaded: false,
            error: None,
        }
    }

    /// Fetch the per-month groups; months without registrations are absent
    /// from the response
    pub async fn load(&mut self) -> Result<()> {
        let months = match self.api.registrations_by_year(self.year).await {
            Ok(months) => months,
            Err(e) => {
                logging::log_api_error("registrations_by_year", &e.to_string(), None);
                self.error = Some(e.user_message());
                return Err(e);
            }
        };
        self.months = months;
        self.months.sort_by_key(|group| group.month);
        self.selected_month = self.months.first().map(|group| group.month);
        self.loaded = true;
        self.error = None;
        Ok(())
    }

    pub fn select_month(&mut self, month: u32) {
        if self.months.iter().any(|group| group.month == month) {
            self.selected_month = Some(month);
        }
    }

    /// Students of the selected month; empty when nothing is selected
    pub fn selected_students(&self) -> &[Student] {
        self.selected_month
            .and_then(|month| self.months.iter().find(|group| group.month == month))
            .map(|group| group.students.as_slice())
            .unwrap_or(&[])
    }

    /// Months that actually have registrations, ascending
    pub fn available_months(&self) -> Vec<u32> {
        self.months.iter().map(|group| group.month).collect()
    }

    pub fn total_count(&self) -> usize {
        self.months.iter().map(|group| group.students.len()).sum()
    }

    pub fn selected_month(&self) -> Option<u32> {
        self.selected_month
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
