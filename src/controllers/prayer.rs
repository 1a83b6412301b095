//! Daily prayer card screen, with date stepping and the summer retreat
//! countdown

use chrono::{Datelike, Days, NaiveDate};

use crate::api::ApiClient;
use crate::models::DailyPrayer;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Month and day of the summer retreat the countdown points at
const RETREAT_MONTH: u32 = 8;
const RETREAT_DAY: u32 = 1;

/// Countdown label for the retreat banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The wrap-around case a full year out renders as the day itself
    Day,
    DaysLeft(i64),
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Day => write!(f, "Day"),
            Countdown::DaysLeft(days) => write!(f, "D-{}", days),
        }
    }
}

/// Days until the next retreat date on or after `base`
pub fn retreat_countdown(base: NaiveDate) -> Countdown {
    let this_year = NaiveDate::from_ymd_opt(base.year(), RETREAT_MONTH, RETREAT_DAY);
    let next_year = NaiveDate::from_ymd_opt(base.year() + 1, RETREAT_MONTH, RETREAT_DAY);
    let target = match (this_year, next_year) {
        (Some(target), _) if base <= target => target,
        (_, Some(target)) => target,
        // Aug 1 exists in every year; chrono only fails on out-of-range years.
        _ => return Countdown::DaysLeft(0),
    };
    let days = (target - base).num_days();
    if days == 365 {
        Countdown::Day
    } else {
        Countdown::DaysLeft(days)
    }
}

#[derive(Debug, Clone)]
pub struct PrayerController {
    api: ApiClient,
    selected_date: NaiveDate,
    card: Option<DailyPrayer>,
    error: Option<String>,
}

impl PrayerController {
    pub fn new(api: ApiClient, date: NaiveDate) -> Self {
        Self {
            api,
            selected_date: date,
            card: None,
            error: None,
        }
    }

    /// Fetch the card for the selected date; a failed fetch clears the card
    /// rather than showing a stale day
    pub async fn load(&mut self) -> Result<()> {
        match self.api.daily_prayer(self.selected_date).await {
            Ok(card) => {
                self.card = Some(card);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                logging::log_api_error("daily_prayer", &e.to_string(), None);
                self.card = None;
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.selected_date = date;
        self.load().await
    }

    pub async fn previous_day(&mut self) -> Result<()> {
        if let Some(date) = self.selected_date.checked_sub_days(Days::new(1)) {
            self.selected_date = date;
        }
        self.load().await
    }

    pub async fn next_day(&mut self) -> Result<()> {
        if let Some(date) = self.selected_date.checked_add_days(Days::new(1)) {
            self.selected_date = date;
        }
        self.load().await
    }

    pub fn countdown(&self) -> Countdown {
        retreat_countdown(self.selected_date)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn card(&self) -> Option<&DailyPrayer> {
        self.card.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_countdown_before_the_retreat() {
        assert_eq!(retreat_countdown(date(2025, 7, 22)), Countdown::DaysLeft(10));
    }

    #[test]
    fn test_countdown_on_the_day() {
        assert_eq!(retreat_countdown(date(2025, 8, 1)), Countdown::DaysLeft(0));
    }

    #[test]
    fn test_countdown_wraps_to_next_year() {
        // Aug 2 2025 to Aug 1 2026 is 364 days.
        assert_eq!(retreat_countdown(date(2025, 8, 2)), Countdown::DaysLeft(364));
    }

    #[test]
    fn test_full_leap_year_gap_renders_as_day() {
        // Aug 2 2023 to Aug 1 2024 spans a leap day, exactly 365.
        assert_eq!(retreat_countdown(date(2023, 8, 2)), Countdown::Day);
        assert_eq!(Countdown::Day.to_string(), "Day");
        assert_eq!(Countdown::DaysLeft(10).to_string(), "D-10");
    }
}
