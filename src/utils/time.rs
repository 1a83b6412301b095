//! Fixed-offset date helpers
//!
//! Screens that key on "today" use the congregation's regional offset, not the
//! host's local zone, so a kiosk left in another timezone still records the
//! right service date.

use chrono::{FixedOffset, NaiveDate, Utc};

/// Current calendar date at the given UTC offset (hours)
pub fn today_at_offset(offset_hours: i32) -> NaiveDate {
    let offset = FixedOffset::east_opt(offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    Utc::now().with_timezone(&offset).date_naive()
}

/// Format a date the way the attendance API expects it
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
