//! Daily prayer-campaign endpoint

use chrono::NaiveDate;

use super::client::ApiClient;
use crate::models::DailyPrayer;
use crate::utils::errors::Result;
use crate::utils::time::format_date;

impl ApiClient {
    /// Prayer document for one campaign day
    pub async fn daily_prayer(&self, date: NaiveDate) -> Result<DailyPrayer> {
        self.get_json(&format!("pray/{}", format_date(date))).await
    }
}
