use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Outcome of one day. At most one record exists per `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub is_successful: bool,
    /// Accrual credited for the day; zero for a relapse.
    pub amount_saved: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, is_successful: bool, amount_saved: f64, clock: &impl Clock) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            is_successful,
            amount_saved,
            created_at: clock.timestamp(),
        }
    }
}
