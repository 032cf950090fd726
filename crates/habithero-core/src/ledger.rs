//! Aggregates over the record list: totals, goal distance, today's record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{DailyRecord, Goal};

/// Days-remaining value returned when nothing accrues per day.
///
/// This is a sentinel meaning "unreachable", not a day count.
pub const UNREACHABLE_DAYS: u32 = 999;

/// Sum of `amount_saved` over successful records.
///
/// Unsuccessful records never contribute, whatever amount they carry.
/// An empty ledger totals positive zero.
pub fn total_saved(records: &[DailyRecord]) -> f64 {
    records
        .iter()
        .filter(|r| r.is_successful)
        .fold(0.0, |acc, r| acc + r.amount_saved)
}

/// Lifetime count of successful days.
pub fn successful_days(records: &[DailyRecord]) -> u32 {
    records.iter().filter(|r| r.is_successful).count() as u32
}

/// Whole days of accrual still needed to reach `goal`.
///
/// Returns 0 once the target is met and [`UNREACHABLE_DAYS`] when
/// `daily_savings` is not positive.
pub fn days_remaining(goal: &Goal, total_saved: f64, daily_savings: f64) -> u32 {
    let remaining = goal.target_amount - total_saved;
    if remaining <= 0.0 {
        return 0;
    }
    if daily_savings <= 0.0 {
        return UNREACHABLE_DAYS;
    }
    // Float-to-int `as` saturates and maps NaN to 0.
    (remaining / daily_savings).ceil() as u32
}

/// The record dated `today`, if any.
pub fn today_record(records: &[DailyRecord], today: NaiveDate) -> Option<&DailyRecord> {
    records.iter().find(|r| r.date == today)
}

/// Share of the goal already saved, capped at 100.
pub fn progress_percent(goal: &Goal, total_saved: f64) -> f64 {
    (total_saved / goal.target_amount * 100.0).min(100.0)
}

/// Share of recorded days that were successful, rounded to a whole percent.
pub fn success_rate(records: &[DailyRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    (f64::from(successful_days(records)) / records.len() as f64 * 100.0).round() as u32
}

/// Time left until a goal, as shown by a live countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Countdown for `days_remaining` days, where the current day ends at local midnight.
///
/// The last day is the rest of today; every further day is a full day.
pub fn countdown(days_remaining: u32, local_now: NaiveDateTime) -> Countdown {
    let end_of_day = local_now.date().and_time(
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default(),
    );
    let to_midnight = (end_of_day - local_now).num_milliseconds();
    let total = (i64::from(days_remaining) - 1) * DAY_MS + to_midnight;
    if total <= 0 {
        return Countdown::default();
    }

    Countdown {
        days: (total / DAY_MS) as u32,
        hours: ((total % DAY_MS) / HOUR_MS) as u32,
        minutes: ((total % HOUR_MS) / MINUTE_MS) as u32,
    }
}
