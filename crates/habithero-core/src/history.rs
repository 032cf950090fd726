//! Projections of the record list over calendar time.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::model::DailyRecord;

/// One day on the savings growth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsPoint {
    pub date: NaiveDate,
    /// Short `D.MM` label.
    pub label: String,
    /// Savings accumulated from the first day of the window through `date`.
    pub total: f64,
}

/// Longest chart window, in days.
pub const MAX_HISTORY_DAYS: u32 = 3660;

/// Running savings over the last `days` days, oldest first, ending today.
///
/// `days` is capped at [`MAX_HISTORY_DAYS`]. Days before the earliest
/// representable date are left out.
pub fn savings_series(records: &[DailyRecord], today: NaiveDate, days: u32) -> Vec<SavingsPoint> {
    let days = days.min(MAX_HISTORY_DAYS);
    let mut accumulated = 0.0;
    (0..i64::from(days))
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(|date| {
            if let Some(record) = records.iter().find(|r| r.date == date && r.is_successful) {
                accumulated += record.amount_saved;
            }
            SavingsPoint {
                date,
                label: format!("{}.{:02}", date.day(), date.month()),
                total: accumulated,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Success,
    Relapse,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub is_today: bool,
}

/// The current month laid out for a Monday-first calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 (Monday = 0).
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

pub fn month_calendar(records: &[DailyRecord], today: NaiveDate) -> MonthCalendar {
    let first = today.with_day(1).unwrap_or(today);
    let days = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .map(|date| {
            let status = match records.iter().find(|r| r.date == date) {
                Some(r) if r.is_successful => DayStatus::Success,
                Some(_) => DayStatus::Relapse,
                None => DayStatus::Empty,
            };
            CalendarDay {
                date,
                status,
                is_today: date == today,
            }
        })
        .collect();

    MonthCalendar {
        year: first.year(),
        month: first.month(),
        leading_blanks: first.weekday().num_days_from_monday(),
        days,
    }
}
