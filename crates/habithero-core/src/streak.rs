//! Consecutive-success streak ending today or yesterday.
//!
//! Records are walked newest-first by creation time while a cursor date
//! steps backward one day per counted success. When today has no record yet
//! the cursor starts at yesterday, so an unresolved day never breaks the
//! streak. A relapse at the cursor and a missing day both end the walk:
//! the only thing that extends a streak is a successful record dated exactly
//! at the cursor.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::model::DailyRecord;

/// Current streak length in days.
pub fn current_streak(records: &[DailyRecord], today: NaiveDate) -> u32 {
    if records.is_empty() {
        return 0;
    }

    let mut sorted: Vec<&DailyRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let has_today = records.iter().any(|r| r.date == today);
    let mut cursor = if has_today {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    for record in sorted {
        match record.date.cmp(&cursor) {
            // Newer than the cursor: a stale or superseded entry.
            Ordering::Greater => continue,
            _ if continues_streak(record, cursor) => {
                streak += 1;
                match cursor.pred_opt() {
                    Some(previous) => cursor = previous,
                    None => break,
                }
            }
            _ => break,
        }
    }
    streak
}

fn continues_streak(record: &DailyRecord, cursor: NaiveDate) -> bool {
    record.date == cursor && record.is_successful
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    /// A record created at noon of its own date.
    fn record(date: NaiveDate, ok: bool) -> DailyRecord {
        DailyRecord::new(date, ok, if ok { 100.0 } else { 0.0 }, &FixedClock::on_date(date))
    }

    fn week_of_successes() -> Vec<DailyRecord> {
        (0..7).rev().map(|n| record(days_ago(n), true)).collect()
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(current_streak(&[], today()), 0);
    }

    #[test]
    fn seven_consecutive_days_ending_today() {
        assert_eq!(current_streak(&week_of_successes(), today()), 7);
    }

    #[test]
    fn relapse_on_third_most_recent_day_caps_streak() {
        let mut records = week_of_successes();
        records.retain(|r| r.date != days_ago(2));
        records.push(DailyRecord::new(days_ago(2), false, 0.0, &FixedClock::on_date(days_ago(2))));
        assert_eq!(current_streak(&records, today()), 2);
    }

    #[test]
    fn relapse_three_days_ago_keeps_three_days() {
        let mut records = week_of_successes();
        records.retain(|r| r.date != days_ago(3));
        records.push(record(days_ago(3), false));
        assert_eq!(current_streak(&records, today()), 3);
    }

    #[test]
    fn unresolved_today_does_not_break_streak() {
        let records = vec![record(days_ago(2), true), record(days_ago(1), true)];
        assert_eq!(current_streak(&records, today()), 2);
    }

    #[test]
    fn relapse_today_is_zero() {
        let records = vec![record(days_ago(1), true), record(today(), false)];
        assert_eq!(current_streak(&records, today()), 0);
    }

    #[test]
    fn gap_ends_streak() {
        let records = vec![
            record(days_ago(5), true),
            record(days_ago(4), true),
            // days_ago(3) missing
            record(days_ago(2), true),
            record(days_ago(1), true),
            record(today(), true),
        ];
        assert_eq!(current_streak(&records, today()), 3);
    }

    #[test]
    fn last_record_two_days_ago_is_no_streak() {
        let records = vec![record(days_ago(3), true), record(days_ago(2), true)];
        assert_eq!(current_streak(&records, today()), 0);
    }

    #[test]
    fn future_dated_records_are_skipped() {
        let mut records = week_of_successes();
        records.push(record(today() + Duration::days(1), true));
        assert_eq!(current_streak(&records, today()), 7);
    }

    #[test]
    fn walk_follows_creation_order() {
        // Yesterday's record was entered after today's; it is visited first,
        // lies before the cursor (today) and so ends the walk.
        let late = FixedClock::on_date(today() + Duration::days(1));
        let records = vec![
            record(days_ago(2), true),
            record(today(), true),
            DailyRecord::new(days_ago(1), true, 100.0, &late),
        ];
        assert_eq!(current_streak(&records, today()), 0);
    }
}
