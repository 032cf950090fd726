//! Source of the current instant and of the local calendar date.
//!
//! Every "now" and "today" used by the engines comes through a [`Clock`],
//! so tests can pin the date and the process timezone never leaks into the
//! calculations.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};

/// Provides the current time.
pub trait Clock {
    /// Current instant, used for `createdAt`-style timestamps.
    fn now(&self) -> DateTime<Utc>;

    /// Current wall-clock time in the user's timezone.
    fn local_now(&self) -> NaiveDateTime;

    /// Current calendar date in the user's timezone.
    fn today(&self) -> NaiveDate {
        self.local_now().date()
    }

    /// `now()` truncated to the millisecond precision stored on disk.
    fn timestamp(&self) -> DateTime<Utc> {
        let now = self.now();
        DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
    }
}

/// Clock backed by the system time and the process local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at one instant, observed from a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Freeze at `instant`, observed in UTC.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            offset: Utc.fix(),
        }
    }

    /// Freeze at noon UTC of `date`.
    pub fn on_date(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
        Self::new(date.and_time(noon).and_utc())
    }

    /// Observe the frozen instant from another UTC offset.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn local_now(&self) -> NaiveDateTime {
        self.instant.with_timezone(&self.offset).naive_local()
    }
}
