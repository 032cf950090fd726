//! Reminder planning and the side-effect seams a front end implements.
//!
//! The core only decides *what* to notify and *which* cue fits an event.
//! Delivery lives behind [`Notifier`] and [`CuePlayer`], whose handles are
//! built once by the front end and passed by reference where needed.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::model::{AppSettings, ReminderTime};

pub const REMINDER_TITLE: &str = "HabitHero reminder";
pub const REMINDER_BODY: &str = "Don't forget to log today's progress!";

/// Short feedback sound or signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Success,
    Fail,
    Achievement,
    Victory,
}

/// Plays cues. Failures are the player's business; the core never waits on it.
pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

/// A notification ready to be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reminder {
    pub title: String,
    pub body: String,
    /// Fire after this long from now.
    #[serde(serialize_with = "serialize_seconds")]
    pub delay: Duration,
}

fn serialize_seconds<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_seconds())
}

/// Delivers notifications.
pub trait Notifier {
    /// Ask for permission to notify. Returns whether it was granted.
    fn request_permission(&mut self) -> bool;

    /// Fire-and-forget scheduling.
    fn schedule(&mut self, reminder: &Reminder);
}

/// Time until the next occurrence of `time`: later today, or tomorrow when
/// today's slot has already passed.
pub fn next_reminder_delay(time: ReminderTime, local_now: NaiveDateTime) -> Duration {
    let mut target = local_now.date().and_time(time.as_time());
    if target <= local_now {
        target += Duration::days(1);
    }
    target - local_now
}

/// The next daily reminder, or `None` when daily reminders are off.
pub fn plan_daily_reminder(settings: &AppSettings, clock: &impl Clock) -> Option<Reminder> {
    if !settings.daily_reminder {
        return None;
    }
    Some(Reminder {
        title: REMINDER_TITLE.to_string(),
        body: REMINDER_BODY.to_string(),
        delay: next_reminder_delay(settings.daily_reminder_time, clock.local_now()),
    })
}

/// Ask for permission and schedule `reminder` if granted.
pub fn dispatch_reminder(notifier: &mut impl Notifier, reminder: &Reminder) -> bool {
    if !notifier.request_permission() {
        return false;
    }
    notifier.schedule(reminder);
    true
}
