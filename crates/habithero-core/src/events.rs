//! Events emitted by state transitions.
//!
//! Serialized like the state document: camelCase fields and epoch-ms `at`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::notify::Cue;

/// Every user-visible state change produces an Event.
/// Front ends use them to fire one-shot effects (sounds, banners).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    CheckedIn {
        date: NaiveDate,
        amount_saved: f64,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Relapsed {
        date: NaiveDate,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        at: DateTime<Utc>,
    },
    /// The check-in that made the total cross the goal target.
    #[serde(rename_all = "camelCase")]
    GoalReached {
        goal_id: String,
        goal_name: String,
        total_saved: f64,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    AchievementUnlocked {
        achievement_id: String,
        title: String,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    GoalArchived {
        goal_id: String,
        days_to_achieve: u32,
        amount_saved: f64,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Feedback cue a front end should play for this event, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Event::CheckedIn { .. } => Some(Cue::Success),
            Event::Relapsed { .. } => Some(Cue::Fail),
            Event::GoalReached { .. } => Some(Cue::Victory),
            Event::AchievementUnlocked { .. } => Some(Cue::Achievement),
            Event::GoalArchived { .. } => None,
        }
    }
}

/// Cues for a batch of events from one transition, in event order.
///
/// Victory replaces the success cue of the check-in that reached the goal.
pub fn cues(events: &[Event]) -> Vec<Cue> {
    let victory = events.iter().any(|e| matches!(e, Event::GoalReached { .. }));
    events
        .iter()
        .filter_map(Event::cue)
        .filter(|cue| !(victory && *cue == Cue::Success))
        .collect()
}
