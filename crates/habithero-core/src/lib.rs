//! # HabitHero Core Library
//!
//! This library provides the calculation engine behind HabitHero, a tracker
//! that turns the money a user no longer spends on a bad habit into savings
//! toward a personal goal. The CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Model**: habit, goal, daily records and settings, plus the
//!   ownership-based state transitions on [`AppState`]
//! - **Calculations**: daily accrual, ledger totals, streaks and
//!   achievements, all pure functions of the record list and a date
//! - **Storage**: the state document as JSON with migration-on-load, and a
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`AppState`]: The whole persisted state and its transitions
//! - [`Dashboard`]: Everything the main screen shows, derived in one pass
//! - [`StateStore`]: Atomic JSON persistence
//! - [`Clock`]: Injected source of "now" and "today"

pub mod achievements;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod history;
pub mod ledger;
pub mod model;
pub mod notify;
pub mod savings;
pub mod storage;
pub mod streak;

pub use achievements::{AchievementDef, AchievementStatus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::Dashboard;
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use model::{
    AchievedGoal, AppSettings, AppState, CheckIn, DailyRecord, Frequency, Goal, Habit, HabitType,
    ReminderTime, SettingsPatch, Theme,
};
pub use notify::{Cue, CuePlayer, Notifier, Reminder};
pub use savings::daily_savings;
pub use storage::{Config, StateStore};
pub use streak::current_streak;
