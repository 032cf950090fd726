//! Plain data records persisted in the state document.

mod goal;
mod habit;
mod record;
mod settings;
mod state;

pub use goal::{suggested_goals, AchievedGoal, Goal, SuggestedGoal};
pub use habit::{Frequency, Habit, HabitType};
pub use record::DailyRecord;
pub use settings::{AppSettings, ReminderTime, SettingsPatch, Theme, DEFAULT_REMINDER_TIME};
pub use state::{AppState, CheckIn};
