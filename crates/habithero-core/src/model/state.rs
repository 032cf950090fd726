//! The aggregate root and the user intents that replace it.
//!
//! Transitions take the current [`AppState`] by value and return its
//! replacement; nothing is mutated behind the caller's back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AchievedGoal, AppSettings, DailyRecord, Goal, Habit, SettingsPatch};
use crate::achievements::{newly_unlocked, unlocked_achievements};
use crate::clock::Clock;
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::ledger::{successful_days, total_saved};
use crate::savings::daily_savings;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Absent until onboarding completes or after the habit is deleted.
    #[serde(default)]
    pub habit: Option<Habit>,
    /// Absent between archiving a goal and picking the next one.
    #[serde(default)]
    pub goal: Option<Goal>,
    /// Append-only history of reached goals.
    #[serde(default)]
    pub achieved_goals: Vec<AchievedGoal>,
    /// At most one record per date.
    #[serde(default)]
    pub records: Vec<DailyRecord>,
    #[serde(default)]
    pub settings: AppSettings,
}

/// Result of a check-in: the replacement state and what happened.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub state: AppState,
    pub record: DailyRecord,
    pub events: Vec<Event>,
}

impl AppState {
    /// Finish onboarding with the chosen habit and goal.
    pub fn complete_onboarding(self, habit: Habit, goal: Goal) -> Self {
        debug!(habit_type = ?habit.habit_type, goal = %goal.name, "onboarding completed");
        let settings = self.settings.apply(SettingsPatch::OnboardingCompleted(true));
        Self {
            habit: Some(habit),
            goal: Some(goal),
            settings,
            ..self
        }
    }

    /// Record today's outcome for the active habit.
    ///
    /// A success is credited with the habit's daily accrual, a relapse with
    /// nothing. Any record already dated today is replaced.
    pub fn check_in(self, successful: bool, clock: &impl Clock) -> Result<CheckIn> {
        let habit = self.habit.as_ref().ok_or(CoreError::NoActiveHabit)?;
        let habit_type = habit.habit_type;
        let today = clock.today();
        let at = clock.timestamp();

        let amount = if successful { daily_savings(habit) } else { 0.0 };
        let record = DailyRecord::new(today, successful, amount, clock);

        let total_before = total_saved(&self.records);
        let unlocked_before = unlocked_achievements(habit_type, &self.records, today);

        let mut records: Vec<DailyRecord> =
            self.records.into_iter().filter(|r| r.date != today).collect();
        records.push(record.clone());
        let state = Self { records, ..self };

        let mut events = Vec::new();
        if successful {
            events.push(Event::CheckedIn {
                date: today,
                amount_saved: amount,
                at,
            });
        } else {
            events.push(Event::Relapsed { date: today, at });
        }

        let total_after = total_saved(&state.records);
        if let Some(goal) = &state.goal {
            if total_before < goal.target_amount && total_after >= goal.target_amount {
                events.push(Event::GoalReached {
                    goal_id: goal.id.clone(),
                    goal_name: goal.name.clone(),
                    total_saved: total_after,
                    at,
                });
            }
        }

        let unlocked_after = unlocked_achievements(habit_type, &state.records, today);
        for achievement in newly_unlocked(&unlocked_before, &unlocked_after) {
            events.push(Event::AchievementUnlocked {
                achievement_id: achievement.id.to_string(),
                title: achievement.title.to_string(),
                at,
            });
        }

        debug!(%today, successful, amount, events = events.len(), "check-in recorded");
        Ok(CheckIn {
            state,
            record,
            events,
        })
    }

    /// Move the active goal into the achieved history and start over.
    ///
    /// Records are cleared so savings toward the next goal start at zero.
    /// Fails with [`CoreError::GoalNotReached`] while the total is below the
    /// target.
    pub fn archive_goal(self, clock: &impl Clock) -> Result<(Self, Event)> {
        let goal = self.goal.ok_or(CoreError::NoActiveGoal)?;
        let saved = total_saved(&self.records);
        if saved < goal.target_amount {
            return Err(CoreError::GoalNotReached {
                saved,
                target: goal.target_amount,
            });
        }
        let achieved = AchievedGoal {
            achieved_at: clock.timestamp(),
            days_to_achieve: successful_days(&self.records),
            amount_saved: saved,
            goal,
        };
        let event = Event::GoalArchived {
            goal_id: achieved.goal.id.clone(),
            days_to_achieve: achieved.days_to_achieve,
            amount_saved: achieved.amount_saved,
            at: achieved.achieved_at,
        };
        debug!(goal = %achieved.goal.name, days = achieved.days_to_achieve, "goal archived");

        let mut achieved_goals = self.achieved_goals;
        achieved_goals.push(achieved);
        Ok((
            Self {
                goal: None,
                records: Vec::new(),
                achieved_goals,
                ..self
            },
            event,
        ))
    }

    /// Replace or delete the habit.
    pub fn with_habit(self, habit: Option<Habit>) -> Self {
        Self { habit, ..self }
    }

    /// Replace or clear the goal.
    pub fn with_goal(self, goal: Option<Goal>) -> Self {
        Self { goal, ..self }
    }

    pub fn apply_settings(self, patch: SettingsPatch) -> Self {
        let settings = self.settings.apply(patch);
        Self { settings, ..self }
    }

    /// Forget everything and return to first launch.
    pub fn reset(self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::{Frequency, HabitType, Theme};
    use chrono::{Duration, NaiveDate};

    fn day(n: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + Duration::days(n)
    }

    fn onboarded(target: f64) -> AppState {
        let clock = FixedClock::on_date(day(0));
        let habit = Habit::new(HabitType::Smoking, 100.0, Frequency::Daily, &clock);
        let goal = Goal::new("Headphones", target, "", &clock);
        AppState::default().complete_onboarding(habit, goal)
    }

    fn check_in_days(mut state: AppState, days: std::ops::Range<i64>) -> AppState {
        for n in days {
            state = state.check_in(true, &FixedClock::on_date(day(n))).unwrap().state;
        }
        state
    }

    #[test]
    fn onboarding_sets_habit_goal_and_flag() {
        let state = onboarded(1000.0);
        assert!(state.habit.is_some());
        assert!(state.goal.is_some());
        assert!(state.settings.onboarding_completed);
    }

    #[test]
    fn check_in_without_habit_is_an_error() {
        let result = AppState::default().check_in(true, &FixedClock::on_date(day(0)));
        assert!(matches!(result, Err(CoreError::NoActiveHabit)));
    }

    #[test]
    fn success_credits_daily_savings() {
        let outcome = onboarded(1000.0).check_in(true, &FixedClock::on_date(day(0))).unwrap();
        assert_eq!(outcome.record.amount_saved, 100.0);
        assert!(outcome.record.is_successful);
        assert_eq!(outcome.state.records.len(), 1);
        assert!(matches!(outcome.events[0], Event::CheckedIn { amount_saved, .. } if amount_saved == 100.0));
    }

    #[test]
    fn relapse_credits_nothing() {
        let outcome = onboarded(1000.0).check_in(false, &FixedClock::on_date(day(0))).unwrap();
        assert_eq!(outcome.record.amount_saved, 0.0);
        assert!(matches!(
            outcome.events.as_slice(),
            [Event::Relapsed { date, .. }] if *date == day(0)
        ));
    }

    #[test]
    fn second_check_in_same_day_replaces_record() {
        let clock = FixedClock::on_date(day(0));
        let state = onboarded(1000.0).check_in(true, &clock).unwrap().state;
        let state = state.check_in(false, &clock).unwrap().state;
        assert_eq!(state.records.len(), 1);
        assert!(!state.records[0].is_successful);
        assert_eq!(total_saved(&state.records), 0.0);
    }

    #[test]
    fn first_success_unlocks_first_achievement() {
        let outcome = onboarded(1000.0).check_in(true, &FixedClock::on_date(day(0))).unwrap();
        assert!(outcome.events.iter().any(|e| matches!(
            e,
            Event::AchievementUnlocked { achievement_id, .. } if achievement_id == "first_day"
        )));
    }

    #[test]
    fn goal_reached_fires_once_when_crossing_target() {
        let state = check_in_days(onboarded(300.0), 0..2);
        let crossing = state.check_in(true, &FixedClock::on_date(day(2))).unwrap();
        assert!(crossing.events.iter().any(|e| matches!(e, Event::GoalReached { .. })));

        let after = crossing.state.check_in(true, &FixedClock::on_date(day(3))).unwrap();
        assert!(!after.events.iter().any(|e| matches!(e, Event::GoalReached { .. })));
    }

    #[test]
    fn archive_goal_moves_goal_to_history_and_clears_records() {
        let state = check_in_days(onboarded(300.0), 0..3);
        let (archived, event) = state.archive_goal(&FixedClock::on_date(day(3))).unwrap();
        assert!(archived.goal.is_none());
        assert!(archived.records.is_empty());
        assert_eq!(archived.achieved_goals.len(), 1);
        let achieved = &archived.achieved_goals[0];
        assert_eq!(achieved.days_to_achieve, 3);
        assert_eq!(achieved.amount_saved, 300.0);
        assert_eq!(achieved.goal.name, "Headphones");
        assert!(matches!(event, Event::GoalArchived { days_to_achieve: 3, .. }));
    }

    #[test]
    fn archive_before_target_is_an_error() {
        let state = check_in_days(onboarded(300.0), 0..2);
        match state.archive_goal(&FixedClock::on_date(day(2))) {
            Err(CoreError::GoalNotReached { saved, target }) => {
                assert_eq!(saved, 200.0);
                assert_eq!(target, 300.0);
            }
            other => panic!("expected GoalNotReached, got {other:?}"),
        }

        let fresh = onboarded(300.0);
        assert!(matches!(
            fresh.archive_goal(&FixedClock::on_date(day(0))),
            Err(CoreError::GoalNotReached { .. })
        ));
    }

    #[test]
    fn archive_without_goal_is_an_error() {
        let state = onboarded(300.0).with_goal(None);
        assert!(matches!(
            state.archive_goal(&FixedClock::on_date(day(0))),
            Err(CoreError::NoActiveGoal)
        ));
    }

    #[test]
    fn deleting_habit_keeps_records() {
        let state = check_in_days(onboarded(300.0), 0..2).with_habit(None);
        assert!(state.habit.is_none());
        assert_eq!(state.records.len(), 2);
    }

    #[test]
    fn settings_patch_and_reset() {
        let state = onboarded(300.0).apply_settings(SettingsPatch::Theme(Theme::Dark));
        assert_eq!(state.settings.theme, Theme::Dark);
        assert_eq!(state.reset(), AppState::default());
    }
}
