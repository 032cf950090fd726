//! Everything the main screen shows, derived in one pass from the state.

use serde::Serialize;

use crate::achievements::{achievement_statuses, next_achievement, AchievementDef, AchievementStatus};
use crate::clock::Clock;
use crate::ledger::{self, Countdown};
use crate::model::{AppState, DailyRecord, Goal};
use crate::savings::daily_savings;
use crate::streak::current_streak;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal: Goal,
    pub progress_percent: f64,
    /// 999 means unreachable at the current accrual rate.
    pub days_remaining: u32,
    pub countdown: Countdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub habit_name: String,
    pub daily_savings: f64,
    pub total_saved: f64,
    pub successful_days: u32,
    /// Whole percent of recorded days that were successful.
    pub success_rate: u32,
    pub streak: u32,
    pub today: Option<DailyRecord>,
    pub goal: Option<GoalProgress>,
    pub next_achievement: Option<&'static AchievementDef>,
    pub unlocked_count: usize,
    pub achievements: Vec<AchievementStatus>,
}

impl Dashboard {
    /// Snapshot for `state` at the clock's current time. `None` before a habit exists.
    pub fn build(state: &AppState, clock: &impl Clock) -> Option<Self> {
        let habit = state.habit.as_ref()?;
        let today = clock.today();
        let records = &state.records;

        let daily = daily_savings(habit);
        let total = ledger::total_saved(records);
        let goal = state.goal.as_ref().map(|goal| {
            let days_remaining = ledger::days_remaining(goal, total, daily);
            GoalProgress {
                goal: goal.clone(),
                progress_percent: ledger::progress_percent(goal, total),
                days_remaining,
                countdown: ledger::countdown(days_remaining, clock.local_now()),
            }
        });
        let achievements = achievement_statuses(habit.habit_type, records, today);

        Some(Self {
            habit_name: habit.display_name().to_string(),
            daily_savings: daily,
            total_saved: total,
            successful_days: ledger::successful_days(records),
            success_rate: ledger::success_rate(records),
            streak: current_streak(records, today),
            today: ledger::today_record(records, today).cloned(),
            goal,
            next_achievement: next_achievement(habit.habit_type, records, today),
            unlocked_count: achievements.iter().filter(|a| a.unlocked).count(),
            achievements,
        })
    }
}

/// Congratulation text for sharing a reached goal.
pub fn share_message(goal: &Goal, total_saved: f64, currency: &str) -> String {
    format!(
        "🎉 I reached my goal with HabitHero!\n✅ {}\n💰 Saved: {:.0}{}\nGive it a try!",
        goal.name, total_saved, currency
    )
}
