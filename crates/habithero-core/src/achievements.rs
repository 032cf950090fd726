//! Milestones unlocked by the check-in history.
//!
//! Every habit type gets the three common achievements plus two of its own.
//! Nothing here is stored: the unlocked set is recomputed from the records
//! on each call, and callers diff two results (see [`newly_unlocked`]) to
//! notice a milestone being crossed.

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::successful_days;
use crate::model::{DailyRecord, HabitType};
use crate::streak::current_streak;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Shared by every habit type.
    Common,
    /// Worded for one habit type.
    Specific,
}

/// Counter an achievement compares against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockRule {
    /// Lifetime number of successful days.
    SuccessfulDays,
    /// Current consecutive-success streak.
    CurrentStreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub category: AchievementCategory,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub rule: UnlockRule,
}

impl AchievementDef {
    /// Value shown next to the progress bar.
    pub fn progress(&self, records: &[DailyRecord], today: NaiveDate) -> u32 {
        match self.rule {
            UnlockRule::CurrentStreak => current_streak(records, today),
            UnlockRule::SuccessfulDays => successful_days(records),
        }
    }

    pub fn is_unlocked(&self, records: &[DailyRecord], today: NaiveDate) -> bool {
        self.progress(records, today) >= self.target
    }
}

const fn common(
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    target: u32,
    rule: UnlockRule,
) -> AchievementDef {
    AchievementDef {
        id,
        category: AchievementCategory::Common,
        icon,
        title,
        description,
        target,
        rule,
    }
}

const fn specific(
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    target: u32,
) -> AchievementDef {
    AchievementDef {
        id,
        category: AchievementCategory::Specific,
        icon,
        title,
        description,
        target,
        rule: UnlockRule::SuccessfulDays,
    }
}

static COMMON: [AchievementDef; 3] = [
    common("first_day", "🌱", "First Step", "First day without the habit", 1, UnlockRule::SuccessfulDays),
    common("week_streak", "🔥", "Week of Strength", "7 days in a row", 7, UnlockRule::CurrentStreak),
    common("month_warrior", "💪", "Month of Strength", "30 days of success", 30, UnlockRule::SuccessfulDays),
];

static SMOKING: [AchievementDef; 2] = [
    specific("clean_lungs", "🫁", "Clean Lungs", "3 days without cigarettes", 3),
    specific("breath_master", "🌬️", "Fresh Breath", "14 days smoke-free", 14),
];

static ALCOHOL: [AchievementDef; 2] = [
    specific("clear_mind", "🧠", "Clear Mind", "3 days without alcohol", 3),
    specific("sober_king", "👑", "King of Sobriety", "14 days without alcohol", 14),
];

static COFFEE: [AchievementDef; 2] = [
    specific("energy_natural", "⚡", "Your Own Energy", "3 days without coffee", 3),
    specific("caffeine_free", "🍃", "Caffeine Free", "14 days without coffee", 14),
];

static ENERGY_DRINKS: [AchievementDef; 2] = [
    specific("natural_energy", "⚡", "Natural Energy", "3 days without energy drinks", 3),
    specific("energy_master", "🔋", "Energy Master", "14 days without energy drinks", 14),
];

static FAST_FOOD: [AchievementDef; 2] = [
    specific("healthy_eater", "🥗", "Healthy Eater", "3 days without fast food", 3),
    specific("nutrition_hero", "🍏", "Nutrition Hero", "14 days without fast food", 14),
];

static OTHER: [AchievementDef; 2] = [
    specific("discipline_starter", "🎯", "Discipline Starter", "3 days without the habit", 3),
    specific("willpower_champion", "🏆", "Willpower Champion", "14 days without the habit", 14),
];

/// Achievements worded for `habit_type`.
fn specific_catalog(habit_type: HabitType) -> &'static [AchievementDef] {
    match habit_type {
        HabitType::Smoking => &SMOKING,
        HabitType::Alcohol => &ALCOHOL,
        HabitType::Coffee => &COFFEE,
        HabitType::EnergyDrinks => &ENERGY_DRINKS,
        HabitType::FastFood => &FAST_FOOD,
        HabitType::Other => &OTHER,
    }
}

/// All achievements for a habit type in progression order (ascending target).
pub fn achievements_for_habit(habit_type: HabitType) -> Vec<&'static AchievementDef> {
    let mut all: Vec<&'static AchievementDef> = COMMON
        .iter()
        .chain(specific_catalog(habit_type))
        .collect();
    all.sort_by_key(|a| a.target);
    all
}

/// Achievements currently unlocked, in progression order.
pub fn unlocked_achievements(
    habit_type: HabitType,
    records: &[DailyRecord],
    today: NaiveDate,
) -> Vec<&'static AchievementDef> {
    achievements_for_habit(habit_type)
        .into_iter()
        .filter(|a| a.is_unlocked(records, today))
        .collect()
}

/// First achievement in progression order that is still locked.
pub fn next_achievement(
    habit_type: HabitType,
    records: &[DailyRecord],
    today: NaiveDate,
) -> Option<&'static AchievementDef> {
    achievements_for_habit(habit_type)
        .into_iter()
        .find(|a| !a.is_unlocked(records, today))
}

/// Progress of one achievement: the current streak for the streak-based
/// achievement, the lifetime successful-day count for every other one.
pub fn achievement_progress(
    achievement: &AchievementDef,
    records: &[DailyRecord],
    today: NaiveDate,
) -> u32 {
    achievement.progress(records, today)
}

/// An achievement together with its state for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementStatus {
    #[serde(flatten)]
    pub achievement: &'static AchievementDef,
    pub unlocked: bool,
    pub progress: u32,
}

pub fn achievement_statuses(
    habit_type: HabitType,
    records: &[DailyRecord],
    today: NaiveDate,
) -> Vec<AchievementStatus> {
    achievements_for_habit(habit_type)
        .into_iter()
        .map(|achievement| {
            let progress = achievement.progress(records, today);
            AchievementStatus {
                achievement,
                unlocked: progress >= achievement.target,
                progress,
            }
        })
        .collect()
}

/// Achievements present in `after` but not in `before`.
pub fn newly_unlocked(
    before: &[&'static AchievementDef],
    after: &[&'static AchievementDef],
) -> Vec<&'static AchievementDef> {
    after
        .iter()
        .filter(|a| !before.iter().any(|b| b.id == a.id))
        .copied()
        .collect()
}
