use clap::{Args, Subcommand};
use habithero_core::{
    daily_savings, Clock, CoreError, Frequency, Habit, HabitType, SystemClock, ValidationError,
};
use serde_json::json;
use tracing::debug;

use crate::common::{open_state, print_json, CmdResult};

/// Habit fields shared by `init` and `habit set`.
#[derive(Args)]
pub struct HabitArgs {
    /// smoking, alcohol, coffee, energy-drinks, fast-food or other
    #[arg(long)]
    pub habit_type: HabitType,
    /// Money spent per occurrence
    #[arg(long)]
    pub cost: f64,
    /// daily, weekly, multiple-daily or multiple-weekly
    #[arg(long)]
    pub frequency: Frequency,
    /// Occurrences per day, for multiple-daily
    #[arg(long)]
    pub times_per_day: Option<u32>,
    /// Occurrences per week, for multiple-weekly
    #[arg(long)]
    pub times_per_week: Option<u32>,
    /// Name of the habit, required for `other`
    #[arg(long)]
    pub custom_name: Option<String>,
}

impl HabitArgs {
    pub fn build(self, clock: &impl Clock) -> Result<Habit, ValidationError> {
        let mut habit = Habit::new(self.habit_type, self.cost, self.frequency, clock);
        if let Some(name) = self.custom_name {
            habit = habit.with_custom_name(name);
        }
        let times = match self.frequency {
            Frequency::MultipleDaily => self.times_per_day,
            Frequency::MultipleWeekly => self.times_per_week,
            _ => None,
        };
        if let Some(times) = times {
            habit = habit.with_times(times);
        }
        habit.validate()?;
        Ok(habit)
    }
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Print the habit and its daily accrual
    Show,
    /// Replace the habit, keeping the check-in history
    Set(HabitArgs),
    /// Delete the habit, keeping the check-in history
    Delete,
}

pub fn run(action: HabitAction) -> CmdResult {
    let (store, state) = open_state()?;

    match action {
        HabitAction::Show => {
            let habit = state.habit.as_ref().ok_or(CoreError::NoActiveHabit)?;
            print_json(&json!({
                "habit": habit,
                "name": habit.display_name(),
                "dailySavings": daily_savings(habit),
            }))?;
        }
        HabitAction::Set(args) => {
            let mut habit = args.build(&SystemClock)?;
            if let Some(old) = &state.habit {
                habit.id = old.id.clone();
                habit.created_at = old.created_at;
            }
            debug!(habit_type = ?habit.habit_type, "habit replaced");
            let state = state.with_habit(Some(habit.clone()));
            store.save(&state)?;
            print_json(&habit)?;
        }
        HabitAction::Delete => {
            store.save(&state.with_habit(None))?;
            println!("habit deleted");
        }
    }
    Ok(())
}
