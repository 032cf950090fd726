use clap::Args;
use habithero_core::{daily_savings, Goal, SystemClock};
use serde_json::json;
use tracing::info;

use super::habit::HabitArgs;
use crate::common::{open_state, print_json, CmdResult};

#[derive(Args)]
pub struct InitArgs {
    #[command(flatten)]
    habit: HabitArgs,
    /// What you are saving for
    #[arg(long)]
    goal_name: String,
    /// Price of the goal
    #[arg(long)]
    goal_target: f64,
    /// Image URL for the goal
    #[arg(long, default_value = "")]
    goal_image: String,
    /// Discard existing data
    #[arg(long)]
    force: bool,
}

pub fn run(args: InitArgs) -> CmdResult {
    let (store, state) = open_state()?;
    if state.settings.onboarding_completed && !args.force {
        return Err("already initialized; pass --force to start over".into());
    }

    let clock = SystemClock;
    let habit = args.habit.build(&clock)?;
    let goal = Goal::new(args.goal_name, args.goal_target, args.goal_image, &clock);
    goal.validate()?;

    let daily = daily_savings(&habit);
    let state = state.reset().complete_onboarding(habit, goal);
    store.save(&state)?;
    info!(path = %store.path().display(), "initialized");

    print_json(&json!({
        "habit": state.habit,
        "goal": state.goal,
        "dailySavings": daily,
    }))?;
    Ok(())
}
