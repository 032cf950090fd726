use clap::Subcommand;
use habithero_core::ledger::{progress_percent, total_saved};
use habithero_core::model::suggested_goals;
use habithero_core::{Goal, SystemClock};
use serde_json::json;

use crate::common::{open_state, print_json, CmdResult};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Print the active goal, its progress and the goals reached so far
    Show,
    /// Replace the active goal
    Set {
        /// What you are saving for
        #[arg(long, required_unless_present = "suggested")]
        name: Option<String>,
        /// Price of the goal
        #[arg(long, required_unless_present = "suggested")]
        target: Option<f64>,
        /// Image URL for the goal
        #[arg(long, default_value = "")]
        image: String,
        /// Take name, price and image from the suggestion list (1-based)
        #[arg(long, conflicts_with_all = ["name", "target"])]
        suggested: Option<usize>,
    },
    /// Move the reached goal to history and start saving anew
    Archive,
    /// List goal suggestions
    Suggest,
}

pub fn run(action: GoalAction) -> CmdResult {
    let (store, state) = open_state()?;

    match action {
        GoalAction::Show => {
            let total = total_saved(&state.records);
            print_json(&json!({
                "goal": state.goal,
                "totalSaved": total,
                "progressPercent": state.goal.as_ref().map(|g| progress_percent(g, total)),
                "achievedGoals": state.achieved_goals,
            }))?;
        }
        GoalAction::Set {
            name,
            target,
            image,
            suggested,
        } => {
            let goal = match (suggested, name, target) {
                (Some(n), _, _) => {
                    let suggestion = n
                        .checked_sub(1)
                        .and_then(|i| suggested_goals().get(i))
                        .ok_or_else(|| format!("no suggested goal #{n}"))?;
                    suggestion.to_goal(&SystemClock)
                }
                (None, Some(name), Some(target)) => Goal::new(name, target, image, &SystemClock),
                _ => return Err("--name and --target are required".into()),
            };
            goal.validate()?;
            let state = state.with_goal(Some(goal.clone()));
            store.save(&state)?;
            print_json(&goal)?;
        }
        GoalAction::Archive => {
            let (state, event) = state.archive_goal(&SystemClock)?;
            store.save(&state)?;
            print_json(&event)?;
        }
        GoalAction::Suggest => {
            print_json(suggested_goals())?;
        }
    }
    Ok(())
}
