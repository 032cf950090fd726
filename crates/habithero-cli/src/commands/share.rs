use habithero_core::dashboard::share_message;
use habithero_core::ledger::total_saved;
use habithero_core::{Config, CoreError};

use crate::common::{open_state, CmdResult};

pub fn run() -> CmdResult {
    let (_, state) = open_state()?;
    let goal = state.goal.as_ref().ok_or(CoreError::NoActiveGoal)?;
    let total = total_saved(&state.records);
    if total < goal.target_amount {
        return Err(format!("goal '{}' is not reached yet", goal.name).into());
    }

    let config = Config::load_or_default();
    println!("{}", share_message(goal, total, &config.display.currency_symbol));
    Ok(())
}
