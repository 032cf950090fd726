use habithero_core::achievements::achievement_statuses;
use habithero_core::{Clock, CoreError, SystemClock};

use crate::common::{open_state, print_json, CmdResult};

pub fn run(unlocked_only: bool) -> CmdResult {
    let (_, state) = open_state()?;
    let habit = state.habit.as_ref().ok_or(CoreError::NoActiveHabit)?;

    let mut statuses = achievement_statuses(habit.habit_type, &state.records, SystemClock.today());
    if unlocked_only {
        statuses.retain(|s| s.unlocked);
    }
    print_json(&statuses)?;
    Ok(())
}
