use habithero_core::{CoreError, Dashboard, SystemClock};

use crate::common::{open_state, print_json, CmdResult};

pub fn run() -> CmdResult {
    let (_, state) = open_state()?;
    let dashboard = Dashboard::build(&state, &SystemClock).ok_or(CoreError::NoActiveHabit)?;
    print_json(&dashboard)?;
    Ok(())
}
