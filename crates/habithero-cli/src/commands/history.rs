use habithero_core::history::{month_calendar, savings_series};
use habithero_core::{Clock, Config, SystemClock};

use crate::common::{open_state, print_json, CmdResult};

pub fn run_series(days: Option<u32>) -> CmdResult {
    let (_, state) = open_state()?;
    let days = days.unwrap_or_else(|| Config::load_or_default().display.history_days);
    print_json(&savings_series(&state.records, SystemClock.today(), days))?;
    Ok(())
}

pub fn run_calendar() -> CmdResult {
    let (_, state) = open_state()?;
    print_json(&month_calendar(&state.records, SystemClock.today()))?;
    Ok(())
}
