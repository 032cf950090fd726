use habithero_core::notify::{dispatch_reminder, plan_daily_reminder};
use habithero_core::SystemClock;
use serde_json::json;

use crate::common::{open_state, print_json, CmdResult, TerminalNotifier};

pub fn run() -> CmdResult {
    let (_, state) = open_state()?;
    let Some(reminder) = plan_daily_reminder(&state.settings, &SystemClock) else {
        print_json(&json!({ "scheduled": false }))?;
        return Ok(());
    };

    let mut notifier = TerminalNotifier::default();
    let scheduled = dispatch_reminder(&mut notifier, &reminder);
    print_json(&json!({
        "scheduled": scheduled,
        "reminder": notifier.scheduled.first(),
    }))?;
    Ok(())
}
