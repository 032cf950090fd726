use habithero_core::{Config, SystemClock};
use serde_json::json;

use crate::common::{open_state, play_cues, print_json, BellCuePlayer, CmdResult};

/// Record today's outcome. A second call on the same day replaces the first.
pub fn run(successful: bool) -> CmdResult {
    let (store, state) = open_state()?;
    let outcome = state.check_in(successful, &SystemClock)?;
    store.save(&outcome.state)?;

    let player = BellCuePlayer::from_config(&Config::load_or_default());
    play_cues(&player, &outcome.events);

    print_json(&json!({
        "record": outcome.record,
        "events": outcome.events,
    }))?;
    Ok(())
}
