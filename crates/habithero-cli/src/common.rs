//! Helpers shared by the command handlers.

use std::io::Write;

use habithero_core::events::cues;
use habithero_core::{AppState, Config, Cue, CuePlayer, Event, Notifier, Reminder, StateStore};
use serde::Serialize;
use tracing::{debug, info};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the default store and load the current state.
pub fn open_state() -> Result<(StateStore, AppState), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    let state = store.load();
    Ok((store, state))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Rings the terminal bell on stderr, once per cue step.
pub struct BellCuePlayer {
    enabled: bool,
}

impl BellCuePlayer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.feedback.cues,
        }
    }
}

impl CuePlayer for BellCuePlayer {
    fn play(&self, cue: Cue) {
        if !self.enabled {
            return;
        }
        debug!(?cue, "playing cue");
        let rings = match cue {
            Cue::Success | Cue::Fail => 1,
            Cue::Achievement => 2,
            Cue::Victory => 3,
        };
        let mut stderr = std::io::stderr();
        // Bell failures are ignored.
        let _ = stderr.write_all("\x07".repeat(rings).as_bytes());
        let _ = stderr.flush();
    }
}

pub fn play_cues(player: &impl CuePlayer, events: &[Event]) {
    for cue in cues(events) {
        player.play(cue);
    }
}

/// Notifier for a terminal session: permission is implicit and scheduled
/// reminders are kept for the caller to print.
#[derive(Default)]
pub struct TerminalNotifier {
    pub scheduled: Vec<Reminder>,
}

impl Notifier for TerminalNotifier {
    fn request_permission(&mut self) -> bool {
        true
    }

    fn schedule(&mut self, reminder: &Reminder) {
        info!(
            delay_secs = reminder.delay.num_seconds(),
            "reminder scheduled: {}", reminder.title
        );
        self.scheduled.push(reminder.clone());
    }
}
