use clap::{Subcommand, ValueEnum};
use habithero_core::{ReminderTime, SettingsPatch, Theme};

use crate::common::{open_state, print_json, CmdResult};

#[derive(Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> bool {
        matches!(toggle, Toggle::On)
    }
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print all settings
    Show,
    /// Color theme: light, dark or system
    Theme { theme: Theme },
    /// Turn the daily reminder on or off
    DailyReminder { state: Toggle },
    /// Time of the daily reminder (HH:MM)
    ReminderTime { time: ReminderTime },
    /// Turn the weekly reminder on or off
    WeeklyReminder { state: Toggle },
}

pub fn run(action: SettingsAction) -> CmdResult {
    let (store, state) = open_state()?;

    let patch = match action {
        SettingsAction::Show => {
            print_json(&state.settings)?;
            return Ok(());
        }
        SettingsAction::Theme { theme } => SettingsPatch::Theme(theme),
        SettingsAction::DailyReminder { state: on } => SettingsPatch::DailyReminder(on.into()),
        SettingsAction::ReminderTime { time } => SettingsPatch::DailyReminderTime(time),
        SettingsAction::WeeklyReminder { state: on } => SettingsPatch::WeeklyReminder(on.into()),
    };

    let state = state.apply_settings(patch);
    store.save(&state)?;
    print_json(&state.settings)?;
    Ok(())
}
