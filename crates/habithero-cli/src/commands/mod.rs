pub mod achievements;
pub mod checkin;
pub mod completions;
pub mod config;
pub mod goal;
pub mod habit;
pub mod history;
pub mod init;
pub mod remind;
pub mod reset;
pub mod settings;
pub mod share;
pub mod status;
