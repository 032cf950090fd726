use clap_complete::{generate, Shell};

use crate::common::CmdResult;

pub fn run(shell: Shell, mut cmd: clap::Command) -> CmdResult {
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
