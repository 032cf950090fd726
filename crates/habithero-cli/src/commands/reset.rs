use tracing::warn;

use crate::common::{open_state, CmdResult};

pub fn run(confirmed: bool) -> CmdResult {
    if !confirmed {
        return Err("this deletes all data; pass --yes to confirm".into());
    }
    let (store, state) = open_state()?;
    store.save(&state.reset())?;
    warn!(path = %store.path().display(), "all data reset");
    println!("data reset");
    Ok(())
}
