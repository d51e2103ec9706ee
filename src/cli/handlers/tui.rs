//! Interactive session launcher.

use anyhow::{Context, Result};

use crate::infra::StateStore;

pub fn handle_tui(store: &StateStore) -> Result<()> {
    crate::tui::run(store).with_context(|| "interactive session failed")
}
