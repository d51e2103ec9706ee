//! Add command handler.

use anyhow::{Context, Result};

use super::report_success;
use crate::cli::AddArgs;
use crate::infra::StateStore;
use crate::ops;

pub fn handle_add(args: &AddArgs, store: &StateStore) -> Result<()> {
    ops::add(store, &args.contents()).with_context(|| "failed to add note")?;
    report_success("added note");
    Ok(())
}
