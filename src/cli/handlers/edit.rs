//! Handlers for commands that change or remove an existing note.

use anyhow::{Context, Result};

use super::{report_removal, report_success};
use crate::cli::{IndexArgs, PriorityArgs};
use crate::infra::StateStore;
use crate::ops;

pub fn handle_remove(args: &IndexArgs, store: &StateStore) -> Result<()> {
    ops::remove(store, args.index)
        .with_context(|| format!("failed to remove note {}", args.index))?;
    report_removal("removed note");
    Ok(())
}

pub fn handle_promote(args: &IndexArgs, store: &StateStore) -> Result<()> {
    ops::promote(store, args.index)
        .with_context(|| format!("failed to promote note {}", args.index))?;
    report_success("promoted note");
    Ok(())
}

pub fn handle_demote(args: &IndexArgs, store: &StateStore) -> Result<()> {
    ops::demote(store, args.index)
        .with_context(|| format!("failed to demote note {}", args.index))?;
    report_success("demoted note");
    Ok(())
}

pub fn handle_priority(args: &PriorityArgs, store: &StateStore) -> Result<()> {
    ops::set_priority(store, args.index, args.priority)
        .with_context(|| format!("failed to set priority of note {}", args.index))?;
    report_success("priority updated");
    Ok(())
}
