//! Note operations: each one loads the collection, validates its input,
//! mutates, and stores the normalized result.
//!
//! Indices address the collection in its stored (canonical) order, which is
//! the order `ls` prints. Validation happens before anything is written, so a
//! rejected operation leaves the state file untouched.

use crate::domain::{Note, Priority};
use crate::infra::{StateStore, StoreError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid note index {index}: {}", describe_len(.len))]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn describe_len(len: &usize) -> String {
    match *len {
        0 => "there are no notes".to_string(),
        1 => "there is 1 note".to_string(),
        n => format!("there are {n} notes"),
    }
}

/// Returns the collection in canonical order.
pub fn list(store: &StateStore) -> Result<Vec<Note>, OpError> {
    Ok(store.load()?)
}

/// Appends a new medium-priority note with no state.
pub fn add(store: &StateStore, contents: &str) -> Result<Note, OpError> {
    let mut notes = store.load()?;
    let note = Note::new(contents);
    notes.push(note.clone());
    store.store(&mut notes)?;

    info!(id = %note.id(), "added note");
    Ok(note)
}

/// Removes the note at `index` and returns it.
pub fn remove(store: &StateStore, index: usize) -> Result<Note, OpError> {
    let mut notes = store.load()?;
    check_index(index, notes.len())?;

    let removed = notes.remove(index);
    store.store(&mut notes)?;

    info!(id = %removed.id(), index, "removed note");
    Ok(removed)
}

/// Moves the note at `index` one state forward.
pub fn promote(store: &StateStore, index: usize) -> Result<Note, OpError> {
    update(store, index, Note::promote)
}

/// Moves the note at `index` one state back.
pub fn demote(store: &StateStore, index: usize) -> Result<Note, OpError> {
    update(store, index, Note::demote)
}

/// Sets the priority of the note at `index`.
pub fn set_priority(store: &StateStore, index: usize, priority: Priority) -> Result<Note, OpError> {
    update(store, index, |note| note.set_priority(priority))
}

fn update(
    store: &StateStore,
    index: usize,
    apply: impl FnOnce(&mut Note),
) -> Result<Note, OpError> {
    let mut notes = store.load()?;
    check_index(index, notes.len())?;

    apply(&mut notes[index]);
    let updated = notes[index].clone();
    store.store(&mut notes)?;

    info!(
        id = %updated.id(),
        index,
        priority = %updated.priority(),
        state = %updated.state(),
        "updated note"
    );
    Ok(updated)
}

fn check_index(index: usize, len: usize) -> Result<(), OpError> {
    if index >= len {
        return Err(OpError::IndexOutOfRange { index, len });
    }
    Ok(())
}
