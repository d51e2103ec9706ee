//! Interactive session state.
//!
//! The session keeps the collection resident between key presses. Every
//! mutation is applied to the resident copy, stored, and then the collection
//! is reloaded so the view always shows the canonical on-disk order. The
//! cursor follows the edited note by id across the reload.

use tracing::debug;

use super::keys::Action;
use crate::domain::{Note, NoteId};
use crate::infra::{StateStore, StoreError};

/// Longest note the add prompt accepts, in characters.
pub const INPUT_LIMIT: usize = 156;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Scroll marker drawn in the gutter when the list overflows the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMarker {
    None,
    Above,
    Below,
    Both,
}

pub struct Session {
    store: StateStore,
    notes: Vec<Note>,
    cursor: usize,
    offset: usize,
    height: usize,
    mode: Mode,
    input: String,
    show_help: bool,
}

impl Session {
    pub fn open(store: StateStore) -> Result<Self, StoreError> {
        let notes = store.load()?;
        Ok(Self {
            store,
            notes,
            cursor: 0,
            offset: 0,
            height: usize::MAX,
            mode: Mode::List,
            input: String::new(),
            show_help: false,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    #[cfg(test)]
    fn selected(&self) -> Option<&Note> {
        self.notes.get(self.cursor)
    }

    /// Sets how many list rows fit on screen.
    pub fn resize(&mut self, height: usize) {
        self.height = height.max(1);
        self.scroll_to_cursor();
    }

    /// True when not every note fits in the viewport.
    pub fn overflowing(&self) -> bool {
        self.notes.len() > self.height
    }

    /// Notes in the viewport, paired with their index in the collection.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Note)> {
        self.notes
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.height)
    }

    pub fn scroll_marker(&self, index: usize) -> ScrollMarker {
        let above = self.offset != 0 && index == self.offset;
        let below = self.offset.saturating_add(self.height) == index + 1
            && index + 1 < self.notes.len();
        match (above, below) {
            (true, true) => ScrollMarker::Both,
            (true, false) => ScrollMarker::Above,
            (false, true) => ScrollMarker::Below,
            (false, false) => ScrollMarker::None,
        }
    }

    pub fn handle(&mut self, action: Action) -> Result<Flow, StoreError> {
        match (self.mode, action) {
            (_, Action::Quit) => return Ok(Flow::Quit),

            (Mode::List, Action::MoveUp) => {
                self.cursor = self.cursor.saturating_sub(1);
                self.scroll_to_cursor();
            }
            (Mode::List, Action::MoveDown) => {
                if self.cursor + 1 < self.notes.len() {
                    self.cursor += 1;
                }
                self.scroll_to_cursor();
            }
            (Mode::List, Action::RaisePriority) => self.edit_selected(Note::increase_priority)?,
            (Mode::List, Action::LowerPriority) => self.edit_selected(Note::decrease_priority)?,
            (Mode::List, Action::Promote) => self.edit_selected(Note::promote)?,
            (Mode::List, Action::Demote) => self.edit_selected(Note::demote)?,
            (Mode::List, Action::Remove) => self.remove_selected()?,
            (Mode::List, Action::StartAdd) => self.mode = Mode::Add,
            (Mode::List, Action::ToggleHelp) => self.show_help = !self.show_help,

            (Mode::Add, Action::Input(c)) => {
                if self.input.chars().count() < INPUT_LIMIT {
                    self.input.push(c);
                }
            }
            (Mode::Add, Action::Backspace) => {
                self.input.pop();
            }
            (Mode::Add, Action::Cancel) => {
                self.input.clear();
                self.mode = Mode::List;
            }
            (Mode::Add, Action::Submit) => {
                let contents = std::mem::take(&mut self.input);
                self.mode = Mode::List;
                if !contents.trim().is_empty() {
                    let note = Note::new(contents);
                    let id = note.id();
                    self.notes.push(note);
                    self.persist(Some(id))?;
                }
            }

            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn edit_selected(&mut self, apply: impl FnOnce(&mut Note)) -> Result<(), StoreError> {
        let Some(note) = self.notes.get_mut(self.cursor) else {
            return Ok(());
        };
        let id = note.id();
        apply(note);
        self.persist(Some(id))
    }

    fn remove_selected(&mut self) -> Result<(), StoreError> {
        if self.cursor >= self.notes.len() {
            return Ok(());
        }
        self.notes.remove(self.cursor);
        self.persist(None)
    }

    /// Stores the resident collection, reloads it, and puts the cursor back
    /// on `follow` if it still exists.
    fn persist(&mut self, follow: Option<NoteId>) -> Result<(), StoreError> {
        self.store.store(&mut self.notes)?;
        self.notes = self.store.load()?;

        if let Some(id) = follow {
            if let Some(position) = self.notes.iter().position(|n| n.id() == id) {
                self.cursor = position;
            }
        }
        self.cursor = self.cursor.min(self.notes.len().saturating_sub(1));
        self.scroll_to_cursor();

        debug!(count = self.notes.len(), cursor = self.cursor, "session reloaded");
        Ok(())
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset.saturating_add(self.height) {
            self.offset = self.cursor + 1 - self.height;
        }
        let max_offset = self.notes.len().saturating_sub(self.height);
        self.offset = self.offset.min(max_offset);
    }
}
