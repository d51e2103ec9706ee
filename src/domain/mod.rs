//! Core types: Note, NoteId, Priority, State and the canonical ordering

mod note;
mod note_id;
pub mod ordering;

pub use note::{Note, ParsePriorityError, Priority, State};
pub use note_id::{NoteId, ParseNoteIdError};
pub use ordering::normalize;
