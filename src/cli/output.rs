//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, Priority, State};

/// Output format for `ls`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored one-line-per-note output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub index: usize,
    pub id: String,
    pub priority: Priority,
    pub state: State,
    pub contents: String,
    pub created: String,
}

impl NoteListing {
    pub fn new(index: usize, note: &Note) -> Self {
        Self {
            index,
            id: note.id().to_string(),
            priority: note.priority(),
            state: note.state(),
            contents: note.contents().to_string(),
            created: note.id().created().to_rfc3339(),
        }
    }
}
