//! Note value type with its priority and workflow state transitions.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How urgent a note is. Ordered so that `High` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Integer form handed to templates: 0 (low) to 2 (high).
    pub fn level(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    /// Inverse of [`Priority::level`].
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Priority::Low),
            1 => Some(Priority::Medium),
            2 => Some(Priority::High),
            _ => None,
        }
    }

    /// One step up, saturating at `High`.
    pub fn raised(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium | Priority::High => Priority::High,
        }
    }

    /// One step down, saturating at `Low`.
    pub fn lowered(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium | Priority::Low => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(name)
    }
}

/// Error returned when a priority argument is neither a level nor a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid priority '{value}': expected 0, 1, 2, low, medium or high")]
pub struct ParsePriorityError {
    value: String,
}

impl ParsePriorityError {
    /// Returns the rejected input.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    /// Accepts the numeric levels `0`, `1`, `2` as well as the names
    /// `low`, `medium`, `high` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "0" | "low" => Some(Priority::Low),
            "1" | "medium" => Some(Priority::Medium),
            "2" | "high" => Some(Priority::High),
            _ => None,
        };
        parsed.ok_or_else(|| ParsePriorityError {
            value: s.to_string(),
        })
    }
}

/// Workflow state. Moves one step at a time via promote/demote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    None,
    Todo,
    InProgress,
    Complete,
}

impl State {
    pub const ALL: [State; 4] = [State::None, State::Todo, State::InProgress, State::Complete];

    /// Integer form handed to templates: 0 (none) to 3 (complete).
    pub fn level(self) -> u8 {
        match self {
            State::None => 0,
            State::Todo => 1,
            State::InProgress => 2,
            State::Complete => 3,
        }
    }

    /// The next state, saturating at `Complete`.
    pub fn next(self) -> Self {
        match self {
            State::None => State::Todo,
            State::Todo => State::InProgress,
            State::InProgress | State::Complete => State::Complete,
        }
    }

    /// The previous state, saturating at `None`.
    pub fn previous(self) -> Self {
        match self {
            State::Complete => State::InProgress,
            State::InProgress => State::Todo,
            State::Todo | State::None => State::None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::None => "none",
            State::Todo => "todo",
            State::InProgress => "in_progress",
            State::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// A tracked text item.
///
/// Contents are fixed at creation; only the priority and state change over
/// the note's lifetime. The core never validates contents, so empty strings
/// are stored like any other.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, Priority, State};
///
/// let mut note = Note::new("buy milk");
/// assert_eq!(note.priority(), Priority::Medium);
/// assert_eq!(note.state(), State::None);
///
/// note.promote();
/// note.increase_priority();
/// assert_eq!(note.state(), State::Todo);
/// assert_eq!(note.priority(), Priority::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    priority: Priority,
    state: State,
    contents: String,
}

impl Note {
    /// Creates a note with a fresh id, medium priority and no state.
    pub fn new(contents: impl Into<String>) -> Self {
        Self::from_parts(NoteId::new(), Priority::default(), State::default(), contents)
    }

    /// Reassembles a note from its stored fields.
    pub fn from_parts(
        id: NoteId,
        priority: Priority,
        state: State,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            id,
            priority,
            state,
            contents: contents.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// None → Todo → InProgress → Complete. No-op at Complete.
    pub fn promote(&mut self) {
        self.state = self.state.next();
    }

    /// Complete → InProgress → Todo → None. No-op at None.
    pub fn demote(&mut self) {
        self.state = self.state.previous();
    }

    /// Low → Medium → High. No-op at High.
    pub fn increase_priority(&mut self) {
        self.priority = self.priority.raised();
    }

    /// High → Medium → Low. No-op at Low.
    pub fn decrease_priority(&mut self) {
        self.priority = self.priority.lowered();
    }
}
