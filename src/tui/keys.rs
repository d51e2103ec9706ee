//! Keybinding definitions for the interactive session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    RaisePriority,
    LowerPriority,
    Promote,
    Demote,
    StartAdd,
    Remove,
    ToggleHelp,
    Input(char),
    Backspace,
    Submit,
    Cancel,
}

/// A key and what it does, for the help footer.
pub struct Binding {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn binding(keys: &'static str, description: &'static str) -> Binding {
    Binding { keys, description }
}

/// Bindings shown while help is collapsed.
pub const SHORT_HELP: &[Binding] = &[binding("?", "toggle help"), binding("q", "quit")];

/// Bindings shown while help is expanded, one group per row.
pub const FULL_HELP: &[&[Binding]] = &[
    &[binding("↑/k", "move up"), binding("↓/j", "move down")],
    &[binding("+", "increase priority"), binding("-", "decrease priority")],
    &[binding(">", "increase status"), binding("<", "decrease status")],
    &[binding("a", "add item"), binding("x", "remove item")],
    &[binding("?", "toggle help"), binding("q", "quit")],
];

pub fn map_key(mode: Mode, event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        Mode::List => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Char('+') => Some(Action::RaisePriority),
            KeyCode::Char('-') => Some(Action::LowerPriority),
            KeyCode::Char('>') => Some(Action::Promote),
            KeyCode::Char('<') => Some(Action::Demote),
            KeyCode::Char('a') => Some(Action::StartAdd),
            KeyCode::Char('x') => Some(Action::Remove),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        },
        Mode::Add => match code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}
