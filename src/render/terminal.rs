//! Fixed one-line-per-note ANSI output.

use super::{BLUE, BRIGHT_BLUE, DARK_RED, Formatter, GREEN, RED, RESET, RenderError, YELLOW};
use crate::domain::{Note, Priority, State};
use std::io::Write;

/// Prints `(glyph) index - contents`, with the contents colored by state.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalFormatter;

impl TerminalFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn priority_glyph(priority: Priority) -> String {
    match priority {
        Priority::Low => format!("({BLUE}\u{2193}{RESET})"),
        Priority::Medium => "(-)".to_string(),
        Priority::High => format!("({DARK_RED}\u{2191}{RESET})"),
    }
}

fn state_color(state: State) -> &'static str {
    match state {
        State::None => RESET,
        State::Todo => RED,
        State::InProgress => YELLOW,
        State::Complete => GREEN,
    }
}

impl Formatter for TerminalFormatter {
    fn format(&self, out: &mut dyn Write, notes: &[Note]) -> Result<(), RenderError> {
        for (index, note) in notes.iter().enumerate() {
            writeln!(
                out,
                "{}{BRIGHT_BLUE} {index} {RESET}- {}{}{RESET}",
                priority_glyph(note.priority()),
                state_color(note.state()),
                note.contents(),
            )?;
        }
        Ok(())
    }
}
