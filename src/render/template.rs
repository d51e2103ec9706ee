//! User-supplied minijinja templates for `ls --template NAME`.
//!
//! A template named `NAME` is read from `<templates_dir>/NAME.tmpl` and
//! rendered with a single variable, `notes`, holding the collection in
//! canonical order. Each entry exposes `index`, `id`, `priority`, `state` and
//! `contents`; priority and state are plain integers so templates can compare
//! them against the `LOW`..`HIGH` and `NONE`..`COMPLETE` globals.

use std::io::Write;
use std::path::Path;

use minijinja::{Environment, Value, context};
use serde::Serialize;

use super::{BLUE, DARK_RED, Formatter, GREEN, RED, RESET, RenderError, YELLOW};
use crate::domain::{Note, Priority, State};

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

#[derive(Debug, Serialize)]
struct NoteView<'a> {
    index: usize,
    id: String,
    priority: u8,
    state: u8,
    contents: &'a str,
}

/// Renders notes through a template loaded at construction time.
#[derive(Debug, Clone)]
pub struct TemplateFormatter {
    name: String,
    source: String,
}

impl TemplateFormatter {
    /// Loads `<templates_dir>/<name>.tmpl`.
    pub fn load(templates_dir: &Path, name: &str) -> Result<Self, RenderError> {
        let path = templates_dir.join(format!("{name}.{TEMPLATE_EXTENSION}"));
        let source = std::fs::read_to_string(&path)
            .map_err(|source| RenderError::TemplateRead { path, source })?;
        Ok(Self::from_source(name, source))
    }

    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn environment(&self) -> Result<Environment<'_>, RenderError> {
        let mut env = Environment::new();
        env.add_template(&self.name, &self.source)?;

        for p in Priority::ALL {
            env.add_global(priority_const(p), Value::from(p.level()));
        }
        for s in State::ALL {
            env.add_global(state_const(s), Value::from(s.level()));
        }

        env.add_function("colorize_contents", colorize_contents);
        env.add_function("priority", priority_marker);
        env.add_function("status", status);
        env.add_function("index", index_marker);
        env.add_function("filter_by_priority", filter_by_priority);

        Ok(env)
    }
}

impl Formatter for TemplateFormatter {
    fn format(&self, out: &mut dyn Write, notes: &[Note]) -> Result<(), RenderError> {
        let env = self.environment()?;
        let tmpl = env.get_template(&self.name)?;

        let views: Vec<NoteView> = notes
            .iter()
            .enumerate()
            .map(|(index, note)| NoteView {
                index,
                id: note.id().to_string(),
                priority: note.priority().level(),
                state: note.state().level(),
                contents: note.contents(),
            })
            .collect();

        let rendered = tmpl.render(context! { notes => views })?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

fn priority_const(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "LOW",
        Priority::Medium => "MEDIUM",
        Priority::High => "HIGH",
    }
}

fn state_const(state: State) -> &'static str {
    match state {
        State::None => "NONE",
        State::Todo => "TODO",
        State::InProgress => "IN_PROGRESS",
        State::Complete => "COMPLETE",
    }
}

fn colorize_contents(state: u8, text: String) -> String {
    let color = match state {
        1 => RED,
        2 => YELLOW,
        3 => GREEN,
        _ => return text,
    };
    format!("{color}{text}{RESET}")
}

fn priority_marker(priority: u8) -> String {
    match Priority::from_level(priority) {
        Some(Priority::Low) => format!("({BLUE}\u{2193}{RESET})"),
        Some(Priority::Medium) => "(-)".to_string(),
        Some(Priority::High) => format!("({DARK_RED}\u{2191}{RESET})"),
        None => String::new(),
    }
}

fn status(state: u8) -> &'static str {
    match state {
        1 => "Todo",
        2 => "In Progress",
        3 => "Complete",
        _ => "",
    }
}

fn index_marker(index: usize) -> String {
    format!("{BLUE}{index}{RESET}")
}

fn filter_by_priority(notes: Vec<Value>, priority: u8) -> Vec<Value> {
    let wanted = Value::from(priority);
    notes
        .into_iter()
        .filter(|note| note.get_attr("priority").is_ok_and(|p| p == wanted))
        .collect()
}
