//! Presentation of a loaded collection: fixed ANSI lines or a user template.
//!
//! Formatters only read notes; the choice of formatter (and which template)
//! is passed in by the caller.

mod template;
mod terminal;

use crate::domain::Note;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

pub use template::{TEMPLATE_EXTENSION, TemplateFormatter};
pub use terminal::TerminalFormatter;

pub(crate) const RED: &str = "\x1b[91m";
pub(crate) const YELLOW: &str = "\x1b[93m";
pub(crate) const GREEN: &str = "\x1b[92m";
pub(crate) const BLUE: &str = "\x1b[34m";
pub(crate) const BRIGHT_BLUE: &str = "\x1b[94m";
pub(crate) const DARK_RED: &str = "\x1b[31m";
pub(crate) const RESET: &str = "\x1b[0m";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Writes a collection, in the order given, to `out`.
pub trait Formatter {
    fn format(&self, out: &mut dyn Write, notes: &[Note]) -> Result<(), RenderError>;
}
