//! List command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::Note;
use crate::infra::StateStore;
use crate::ops;
use crate::render::{Formatter, TemplateFormatter, TerminalFormatter};

/// How `ls` renders the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Terminal,
    Template(String),
    Json,
}

impl Presentation {
    /// Picks the presentation from the command line, falling back to the
    /// configured template.
    ///
    /// An explicit `--format` wins over the configured template so that
    /// `--format human` always gives the built-in layout.
    pub fn select(args: &ListArgs, config: &Config) -> Self {
        match (&args.template, args.format) {
            (Some(name), _) => Presentation::Template(name.clone()),
            (None, Some(OutputFormat::Json)) => Presentation::Json,
            (None, Some(OutputFormat::Human)) => Presentation::Terminal,
            (None, None) => config
                .template
                .clone()
                .map_or(Presentation::Terminal, Presentation::Template),
        }
    }
}

pub fn handle_list(args: &ListArgs, store: &StateStore, config: &Config) -> Result<()> {
    let notes = ops::list(store).with_context(|| "failed to load notes")?;
    let presentation = Presentation::select(args, config);
    let templates_dir = config.templates_dir(store.base());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_list(&mut out, &notes, &presentation, &templates_dir)?;
    out.flush()?;
    Ok(())
}

/// Writes `notes` to `out` using `presentation`.
pub fn render_list(
    out: &mut dyn Write,
    notes: &[Note],
    presentation: &Presentation,
    templates_dir: &Path,
) -> Result<()> {
    match presentation {
        Presentation::Terminal => {
            TerminalFormatter::new().format(out, notes)?;
        }
        Presentation::Template(name) => {
            let formatter = TemplateFormatter::load(templates_dir, name)
                .with_context(|| format!("failed to load template '{name}'"))?;
            formatter
                .format(out, notes)
                .with_context(|| format!("failed to render template '{name}'"))?;
        }
        Presentation::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .enumerate()
                .map(|(index, note)| NoteListing::new(index, note))
                .collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}
