//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::Priority;
use output::OutputFormat;

/// jot - a tiny note and task tracker
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// State directory (overrides JOT_DIR and the config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note
    Add(AddArgs),

    /// Remove a note
    #[command(name = "rm")]
    Remove(IndexArgs),

    /// List notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Move a note to its next state (none, todo, in progress, complete)
    Promote(IndexArgs),

    /// Move a note back to its previous state
    Demote(IndexArgs),

    /// Set a note's priority
    Priority(PriorityArgs),

    /// Browse and edit notes interactively
    Tui,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl AddArgs {
    pub fn contents(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for commands addressing a single note
#[derive(Parser, Debug)]
pub struct IndexArgs {
    /// Position of the note as shown by `ls`
    pub index: usize,
}

/// Arguments for the `priority` command
#[derive(Parser, Debug)]
pub struct PriorityArgs {
    /// Position of the note as shown by `ls`
    pub index: usize,

    /// New priority: 0/low, 1/medium or 2/high
    pub priority: Priority,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Render with <templates_dir>/<NAME>.tmpl instead of the built-in layout
    #[arg(short, long, value_name = "NAME", conflicts_with = "format")]
    pub template: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
