//! jot - a tiny note and task tracker with crash-safe local state

pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod ops;
pub mod render;
pub mod tui;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_demote, handle_list, handle_priority,
        handle_promote, handle_remove, handle_tui,
    },
};
use infra::{
    StateStore,
    paths::{DIR_ENV_VAR, dir_from_env},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load(cli.config.as_deref())?;
    let env_dir = dir_from_env(std::env::var_os(DIR_ENV_VAR));
    let state_dir = config
        .state_dir(cli.dir.as_ref(), env_dir)
        .with_context(|| "failed to locate state directory")?;
    tracing::debug!(dir = %state_dir.display(), "using state directory");
    let store = StateStore::new(state_dir);

    match &cli.command {
        Command::Add(args) => handle_add(args, &store),
        Command::Remove(args) => handle_remove(args, &store),
        Command::List(args) => handle_list(args, &store, &config),
        Command::Promote(args) => handle_promote(args, &store),
        Command::Demote(args) => handle_demote(args, &store),
        Command::Priority(args) => handle_priority(args, &store),
        Command::Tui => handle_tui(&store),
        Command::Completions(args) => handle_completions(args),
    }
}
