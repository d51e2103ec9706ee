//! Full-screen interactive session.
//!
//! Runs a single-threaded loop: draw, block on the next terminal event, apply
//! it. Mutations are stored synchronously before the next event is read.

pub mod app;
pub mod keys;
pub mod view;

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tracing::info;

use crate::infra::{StateStore, StoreError};
use app::{Flow, Session};
use keys::map_key;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Opens the session on `store` and runs until the user quits.
pub fn run(store: &StateStore) -> Result<(), TuiError> {
    let mut session = Session::open(store.clone())?;
    info!(count = session.notes().len(), "starting interactive session");

    let _guard = TerminalGuard;
    let mut terminal = setup_terminal()?;

    loop {
        let size = terminal.size()?;
        session.resize(view::list_height(size.height, session.show_help()));
        terminal.draw(|f| view::render(f, &session))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = map_key(session.mode(), key) {
                if session.handle(action)? == Flow::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restores the terminal on every exit path, including errors.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}
