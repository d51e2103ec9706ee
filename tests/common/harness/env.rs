//! Isolated test environment with temp directory.

use super::JotCommand;
use jot::domain::{Note, NoteId, Priority, State};
use jot::infra::StateStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary state directory.
///
/// The state directory is a not-yet-existing child of the temp directory so
/// tests also cover directory creation on first write. A config path that
/// does not exist is passed to every command so the user's own config never
/// leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    state_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let state_dir = temp_dir.path().join("state");
        Self {
            temp_dir,
            state_dir,
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join("state")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    pub fn store(&self) -> StateStore {
        StateStore::new(&self.state_dir)
    }

    /// Stores the given notes directly through the library.
    pub fn seed(&self, notes: &[(Priority, State, &str)]) {
        let mut notes: Vec<Note> = notes
            .iter()
            .map(|(p, s, text)| Note::from_parts(NoteId::new(), *p, *s, *text))
            .collect();
        self.store().store(&mut notes).expect("Failed to seed notes");
    }

    /// Loads the notes as currently stored.
    pub fn notes(&self) -> Vec<Note> {
        self.store().load().expect("Failed to load notes")
    }

    /// Writes a file relative to the temp directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .dir(&self.state_dir)
            .config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
