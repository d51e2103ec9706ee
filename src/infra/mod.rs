//! Filesystem concerns: the state file and where it lives

pub mod paths;
mod state_file;

pub use paths::{PathError, default_state_dir};
pub use state_file::{StateStore, StoreError};
