//! Durable storage of the note collection with atomic replacement.
//!
//! The collection lives in a single binary file, `<base>/state`. Writes go to
//! `<base>/state.temp` first and are renamed over the real file once fully
//! flushed and synced, so a crash leaves either the previous or the new
//! complete file behind. The temp file is never read.

use crate::domain::{Note, normalize};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// File name of the durable state inside the base directory.
const STATE_FILE_NAME: &str = "state";

/// File name of the transient write buffer inside the base directory.
const TEMP_FILE_NAME: &str = "state.temp";

/// Leading bytes identifying a state file.
const MAGIC: [u8; 4] = *b"JOTS";

/// Layout version written after the magic bytes.
const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + 2;

/// Errors while loading or storing the note collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("state file {path} is not a jot state file")]
    UnrecognizedFormat { path: PathBuf },

    #[error("state file {path} uses unsupported format version {version}")]
    UnsupportedVersion { path: PathBuf, version: u16 },

    #[error("failed to decode state file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to create state directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create temporary state file {path}: {source}")]
    CreateTemp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode notes into {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to flush temporary state file {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to replace {to} with {from}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle on the state directory.
///
/// Holds only the base path; every call goes back to the filesystem, so two
/// handles on the same directory always observe the same durable state.
#[derive(Debug, Clone)]
pub struct StateStore {
    base: PathBuf,
}

impl StateStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn state_path(&self) -> PathBuf {
        self.base.join(STATE_FILE_NAME)
    }

    pub fn temp_path(&self) -> PathBuf {
        self.base.join(TEMP_FILE_NAME)
    }

    /// Loads the collection.
    ///
    /// A missing state file is the first-run case and yields an empty
    /// collection. Every other failure is returned as-is; nothing is repaired.
    pub fn load(&self) -> Result<Vec<Note>, StoreError> {
        let path = self.state_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let notes = decode(&bytes, &path)?;
        debug!(path = %path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    /// Normalizes `notes` in place and durably replaces the state file.
    ///
    /// Creates the base directory if needed, writes the encoded collection to
    /// the temp file, flushes and syncs it, then renames it over the state
    /// file.
    pub fn store(&self, notes: &mut [Note]) -> Result<(), StoreError> {
        normalize(notes);

        fs::create_dir_all(&self.base).map_err(|source| StoreError::CreateDir {
            path: self.base.clone(),
            source,
        })?;

        let temp_path = self.temp_path();
        let state_path = self.state_path();

        let file = File::create(&temp_path).map_err(|source| StoreError::CreateTemp {
            path: temp_path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        encode(&mut writer, notes, &temp_path)?;

        let file = writer.into_inner().map_err(|e| StoreError::Flush {
            path: temp_path.clone(),
            source: e.into_error(),
        })?;
        file.sync_all().map_err(|source| StoreError::Flush {
            path: temp_path.clone(),
            source,
        })?;
        drop(file);
        trace!(path = %temp_path.display(), "temp state synced");

        fs::rename(&temp_path, &state_path).map_err(|source| StoreError::Rename {
            from: temp_path.clone(),
            to: state_path.clone(),
            source,
        })?;

        // The rename already committed the write; a failed directory sync is
        // logged, not returned.
        if let Err(e) = sync_dir(&self.base) {
            warn!(dir = %self.base.display(), error = %e, "failed to sync state directory");
        }

        debug!(path = %state_path.display(), count = notes.len(), "stored notes");
        Ok(())
    }
}

fn encode<W: Write>(writer: &mut W, notes: &[Note], path: &Path) -> Result<(), StoreError> {
    let mut header = [0u8; HEADER_LEN];
    header[..MAGIC.len()].copy_from_slice(&MAGIC);
    header[MAGIC.len()..].copy_from_slice(&FORMAT_VERSION.to_le_bytes());

    writer
        .write_all(&header)
        .map_err(|e| StoreError::Encode {
            path: path.into(),
            source: Box::new(bincode::ErrorKind::Io(e)),
        })?;

    bincode::serialize_into(writer, notes).map_err(|source| StoreError::Encode {
        path: path.into(),
        source,
    })
}

fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Note>, StoreError> {
    if bytes.len() < HEADER_LEN || bytes[..MAGIC.len()] != MAGIC {
        return Err(StoreError::UnrecognizedFormat { path: path.into() });
    }

    let version = u16::from_le_bytes([bytes[MAGIC.len()], bytes[MAGIC.len() + 1]]);
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            path: path.into(),
            version,
        });
    }

    bincode::deserialize(&bytes[HEADER_LEN..]).map_err(|source| StoreError::Decode {
        path: path.into(),
        source,
    })
}

// Makes the rename itself durable. Directories cannot be opened as files on
// Windows, where the rename is already journaled by NTFS.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
