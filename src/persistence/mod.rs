//! Lifetime score persistence
//!
//! The store is a single text file holding one decimal integer: the total
//! value of every coin ever collected, across all sessions.
//!
//! - `open` ensures the backing file exists before first read
//! - `read_total` tolerates missing/empty/garbage content, yielding 0
//! - `write_total` overwrites the whole file; last writer wins
//!
//! Single-process, single-threaded access only, so no locking.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Handle to the file-backed lifetime score counter
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Open the store at `path`, creating an empty file if none exists.
    /// An unreadable or uncreatable path is a hard error.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => log::info!("created score store at {}", path.display()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored lifetime total. Missing file, empty content, and
    /// unparseable content all degrade to 0 rather than erroring; any other
    /// I/O failure propagates.
    pub fn read_total(&self) -> io::Result<u64> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().parse().unwrap_or(0)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Overwrite the store with the decimal text of `total`.
    pub fn write_total(&self, total: u64) -> io::Result<()> {
        fs::write(&self.path, total.to_string())
    }
}
