//! File-content access seam
//!
//! The rule editor never touches `std::fs` directly. It is handed a
//! [`FileAccess`] so the same read-modify-write sequence runs against the
//! real disk or an in-memory fixture.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::{Error, FileLock, NormalizedPath, Result, io};

/// Read/write access to whole text files.
pub trait FileAccess {
    /// Guard returned by [`FileAccess::lock`]; the lock is held until it drops.
    type Guard;

    /// Whether the file exists.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Whether the file can be written, or created if missing.
    fn is_writable(&self, path: &NormalizedPath) -> bool;

    /// Read the full text of the file.
    fn read(&self, path: &NormalizedPath) -> Result<String>;

    /// Replace the full text of the file.
    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()>;

    /// Take an exclusive lock keyed by `path`.
    fn lock(&self, path: &NormalizedPath) -> Result<Self::Guard>;
}

/// [`FileAccess`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFiles;

impl FileAccess for DiskFiles {
    type Guard = FileLock;

    fn exists(&self, path: &NormalizedPath) -> bool {
        path.is_file()
    }

    fn is_writable(&self, path: &NormalizedPath) -> bool {
        io::is_writable(path)
    }

    fn read(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        io::write_text(path, content)
    }

    fn lock(&self, path: &NormalizedPath) -> Result<FileLock> {
        FileLock::acquire(path)
    }
}

/// In-memory [`FileAccess`] for tests and previews.
///
/// Paths can be marked read-only to exercise the manual-application path,
/// and every successful write is counted.
#[derive(Debug, Default)]
pub struct MemoryFiles {
    files: Mutex<HashMap<NormalizedPath, String>>,
    read_only: Mutex<HashSet<NormalizedPath>>,
    writes: Mutex<usize>,
}

impl MemoryFiles {
    /// Create an empty in-memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a file.
    pub fn with_file(self, path: impl Into<NormalizedPath>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Insert or replace a file without counting it as a write.
    pub fn insert(&self, path: impl Into<NormalizedPath>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), content.into());
    }

    /// Mark a path as not writable.
    pub fn set_read_only(&self, path: impl Into<NormalizedPath>) {
        self.read_only
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into());
    }

    /// Current content of a file, if present.
    pub fn get(&self, path: &NormalizedPath) -> Option<String> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileAccess for MemoryFiles {
    type Guard = ();

    fn exists(&self, path: &NormalizedPath) -> bool {
        self.get(path).is_some()
    }

    fn is_writable(&self, path: &NormalizedPath) -> bool {
        !self
            .read_only
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path)
    }

    fn read(&self, path: &NormalizedPath) -> Result<String> {
        self.get(path).ok_or_else(|| {
            Error::io(
                path.to_native(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        if !self.is_writable(path) {
            return Err(Error::ReadOnly {
                path: path.to_native(),
            });
        }
        self.insert(path.clone(), content);
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }

    fn lock(&self, _path: &NormalizedPath) -> Result<()> {
        Ok(())
    }
}
