//! Filesystem layer for htguard
//!
//! Provides normalized paths, locked atomic I/O, the [`FileAccess`] seam used
//! by the rule editor, and format-agnostic config storage.

pub mod access;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use access::{DiskFiles, FileAccess, MemoryFiles};
pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use io::FileLock;
pub use path::NormalizedPath;
