//! Error types for htguard-core

use std::path::PathBuf;

/// Result type for htguard-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in htguard-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stored setting holds something other than `allow`/`disallow`
    #[error("Invalid value {value:?} for setting {key} (expected \"allow\" or \"disallow\")")]
    InvalidSetting { key: String, value: String },

    /// The rewrite-rules file is missing and could not be created
    #[error("Rewrite rules file not found at {path}")]
    RulesFileMissing { path: PathBuf },

    /// Filesystem error from htguard-fs
    #[error(transparent)]
    Fs(#[from] htguard_fs::Error),

    /// Block error from htguard-blocks
    #[error(transparent)]
    Blocks(#[from] htguard_blocks::Error),
}
