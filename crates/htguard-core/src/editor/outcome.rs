//! Result types for the rule editor

use serde::{Deserialize, Serialize};
use similar::TextDiff;

/// Writability of the rewrite file as seen before an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    /// The file exists and can be rewritten
    Writable,
    /// The file is missing but its directory accepts new files
    Creatable,
    /// The file exists but cannot be written
    ReadOnly,
    /// The file is missing and cannot be created
    Unavailable,
}

impl FileState {
    pub fn from_flags(exists: bool, writable: bool) -> Self {
        match (exists, writable) {
            (true, true) => Self::Writable,
            (false, true) => Self::Creatable,
            (true, false) => Self::ReadOnly,
            (false, false) => Self::Unavailable,
        }
    }

    pub fn exists(self) -> bool {
        matches!(self, Self::Writable | Self::ReadOnly)
    }

    pub fn can_write(self) -> bool {
        matches!(self, Self::Writable | Self::Creatable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Writable => "writable",
            Self::Creatable => "missing (will be created)",
            Self::ReadOnly => "read-only",
            Self::Unavailable => "missing",
        }
    }
}

/// What an edit would do, computed without touching the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// File state at planning time
    pub state: FileState,
    /// Current document; empty when the file is missing
    pub current: String,
    /// Document after the edit
    pub updated: String,
    /// Complete generated block, empty when XML-RPC is allowed
    pub block: String,
}

impl Plan {
    /// True when the file already matches the settings.
    pub fn is_noop(&self) -> bool {
        self.current == self.updated
    }

    /// Unified line diff from the current to the updated document.
    pub fn diff(&self, path: &str) -> String {
        TextDiff::from_lines(self.current.as_str(), self.updated.as_str())
            .unified_diff()
            .context_radius(3)
            .header(path, path)
            .to_string()
    }
}

/// Result of [`RuleEditor::apply`](super::RuleEditor::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The file already matched; nothing was written
    Unchanged,
    /// The file was rewritten
    Written {
        /// Whether the file did not exist before
        created: bool,
    },
    /// The file cannot be written; the operator must apply these by hand
    ManualRequired {
        /// The generated block
        rules: String,
        /// The full document the file should contain
        document: String,
    },
}
