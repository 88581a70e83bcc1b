//! Status reporting for the operator

use htguard_fs::FileAccess;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::editor::{FileState, RuleEditor};
use crate::settings::{RuleSettings, Toggle};

/// Snapshot of settings versus what the rewrite file contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Rewrite file path
    pub path: String,
    /// Writability of the rewrite file
    pub state: FileState,
    /// Stored XML-RPC setting
    pub xmlrpc: Toggle,
    /// Stored pingback setting
    pub pingback: Toggle,
    /// Body of the block currently in the file
    pub current_block: String,
    /// Whether the file already matches the settings
    pub in_sync: bool,
}

impl StatusReport {
    /// Collect a report without modifying anything.
    pub fn collect<F: FileAccess>(editor: &RuleEditor<'_, F>, settings: &RuleSettings) -> Result<Self> {
        let plan = editor.plan(settings)?;
        Ok(Self {
            path: editor.path().to_string(),
            state: plan.state,
            xmlrpc: Toggle::from_blocked(settings.block_xmlrpc),
            pingback: Toggle::from_blocked(settings.block_pingback),
            current_block: editor.current_block()?,
            in_sync: plan.is_noop(),
        })
    }
}
