//! Rule editor for the rewrite file
//!
//! Runs the read, generate, merge, write cycle for the `Protect XML-RPC`
//! block. Writes happen under an exclusive lock keyed by the file path and
//! are skipped entirely when the file already matches the settings. When
//! the file cannot be written the editor hands back the text the operator
//! should apply by hand.

mod outcome;

pub use outcome::{ApplyOutcome, FileState, Plan};

use htguard_blocks::{extract, upsert_block};
use htguard_fs::{FileAccess, NormalizedPath};

use crate::Result;
use crate::rules::RuleTemplate;
use crate::settings::RuleSettings;

/// Edits one rewrite file through an injected [`FileAccess`].
#[derive(Debug)]
pub struct RuleEditor<'a, F: FileAccess> {
    files: &'a F,
    path: NormalizedPath,
    template: RuleTemplate,
}

impl<'a, F: FileAccess> RuleEditor<'a, F> {
    pub fn new(files: &'a F, path: NormalizedPath, template: RuleTemplate) -> Self {
        Self {
            files,
            path,
            template,
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn template(&self) -> &RuleTemplate {
        &self.template
    }

    /// Current writability of the rewrite file.
    pub fn file_state(&self) -> FileState {
        FileState::from_flags(
            self.files.exists(&self.path),
            self.files.is_writable(&self.path),
        )
    }

    /// Body of the block currently on disk, `"\n"` when there is none.
    pub fn current_block(&self) -> Result<String> {
        if !self.files.exists(&self.path) {
            return Ok("\n".to_string());
        }
        let document = self.files.read(&self.path)?;
        let lines: Vec<&str> = document.lines().collect();
        Ok(extract(&lines, self.template.marker().name()))
    }

    /// Compute the edit for `settings` without writing anything.
    pub fn plan(&self, settings: &RuleSettings) -> Result<Plan> {
        let state = self.file_state();
        self.plan_in_state(state, settings)
    }

    fn plan_in_state(&self, state: FileState, settings: &RuleSettings) -> Result<Plan> {
        let current = if state.exists() {
            self.files.read(&self.path)?
        } else {
            String::new()
        };

        let updated = upsert_block(
            &current,
            self.template.marker(),
            self.template.anchor(),
            &self.template.body(settings),
        );

        tracing::debug!(
            path = %self.path,
            state = state.as_str(),
            changed = current != updated,
            "planned rule edit"
        );

        Ok(Plan {
            state,
            current,
            updated,
            block: self.template.generate(settings),
        })
    }

    /// Bring the rewrite file in line with `settings`.
    ///
    /// A writable file is re-read under the lock, so concurrent editors
    /// serialize instead of overwriting each other. The lock guard is dropped
    /// on every return path.
    pub fn apply(&self, settings: &RuleSettings) -> Result<ApplyOutcome> {
        let state = self.file_state();

        if !state.can_write() {
            let plan = self.plan_in_state(state, settings)?;
            if plan.is_noop() {
                return Ok(ApplyOutcome::Unchanged);
            }
            tracing::warn!(
                path = %self.path,
                state = state.as_str(),
                "rewrite file is not writable, rules must be applied manually"
            );
            return Ok(ApplyOutcome::ManualRequired {
                rules: plan.block,
                document: plan.updated,
            });
        }

        let _guard = self.files.lock(&self.path)?;
        let plan = self.plan_in_state(self.file_state(), settings)?;

        if plan.is_noop() {
            tracing::debug!(path = %self.path, "rewrite file already up to date");
            return Ok(ApplyOutcome::Unchanged);
        }

        self.files.write(&self.path, &plan.updated)?;
        let created = !plan.state.exists();
        tracing::info!(path = %self.path, created, "rewrite file updated");
        Ok(ApplyOutcome::Written { created })
    }
}
