//! Site context resolution
//!
//! Resolves the site root and configuration file from CLI flags and opens
//! the settings store every command works against.

use std::path::Path;

use htguard_core::{FileSettingsStore, HtaccessConfig, RuleEditor, RuleSettings};
use htguard_core::config::DEFAULT_CONFIG_FILE;
use htguard_fs::{DiskFiles, NormalizedPath};

use crate::error::Result;

/// Everything a command needs to know about the site.
#[derive(Debug)]
pub struct SiteContext {
    pub root: NormalizedPath,
    pub store: FileSettingsStore,
    pub files: DiskFiles,
}

impl SiteContext {
    /// Open the site at `root`, reading `config` or `<root>/.htguard.toml`.
    pub fn open(root: &Path, config: Option<&str>) -> Result<Self> {
        let root = NormalizedPath::new(root);
        let config_path = match config {
            Some(path) => root.join(path),
            None => root.join(DEFAULT_CONFIG_FILE),
        };
        let store = FileSettingsStore::open(config_path)?;
        Ok(Self {
            root,
            store,
            files: DiskFiles,
        })
    }

    pub fn htaccess(&self) -> &HtaccessConfig {
        &self.store.config().htaccess
    }

    /// Absolute path of the rewrite file.
    pub fn rules_path(&self) -> NormalizedPath {
        self.htaccess().rules_path(&self.root)
    }

    /// Settings as currently stored.
    pub fn settings(&self) -> Result<RuleSettings> {
        Ok(RuleSettings::load(&self.store)?)
    }

    /// Rule editor bound to this site's rewrite file.
    pub fn editor(&self) -> RuleEditor<'_, DiskFiles> {
        RuleEditor::new(&self.files, self.rules_path(), self.htaccess().template())
    }
}
