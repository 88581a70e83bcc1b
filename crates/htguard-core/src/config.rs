//! Site configuration file
//!
//! ```toml
//! [settings]
//! allow_disallow = "disallow"
//! allow_disallow_pingback = "allow"
//!
//! [htaccess]
//! file = ".htaccess"
//! endpoint = "xmlrpc.php"
//! anchor = "# END WordPress"
//! ```
//!
//! A missing file means defaults everywhere.

use std::collections::BTreeMap;

use htguard_blocks::WORDPRESS_END;
use htguard_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::rules::RuleTemplate;
use crate::settings::SettingsStore;

/// Default location of the site configuration, relative to the site root.
pub const DEFAULT_CONFIG_FILE: &str = ".htguard.toml";

/// Parsed contents of the site configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Raw setting values keyed by setting name
    #[serde(default)]
    pub settings: BTreeMap<String, String>,

    /// Where and how the rewrite file is edited
    #[serde(default)]
    pub htaccess: HtaccessConfig,
}

/// The `[htaccess]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtaccessConfig {
    /// Rewrite file, relative to the site root unless absolute
    pub file: String,
    /// File name of the XML-RPC endpoint to deny
    pub endpoint: String,
    /// Line after which a new block is inserted
    pub anchor: String,
}

impl Default for HtaccessConfig {
    fn default() -> Self {
        Self {
            file: ".htaccess".to_string(),
            endpoint: "xmlrpc.php".to_string(),
            anchor: WORDPRESS_END.to_string(),
        }
    }
}

impl HtaccessConfig {
    /// Resolve the rewrite file against the site root.
    pub fn rules_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.file)
    }

    /// Rule template for this site.
    pub fn template(&self) -> RuleTemplate {
        RuleTemplate::new(&self.endpoint).with_anchor(&self.anchor)
    }
}

/// [`SettingsStore`] persisted in the site configuration file.
///
/// Every `set` rewrites the file atomically, keeping the `[htaccess]`
/// section intact.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: NormalizedPath,
    config: SiteConfig,
    store: ConfigStore,
}

impl FileSettingsStore {
    /// Open the configuration at `path`; a missing file yields defaults.
    pub fn open(path: NormalizedPath) -> Result<Self> {
        let store = ConfigStore::new();
        let config = store.load_or_default(&path)?;
        tracing::debug!(path = %path, "loaded site configuration");
        Ok(Self {
            path,
            config,
            store,
        })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.config.settings.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.config.settings.get(key).map(String::as_str) == Some(value) && self.path.exists() {
            return Ok(());
        }
        self.config
            .settings
            .insert(key.to_string(), value.to_string());
        self.store.save(&self.path, &self.config)?;
        tracing::info!(key, value, path = %self.path, "setting saved");
        Ok(())
    }
}
