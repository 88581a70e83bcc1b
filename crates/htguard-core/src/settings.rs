//! Operator settings and the store they live in
//!
//! Two string options are persisted, each `"allow"` or `"disallow"`,
//! defaulting to `"allow"`:
//!
//! - `allow_disallow`: deny every request to the XML-RPC endpoint
//! - `allow_disallow_pingback`: strip pingback methods and headers

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Setting key for blocking the XML-RPC endpoint.
pub const XMLRPC_KEY: &str = "allow_disallow";

/// Setting key for suppressing pingbacks.
pub const PINGBACK_KEY: &str = "allow_disallow_pingback";

/// Stored value of a single setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    #[default]
    Allow,
    Disallow,
}

impl Toggle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Disallow => "disallow",
        }
    }

    /// Build from a "block this" flag.
    pub fn from_blocked(blocked: bool) -> Self {
        if blocked { Self::Disallow } else { Self::Allow }
    }

    pub fn is_blocked(self) -> bool {
        self == Self::Disallow
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toggle {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "disallow" => Ok(Self::Disallow),
            other => Err(format!("expected \"allow\" or \"disallow\", got {other:?}")),
        }
    }
}

/// Key-value store holding the persisted settings.
///
/// Passed explicitly to whatever needs settings so tests can swap in
/// [`MemorySettings`].
pub trait SettingsStore {
    /// Read a raw value; `None` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persist a raw value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`SettingsStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    values: BTreeMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The two independent toggles that drive rule generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Deny all requests to the XML-RPC endpoint.
    pub block_xmlrpc: bool,
    /// Remove pingback methods and the `X-Pingback` header.
    pub block_pingback: bool,
}

impl RuleSettings {
    pub fn new(block_xmlrpc: bool, block_pingback: bool) -> Self {
        Self {
            block_xmlrpc,
            block_pingback,
        }
    }

    /// Read both settings, treating missing keys as `"allow"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSetting` for a value other than
    /// `allow`/`disallow`.
    pub fn load(store: &impl SettingsStore) -> Result<Self> {
        Ok(Self {
            block_xmlrpc: read_toggle(store, XMLRPC_KEY)?.is_blocked(),
            block_pingback: read_toggle(store, PINGBACK_KEY)?.is_blocked(),
        })
    }

    /// Write both settings back.
    pub fn save(&self, store: &mut impl SettingsStore) -> Result<()> {
        store.set(XMLRPC_KEY, Toggle::from_blocked(self.block_xmlrpc).as_str())?;
        store.set(PINGBACK_KEY, Toggle::from_blocked(self.block_pingback).as_str())
    }
}

fn read_toggle(store: &impl SettingsStore, key: &str) -> Result<Toggle> {
    match store.get(key)? {
        None => Ok(Toggle::default()),
        Some(value) => value.parse().map_err(|_| Error::InvalidSetting {
            key: key.to_string(),
            value,
        }),
    }
}
