//! Core layer for htguard
//!
//! Turns two operator toggles into Apache access rules and pingback policy:
//!
//! - **Settings**: `allow_disallow` / `allow_disallow_pingback` behind the
//!   injected [`SettingsStore`] interface
//! - **Rules**: [`RuleTemplate`] renders the `Protect XML-RPC` block
//! - **Pingback**: [`PingbackSuppressor`] filters XML-RPC methods and headers
//! - **Editor**: [`RuleEditor`] runs the locked read-merge-write cycle on the
//!   rewrite file through an injected [`htguard_fs::FileAccess`]
//!
//! # Architecture
//!
//! ```text
//!            htguard-cli
//!                 |
//!           htguard-core
//!                 |
//!       +---------+---------+
//!       |                   |
//!  htguard-fs        htguard-blocks
//! ```

pub mod bootstrap;
pub mod config;
pub mod editor;
pub mod error;
pub mod pingback;
pub mod rules;
pub mod settings;
pub mod status;

pub use bootstrap::{BASIC_WORDPRESS_RULES, BootstrapOutcome, ensure_rules_file};
pub use config::{FileSettingsStore, HtaccessConfig, SiteConfig};
pub use editor::{ApplyOutcome, FileState, Plan, RuleEditor};
pub use error::{Error, Result};
pub use pingback::{PINGBACK_HEADER, PINGBACK_METHODS, PingbackSuppressor};
pub use rules::{PROTECT_MARKER, RuleTemplate, generate};
pub use settings::{MemorySettings, RuleSettings, SettingsStore, Toggle};
pub use status::StatusReport;
