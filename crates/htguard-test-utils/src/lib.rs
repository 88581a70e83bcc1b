//! Shared test utilities for the htguard workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`site`]: [`TestSite`] builder for a temporary web root

pub mod site;

pub use site::{TestSite, WORDPRESS_HTACCESS};
