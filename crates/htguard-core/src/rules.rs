//! Apache rule generation for the `Protect XML-RPC` block

use htguard_blocks::{Marker, WORDPRESS_END};

use crate::settings::RuleSettings;

/// Name of the block this crate owns inside the rewrite file.
pub const PROTECT_MARKER: &str = "Protect XML-RPC";

/// Renders the access-control block for one endpoint.
///
/// Only `block_xmlrpc` influences the output; pingback suppression happens
/// at request time and never touches the rewrite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTemplate {
    marker: Marker,
    endpoint: String,
    anchor: String,
}

impl Default for RuleTemplate {
    fn default() -> Self {
        Self::new("xmlrpc.php")
    }
}

impl RuleTemplate {
    /// Template denying `endpoint`, anchored after the WordPress section.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            marker: Marker::new(PROTECT_MARKER),
            endpoint: endpoint.into(),
            anchor: WORDPRESS_END.to_string(),
        }
    }

    /// Use a different anchor line for first-time insertion.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Lines that belong between the markers; empty when XML-RPC is allowed.
    pub fn body(&self, settings: &RuleSettings) -> String {
        if !settings.block_xmlrpc {
            return String::new();
        }
        format!(
            "<Files \"{}\">\nOrder Deny,Allow\nDeny from all\n</Files>\n",
            self.endpoint.replace('"', "")
        )
    }

    /// The complete marked block, or the empty string when XML-RPC is
    /// allowed.
    pub fn generate(&self, settings: &RuleSettings) -> String {
        let body = self.body(settings);
        if body.is_empty() {
            return body;
        }
        self.marker.wrap(&body)
    }
}

/// Generate the block for the standard `xmlrpc.php` endpoint.
///
/// # Example
/// ```
/// use htguard_core::{RuleSettings, generate};
///
/// assert_eq!(generate(&RuleSettings::new(false, true)), "");
/// assert!(generate(&RuleSettings::new(true, false)).contains("Deny from all"));
/// ```
pub fn generate(settings: &RuleSettings) -> String {
    RuleTemplate::default().generate(settings)
}
