//! Request-time pingback suppression
//!
//! Pingbacks are disabled in the application rather than in the rewrite
//! file: the host strips the two pingback methods from its XML-RPC method
//! table and drops the `X-Pingback` response header.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::settings::RuleSettings;

/// XML-RPC methods removed when pingbacks are blocked.
pub const PINGBACK_METHODS: [&str; 2] = ["pingback.ping", "pingback.extensions.getPingbacks"];

/// Response header advertising the pingback endpoint.
pub const PINGBACK_HEADER: &str = "X-Pingback";

/// Filters applied by the host's request pipeline.
///
/// Both filters are pure and idempotent. With suppression disabled they
/// return their input untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingbackSuppressor {
    enabled: bool,
}

impl PingbackSuppressor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn from_settings(settings: &RuleSettings) -> Self {
        Self::new(settings.block_pingback)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drop the pingback entries from an XML-RPC method table.
    pub fn filter_methods<V, S: BuildHasher>(
        &self,
        mut methods: HashMap<String, V, S>,
    ) -> HashMap<String, V, S> {
        if self.enabled {
            for name in PINGBACK_METHODS {
                if methods.remove(name).is_some() {
                    tracing::debug!(method = name, "removed pingback method");
                }
            }
        }
        methods
    }

    /// Drop the `X-Pingback` header. Header names compare case-insensitively.
    pub fn filter_headers<V, S: BuildHasher>(
        &self,
        mut headers: HashMap<String, V, S>,
    ) -> HashMap<String, V, S> {
        if self.enabled {
            headers.retain(|name, _| !name.eq_ignore_ascii_case(PINGBACK_HEADER));
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methods() -> HashMap<String, &'static str> {
        [
            ("pingback.ping", "handle_ping"),
            ("pingback.extensions.getPingbacks", "handle_get"),
            ("wp.getPosts", "handle_posts"),
            ("system.listMethods", "handle_list"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    #[test]
    fn test_removes_exactly_the_pingback_methods() {
        let filtered = PingbackSuppressor::new(true).filter_methods(methods());

        let mut names: Vec<&str> = filtered.keys().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["system.listMethods", "wp.getPosts"]);
        assert_eq!(filtered["wp.getPosts"], "handle_posts");
    }

    #[test]
    fn test_disabled_is_identity() {
        let input = methods();
        assert_eq!(PingbackSuppressor::new(false).filter_methods(input.clone()), input);
    }

    #[test]
    fn test_header_removal_ignores_case() {
        let headers: HashMap<String, String> = [
            ("x-pingback", "https://example.com/xmlrpc.php"),
            ("Content-Type", "text/html"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let filtered = PingbackSuppressor::new(true).filter_headers(headers);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("Content-Type"));
    }

    #[test]
    fn test_from_settings() {
        assert!(PingbackSuppressor::from_settings(&RuleSettings::new(false, true)).is_enabled());
        assert!(!PingbackSuppressor::from_settings(&RuleSettings::new(true, false)).is_enabled());
    }
}
