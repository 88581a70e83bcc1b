use std::collections::HashMap;

use htguard_blocks::{extract, merge};
use htguard_core::{PINGBACK_METHODS, PingbackSuppressor, RuleSettings, generate};
use proptest::prelude::*;

fn method_table() -> impl Strategy<Value = HashMap<String, u32>> {
    let name = prop_oneof![
        Just(PINGBACK_METHODS[0].to_string()),
        Just(PINGBACK_METHODS[1].to_string()),
        "[a-z]{1,8}\\.[a-zA-Z]{1,12}",
    ];
    prop::collection::hash_map(name, any::<u32>(), 0..10)
}

fn header_table() -> impl Strategy<Value = HashMap<String, String>> {
    let name = prop_oneof![
        Just("X-Pingback".to_string()),
        Just("x-pingback".to_string()),
        "[A-Z][a-z]{1,8}(-[A-Z][a-z]{1,8})?",
    ];
    prop::collection::hash_map(name, "[ -~]{0,20}", 0..8)
}

proptest! {
    #[test]
    fn filter_methods_is_idempotent(methods in method_table(), enabled in any::<bool>()) {
        let suppressor = PingbackSuppressor::new(enabled);
        let once = suppressor.filter_methods(methods);
        let twice = suppressor.filter_methods(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_headers_is_idempotent(headers in header_table(), enabled in any::<bool>()) {
        let suppressor = PingbackSuppressor::new(enabled);
        let once = suppressor.filter_headers(headers);
        let twice = suppressor.filter_headers(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn disabled_filter_is_identity(methods in method_table()) {
        let suppressor = PingbackSuppressor::from_settings(&RuleSettings::new(true, false));
        prop_assert_eq!(suppressor.filter_methods(methods.clone()), methods);
    }

    #[test]
    fn enabled_filter_removes_only_pingbacks(methods in method_table()) {
        let filtered = PingbackSuppressor::new(true).filter_methods(methods.clone());
        for (name, value) in &methods {
            if PINGBACK_METHODS.contains(&name.as_str()) {
                prop_assert!(!filtered.contains_key(name));
            } else {
                prop_assert_eq!(filtered.get(name), Some(value));
            }
        }
    }

    #[test]
    fn extract_recovers_generated_body(
        lines in prop::collection::vec("[A-Za-z0-9 ]{0,20}", 0..6),
        anchored in any::<bool>(),
        pingback in any::<bool>(),
    ) {
        let mut doc = lines.join("\n");
        if anchored {
            doc.push_str("\n# END WordPress\n");
        }
        let settings = RuleSettings::new(true, pingback);
        let block = generate(&settings);
        let merged = merge(&doc, &block);
        let merged_lines: Vec<&str> = merged.lines().collect();

        let inner: Vec<&str> = block.lines().collect();
        let expected: String = inner[1..inner.len() - 1].iter().map(|l| format!("{l}\n")).collect();
        prop_assert_eq!(extract(&merged_lines, "Protect XML-RPC"), expected);
    }
}
