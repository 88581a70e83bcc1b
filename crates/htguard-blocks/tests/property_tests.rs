use htguard_blocks::{Marker, WORDPRESS_END, extract, merge, upsert_block};
use proptest::prelude::*;

/// Lines that never carry a sentinel and never contain a newline.
fn plain_line() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 <>\"./_-]{0,30}".prop_filter("no sentinels", |s| {
        !s.contains("# BEGIN") && !s.contains("# END")
    })
}

fn document() -> impl Strategy<Value = String> {
    (prop::collection::vec(plain_line(), 0..8), any::<bool>()).prop_map(|(lines, anchored)| {
        let mut doc = lines.join("\n");
        if anchored {
            doc.push('\n');
            doc.push_str(WORDPRESS_END);
        }
        doc.push('\n');
        doc
    })
}

fn body() -> impl Strategy<Value = String> {
    prop::collection::vec(plain_line(), 1..5).prop_map(|lines| {
        lines.into_iter().map(|l| format!("{l}\n")).collect()
    })
}

proptest! {
    #[test]
    fn extract_recovers_merged_body(doc in document(), body in body()) {
        let marker = Marker::new("Protect XML-RPC");
        let merged = merge(&doc, &marker.wrap(&body));
        let lines: Vec<&str> = merged.lines().collect();

        prop_assert_eq!(extract(&lines, "Protect XML-RPC"), body);
    }

    #[test]
    fn upsert_is_idempotent(doc in document(), body in body()) {
        let marker = Marker::new("Protect XML-RPC");
        let once = upsert_block(&doc, &marker, WORDPRESS_END, &body);
        let twice = upsert_block(&once, &marker, WORDPRESS_END, &body);

        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn upsert_preserves_text_outside_block(doc in document(), body in body()) {
        let marker = Marker::new("Protect XML-RPC");
        let updated = upsert_block(&doc, &marker, WORDPRESS_END, &body);
        let block = marker.wrap(&body);

        prop_assert_eq!(updated.replacen(&block, "", 1), doc);
    }
}
