//! Block writing: in-place body replacement and anchored insertion.

use crate::error::{Error, Result};
use crate::marker::{Marker, WORDPRESS_END};
use crate::parser::{lines_with_offsets, locate};

/// Replace the body of an existing block, keeping both sentinels and all
/// surrounding text byte-for-byte.
///
/// A block whose BEGIN line has no END is closed right after the BEGIN
/// line: the new body and an END line are inserted there and the rest of
/// the document is kept.
///
/// # Errors
/// Returns `Error::BlockNotFound` if `document` has no BEGIN line for
/// `marker`.
///
/// # Example
/// ```
/// use htguard_blocks::{Marker, replace_body};
///
/// let doc = "# BEGIN Demo\nold\n# END Demo\n";
/// let updated = replace_body(doc, &Marker::new("Demo"), "new").unwrap();
/// assert_eq!(updated, "# BEGIN Demo\nnew\n# END Demo\n");
/// ```
pub fn replace_body(document: &str, marker: &Marker, body: &str) -> Result<String> {
    let span = locate(document, marker).ok_or_else(|| Error::BlockNotFound {
        marker: marker.name().to_string(),
    })?;

    let mut result = String::with_capacity(document.len() + body.len() + marker.name().len() + 8);
    if span.terminated {
        result.push_str(&document[..span.body.start]);
        push_body(&mut result, body);
        result.push_str(&document[span.body.end..]);
    } else {
        tracing::warn!(
            marker = %marker,
            line = span.start_line,
            "closing unterminated block after its BEGIN line"
        );
        result.push_str(&document[..span.begin.end]);
        if !result.ends_with('\n') {
            result.push('\n');
        }
        push_body(&mut result, body);
        result.push_str(&marker.end_line());
        result.push('\n');
        result.push_str(&document[span.begin.end..]);
    }
    Ok(result)
}

fn push_body(out: &mut String, body: &str) {
    out.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        out.push('\n');
    }
}

/// Insert `block` right after the WordPress rewrite section.
///
/// Shorthand for [`merge_after`] with the `# END WordPress` anchor.
pub fn merge(document: &str, block: &str) -> String {
    merge_after(document, WORDPRESS_END, block)
}

/// Insert `block` immediately after the first line containing `anchor`,
/// or append it when no such line exists.
///
/// This is plain insertion: an existing block with the same marker is not
/// detected. Use [`upsert_block`] when one may already be present.
pub fn merge_after(document: &str, anchor: &str, block: &str) -> String {
    if block.is_empty() {
        return document.to_string();
    }

    let position = lines_with_offsets(document)
        .find(|(_, line)| line.contains(anchor))
        .map(|(offset, line)| offset + line.len())
        .unwrap_or(document.len());

    let mut result = String::with_capacity(document.len() + block.len() + 2);
    result.push_str(&document[..position]);
    if position > 0 && !result.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(block);
    if !block.ends_with('\n') && position < document.len() {
        result.push('\n');
    }
    result.push_str(&document[position..]);
    result
}

/// Bring the `marker` block in `document` to `body`.
///
/// An existing block has its body replaced in place, including with an
/// empty body, which keeps the sentinels so the section can be found again
/// later. Without an existing block a non-empty body is wrapped in
/// sentinels and inserted after `anchor`; an empty body leaves the document
/// untouched.
pub fn upsert_block(document: &str, marker: &Marker, anchor: &str, body: &str) -> String {
    match replace_body(document, marker, body) {
        Ok(updated) => updated,
        Err(Error::BlockNotFound { .. }) if body.is_empty() => document.to_string(),
        Err(Error::BlockNotFound { .. }) => {
            tracing::debug!(marker = %marker, anchor, "no existing block, inserting after anchor");
            merge_after(document, anchor, &marker.wrap(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BLOCK: &str = "# BEGIN Protect XML-RPC\nDeny from all\n# END Protect XML-RPC\n";

    #[test]
    fn test_merge_after_anchor() {
        let doc = "# BEGIN WordPress\nRewriteEngine On\n# END WordPress\n# custom\n";
        assert_eq!(
            merge(doc, BLOCK),
            format!("# BEGIN WordPress\nRewriteEngine On\n# END WordPress\n{BLOCK}# custom\n")
        );
    }

    #[test]
    fn test_merge_anchor_on_last_line_without_newline() {
        assert_eq!(merge("# END WordPress", BLOCK), format!("# END WordPress\n{BLOCK}"));
    }

    #[test]
    fn test_merge_appends_without_anchor() {
        assert_eq!(merge("Options -Indexes", BLOCK), format!("Options -Indexes\n{BLOCK}"));
        assert_eq!(merge("", BLOCK), BLOCK);
    }

    #[test]
    fn test_merge_empty_block_is_identity() {
        assert_eq!(merge("# END WordPress\n", ""), "# END WordPress\n");
    }

    #[test]
    fn test_replace_body_to_empty() {
        let doc = format!("top\n{BLOCK}bottom\n");
        let result = replace_body(&doc, &Marker::new("Protect XML-RPC"), "").unwrap();
        assert_eq!(result, "top\n# BEGIN Protect XML-RPC\n# END Protect XML-RPC\nbottom\n");
    }

    #[test]
    fn test_replace_body_missing_block() {
        let result = replace_body("nothing", &Marker::new("Protect XML-RPC"), "x");
        assert!(matches!(result, Err(Error::BlockNotFound { marker }) if marker == "Protect XML-RPC"));
    }

    #[test]
    fn test_upsert_inserts_then_updates() {
        let marker = Marker::new("Protect XML-RPC");
        let inserted = upsert_block("# END WordPress\n", &marker, WORDPRESS_END, "Deny from all\n");
        assert_eq!(inserted, format!("# END WordPress\n{BLOCK}"));

        let updated = upsert_block(&inserted, &marker, WORDPRESS_END, "Allow from all\n");
        assert_eq!(
            updated,
            "# END WordPress\n# BEGIN Protect XML-RPC\nAllow from all\n# END Protect XML-RPC\n"
        );
    }

    #[test]
    fn test_replace_body_closes_unterminated_block() {
        let marker = Marker::new("Protect XML-RPC");
        let doc = "# BEGIN Protect XML-RPC\n# BEGIN WordPress\nRewriteEngine On\n# END WordPress\n";

        let result = replace_body(doc, &marker, "Deny from all\n").unwrap();
        assert_eq!(
            result,
            format!("{BLOCK}# BEGIN WordPress\nRewriteEngine On\n# END WordPress\n")
        );
        assert_eq!(replace_body(&result, &marker, "Deny from all\n").unwrap(), result);
    }

    #[test]
    fn test_replace_body_closes_trailing_begin_without_newline() {
        let marker = Marker::new("Protect XML-RPC");
        let result = replace_body("top\n# BEGIN Protect XML-RPC", &marker, "").unwrap();
        assert_eq!(result, "top\n# BEGIN Protect XML-RPC\n# END Protect XML-RPC\n");
    }

    #[test]
    fn test_upsert_empty_body_without_block_is_noop() {
        let marker = Marker::new("Protect XML-RPC");
        assert_eq!(upsert_block("doc\n", &marker, WORDPRESS_END, ""), "doc\n");
    }
}
