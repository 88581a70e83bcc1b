//! Locating and extracting marked blocks.

use std::ops::Range;

use crate::marker::Marker;

/// Byte ranges of a marked block inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// The BEGIN line, including its line terminator.
    pub begin: Range<usize>,
    /// Everything strictly between the marker lines.
    pub body: Range<usize>,
    /// The END line, including its terminator when present. Empty and
    /// positioned at the end of the document when the block is unterminated.
    pub end: Range<usize>,
    /// 1-based line number of the BEGIN line.
    pub start_line: usize,
    /// 1-based line number of the END line, or of the last line when the
    /// block is unterminated.
    pub end_line: usize,
    /// Whether an END line closes the block.
    pub terminated: bool,
}

impl BlockSpan {
    /// The whole block, markers included.
    pub fn full(&self) -> Range<usize> {
        self.begin.start..self.end.end
    }

    /// The body text of this span within `document`.
    pub fn body_text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.body.clone()]
    }
}

/// Iterate `(offset, line)` pairs; each line keeps its `\n` terminator.
pub(crate) fn lines_with_offsets(document: &str) -> impl Iterator<Item = (usize, &str)> {
    document.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// Locate the first block for `marker`.
///
/// Each line is checked for END before BEGIN, so neither sentinel ever
/// lands in the body, and a stray END before any BEGIN is ignored. A BEGIN
/// with no matching END opens a block that runs to the end of the document;
/// the returned span has `terminated == false`.
pub fn locate(document: &str, marker: &Marker) -> Option<BlockSpan> {
    let mut open: Option<(Range<usize>, usize)> = None;
    let mut line_count = 0;

    for (index, (offset, line)) in lines_with_offsets(document).enumerate() {
        line_count = index + 1;
        let range = offset..offset + line.len();
        match &open {
            Some((begin, start_line)) if marker.is_end(line) => {
                return Some(BlockSpan {
                    begin: begin.clone(),
                    body: begin.end..range.start,
                    end: range,
                    start_line: *start_line,
                    end_line: index + 1,
                    terminated: true,
                });
            }
            None if marker.is_begin(line) => open = Some((range, index + 1)),
            _ => {}
        }
    }

    open.map(|(begin, start_line)| {
        tracing::debug!(marker = %marker, start_line, "BEGIN without END, block runs to end of document");
        BlockSpan {
            body: begin.end..document.len(),
            end: document.len()..document.len(),
            begin,
            start_line,
            end_line: line_count,
            terminated: false,
        }
    })
}

/// Body text of the first block for `marker`, if present.
pub fn find_body<'a>(document: &'a str, marker: &Marker) -> Option<&'a str> {
    locate(document, marker).map(|span| span.body_text(document))
}

/// Whether `document` contains a BEGIN line for `marker`, terminated or not.
pub fn has_block(document: &str, marker: &Marker) -> bool {
    locate(document, marker).is_some()
}

/// Extract the body of the `marker` block from a sequence of lines.
///
/// Returns the lines strictly between the BEGIN and END sentinels, each
/// followed by `\n`. Without an END every line after BEGIN is returned.
/// When the block is absent or empty the result is a lone `"\n"`, so
/// callers can always treat "no block yet" as ordinary content.
///
/// # Example
/// ```
/// use htguard_blocks::extract;
///
/// let lines = ["# BEGIN Demo", "Deny from all", "# END Demo"];
/// assert_eq!(extract(&lines, "Demo"), "Deny from all\n");
/// assert_eq!(extract(&lines, "Other"), "\n");
/// ```
pub fn extract<S: AsRef<str>>(lines: &[S], marker: &str) -> String {
    let document = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    match find_body(&document, &Marker::new(marker)) {
        Some(body) if body.ends_with('\n') => body.to_string(),
        Some(body) if !body.is_empty() => format!("{body}\n"),
        _ => "\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn marker() -> Marker {
        Marker::new("Protect XML-RPC")
    }

    #[test]
    fn test_locate_absent() {
        assert!(locate("# BEGIN WordPress\n# END WordPress\n", &marker()).is_none());
        assert!(locate("", &marker()).is_none());
    }

    #[test]
    fn test_locate_spans() {
        let doc = "a\n# BEGIN Protect XML-RPC\nbody\n# END Protect XML-RPC\nz\n";
        let span = locate(doc, &marker()).unwrap();

        assert_eq!(&doc[span.begin.clone()], "# BEGIN Protect XML-RPC\n");
        assert_eq!(span.body_text(doc), "body\n");
        assert_eq!(&doc[span.end.clone()], "# END Protect XML-RPC\n");
        assert_eq!(span.start_line, 2);
        assert_eq!(span.end_line, 4);
        assert_eq!(
            &doc[span.full()],
            "# BEGIN Protect XML-RPC\nbody\n# END Protect XML-RPC\n"
        );
    }

    #[test]
    fn test_end_marker_without_trailing_newline() {
        let doc = "# BEGIN Protect XML-RPC\nbody\n# END Protect XML-RPC";
        let span = locate(doc, &marker()).unwrap();
        assert_eq!(span.end.end, doc.len());
        assert_eq!(span.body_text(doc), "body\n");
        assert!(span.terminated);
    }

    #[test]
    fn test_unterminated_block_runs_to_end() {
        let doc = "a\n# BEGIN Protect XML-RPC\nDeny from all\nz\n";
        let span = locate(doc, &marker()).unwrap();

        assert!(!span.terminated);
        assert_eq!(span.body_text(doc), "Deny from all\nz\n");
        assert_eq!(span.end, doc.len()..doc.len());
        assert_eq!(span.start_line, 2);
        assert_eq!(span.end_line, 4);
        assert!(has_block(doc, &marker()));
    }

    #[test]
    fn test_extract_unterminated_block() {
        assert_eq!(
            extract(&["# BEGIN Protect XML-RPC", "Deny from all"], "Protect XML-RPC"),
            "Deny from all\n"
        );
        assert_eq!(
            extract(&["x", "# BEGIN Protect XML-RPC", "a", "b"], "Protect XML-RPC"),
            "a\nb\n"
        );
        assert_eq!(extract(&["# BEGIN Protect XML-RPC"], "Protect XML-RPC"), "\n");
    }

    #[test]
    fn test_end_before_begin_is_ignored() {
        let doc = "# END Protect XML-RPC\n# BEGIN Protect XML-RPC\nx\n# END Protect XML-RPC\n";
        let span = locate(doc, &marker()).unwrap();
        assert_eq!(span.start_line, 2);
        assert_eq!(span.body_text(doc), "x\n");
    }

    #[test]
    fn test_first_pair_wins() {
        let doc = "# BEGIN Protect XML-RPC\none\n# END Protect XML-RPC\n\
                   # BEGIN Protect XML-RPC\ntwo\n# END Protect XML-RPC\n";
        assert_eq!(find_body(doc, &marker()), Some("one\n"));
    }

    #[test]
    fn test_extract_between_markers() {
        let lines = vec![
            "# BEGIN WordPress",
            "RewriteEngine On",
            "# END WordPress",
            "# BEGIN Protect XML-RPC",
            "<Files \"xmlrpc.php\">",
            "Deny from all",
            "</Files>",
            "# END Protect XML-RPC",
        ];
        assert_eq!(
            extract(&lines, "Protect XML-RPC"),
            "<Files \"xmlrpc.php\">\nDeny from all\n</Files>\n"
        );
    }

    #[test]
    fn test_extract_missing_or_empty() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(extract(&empty, "Protect XML-RPC"), "\n");
        assert_eq!(extract(&["no markers"], "Protect XML-RPC"), "\n");
        assert_eq!(
            extract(&["# BEGIN Protect XML-RPC", "# END Protect XML-RPC"], "Protect XML-RPC"),
            "\n"
        );
    }
}
