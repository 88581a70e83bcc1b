//! Block marker lines

/// Anchor line written by WordPress at the end of its own rewrite block.
pub const WORDPRESS_END: &str = "# END WordPress";

/// The name of a marked block and the sentinel lines derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    name: String,
}

impl Marker {
    /// Create a marker. Surrounding whitespace in `name` is ignored.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: name.trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `# BEGIN <name>` sentinel.
    pub fn begin_line(&self) -> String {
        format!("# BEGIN {}", self.name)
    }

    /// The `# END <name>` sentinel.
    pub fn end_line(&self) -> String {
        format!("# END {}", self.name)
    }

    /// Whether `line` carries the BEGIN sentinel.
    ///
    /// Matching is by substring, so `## BEGIN name` and trailing
    /// whitespace or `\r` are tolerated.
    pub fn is_begin(&self, line: &str) -> bool {
        line.contains(&self.begin_line())
    }

    /// Whether `line` carries the END sentinel.
    pub fn is_end(&self, line: &str) -> bool {
        line.contains(&self.end_line())
    }

    /// Wrap `body` in BEGIN/END lines.
    ///
    /// The result is newline-terminated; a non-empty body gets a trailing
    /// newline if it lacks one.
    pub fn wrap(&self, body: &str) -> String {
        let mut block = String::with_capacity(body.len() + 2 * (self.name.len() + 10));
        block.push_str(&self.begin_line());
        block.push('\n');
        block.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            block.push('\n');
        }
        block.push_str(&self.end_line());
        block.push('\n');
        block
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
