//! Property tests for path normalization and text I/O

use htguard_fs::NormalizedPath;
use htguard_fs::io::{read_text, write_text};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        prop_assert!(!as_str.contains("//"));
        prop_assert!(!as_str.is_empty());

        // Cleaning an already clean path changes nothing
        prop_assert_eq!(NormalizedPath::new(as_str), path.clone());
    }

    #[test]
    fn test_join_simple_segment(base in "[a-z]{1,8}(/[a-z]{1,8}){0,3}", name in "[a-z]{1,8}\\.[a-z]{1,4}") {
        let joined = NormalizedPath::new(&base).join(&name);

        prop_assert_eq!(joined.file_name(), Some(name.as_str()));
        prop_assert_eq!(joined.parent(), Some(NormalizedPath::new(&base)));
    }

    #[test]
    fn test_lock_path_is_sibling(name in "[a-z]{1,8}") {
        let path = NormalizedPath::new(format!("/srv/{name}"));
        let lock = path.lock_path();

        prop_assert_eq!(lock.parent(), path.parent());
        prop_assert_eq!(lock.extension(), Some("lock"));
    }
}

#[test]
fn test_text_survives_write_and_read() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(".htaccess"));
    let content = "# BEGIN WordPress\r\nRewriteEngine On\n# END WordPress\n\u{e9}\n";

    write_text(&path, content).unwrap();
    assert_eq!(read_text(&path).unwrap(), content);
}
