//! [`TestSite`] builder for htguard test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A typical `.htaccess` as WordPress writes it.
pub const WORDPRESS_HTACCESS: &str = "\
# BEGIN WordPress
<IfModule mod_rewrite.c>
RewriteEngine On
RewriteBase /
RewriteRule ^index\\.php$ - [L]
RewriteCond %{REQUEST_FILENAME} !-f
RewriteCond %{REQUEST_FILENAME} !-d
RewriteRule . /index.php [L]
</IfModule>
# END WordPress
";

/// A temporary web root with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use htguard_test_utils::TestSite;
///
/// let site = TestSite::wordpress();
/// site.write_config("[settings]\nallow_disallow = \"disallow\"\n");
/// site.assert_file_contains(".htaccess", "# END WordPress");
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create an empty web root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a web root holding the stock WordPress `.htaccess`.
    pub fn wordpress() -> Self {
        let site = Self::new();
        site.write_htaccess(WORDPRESS_HTACCESS);
        site
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the web root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Absolute path of the site's `.htaccess`.
    pub fn htaccess_path(&self) -> PathBuf {
        self.path(".htaccess")
    }

    /// Overwrite `.htaccess`.
    pub fn write_htaccess(&self, content: &str) {
        fs::write(self.htaccess_path(), content).unwrap();
    }

    /// Read `.htaccess`.
    pub fn read_htaccess(&self) -> String {
        self.read(".htaccess")
    }

    /// Write `.htguard.toml`.
    pub fn write_config(&self, content: &str) {
        fs::write(self.path(".htguard.toml"), content).unwrap();
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let full_path = self.path(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `rel` exists.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` contains `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(rel).display(),
            content,
            file_content
        );
    }
}
