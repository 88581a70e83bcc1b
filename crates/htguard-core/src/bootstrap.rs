//! Creation of a starter rewrite file
//!
//! The editor only owns one block; without a rewrite file at all there is
//! nothing to anchor it to. A site missing the file gets the stock
//! WordPress front-controller rules so the anchor line exists.

use htguard_fs::{FileAccess, NormalizedPath};

use crate::{Error, Result};

/// Stock WordPress rewrite section.
pub const BASIC_WORDPRESS_RULES: &str = "\
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

/// What [`ensure_rules_file`] found or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The file was already present and left untouched
    Existing,
    /// A starter file was written
    Created,
}

/// Make sure the rewrite file exists, creating a starter file if needed.
///
/// # Errors
///
/// Returns `Error::RulesFileMissing` when the file is absent and cannot be
/// created. Callers treat that as the feature being unavailable.
pub fn ensure_rules_file<F: FileAccess>(files: &F, path: &NormalizedPath) -> Result<BootstrapOutcome> {
    if files.exists(path) {
        return Ok(BootstrapOutcome::Existing);
    }
    if !files.is_writable(path) {
        tracing::warn!(path = %path, "rewrite file missing and cannot be created");
        return Err(Error::RulesFileMissing {
            path: path.to_native(),
        });
    }

    files.write(path, BASIC_WORDPRESS_RULES)?;
    tracing::info!(path = %path, "created starter rewrite file");
    Ok(BootstrapOutcome::Created)
}
