//! Marked-block parsing and writing for Apache rewrite files.
//!
//! A marked block is a named region delimited by comment lines:
//!
//! ```text
//! # BEGIN Protect XML-RPC
//! <Files "xmlrpc.php">
//! Deny from all
//! </Files>
//! # END Protect XML-RPC
//! ```
//!
//! Everything outside a block belongs to other collaborators (WordPress
//! core, caching plugins, hand edits) and is never rewritten. All
//! operations share one span model: [`locate`] finds the byte ranges of the
//! first block once, and extraction and replacement both work on that
//! [`BlockSpan`]. A BEGIN without an END reads to the end of the document
//! and is closed right after its BEGIN line when written.

pub mod error;
pub mod marker;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use marker::{Marker, WORDPRESS_END};
pub use parser::{BlockSpan, extract, find_body, has_block, locate};
pub use writer::{merge, merge_after, replace_body, upsert_block};
