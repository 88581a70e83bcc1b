//! Command implementations for htguard-cli

pub mod apply;
pub mod filter;
pub mod init;
pub mod set;
pub mod status;

pub use apply::{run_apply, run_diff, run_rules};
pub use filter::{run_filter_headers, run_filter_methods};
pub use init::run_init;
pub use set::run_set;
pub use status::run_status;
