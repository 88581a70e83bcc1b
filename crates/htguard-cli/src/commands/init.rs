//! Init command implementation

use colored::Colorize;
use htguard_core::{BootstrapOutcome, ensure_rules_file};

use crate::context::SiteContext;
use crate::error::Result;

/// Create the starter rewrite file when the site has none.
pub fn run_init(ctx: &SiteContext) -> Result<()> {
    let path = ctx.rules_path();
    match ensure_rules_file(&ctx.files, &path)? {
        BootstrapOutcome::Created => {
            println!("{} Created {}", "OK".green().bold(), path.to_string().cyan());
            println!(
                "   Review it and add any rules your site needs, then run {}.",
                "htguard apply".cyan()
            );
        }
        BootstrapOutcome::Existing => {
            println!("{} {} already exists", "OK".green().bold(), path.to_string().cyan());
        }
    }
    Ok(())
}
