//! Set command implementation

use colored::Colorize;
use htguard_core::{RuleSettings, Toggle};

use super::apply::run_apply;
use crate::context::SiteContext;
use crate::error::{CliError, Result};

/// Update the stored settings, then apply them unless `no_apply`.
pub fn run_set(
    ctx: &mut SiteContext,
    xmlrpc: Option<Toggle>,
    pingback: Option<Toggle>,
    no_apply: bool,
) -> Result<()> {
    if xmlrpc.is_none() && pingback.is_none() {
        return Err(CliError::user(
            "Nothing to set. Pass --xmlrpc and/or --pingback (allow|disallow).",
        ));
    }

    let current = ctx.settings()?;
    let updated = RuleSettings {
        block_xmlrpc: xmlrpc.map_or(current.block_xmlrpc, Toggle::is_blocked),
        block_pingback: pingback.map_or(current.block_pingback, Toggle::is_blocked),
    };
    updated.save(&mut ctx.store)?;

    println!(
        "{} XML-RPC: {}, Pingback: {}",
        "Saved".green().bold(),
        Toggle::from_blocked(updated.block_xmlrpc),
        Toggle::from_blocked(updated.block_pingback)
    );

    if no_apply {
        return Ok(());
    }
    run_apply(ctx, false)
}
