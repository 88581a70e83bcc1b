//! Status command implementation

use colored::Colorize;
use htguard_core::{FileState, StatusReport, Toggle};

use crate::context::SiteContext;
use crate::error::Result;

/// Run the status command
pub fn run_status(ctx: &SiteContext, json: bool) -> Result<()> {
    let settings = ctx.settings()?;
    let report = StatusReport::collect(&ctx.editor(), &settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "XML-RPC Status".bold());
    println!();
    println!("{}:     {}", "Rules file".dimmed(), report.path);
    println!("{}:          {}", "State".dimmed(), format_state(report.state));
    println!("{}:        {}", "XML-RPC".dimmed(), format_toggle(report.xmlrpc));
    println!("{}:       {}", "Pingback".dimmed(), format_toggle(report.pingback));
    println!("{}:   {}", "Settings file".dimmed(), ctx.store.path());
    println!();

    println!("{}:", "Current block".bold());
    if report.current_block.trim().is_empty() {
        println!("  {}", "(empty)".dimmed());
    } else {
        for line in report.current_block.lines() {
            println!("  {line}");
        }
    }
    println!();

    if report.in_sync {
        println!("{} Rules file matches settings", "OK".green().bold());
    } else {
        println!(
            "{} Rules file is out of date (run {})",
            "DRIFT".yellow().bold(),
            "htguard apply".cyan()
        );
    }

    Ok(())
}

fn format_toggle(toggle: Toggle) -> colored::ColoredString {
    match toggle {
        Toggle::Allow => "allow".green(),
        Toggle::Disallow => "disallow".red(),
    }
}

fn format_state(state: FileState) -> colored::ColoredString {
    match state {
        FileState::Writable | FileState::Creatable => state.as_str().green(),
        FileState::ReadOnly => state.as_str().yellow(),
        FileState::Unavailable => state.as_str().red(),
    }
}
