//! Apply, diff and rules command implementations

use colored::Colorize;
use htguard_core::ApplyOutcome;

use crate::context::SiteContext;
use crate::error::Result;

/// Rewrite the block, or preview the change with `dry_run`.
pub fn run_apply(ctx: &SiteContext, dry_run: bool) -> Result<()> {
    if dry_run {
        return run_diff(ctx);
    }

    let settings = ctx.settings()?;
    let path = ctx.rules_path();

    match ctx.editor().apply(&settings)? {
        ApplyOutcome::Unchanged => {
            println!("{} {} already matches settings", "OK".green().bold(), path);
        }
        ApplyOutcome::Written { created } => {
            let verb = if created { "Created" } else { "Updated" };
            println!("{} {}", verb.green().bold(), path.to_string().cyan());
        }
        ApplyOutcome::ManualRequired { rules, document } => {
            print_manual_instructions(&path.to_string(), &rules, &document);
        }
    }
    Ok(())
}

/// Show the pending change as a unified diff.
pub fn run_diff(ctx: &SiteContext) -> Result<()> {
    let settings = ctx.settings()?;
    let path = ctx.rules_path().to_string();
    let plan = ctx.editor().plan(&settings)?;

    if plan.is_noop() {
        println!("{} No changes needed. Rules file is in sync.", "OK".green().bold());
        return Ok(());
    }

    for line in plan.diff(&path).lines() {
        let colored = match line.chars().next() {
            Some('+') if !line.starts_with("+++") => line.green(),
            Some('-') if !line.starts_with("---") => line.red(),
            Some('@') => line.cyan(),
            _ => line.normal(),
        };
        println!("{colored}");
    }
    if !plan.state.can_write() {
        println!();
        println!(
            "{} {} is {}; apply will print the rules instead of writing them.",
            "Note:".yellow().bold(),
            path,
            plan.state.as_str()
        );
    }
    Ok(())
}

/// Print the block the settings produce and the block on disk.
pub fn run_rules(ctx: &SiteContext) -> Result<()> {
    let settings = ctx.settings()?;
    let editor = ctx.editor();
    let generated = editor.template().generate(&settings);

    println!("{}:", "Generated block".bold());
    if generated.is_empty() {
        println!("  {}", "(empty, XML-RPC is allowed)".dimmed());
    } else {
        print!("{generated}");
    }
    println!();

    println!("{}:", "Current block body".bold());
    let current = editor.current_block()?;
    if current.trim().is_empty() {
        println!("  {}", "(empty)".dimmed());
    } else {
        print!("{current}");
    }
    Ok(())
}

fn print_manual_instructions(path: &str, rules: &str, document: &str) {
    println!(
        "{} {} is not writable, so it cannot be updated automatically.",
        "Manual step required:".yellow().bold(),
        path
    );
    println!("These are the rules that belong in the Protect XML-RPC section:");
    println!();
    if rules.is_empty() {
        println!("{}", "(empty section)".dimmed());
    } else {
        print!("{rules}");
    }
    println!();
    println!("Full file contents to paste:");
    println!("{}", "-".repeat(60).dimmed());
    print!("{document}");
    println!("{}", "-".repeat(60).dimmed());
}
