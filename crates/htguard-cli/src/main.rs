//! htguard CLI
//!
//! Manages the `Protect XML-RPC` block of a site's `.htaccess` and exposes
//! the pingback filters to host scripts.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use context::SiteContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow(), e);
    }
    tracing::debug!(root = %cli.root, "starting");

    match cli.command {
        Some(cmd) => execute_command(cmd, Path::new(&cli.root), cli.config.as_deref()),
        None => {
            println!("{} XML-RPC access rules for Apache", "htguard".green().bold());
            println!();
            println!("Run {} for available commands.", "htguard --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: &Path, config: Option<&str>) -> Result<()> {
    match cmd {
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "htguard", &mut std::io::stdout());
            Ok(())
        }
        Commands::FilterMethods => commands::run_filter_methods(&SiteContext::open(root, config)?),
        Commands::FilterHeaders => commands::run_filter_headers(&SiteContext::open(root, config)?),
        Commands::Init => commands::run_init(&SiteContext::open(root, config)?),
        Commands::Status { json } => commands::run_status(&SiteContext::open(root, config)?, json),
        Commands::Set {
            xmlrpc,
            pingback,
            no_apply,
        } => commands::run_set(&mut SiteContext::open(root, config)?, xmlrpc, pingback, no_apply),
        Commands::Apply { dry_run } => commands::run_apply(&SiteContext::open(root, config)?, dry_run),
        Commands::Diff => commands::run_diff(&SiteContext::open(root, config)?),
        Commands::Rules => commands::run_rules(&SiteContext::open(root, config)?),
    }
}
