//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use htguard_core::Toggle;

/// htguard - Manage XML-RPC access rules in Apache rewrite files
#[derive(Parser, Debug)]
#[command(name = "htguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Site root holding the rewrite file
    #[arg(long, global = true, env = "HTGUARD_ROOT", default_value = ".")]
    pub root: String,

    /// Site configuration file (default: <root>/.htguard.toml)
    #[arg(long, global = true, env = "HTGUARD_CONFIG")]
    pub config: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a starter WordPress rewrite file if none exists
    Init,

    /// Show settings and whether the rewrite file matches them
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Change settings, then apply them
    ///
    /// Examples:
    ///   htguard set --xmlrpc disallow            # Deny xmlrpc.php entirely
    ///   htguard set --pingback disallow          # Only strip pingbacks
    ///   htguard set --xmlrpc allow --no-apply    # Store without touching .htaccess
    Set {
        /// Block (disallow) or allow the XML-RPC endpoint
        #[arg(long)]
        xmlrpc: Option<Toggle>,

        /// Block (disallow) or allow pingback methods and headers
        #[arg(long)]
        pingback: Option<Toggle>,

        /// Only store the settings
        #[arg(long)]
        no_apply: bool,
    },

    /// Rewrite the Protect XML-RPC block to match the settings
    Apply {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview what apply would change
    Diff,

    /// Print the generated block and the block currently in the file
    Rules,

    /// Filter an XML-RPC method table (JSON object on stdin)
    FilterMethods,

    /// Filter HTTP response headers (JSON object on stdin)
    FilterHeaders,

    /// Generate shell completions
    ///
    /// Examples:
    ///   htguard completions bash > ~/.local/share/bash-completion/completions/htguard
    ///   htguard completions zsh > ~/.zfunc/_htguard
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
