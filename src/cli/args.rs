//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--app` / `-a <app>`: Heroku app to target
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output
//! - `--no-color`: Disable colored output

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// herofig - Sync .env files with Heroku config vars
#[derive(Parser, Debug)]
#[command(name = "herofig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Heroku app to target (defaults to the `app` setting, then the
    /// Heroku CLI's own default)
    #[arg(short, long, global = true)]
    pub app: Option<String>,

    /// Run as if herofig was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(
        long = "interactive",
        global = true,
        conflicts_with = "no_interactive"
    )]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns `Some(true)` if `--interactive` was set, `Some(false)` if
    /// `--no-interactive` or `--quiet` was set or stdin is not a TTY, and
    /// `None` when the settings default should decide.
    pub fn interactive(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet || !std::io::stdin().is_terminal() {
            Some(false)
        } else {
            None
        }
    }
}

/// How `push` treats keys that already exist remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PushMode {
    /// Only add keys the remote does not have yet
    #[default]
    Append,
    /// Add missing keys and replace values that differ
    Overwrite,
}

/// Shells supported by `completion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the app's config vars into an env file
    #[command(
        name = "pull",
        long_about = "Download the app's config vars into an env file.\n\n\
            The file is rewritten in canonical form: one KEY=VALUE per line, sorted \
            by key. If the file already exists you are asked before it is replaced.",
        after_help = "\
EXAMPLES:
    # Save config for the default app to .env
    herofig pull

    # Save staging config to its own file without prompting
    herofig pull staging.env --app my-app-staging --force"
    )]
    Pull {
        /// Env file to write (defaults to the `file` setting, then .env)
        file: Option<PathBuf>,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Upload variables from an env file to the app
    #[command(
        name = "push",
        long_about = "Upload variables from an env file to the app.\n\n\
            In append mode only keys the app does not have yet are sent. In overwrite \
            mode keys whose values differ are replaced as well. Unchanged keys are never \
            sent and keys missing from the file are never removed from the app.",
        after_help = "\
EXAMPLES:
    # Add new keys from .env, leave existing ones alone
    herofig push

    # See what overwrite would change without touching the app
    herofig push prod.env --mode overwrite --dry-run"
    )]
    Push {
        /// Env file to read (defaults to the `file` setting, then .env)
        file: Option<PathBuf>,

        /// How to treat keys that already exist remotely
        #[arg(short, long, value_enum, default_value_t = PushMode::Append)]
        mode: PushMode,

        /// Show what would be sent without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the value of a single config var
    #[command(name = "get")]
    Get {
        /// Variable name
        key: String,
    },

    /// Set one or more config vars
    #[command(
        name = "set",
        after_help = "\
EXAMPLES:
    herofig set LOG_LEVEL=debug
    herofig set SECRET=base64:QmVvbm9kZQ== FEATURE_X=on"
    )]
    Set {
        /// KEY=VALUE pairs
        #[arg(required = true, value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },

    /// Find config vars whose name contains a term
    #[command(name = "search")]
    Search {
        /// Case-insensitive search term
        term: String,

        /// Search an env file instead of the app
        #[arg(short, long, value_name = "FILE")]
        local: Option<PathBuf>,
    },

    /// Print the fingerprint of an env file or of the app's config
    #[command(
        name = "hash",
        long_about = "Print the fingerprint of an env file or of the app's config.\n\n\
            The fingerprint is a SHA-1 over the canonical KEY=VALUE lines, sorted by \
            key, so it only depends on the variables and not on file layout. It is \
            shown as a short pronounceable mnemonic; use --full for the hex digest."
    )]
    Hash {
        /// Env file to hash (defaults to the `file` setting, then .env)
        file: Option<PathBuf>,

        /// Hash the app's config instead of a file
        #[arg(short, long, conflicts_with = "file")]
        remote: bool,

        /// Number of mnemonic syllables (1-10)
        #[arg(short, long)]
        length: Option<usize>,

        /// Also print the full hex digest
        #[arg(long)]
        full: bool,
    },

    /// Compare an env file against the app's config
    #[command(name = "status")]
    Status {
        /// Env file to compare (defaults to the `file` setting, then .env)
        file: Option<PathBuf>,
    },

    /// List env files below a directory
    #[command(name = "find")]
    Find {
        /// Directory to search (defaults to the working directory)
        root: Option<PathBuf>,
    },

    /// Get, set, or list herofig settings
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved value of a setting
    Get {
        /// Setting name
        key: String,
    },

    /// Set a setting
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,

        /// Write to .herofig.toml in the working directory instead of the
        /// global settings file
        #[arg(long)]
        project: bool,
    },

    /// List all settings with their resolved values
    List,
}
