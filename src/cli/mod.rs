//! cli
//!
//! Command-line interface layer for herofig.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load settings and build the execution [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers read and write env files through
//! [`crate::core::codec`] and reach the app only through
//! [`crate::remote::ConfigStore`].

pub mod args;
pub mod commands;
mod context;

pub use args::{Cli, PushMode, Shell};
pub use context::Context;

use crate::core::settings::Settings;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let project_dir = match &cli.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };
    let settings = Settings::load(Some(&project_dir)).context("Failed to load settings")?;

    // CLI flags take precedence over the settings default.
    let interactive = cli.interactive().unwrap_or_else(|| settings.interactive());

    let ctx = Context {
        cwd: cli.cwd.clone(),
        app: cli.app.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive,
        color: output::color_enabled(cli.no_color),
        settings,
    };

    if let Some(path) = ctx.settings.global_settings_loaded_from() {
        output::debug(
            format!("global settings from {}", path.display()),
            ctx.verbosity(),
        );
    }
    if let Some(path) = ctx.settings.project_settings_loaded_from() {
        output::debug(
            format!("project settings from {}", path.display()),
            ctx.verbosity(),
        );
    }

    commands::dispatch(cli.command, &ctx)
}
