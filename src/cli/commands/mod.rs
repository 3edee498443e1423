//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its env file and settings from the [`Context`]
//! 2. Reads or writes the file through the codec
//! 3. Talks to the app through a [`ConfigStore`]
//! 4. Formats and displays output
//!
//! Handlers that touch the app take the store as `&dyn ConfigStore` so
//! tests can pass a mock.

mod completion;
mod config_cmd;
mod find;
mod get;
mod hash;
mod pull;
mod push;
mod search;
mod set;
mod status;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use find::find;
pub use get::get;
pub use hash::{format_hash, hash};
pub use pull::pull;
pub use push::{plan_push, push};
pub use search::{matching_lines, search};
pub use set::{parse_pairs, set};
pub use status::{format_diff, status};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::remote::ConfigStore;
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    let heroku = ctx.heroku();
    output::debug(
        format!(
            "heroku bin '{}', app '{}'",
            ctx.settings.heroku_bin(),
            heroku.name()
        ),
        ctx.verbosity(),
    );
    let store: &dyn ConfigStore = &heroku;

    match command {
        Command::Pull { file, force } => pull::pull(ctx, store, file.as_deref(), force),
        Command::Push {
            file,
            mode,
            dry_run,
        } => push::push(ctx, store, file.as_deref(), mode, dry_run),
        Command::Get { key } => get::get(ctx, store, &key),
        Command::Set { vars } => set::set(ctx, store, &vars),
        Command::Search { term, local } => search::search(ctx, store, &term, local.as_deref()),
        Command::Hash {
            file,
            remote,
            length,
            full,
        } => hash::hash(ctx, store, file.as_deref(), remote, length, full),
        Command::Status { file } => status::status(ctx, store, file.as_deref()),
        Command::Find { root } => find::find(ctx, root.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set {
                key,
                value,
                project,
            } => config_cmd::set(ctx, &key, &value, project),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
