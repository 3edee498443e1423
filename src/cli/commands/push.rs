//! push command - Upload env file variables to the app
//!
//! # Modes
//!
//! | Mode        | Missing remotely | Different remotely | Same remotely |
//! |-------------|------------------|--------------------|---------------|
//! | `append`    | sent             | skipped            | skipped       |
//! | `overwrite` | sent             | sent               | skipped       |
//!
//! Keys only present remotely are never unset.

use std::path::Path;

use anyhow::{Context as _, Result};

use super::pull::ok_tag;
use crate::cli::{Context, PushMode};
use crate::core::codec;
use crate::core::model::{Config, ConfigDiff};
use crate::remote::ConfigStore;
use crate::ui::output::{self, Role};

/// Variables that `mode` would send, given the diff of local against remote.
pub fn plan_push(diff: &ConfigDiff, mode: PushMode) -> Config {
    let mut plan: Config = diff.added.iter().cloned().collect();
    if mode == PushMode::Overwrite {
        plan.extend(
            diff.changed
                .iter()
                .map(|change| (change.key.clone(), change.new.clone())),
        );
    }
    plan
}

/// Send variables from `file` to the remote store.
pub fn push(
    ctx: &Context,
    store: &dyn ConfigStore,
    file: Option<&Path>,
    mode: PushMode,
    dry_run: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let palette = ctx.palette();
    let path = ctx.env_file(file)?;

    let local = codec::open(&path)?;
    let remote = store
        .fetch()
        .with_context(|| format!("Failed to fetch config from {}", store.name()))?;

    let diff = local.diff(&remote);
    let plan = plan_push(&diff, mode);
    output::debug(
        format!(
            "{} added, {} changed, {} only on {}",
            diff.added.len(),
            diff.changed.len(),
            diff.removed.len(),
            store.name()
        ),
        verbosity,
    );

    if mode == PushMode::Append && !diff.changed.is_empty() {
        output::warn(
            format!(
                "skipping {} changed var(s); use --mode overwrite to replace them",
                diff.changed.len()
            ),
            verbosity,
        );
    }

    if plan.is_empty() {
        output::print(
            format!(
                "Nothing to push; {} already has every var in {}.",
                palette.paint(Role::Remote, &store.name()),
                palette.paint(Role::Local, &path.display().to_string()),
            ),
            verbosity,
        );
        return Ok(());
    }

    for var in plan.iter() {
        let marker = if remote.contains_key(var.key) { "~" } else { "+" };
        output::print(
            format!("{marker} {}", output::format_var(palette, var.key, var.value)),
            verbosity,
        );
    }

    if dry_run {
        output::print(
            format!("Dry run: {} var(s) not sent.", plan.len()),
            verbosity,
        );
        return Ok(());
    }

    store
        .set(&plan)
        .with_context(|| format!("Failed to set config on {}", store.name()))?;

    let mut updated = remote;
    updated.extend(plan.clone());
    let mnemonic = updated.hash().mnemonic(ctx.settings.mnemonic_length())?;

    output::print(
        format!(
            "{} {} var(s) pushed to {}",
            ok_tag(ctx, &mnemonic),
            plan.len(),
            palette.paint(Role::Remote, &store.name()),
        ),
        verbosity,
    );

    Ok(())
}
