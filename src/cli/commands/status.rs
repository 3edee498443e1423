//! status command - Compare an env file with the app's config

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::codec;
use crate::core::model::ConfigDiff;
use crate::remote::ConfigStore;
use crate::ui::output::{self, Palette, Role};

/// One line per differing key, sorted by key.
///
/// `+` is only in the file, `-` only on the app, `~` differs.
pub fn format_diff(palette: &dyn Palette, diff: &ConfigDiff) -> Vec<String> {
    let mut lines: Vec<(&str, String)> = Vec::new();

    for (key, value) in &diff.added {
        lines.push((key.as_str(), format!("+ {}", output::format_var(palette, key, value))));
    }
    for (key, value) in &diff.removed {
        lines.push((key.as_str(), format!("- {}", output::format_var(palette, key, value))));
    }
    for change in &diff.changed {
        lines.push((
            change.key.as_str(),
            format!(
                "~ {} ({} -> {})",
                palette.paint(Role::Remote, &change.key),
                change.old,
                change.new
            ),
        ));
    }

    lines.sort_by(|a, b| a.0.cmp(b.0));
    lines.into_iter().map(|(_, line)| line).collect()
}

/// Show both fingerprints and, if they differ, the key-level diff.
pub fn status(ctx: &Context, store: &dyn ConfigStore, file: Option<&Path>) -> Result<()> {
    let palette = ctx.palette();
    let length = ctx.settings.mnemonic_length();
    let path = ctx.env_file(file)?;

    let local = codec::open(&path)?;
    let remote = store
        .fetch()
        .with_context(|| format!("Failed to fetch config from {}", store.name()))?;

    println!(
        "{}  {}",
        local.hash().mnemonic(length)?,
        palette.paint(Role::Local, &path.display().to_string())
    );
    println!(
        "{}  {}",
        remote.hash().mnemonic(length)?,
        palette.paint(Role::Remote, &store.name())
    );

    let diff = local.diff(&remote);
    if diff.is_empty() {
        println!("{}", palette.paint(Role::Success, "in sync"));
        return Ok(());
    }

    println!();
    for line in format_diff(palette, &diff) {
        println!("{}", line);
    }
    Ok(())
}
