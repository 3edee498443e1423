//! search command - Find config vars by name

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::codec;
use crate::core::model::Config;
use crate::core::search::substring_search;
use crate::remote::ConfigStore;
use crate::ui::output::{self, Palette};

/// Lines for every var whose key contains `term`, in key order, with the
/// matches highlighted.
pub fn matching_lines(palette: &dyn Palette, config: &Config, term: &str) -> Vec<String> {
    config
        .iter()
        .filter_map(|var| {
            let matches = substring_search(var.key, term);
            if matches.is_empty() {
                return None;
            }
            Some(format!(
                "{}={}",
                output::format_highlighted(palette, var.key, &matches, term.len()),
                var.value
            ))
        })
        .collect()
}

/// Search the remote config, or the env file at `local`, for `term`.
pub fn search(
    ctx: &Context,
    store: &dyn ConfigStore,
    term: &str,
    local: Option<&Path>,
) -> Result<()> {
    let config = match local {
        Some(file) => codec::open(&ctx.env_file(Some(file))?)?,
        None => store
            .fetch()
            .with_context(|| format!("Failed to fetch config from {}", store.name()))?,
    };

    let lines = matching_lines(ctx.palette(), &config, term);
    if lines.is_empty() {
        output::print(format!("No config vars match '{}'.", term), ctx.verbosity());
        return Ok(());
    }

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
