//! set command - Set one or more config vars

use anyhow::{Context as _, Result};

use super::pull::ok_tag;
use crate::cli::Context;
use crate::core::codec;
use crate::core::model::Config;
use crate::remote::ConfigStore;
use crate::ui::output::{self, Role};

/// Parse `KEY=VALUE` arguments into a config.
///
/// A key given twice keeps its last value.
pub fn parse_pairs(pairs: &[String]) -> Result<Config> {
    let mut vars = Config::new();
    for pair in pairs {
        let (key, value) = codec::parse_var(pair)?;
        vars.insert(key, value);
    }
    Ok(vars)
}

/// Set every pair on the remote store in a single call.
///
/// The printed mnemonic is that of the whole remote config after the
/// update, so it matches what `status` and `hash --remote` show.
pub fn set(ctx: &Context, store: &dyn ConfigStore, pairs: &[String]) -> Result<()> {
    let verbosity = ctx.verbosity();
    let palette = ctx.palette();

    let vars = parse_pairs(pairs)?;
    let remote = store
        .fetch()
        .with_context(|| format!("Failed to fetch config from {}", store.name()))?;
    store
        .set(&vars)
        .with_context(|| format!("Failed to set config on {}", store.name()))?;

    for var in vars.iter() {
        output::print(output::format_var(palette, var.key, var.value), verbosity);
    }
    output::print(summary(ctx, remote, &vars, &store.name())?, verbosity);

    Ok(())
}

/// `OK [mnemonic] N var(s) set on APP`, hashing `remote` with `vars` applied.
fn summary(ctx: &Context, remote: Config, vars: &Config, name: &str) -> Result<String> {
    let mut updated = remote;
    updated.extend(vars.clone());
    let mnemonic = updated.hash().mnemonic(ctx.settings.mnemonic_length())?;

    Ok(format!(
        "{} {} var(s) set on {}",
        ok_tag(ctx, &mnemonic),
        vars.len(),
        ctx.palette().paint(Role::Remote, name)
    ))
}
