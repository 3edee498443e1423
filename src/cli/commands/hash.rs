//! hash command - Print the fingerprint of a config

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::codec;
use crate::core::hash::Hash;
use crate::remote::ConfigStore;
use crate::ui::output;

/// Format a hash for display: the mnemonic, then the hex digest if `full`.
pub fn format_hash(hash: &Hash, length: usize, full: bool) -> Result<String> {
    let mnemonic = hash.mnemonic(length)?;
    if full {
        Ok(format!("{}  {}", mnemonic, hash.to_hex()))
    } else {
        Ok(mnemonic)
    }
}

/// Print the fingerprint of an env file, or of the remote config.
pub fn hash(
    ctx: &Context,
    store: &dyn ConfigStore,
    file: Option<&Path>,
    remote: bool,
    length: Option<usize>,
    full: bool,
) -> Result<()> {
    let config = if remote {
        store
            .fetch()
            .with_context(|| format!("Failed to fetch config from {}", store.name()))?
    } else {
        let path = ctx.env_file(file)?;
        output::debug(format!("hashing {}", path.display()), ctx.verbosity());
        codec::open(&path)?
    };

    let length = length.unwrap_or_else(|| ctx.settings.mnemonic_length());
    println!("{}", format_hash(&config.hash(), length, full)?);
    Ok(())
}
