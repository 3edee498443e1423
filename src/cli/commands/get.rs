//! get command - Print the value of a single config var

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::remote::ConfigStore;

/// Print the remote value of `key`.
///
/// The value is printed verbatim, with no decoration, so it can be used in
/// scripts.
pub fn get(_ctx: &Context, store: &dyn ConfigStore, key: &str) -> Result<()> {
    let value = store
        .get(key)
        .with_context(|| format!("Failed to fetch config from {}", store.name()))?;

    match value {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => bail!("{} is not set on {}", key, store.name()),
    }
}
