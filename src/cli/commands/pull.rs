//! pull command - Download config vars into an env file

use std::path::Path;

use anyhow::{anyhow, Context as _, Result};

use crate::cli::Context;
use crate::core::codec;
use crate::remote::ConfigStore;
use crate::ui::output::{self, Role};
use crate::ui::prompts::{self, PromptError};

/// Fetch the remote config and write it to `file`.
///
/// An existing file is only replaced after confirmation, or with `force`.
pub fn pull(ctx: &Context, store: &dyn ConfigStore, file: Option<&Path>, force: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let palette = ctx.palette();
    let path = ctx.env_file(file)?;

    if !force {
        let confirmed = prompts::confirm_overwrite(palette, &path, ctx.interactive).map_err(
            |e| match e {
                PromptError::NotInteractive => anyhow!(
                    "{} already exists. Use --force to overwrite it.",
                    path.display()
                ),
                other => anyhow!(other),
            },
        )?;
        if !confirmed {
            output::print("Aborted.", verbosity);
            return Ok(());
        }
    }

    output::debug(format!("fetching config from {}", store.name()), verbosity);
    let config = store
        .fetch()
        .with_context(|| format!("Failed to fetch config from {}", store.name()))?;

    codec::save(&path, &config)?;

    let mnemonic = config.hash().mnemonic(ctx.settings.mnemonic_length())?;
    output::print(
        format!(
            "{} {} vars from {} into {}",
            ok_tag(ctx, &mnemonic),
            config.len(),
            palette.paint(Role::Remote, &store.name()),
            palette.paint(Role::Local, &path.display().to_string()),
        ),
        verbosity,
    );

    Ok(())
}

/// `OK [mnemonic]` with the mnemonic in the remote color.
pub(super) fn ok_tag(ctx: &Context, mnemonic: &str) -> String {
    let palette = ctx.palette();
    format!(
        "{}{}{}",
        palette.paint(Role::Success, "OK ["),
        palette.paint(Role::Remote, mnemonic),
        palette.paint(Role::Success, "]"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Config;
    use crate::remote::mock::{FailOn, MockOperation, MockStore};
    use crate::remote::StoreError;
    use std::fs;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> Context {
        Context {
            cwd: Some(dir.path().to_path_buf()),
            quiet: true,
            interactive: false,
            ..Default::default()
        }
    }

    fn remote() -> MockStore {
        MockStore::with_config(
            [("PORT", "80"), ("DATABASE_URL", "postgres://x?a=b")]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn writes_canonical_file() {
        let dir = TempDir::new().unwrap();
        let store = remote();

        pull(&context(&dir), &store, None, false).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(".env")).unwrap(),
            "DATABASE_URL=postgres://x?a=b\nPORT=80\n"
        );
        assert_eq!(store.operations(), vec![MockOperation::Fetch]);
    }

    #[test]
    fn explicit_file() {
        let dir = TempDir::new().unwrap();

        pull(&context(&dir), &remote(), Some(Path::new("prod.env")), false).unwrap();

        let written = codec::open(&dir.path().join("prod.env")).unwrap();
        assert_eq!(written, remote().vars());
    }

    #[test]
    fn refuses_to_overwrite_without_force_when_non_interactive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "KEEP=me\n").unwrap();
        let store = remote();

        let err = pull(&context(&dir), &store, None, false).unwrap_err();

        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "KEEP=me\n");
        assert!(store.operations().is_empty());
    }

    #[test]
    fn force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "KEEP=me\n").unwrap();

        pull(&context(&dir), &remote(), None, true).unwrap();

        let written = codec::open(&path).unwrap();
        assert_eq!(written.get("KEEP"), None);
        assert_eq!(written.get("PORT"), Some("80"));
    }

    #[test]
    fn fetch_failure_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let store = MockStore::new();
        store.fail_on(FailOn::Fetch(StoreError::CommandFailed {
            program: "heroku".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "Couldn't find that app.".to_string(),
        }));

        let err = pull(&context(&dir), &store, None, false).unwrap_err();

        assert!(format!("{err:#}").contains("Couldn't find that app."));
        assert!(!dir.path().join(".env").exists());
    }

    #[test]
    fn empty_remote_writes_empty_file() {
        let dir = TempDir::new().unwrap();

        pull(&context(&dir), &MockStore::with_config(Config::new()), None, false).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join(".env")).unwrap(), "");
    }

    #[test]
    fn multiline_value_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = MockStore::with_config(
            [("CERT", "-----BEGIN-----\nabc\n-----END-----"), ("PORT", "80")]
                .into_iter()
                .collect(),
        );

        let err = pull(&context(&dir), &store, None, false).unwrap_err();

        assert!(format!("{err:#}").contains("CERT"));
        assert!(!dir.path().join(".env").exists());
        assert!(!dir.path().join(".env.tmp").exists());
    }
}
