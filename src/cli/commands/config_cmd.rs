//! config command - Get, set, or list herofig settings

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::settings::{Settings, KNOWN_KEYS};
use crate::ui::output;

/// Print the resolved value of a setting.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    // Key exists but has no value - print nothing
    if let Some(value) = ctx.settings.resolved(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a setting in the global file, or the project file with `project`.
pub fn set(ctx: &Context, key: &str, value: &str, project: bool) -> Result<()> {
    let path = if project {
        let dir = ctx.working_dir()?;
        let mut file = ctx.settings.project.clone().unwrap_or_default();
        file.set(key, value)?;
        Settings::write_project(&dir, &file).context("Failed to write project settings")?
    } else {
        let mut file = ctx.settings.global.clone();
        file.set(key, value)?;
        Settings::write_global(&file).context("Failed to write global settings")?
    };

    output::print(
        format!("Set {} = {} in {}", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// List every setting with its resolved value.
pub fn list(ctx: &Context) -> Result<()> {
    println!("# herofig settings");

    for key in KNOWN_KEYS {
        match ctx.settings.resolved(key)? {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (not set)", key),
        }
    }

    if let Some(path) = ctx.settings.global_settings_loaded_from() {
        println!("# global: {}", path.display());
    }
    if let Some(path) = ctx.settings.project_settings_loaded_from() {
        println!("# project: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn set_project_writes_file() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            cwd: Some(dir.path().to_path_buf()),
            quiet: true,
            ..Default::default()
        };

        set(&ctx, "app", "demo", true).unwrap();

        let written = fs::read_to_string(dir.path().join(".herofig.toml")).unwrap();
        assert!(written.contains("app = \"demo\""), "{written}");
    }

    #[test]
    fn set_keeps_existing_project_values() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".herofig.toml"), "file = \"prod.env\"\n").unwrap();
        let ctx = Context {
            cwd: Some(dir.path().to_path_buf()),
            quiet: true,
            settings: Settings::load(Some(dir.path())).unwrap(),
            ..Default::default()
        };

        set(&ctx, "mnemonic_length", "3", true).unwrap();

        let reloaded = Settings::load(Some(dir.path())).unwrap();
        assert_eq!(reloaded.file(), "prod.env");
        assert_eq!(reloaded.mnemonic_length(), 3);
    }

    #[test]
    fn set_rejects_invalid_value() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            cwd: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(set(&ctx, "mnemonic_length", "0", true).is_err());
        assert!(!dir.path().join(".herofig.toml").exists());
    }

    #[test]
    fn get_unknown_key_fails() {
        assert!(get(&Context::default(), "colour").is_err());
        assert!(get(&Context::default(), "file").is_ok());
    }

    #[test]
    fn list_succeeds() {
        list(&Context::default()).unwrap();
    }
}
