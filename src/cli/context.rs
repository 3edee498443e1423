//! cli::context
//!
//! Execution context shared by command handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::settings::Settings;
use crate::remote::HerokuCli;
use crate::ui::output::{Ansi, Palette, Plain, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and settings files that
/// affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Heroku app from `--app`.
    pub app: Option<String>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
    /// Colored output enabled.
    pub color: bool,
    /// Loaded tool settings.
    pub settings: Settings,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            app: None,
            debug: false,
            quiet: false,
            interactive: true,
            color: false,
            settings: Settings::default(),
        }
    }
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    pub fn palette(&self) -> &'static dyn Palette {
        if self.color {
            &Ansi
        } else {
            &Plain
        }
    }

    /// The directory commands run in.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine working directory"),
        }
    }

    /// Resolve an env file argument, falling back to the `file` setting.
    ///
    /// Relative paths are taken from the working directory.
    pub fn env_file(&self, file: Option<&Path>) -> Result<PathBuf> {
        let file = match file {
            Some(f) => f.to_path_buf(),
            None => PathBuf::from(self.settings.file()),
        };
        if file.is_absolute() {
            Ok(file)
        } else {
            Ok(self.working_dir()?.join(file))
        }
    }

    /// The app to target: `--app`, then the `app` setting.
    pub fn target_app(&self) -> Option<String> {
        self.app.clone().or_else(|| self.settings.app())
    }

    /// Build the Heroku client for this invocation.
    pub fn heroku(&self) -> HerokuCli {
        HerokuCli::new(self.settings.heroku_bin(), self.target_app())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::SettingsFile;
    use crate::remote::ConfigStore;

    #[test]
    fn env_file_defaults_to_setting() {
        let ctx = Context {
            cwd: Some(PathBuf::from("/work")),
            ..Default::default()
        };

        assert_eq!(ctx.env_file(None).unwrap(), PathBuf::from("/work/.env"));
        assert_eq!(
            ctx.env_file(Some(Path::new("prod.env"))).unwrap(),
            PathBuf::from("/work/prod.env")
        );
        assert_eq!(
            ctx.env_file(Some(Path::new("/abs/x.env"))).unwrap(),
            PathBuf::from("/abs/x.env")
        );
    }

    #[test]
    fn app_flag_overrides_setting() {
        let mut ctx = Context {
            settings: Settings {
                global: SettingsFile {
                    app: Some("from-settings".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(ctx.target_app().as_deref(), Some("from-settings"));

        ctx.app = Some("from-flag".to_string());
        assert_eq!(ctx.target_app().as_deref(), Some("from-flag"));
        assert_eq!(ctx.heroku().name(), "from-flag");
    }

    #[test]
    fn quiet_wins_over_debug() {
        let ctx = Context {
            quiet: true,
            debug: true,
            ..Default::default()
        };
        assert_eq!(ctx.verbosity(), Verbosity::Quiet);
    }
}
