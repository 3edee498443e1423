//! core::settings
//!
//! Tool settings and their loading.
//!
//! # Overview
//!
//! herofig has two settings scopes:
//! - **Global**: User-level settings
//! - **Project**: `.herofig.toml` in the working directory
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global settings file
//! 3. Project settings file
//! 4. `HEROFIG_HEROKU_BIN` for the Heroku executable
//! 5. CLI flags (not handled here)
//!
//! # Global Settings Locations
//!
//! Searched in order:
//! 1. `$HEROFIG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/herofig/config.toml`
//! 3. `~/.herofig/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use herofig::core::settings::Settings;
//! use std::path::Path;
//!
//! let settings = Settings::load(Some(Path::new("/path/to/project"))).unwrap();
//!
//! println!("Env file: {}", settings.file());
//! println!("Mnemonic length: {}", settings.mnemonic_length());
//! ```

pub mod schema;

pub use schema::{SettingsFile, KNOWN_KEYS};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default env file name.
pub const DEFAULT_FILE: &str = ".env";

/// Default number of mnemonic syllables.
pub const DEFAULT_MNEMONIC_LENGTH: usize = 2;

/// Default Heroku CLI executable.
pub const DEFAULT_HEROKU_BIN: &str = "heroku";

/// Project settings file name.
pub const PROJECT_FILE: &str = ".herofig.toml";

/// Errors from settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write settings file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid setting value: {0}")]
    InvalidValue(String),

    #[error("unknown setting '{0}' (known settings: app, file, mnemonic_length, heroku_bin, interactive)")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged settings from all scopes.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Global settings
    pub global: SettingsFile,
    /// Project settings (if a project file exists)
    pub project: Option<SettingsFile>,
    /// `HEROFIG_HEROKU_BIN` at load time
    pub(crate) env_heroku_bin: Option<String>,
    pub(crate) global_path: Option<PathBuf>,
    pub(crate) project_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from default locations.
    ///
    /// If `project_dir` is provided, also loads `.herofig.toml` from it.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be parsed or
    /// holds invalid values. Missing files are not an error.
    pub fn load(project_dir: Option<&Path>) -> Result<Settings, SettingsError> {
        let (global, global_path) = Self::load_global()?;

        let (project, project_path) = match project_dir {
            Some(dir) => {
                let path = Self::project_settings_path(dir);
                if path.exists() {
                    (Some(Self::read_file(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        let env_heroku_bin = std::env::var("HEROFIG_HEROKU_BIN")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(Settings {
            global,
            project,
            env_heroku_bin,
            global_path,
            project_path,
        })
    }

    fn load_global() -> Result<(SettingsFile, Option<PathBuf>), SettingsError> {
        // 1. $HEROFIG_CONFIG
        if let Ok(path) = std::env::var("HEROFIG_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let settings = Self::read_file(&path)?;
                return Ok((settings, Some(path)));
            }
        }

        // 2. $XDG_CONFIG_HOME/herofig/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("herofig/config.toml");
            if path.exists() {
                let settings = Self::read_file(&path)?;
                return Ok((settings, Some(path)));
            }
        }

        // 3. ~/.herofig/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".herofig/config.toml");
            if path.exists() {
                let settings = Self::read_file(&path)?;
                return Ok((settings, Some(path)));
            }
        }

        Ok((SettingsFile::default(), None))
    }

    fn read_file(path: &Path) -> Result<SettingsFile, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| SettingsError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Canonical global settings path, `~/.herofig/config.toml`.
    ///
    /// `$HEROFIG_CONFIG` takes priority when set, so writes land where
    /// reads come from.
    pub fn global_settings_path() -> Result<PathBuf, SettingsError> {
        if let Ok(path) = std::env::var("HEROFIG_CONFIG") {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let home = dirs::home_dir().ok_or(SettingsError::NoHomeDir)?;
        Ok(home.join(".herofig/config.toml"))
    }

    /// Project settings path inside `dir`.
    pub fn project_settings_path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_FILE)
    }

    /// Write global settings atomically.
    pub fn write_global(settings: &SettingsFile) -> Result<PathBuf, SettingsError> {
        let path = Self::global_settings_path()?;
        Self::write_atomic(&path, settings)?;
        Ok(path)
    }

    /// Write project settings atomically.
    pub fn write_project(dir: &Path, settings: &SettingsFile) -> Result<PathBuf, SettingsError> {
        let path = Self::project_settings_path(dir);
        Self::write_atomic(&path, settings)?;
        Ok(path)
    }

    fn write_atomic(path: &Path, settings: &SettingsFile) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string_pretty(settings)
            .map_err(|e| SettingsError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| SettingsError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| SettingsError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| SettingsError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| SettingsError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessors with precedence
    // =========================================================================

    /// Project and global settings layered together.
    pub fn effective(&self) -> SettingsFile {
        match &self.project {
            Some(project) => self.global.merged_with(project),
            None => self.global.clone(),
        }
    }

    /// Default Heroku app, if any.
    pub fn app(&self) -> Option<String> {
        self.effective().app
    }

    /// Default env file. Defaults to `.env`.
    pub fn file(&self) -> String {
        self.effective()
            .file
            .unwrap_or_else(|| DEFAULT_FILE.to_string())
    }

    /// Mnemonic syllable count. Defaults to 2.
    pub fn mnemonic_length(&self) -> usize {
        self.effective()
            .mnemonic_length
            .unwrap_or(DEFAULT_MNEMONIC_LENGTH)
    }

    /// Heroku executable. `HEROFIG_HEROKU_BIN` wins over files.
    pub fn heroku_bin(&self) -> String {
        self.env_heroku_bin
            .clone()
            .or_else(|| self.effective().heroku_bin)
            .unwrap_or_else(|| DEFAULT_HEROKU_BIN.to_string())
    }

    /// Whether prompts are enabled by default. Defaults to `true`.
    pub fn interactive(&self) -> bool {
        self.effective().interactive.unwrap_or(true)
    }

    /// Resolved value of `key` with defaults applied, for display.
    pub fn resolved(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let value = match key {
            "app" => self.app(),
            "file" => Some(self.file()),
            "mnemonic_length" => Some(self.mnemonic_length().to_string()),
            "heroku_bin" => Some(self.heroku_bin()),
            "interactive" => Some(self.interactive().to_string()),
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    pub fn global_settings_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    pub fn project_settings_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert_eq!(settings.app(), None);
        assert_eq!(settings.file(), ".env");
        assert_eq!(settings.mnemonic_length(), 2);
        assert_eq!(settings.heroku_bin(), "heroku");
        assert!(settings.interactive());
    }

    #[test]
    fn load_project_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PROJECT_FILE),
            r#"
            app = "demo"
            mnemonic_length = 4
            "#,
        )
        .unwrap();

        let settings = Settings::load(Some(temp.path())).unwrap();

        assert_eq!(settings.app().as_deref(), Some("demo"));
        assert_eq!(settings.mnemonic_length(), 4);
        assert_eq!(
            settings.project_settings_loaded_from(),
            Some(temp.path().join(PROJECT_FILE).as_path())
        );
    }

    #[test]
    fn load_without_project_file() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(Some(temp.path())).unwrap();
        assert!(settings.project.is_none());
        assert!(settings.project_settings_loaded_from().is_none());
    }

    #[test]
    fn invalid_project_value_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), "mnemonic_length = 40").unwrap();

        let result = Settings::load(Some(temp.path()));
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn malformed_project_file_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), "app = ").unwrap();

        let result = Settings::load(Some(temp.path()));
        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }

    #[test]
    fn project_overrides_global() {
        let settings = Settings {
            global: SettingsFile {
                app: Some("global".to_string()),
                file: Some("global.env".to_string()),
                ..Default::default()
            },
            project: Some(SettingsFile {
                app: Some("project".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(settings.app().as_deref(), Some("project"));
        assert_eq!(settings.file(), "global.env");
    }

    #[test]
    fn env_heroku_bin_wins() {
        let settings = Settings {
            global: SettingsFile {
                heroku_bin: Some("/from/file".to_string()),
                ..Default::default()
            },
            env_heroku_bin: Some("/from/env".to_string()),
            ..Default::default()
        };

        assert_eq!(settings.heroku_bin(), "/from/env");
    }

    #[test]
    fn write_project_round_trips() {
        let temp = TempDir::new().unwrap();
        let file = SettingsFile {
            app: Some("demo".to_string()),
            interactive: Some(false),
            ..Default::default()
        };

        let path = Settings::write_project(temp.path(), &file).unwrap();
        assert!(path.exists());
        assert!(!temp.path().join(".herofig.toml.tmp").exists());

        let loaded = Settings::load(Some(temp.path())).unwrap();
        assert_eq!(loaded.project, Some(file));
        assert!(!loaded.interactive());
    }

    #[test]
    fn resolved_values() {
        let settings = Settings::default();
        assert_eq!(settings.resolved("file").unwrap().as_deref(), Some(".env"));
        assert_eq!(settings.resolved("app").unwrap(), None);
        assert!(settings.resolved("bogus").is_err());
    }
}
