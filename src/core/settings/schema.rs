//! core::settings::schema
//!
//! Settings file schema.
//!
//! The same schema is used for the global file and the project file. Every
//! field is optional; unset fields fall through to the next scope and then
//! to the built-in default.
//!
//! # Example
//!
//! ```toml
//! app = "my-heroku-app"
//! file = "config/app.env"
//! mnemonic_length = 3
//! heroku_bin = "/usr/local/bin/heroku"
//! interactive = true
//! ```

use serde::{Deserialize, Serialize};

use super::SettingsError;
use crate::core::hash::Hash;

/// Keys accepted by `herofig config get/set`.
pub const KNOWN_KEYS: [&str; 5] = ["app", "file", "mnemonic_length", "heroku_bin", "interactive"];

/// One settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Heroku app to target when `--app` is not given
    pub app: Option<String>,

    /// Env file used when a command is not given one
    pub file: Option<String>,

    /// Syllables shown when printing a hash mnemonic
    pub mnemonic_length: Option<usize>,

    /// Heroku CLI executable
    pub heroku_bin: Option<String>,

    /// Whether to prompt before destructive actions
    pub interactive: Option<bool>,
}

impl SettingsFile {
    /// Validate the values.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(length) = self.mnemonic_length {
            let max = Hash::max_mnemonic_length();
            if length == 0 || length > max {
                return Err(SettingsError::InvalidValue(format!(
                    "mnemonic_length must be between 1 and {max}, got {length}"
                )));
            }
        }

        for (key, value) in [
            ("app", &self.app),
            ("file", &self.file),
            ("heroku_bin", &self.heroku_bin),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(SettingsError::InvalidValue(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        Ok(())
    }

    /// Read a value by key, formatted for display.
    pub fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let value = match key {
            "app" => self.app.clone(),
            "file" => self.file.clone(),
            "mnemonic_length" => self.mnemonic_length.map(|n| n.to_string()),
            "heroku_bin" => self.heroku_bin.clone(),
            "interactive" => self.interactive.map(|b| b.to_string()),
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Set a value by key, parsing it for typed fields.
    ///
    /// The result is validated before it is applied.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut updated = self.clone();

        match key {
            "app" => updated.app = Some(value.to_string()),
            "file" => updated.file = Some(value.to_string()),
            "mnemonic_length" => {
                let length = value.parse().map_err(|_| {
                    SettingsError::InvalidValue(format!(
                        "mnemonic_length must be a number, got '{value}'"
                    ))
                })?;
                updated.mnemonic_length = Some(length);
            }
            "heroku_bin" => updated.heroku_bin = Some(value.to_string()),
            "interactive" => {
                let interactive = value.parse().map_err(|_| {
                    SettingsError::InvalidValue(format!(
                        "interactive must be true or false, got '{value}'"
                    ))
                })?;
                updated.interactive = Some(interactive);
            }
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(&self, other: &SettingsFile) -> SettingsFile {
        SettingsFile {
            app: other.app.clone().or_else(|| self.app.clone()),
            file: other.file.clone().or_else(|| self.file.clone()),
            mnemonic_length: other.mnemonic_length.or(self.mnemonic_length),
            heroku_bin: other.heroku_bin.clone().or_else(|| self.heroku_bin.clone()),
            interactive: other.interactive.or(self.interactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let settings: SettingsFile = toml::from_str(
            r#"
            app = "demo"
            file = "prod.env"
            mnemonic_length = 3
            heroku_bin = "/opt/heroku"
            interactive = false
            "#,
        )
        .unwrap();

        assert_eq!(settings.app.as_deref(), Some("demo"));
        assert_eq!(settings.file.as_deref(), Some("prod.env"));
        assert_eq!(settings.mnemonic_length, Some(3));
        assert_eq!(settings.heroku_bin.as_deref(), Some("/opt/heroku"));
        assert_eq!(settings.interactive, Some(false));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<SettingsFile, _> = toml::from_str("color = true");
        assert!(result.is_err());
    }

    #[test]
    fn mnemonic_length_bounds() {
        for (length, ok) in [(0, false), (1, true), (10, true), (11, false)] {
            let settings = SettingsFile {
                mnemonic_length: Some(length),
                ..Default::default()
            };
            assert_eq!(settings.validate().is_ok(), ok, "length {length}");
        }
    }

    #[test]
    fn empty_strings_rejected() {
        let settings = SettingsFile {
            app: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn set_and_get() {
        let mut settings = SettingsFile::default();
        settings.set("app", "demo").unwrap();
        settings.set("mnemonic_length", "4").unwrap();
        settings.set("interactive", "false").unwrap();

        assert_eq!(settings.get("app").unwrap().as_deref(), Some("demo"));
        assert_eq!(settings.get("mnemonic_length").unwrap().as_deref(), Some("4"));
        assert_eq!(settings.get("interactive").unwrap().as_deref(), Some("false"));
        assert_eq!(settings.get("file").unwrap(), None);
    }

    #[test]
    fn set_rejects_bad_values_without_applying() {
        let mut settings = SettingsFile::default();
        assert!(settings.set("mnemonic_length", "twelve").is_err());
        assert!(settings.set("mnemonic_length", "12").is_err());
        assert!(settings.set("interactive", "maybe").is_err());
        assert_eq!(settings, SettingsFile::default());
    }

    #[test]
    fn unknown_key() {
        let mut settings = SettingsFile::default();
        assert!(matches!(
            settings.set("nope", "1"),
            Err(SettingsError::UnknownKey(_))
        ));
        assert!(settings.get("nope").is_err());
    }

    #[test]
    fn merge_prefers_other() {
        let global = SettingsFile {
            app: Some("global-app".to_string()),
            mnemonic_length: Some(2),
            ..Default::default()
        };
        let project = SettingsFile {
            app: Some("project-app".to_string()),
            file: Some("local.env".to_string()),
            ..Default::default()
        };

        let merged = global.merged_with(&project);
        assert_eq!(merged.app.as_deref(), Some("project-app"));
        assert_eq!(merged.file.as_deref(), Some("local.env"));
        assert_eq!(merged.mnemonic_length, Some(2));
    }
}
