//! remote::heroku
//!
//! [`ConfigStore`] backed by the Heroku CLI.
//!
//! # Commands
//!
//! | Operation | Invocation |
//! |-----------|------------|
//! | fetch     | `heroku config --json [--app APP]` |
//! | set       | `heroku config:set K=V... [--app APP]` |
//!
//! Authentication is whatever the Heroku CLI already has; herofig never
//! handles credentials.

use std::process::Command;

use super::traits::{ConfigStore, StoreError};
use crate::core::codec::key_value;
use crate::core::model::Config;

/// Heroku CLI client for one app.
#[derive(Debug, Clone)]
pub struct HerokuCli {
    bin: String,
    app: Option<String>,
}

impl HerokuCli {
    /// Create a client that runs `bin`, targeting `app` (or the CLI's own
    /// default app when `None`).
    pub fn new(bin: impl Into<String>, app: Option<String>) -> Self {
        Self {
            bin: bin.into(),
            app,
        }
    }

    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }

    /// Arguments for `script`, with `--app` appended when an app is set.
    fn args(&self, script: &str, extra: &[String]) -> Vec<String> {
        let mut args = Vec::with_capacity(extra.len() + 3);
        args.push(script.to_string());
        args.extend(extra.iter().cloned());
        if let Some(app) = &self.app {
            args.push("--app".to_string());
            args.push(app.clone());
        }
        args
    }

    fn run(&self, script: &str, extra: &[String]) -> Result<Vec<u8>, StoreError> {
        let output = Command::new(&self.bin)
            .args(self.args(script, extra))
            .output()
            .map_err(|e| StoreError::Spawn {
                program: self.bin.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StoreError::CommandFailed {
                program: self.bin.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl ConfigStore for HerokuCli {
    fn name(&self) -> String {
        self.app.clone().unwrap_or_else(|| "heroku".to_string())
    }

    fn fetch(&self) -> Result<Config, StoreError> {
        let stdout = self.run("config", &["--json".to_string()])?;
        serde_json::from_slice(&stdout).map_err(|e| StoreError::InvalidResponse {
            program: self.bin.clone(),
            message: format!("config JSON: {e}"),
        })
    }

    fn set(&self, vars: &Config) -> Result<(), StoreError> {
        if vars.is_empty() {
            return Ok(());
        }

        let pairs: Vec<String> = vars
            .iter()
            .map(|var| key_value(var.key, var.value))
            .collect();
        self.run("config:set", &pairs)?;
        Ok(())
    }
}
