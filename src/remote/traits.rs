//! remote::traits
//!
//! The `ConfigStore` trait for remote application config.
//!
//! # Design
//!
//! A store hands back and accepts plain [`Config`] values; callers never
//! see how the values travel. Stores do not retry. A failed call is
//! reported to the caller as-is.

use thiserror::Error;

use crate::core::model::Config;

/// Errors from config store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The external program could not be started.
    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// The external program exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        /// Exit status, as reported by the OS
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The store answered with something that could not be understood.
    #[error("unexpected response from {program}: {message}")]
    InvalidResponse { program: String, message: String },
}

/// A remote source and sink of config vars.
pub trait ConfigStore {
    /// Human-readable name of the target (e.g. the app name).
    fn name(&self) -> String;

    /// Fetch every config var.
    fn fetch(&self) -> Result<Config, StoreError>;

    /// Fetch a single var, `None` if it is not set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.fetch()?.get(key).map(str::to_string))
    }

    /// Set every var in `vars`, leaving other remote vars untouched.
    fn set(&self, vars: &Config) -> Result<(), StoreError>;
}
