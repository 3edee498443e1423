//! core
//!
//! Domain types and pure operations for herofig.
//!
//! # Modules
//!
//! - [`model`] - The [`model::Config`] map and diffs between configs
//! - [`codec`] - Env file parsing, serialization and discovery
//! - [`hash`] - Config fingerprints
//! - [`mnemonic`] - Proquint rendering of fingerprints
//! - [`search`] - Case-insensitive substring search
//! - [`settings`] - Tool settings schema and loading
//!
//! Nothing here talks to Heroku; see [`crate::remote`].

pub mod codec;
pub mod hash;
pub mod mnemonic;
pub mod model;
pub mod search;
pub mod settings;
