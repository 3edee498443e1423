//! herofig - Sync `.env` files with Heroku config vars
//!
//! herofig pulls an app's config vars into a local env file, pushes local
//! variables back, and fingerprints both sides so they can be compared at a
//! glance. A fingerprint is a SHA-1 over the canonical `KEY=VALUE` lines,
//! displayed as a short pronounceable mnemonic such as `lusab-babad`.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs commands)
//! - [`core`] - Config model, env file codec, fingerprints, settings
//! - [`remote`] - Abstraction over where config vars live (Heroku CLI)
//! - [`ui`] - Output formatting and prompts

pub mod cli;
pub mod core;
pub mod remote;
pub mod ui;
