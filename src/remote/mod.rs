//! remote
//!
//! Abstraction for remote application config stores.
//!
//! # Architecture
//!
//! The [`ConfigStore`] trait is the only thing commands talk to. The
//! concrete store is built once from CLI flags and settings, then passed
//! down as `&dyn ConfigStore`.
//!
//! # Modules
//!
//! - `traits`: `ConfigStore` trait and `StoreError`
//! - [`heroku`]: Heroku CLI implementation
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod heroku;
pub mod mock;
mod traits;

pub use heroku::HerokuCli;
pub use traits::*;
