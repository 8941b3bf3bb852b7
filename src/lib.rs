//! Stored user preferences → typed configuration for face, object and custom
//! object detectors, plus camera preview sizing.
//!
//! The host owns a [`SettingsStore`](store::SettingsStore) and lends it to a
//! [`ConfigResolver`](config::ConfigResolver) for each lookup.

pub mod config;
pub mod error;
pub mod store;

pub use config::ConfigResolver;
pub use error::PrefsError;
pub use store::{FileStore, MemoryStore, SettingsStore};
