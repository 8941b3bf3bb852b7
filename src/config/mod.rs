//! Typed detector and camera configuration resolved from stored preferences.
//!
//! # Module layout
//!
//! - **types** — resolved configuration values and the coded mode enums.
//! - **size** — `Size` and its `"<w>x<h>"` parser.
//! - **keys** — preference key names (`PrefKeys`) and their defaults.
//! - **resolve** — `ConfigResolver`, which reads a `SettingsStore` and applies
//!   the defaulting and validation rules.

pub mod keys;
mod resolve;
mod size;
mod types;

pub use keys::PrefKeys;
pub use resolve::ConfigResolver;
pub use size::{ParseSizeError, Size};
pub use types::*;
