//! Settings store contract and the bundled backends.
//!
//! - **memory** — `MemoryStore`, a map kept in process.
//! - **file** — `FileStore`, a flat TOML table persisted on disk.
//!
//! Stored values are typed per key: a key holds either a string or a boolean.
//! The lenient accessors treat a key read through the wrong type as absent;
//! [`SettingsStore::get_raw`] exposes the stored type for callers that must
//! tell the two apart.

mod file;
mod memory;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefValue {
    Str(String),
    Bool(bool),
}

impl PrefValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Str(_) => "string",
            PrefValue::Bool(_) => "boolean",
        }
    }
}

/// String-keyed preference storage.
///
/// Writes are fire-and-forget.
pub trait SettingsStore {
    /// The stored value with its type, or `None` if the key is absent.
    fn get_raw(&self, key: &str) -> Option<PrefValue>;

    /// Upsert a string value. `None` removes the key.
    fn set_string(&self, key: &str, value: Option<&str>);

    /// String value; absent and boolean-typed keys both give `None`.
    fn get_string(&self, key: &str) -> Option<String> {
        match self.get_raw(key)? {
            PrefValue::Str(s) => Some(s),
            PrefValue::Bool(_) => {
                warn!(key, "preference stored as boolean, read as string; ignoring");
                None
            }
        }
    }

    /// Boolean value; never fails.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_raw(key) {
            Some(PrefValue::Bool(b)) => b,
            Some(PrefValue::Str(_)) => {
                warn!(key, default, "preference stored as string, read as boolean; using default");
                default
            }
            None => default,
        }
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn get_raw(&self, key: &str) -> Option<PrefValue> {
        (**self).get_raw(key)
    }

    fn set_string(&self, key: &str, value: Option<&str>) {
        (**self).set_string(key, value)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        (**self).get_bool(key, default)
    }
}

/// Lock-guarded map shared by the bundled stores.
#[derive(Debug, Default)]
pub(crate) struct PrefMap {
    inner: RwLock<HashMap<String, PrefValue>>,
}

impl PrefMap {
    pub(crate) fn new(values: HashMap<String, PrefValue>) -> Self {
        Self { inner: RwLock::new(values) }
    }

    // The map is never left half-written, so a poisoned lock is still usable.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<String, PrefValue>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, PrefValue>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn get(&self, key: &str) -> Option<PrefValue> {
        self.read().get(key).cloned()
    }

    pub(crate) fn set_string(&self, key: &str, value: Option<&str>) {
        let mut map = self.write();
        match value {
            Some(v) => {
                map.insert(key.to_string(), PrefValue::Str(v.to_string()));
            }
            None => {
                map.remove(key);
            }
        }
    }
}
