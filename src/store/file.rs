//! TOML-file backed preference store.
//!
//! The file is a flat table of string and boolean values:
//!
//! ```toml
//! pref_rear_preview = "640x480"
//! pref_info_hide = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::PrefsError;

use super::{PrefMap, PrefValue, SettingsStore};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: PrefMap,
}

impl FileStore {
    /// Load the store from `path`. A missing file yields an empty store;
    /// the file is created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => parse_table(&path, &raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "preference file not found, starting empty");
                HashMap::new()
            }
            Err(e) => {
                return Err(PrefsError::Store(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };
        Ok(Self {
            path,
            map: PrefMap::new(values),
        })
    }

    /// Write the current contents to disk.
    ///
    /// The table is written to a temporary file next to the target and
    /// renamed over it, so the file on disk is always a complete table.
    pub fn save(&self) -> Result<(), PrefsError> {
        let table: toml::Table = self
            .map
            .read()
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    PrefValue::Str(s) => toml::Value::String(s.clone()),
                    PrefValue::Bool(b) => toml::Value::Boolean(*b),
                };
                (k.clone(), value)
            })
            .collect();
        let body = toml::to_string(&table)
            .map_err(|e| PrefsError::Store(format!("cannot serialize preferences: {e}")))?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(body.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| PrefsError::Io(e.error))?;
        Ok(())
    }
}

fn parse_table(path: &Path, raw: &str) -> Result<HashMap<String, PrefValue>, PrefsError> {
    let table: toml::Table = toml::from_str(raw)
        .map_err(|e| PrefsError::Store(format!("parse error in {}: {e}", path.display())))?;

    let mut values = HashMap::with_capacity(table.len());
    for (key, value) in table {
        match value {
            toml::Value::String(s) => {
                values.insert(key, PrefValue::Str(s));
            }
            toml::Value::Boolean(b) => {
                values.insert(key, PrefValue::Bool(b));
            }
            other => {
                warn!(key = %key, kind = other.type_str(), "unsupported preference type, skipping");
            }
        }
    }
    Ok(values)
}

impl SettingsStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<PrefValue> {
        self.map.get(key)
    }

    fn set_string(&self, key: &str, value: Option<&str>) {
        self.map.set_string(key, value);
        if let Err(e) = self.save() {
            warn!(key, path = %self.path.display(), "failed to persist preference: {e}");
        }
    }
}
