use super::{PrefMap, PrefValue, SettingsStore};

/// In-process preference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: PrefMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.map
            .write()
            .insert(key.to_string(), PrefValue::Str(value.to_string()));
        self
    }

    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.put_bool(key, value);
        self
    }

    pub fn put_bool(&self, key: &str, value: bool) {
        self.map.write().insert(key.to_string(), PrefValue::Bool(value));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<PrefValue> {
        self.map.get(key)
    }

    fn set_string(&self, key: &str, value: Option<&str>) {
        self.map.set_string(key, value)
    }
}
