// Persistence boundary for bindings

use std::collections::HashMap;

/// String-keyed settings storage provided by the host
///
/// Bindings are written as the input's canonical name, `"None"` when unbound.
pub trait SettingsBackend {
    /// Read a stored value
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn store(&mut self, key: &str, value: &str);
}

/// In-memory settings, for tests and hosts without storage
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings pre-filled with values
    pub fn from_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsBackend for MemorySettings {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
