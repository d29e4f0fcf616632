//! Key-value storage boundary
//!
//! The simulation persists exactly two things through this trait: the best
//! score and player settings. Platform layers back it with whatever they
//! have (LocalStorage, a file, nothing); the core treats an unavailable
//! store as session-only operation and carries on.

use std::collections::HashMap;

/// External key-value persistence collaborator
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns false when the backing storage is unavailable; callers log
    /// and continue.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// In-memory store for tests and the headless demo
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        let _ = self.entries.insert(key.to_string(), value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("missing").is_none());
        assert!(store.set("k", "v"));
        assert_eq!(store.get("k"), Some("v".to_string()));
        assert!(store.set("k", "w"));
        assert_eq!(store.get("k"), Some("w".to_string()));
    }
}
