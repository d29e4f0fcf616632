//! Best-score tracking
//!
//! A single scalar, read once at startup and written whenever it rises.
//! Storage failure degrades to session-only tracking.

use crate::persistence::KeyValueStore;

/// Store key for the best score
pub const STORAGE_KEY: &str = "cipher-road-high-score";

/// Read the stored best score, or 0 when absent or unreadable
pub fn load(store: &dyn KeyValueStore) -> u32 {
    match store.get(STORAGE_KEY).and_then(|v| v.parse().ok()) {
        Some(best) => {
            log::info!("loaded high score {best}");
            best
        }
        None => {
            log::info!("no stored high score, starting fresh");
            0
        }
    }
}

/// Write a new best score
pub fn save(store: &mut dyn KeyValueStore, best: u32) {
    if !store.set(STORAGE_KEY, &best.to_string()) {
        log::warn!("high score storage unavailable, tracking for this session only");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(load(&store), 0);
        save(&mut store, 17);
        assert_eq!(load(&store), 17);
    }

    #[test]
    fn test_garbage_value_reads_as_zero() {
        let mut store = MemoryStore::new();
        assert!(store.set(STORAGE_KEY, "not a number"));
        assert_eq!(load(&store), 0);
    }

    /// A store whose backing is gone
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_unavailable_store_degrades_quietly() {
        let mut store = UnavailableStore;
        assert_eq!(load(&store), 0);
        save(&mut store, 5);
        assert_eq!(load(&store), 0);
    }
}
