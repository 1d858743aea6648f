//! Process-local storage that forgets everything on exit

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use lawyerup_ports::StorageProvider;

/// Key-value storage held in memory.
///
/// Clones share the same map, so a test can keep one handle to inspect
/// what a store wrote through another.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for InMemoryStorage {
    fn save(&self, key: &str, value: &str) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let storage = InMemoryStorage::new();
        let other = storage.clone();

        storage.save("k", "v");
        assert_eq!(other.load("k").as_deref(), Some("v"));

        other.remove("k");
        assert!(storage.is_empty());
    }

    #[test]
    fn save_overwrites() {
        let storage = InMemoryStorage::new();
        storage.save("k", "1");
        storage.save("k", "2");
        assert_eq!(storage.load("k").as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
    }
}
