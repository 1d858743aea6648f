//! JSON helpers over a raw key-value [`StorageProvider`].
//!
//! Decode failures come back as [`StorageError::Malformed`]; the stores
//! decide how to recover (fallback value plus a warning). Encode failures
//! are logged here and the write is skipped, leaving the in-memory state
//! authoritative.

use serde::de::DeserializeOwned;
use serde::Serialize;

use lawyerup_domain::StorageError;
use lawyerup_ports::StorageProvider;

/// Typed access to durable storage
pub trait JsonStorage {
    /// Read and decode a value. `Ok(None)` means the key is absent.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;

    /// Encode and write a value.
    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError>;

    /// Read a value, logging and falling back to `None` if it is malformed.
    fn read_json_or_warn<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.read_json(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring malformed stored payload");
                None
            }
        }
    }

    /// Write a value, logging any failure.
    fn write_json_or_log<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.write_json(key, value) {
            tracing::error!(key, error = %e, "Failed to persist payload");
        }
    }
}

impl<S: StorageProvider> JsonStorage for S {
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.load(key) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::malformed(key, e)),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::encode(key, e))?;
        self.save(key, &raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawyerup_adapters::infrastructure::testing::InMemoryStorage;

    #[test]
    fn absent_key_reads_as_none() {
        let storage = InMemoryStorage::new();
        let value: Option<Vec<u32>> = storage.read_json("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn round_trips_values() {
        let storage = InMemoryStorage::new();
        storage.write_json("numbers", &[1u32, 2, 3]).unwrap();

        let value: Option<Vec<u32>> = storage.read_json("numbers").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
        assert_eq!(storage.load("numbers").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn wrong_shape_is_reported_as_malformed() {
        let storage = InMemoryStorage::new();
        storage.save("numbers", "{\"not\":\"a list\"}");

        let err = storage.read_json::<Vec<u32>>("numbers").unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
        assert_eq!(err.key(), "numbers");
    }

    #[test]
    fn read_or_warn_swallows_malformed_payloads() {
        let storage = InMemoryStorage::new();
        storage.save("numbers", "not json");

        assert_eq!(storage.read_json_or_warn::<Vec<u32>>("numbers"), None);
    }
}
