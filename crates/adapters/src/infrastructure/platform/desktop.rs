//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use lawyerup_ports::{StorageProvider, TimeProvider, TimerProvider};

use super::InMemoryStorage;
use crate::state::Platform;

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Desktop timer provider.
///
/// Runs the task on the current tokio runtime when there is one, otherwise
/// on a short-lived background thread.
#[derive(Clone, Default)]
pub struct DesktopTimerProvider;

impl TimerProvider for DesktopTimerProvider {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    task();
                });
            }
            Err(_) => {
                let spawned = std::thread::Builder::new()
                    .name("lawyerup-timer".into())
                    .spawn(move || {
                        std::thread::sleep(delay);
                        task();
                    });
                if let Err(e) = spawned {
                    tracing::error!("Failed to spawn timer thread: {}", e);
                }
            }
        }
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/lawyerup/storage.json
/// - macOS: ~/Library/Application Support/com.lawyerup.client/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\lawyerup\client\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider at the platform config location
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("com", "lawyerup", "client") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("lawyerup_storage.json")
        };
        Self::with_path(storage_path)
    }

    /// Create a storage provider backed by a specific file
    ///
    /// Loads existing data from the file if it exists. A file that is not a
    /// JSON string map is ignored (and overwritten by the next save).
    pub fn with_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::error!("Failed to create storage directory: {}", e);
                    return;
                }
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                if guard.remove(key).is_none() {
                    return;
                }
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Create platform services for desktop
///
/// `storage_path` overrides the default config-directory location.
pub fn create_platform(storage_path: Option<PathBuf>) -> Platform {
    let storage = match storage_path {
        Some(path) => DesktopStorageProvider::with_path(path),
        None => DesktopStorageProvider::new(),
    };
    Platform::new(DesktopTimeProvider, DesktopTimerProvider, storage)
}

/// Create platform services whose storage lives only in memory
pub fn create_ephemeral_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopTimerProvider,
        InMemoryStorage::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn storage_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::with_path(&path);
        storage.save("lawyerup_session", "{\"name\":\"Ada\"}");

        let reopened = DesktopStorageProvider::with_path(&path);
        assert_eq!(
            reopened.load("lawyerup_session").as_deref(),
            Some("{\"name\":\"Ada\"}")
        );

        reopened.remove("lawyerup_session");
        let again = DesktopStorageProvider::with_path(&path);
        assert!(again.load("lawyerup_session").is_none());
    }

    #[test]
    fn corrupt_storage_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::with_path(&path);
        assert!(storage.load("anything").is_none());

        storage.save("k", "v");
        let reopened = DesktopStorageProvider::with_path(&path);
        assert_eq!(reopened.load("k").as_deref(), Some("v"));
    }

    #[test]
    fn time_is_after_epoch() {
        assert!(DesktopTimeProvider.now_millis() > 0);
    }

    #[test]
    fn timer_without_runtime_uses_a_thread() {
        let (tx, rx) = mpsc::channel();
        DesktopTimerProvider.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
    }

    #[tokio::test]
    async fn timer_inside_runtime_uses_tokio() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        DesktopTimerProvider.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        assert!(tokio::time::timeout(Duration::from_secs(2), rx).await.is_ok());
    }
}
