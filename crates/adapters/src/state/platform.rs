//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs
//! - Handed to `AppStores::new`, which builds every store over it
//! - `Platform` itself implements the port traits, so it can be passed
//!   anywhere a `StorageProvider`, `TimeProvider` or `TimerProvider` is expected

use std::sync::Arc;
use std::time::Duration;

use lawyerup_ports::{StorageProvider, TimeProvider, TimerProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn dyn_ports::TimeProviderDyn>,
    timer: Arc<dyn dyn_ports::TimerProviderDyn>,
    storage: Arc<dyn dyn_ports::StorageProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage
// =============================================================================

mod dyn_ports {
    use std::time::Duration;

    use lawyerup_ports::{StorageProvider, TimeProvider, TimerProvider};

    pub(super) trait TimeProviderDyn: Send + Sync {
        fn now_millis(&self) -> u64;
    }

    pub(super) trait TimerProviderDyn: Send + Sync {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
    }

    pub(super) trait StorageProviderDyn: Send + Sync {
        fn save(&self, key: &str, value: &str);
        fn load(&self, key: &str) -> Option<String>;
        fn remove(&self, key: &str);
    }

    // Blanket implementations - convert port traits to dyn-safe wrappers

    impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
        fn now_millis(&self) -> u64 {
            TimeProvider::now_millis(self)
        }
    }

    impl<T: TimerProvider + Send + Sync> TimerProviderDyn for T {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
            TimerProvider::schedule(self, delay, task)
        }
    }

    impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
        fn save(&self, key: &str, value: &str) {
            StorageProvider::save(self, key, value)
        }
        fn load(&self, key: &str) -> Option<String> {
            StorageProvider::load(self, key)
        }
        fn remove(&self, key: &str) {
            StorageProvider::remove(self, key)
        }
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Tr, S>(time: Tm, timer: Tr, storage: S) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Tr: TimerProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            timer: Arc::new(timer),
            storage: Arc::new(storage),
        }
    }
}

impl TimeProvider for Platform {
    fn now_millis(&self) -> u64 {
        dyn_ports::TimeProviderDyn::now_millis(&*self.time)
    }
}

impl TimerProvider for Platform {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        dyn_ports::TimerProviderDyn::schedule(&*self.timer, delay, task)
    }
}

impl StorageProvider for Platform {
    fn save(&self, key: &str, value: &str) {
        dyn_ports::StorageProviderDyn::save(&*self.storage, key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        dyn_ports::StorageProviderDyn::load(&*self.storage, key)
    }

    fn remove(&self, key: &str) {
        dyn_ports::StorageProviderDyn::remove(&*self.storage, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{FixedClock, InMemoryStorage, ManualTimer};
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn delegates_to_providers() {
        let storage = InMemoryStorage::new();
        let timer = ManualTimer::new();
        let platform = Platform::new(FixedClock::at(7), timer.clone(), storage.clone());

        platform.save("k", "v");
        assert_eq!(storage.load("k").as_deref(), Some("v"));
        assert_eq!(platform.load("k").as_deref(), Some("v"));
        platform.remove("k");
        assert!(storage.is_empty());

        assert_eq!(platform.now_millis(), 7);

        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        platform.schedule(
            Duration::from_millis(1),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );
        timer.advance(Duration::from_millis(1));
        assert!(fired.load(Ordering::SeqCst));
    }
}
