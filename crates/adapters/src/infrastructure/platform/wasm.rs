//! WASM platform implementations
//!
//! Backed by `window.localStorage`, `Date.now()` and `setTimeout`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use lawyerup_ports::{StorageProvider, TimeProvider, TimerProvider};

use super::InMemoryStorage;
use crate::state::Platform;

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM timer provider using `setTimeout`
#[derive(Clone, Default)]
pub struct WasmTimerProvider;

impl TimerProvider for WasmTimerProvider {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

/// WASM storage provider backed by `window.localStorage`
///
/// Looked up on every call so the provider itself stays `Send + Sync`.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            tracing::error!("localStorage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("Failed to write {} to localStorage: {:?}", key, e);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmTimeProvider, WasmTimerProvider, WasmStorageProvider)
}

/// Create platform services whose storage lives only in memory
pub fn create_ephemeral_platform() -> Platform {
    Platform::new(WasmTimeProvider, WasmTimerProvider, InMemoryStorage::new())
}
