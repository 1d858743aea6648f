//! Port definitions shared by the stores and the platform adapters.

pub mod config;
pub mod outbound;

pub use config::StoreConfig;
pub use outbound::{storage_keys, StorageProvider, TimeProvider, TimerProvider};
