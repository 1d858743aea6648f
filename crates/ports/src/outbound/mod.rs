//! Outbound ports - Interfaces for platform services
//!
//! The stores only talk to durable storage, the clock and timers through
//! these traits, so tests can swap in in-memory fakes.

pub mod platform;

#[cfg(feature = "testing")]
pub mod testing;

pub use platform::{storage_keys, StorageProvider, TimeProvider, TimerProvider};
