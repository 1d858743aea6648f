//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Store code remains platform-agnostic
//! 2. Platform-specific code is isolated in the adapters crate
//! 3. Stores are testable with in-memory fakes

use std::time::Duration;

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// One-shot timer abstraction (setTimeout / tokio sleep).
///
/// Scheduled tasks cannot be cancelled. Anything a task does must be safe
/// to run after the state it touches has already changed.
pub trait TimerProvider: Clone + 'static {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the durable layout
/// shared with the web build's localStorage.
pub mod storage_keys {
    /// List of user records (passwords included)
    pub const USERS: &str = "lawyerup_users";
    /// The active session, never carrying a password
    pub const SESSION: &str = "lawyerup_session";
    /// List of booking records, newest first
    pub const BOOKINGS: &str = "lawyerup_bookings";
}
