//! State containers.
//!
//! - `SessionStore` - authenticated user, persisted
//! - `NotificationStore` - inbox panel, in memory only
//! - `ToastQueue` - transient messages with timed expiry
//! - `BookingStore` - consultation bookings, persisted

pub mod bookings;
pub mod notifications;
pub mod session;
pub mod toasts;

pub use bookings::{BookingEvent, BookingStore};
pub use notifications::{NotificationEvent, NotificationStore};
pub use session::{SessionEvent, SessionStore};
pub use toasts::{ToastEvent, ToastQueue};
