//! Client-side state containers.
//!
//! Each store owns one list, is constructed with its platform backends
//! injected, and announces mutations through its own [`ChangeSignal`].
//! No store depends on another.

pub mod seed;
pub mod signal;
pub mod storage;
pub mod stores;

mod lock;

pub use signal::{ChangeSignal, StoreEvent, Subscription};
pub use storage::JsonStorage;
pub use stores::{
    BookingEvent, BookingStore, NotificationEvent, NotificationStore, SessionEvent, SessionStore,
    ToastEvent, ToastQueue,
};
