//! Composition root types: the platform container and the store bundle

mod app_stores;
mod platform;

pub use app_stores::AppStores;
pub use platform::Platform;
