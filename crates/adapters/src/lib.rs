//! Platform adapters and the composition root for the client stores.

pub mod infrastructure;
pub mod state;

pub use state::{AppStores, Platform};
