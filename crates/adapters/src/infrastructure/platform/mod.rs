//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the port
//! traits defined in `lawyerup_ports::outbound::platform`.
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_ephemeral_platform, create_platform, WasmStorageProvider, WasmTimeProvider,
    WasmTimerProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_ephemeral_platform, create_platform, DesktopStorageProvider, DesktopTimeProvider,
    DesktopTimerProvider,
};

pub use memory::InMemoryStorage;
