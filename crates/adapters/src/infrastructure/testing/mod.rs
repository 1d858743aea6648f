//! Test-only infrastructure fakes.
//!
//! These helpers implement the platform ports for unit tests, so stores
//! can be exercised without touching real storage or waiting on real
//! timers.

mod fixed_clock;
mod manual_timer;

pub use super::platform::InMemoryStorage;
pub use fixed_clock::FixedClock;
pub use manual_timer::ManualTimer;
