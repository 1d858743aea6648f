//! Infrastructure layer - Platform adapters

pub mod platform;

// Test fakes for the platform ports.
// Available to other crates' tests as well
pub mod testing;
