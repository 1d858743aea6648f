//! Controllable clock for deterministic tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lawyerup_ports::TimeProvider;

/// Clock frozen at a given millisecond timestamp until moved
#[derive(Clone, Default)]
pub struct FixedClock {
    millis: Arc<AtomicU64>,
}

impl FixedClock {
    pub fn at(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeProvider for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
