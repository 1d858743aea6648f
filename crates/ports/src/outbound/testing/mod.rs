//! mockall doubles for the platform ports
//!
//! Enabled with the `testing` feature. Use these when a test has to assert
//! exact storage calls; the adapters crate has stateful fakes for
//! everything else.

use std::time::Duration;

use super::platform::{StorageProvider, TimeProvider, TimerProvider};

mockall::mock! {
    pub Storage {}

    impl Clone for Storage {
        fn clone(&self) -> Self;
    }

    impl StorageProvider for Storage {
        fn save(&self, key: &str, value: &str);
        fn load(&self, key: &str) -> Option<String>;
        fn remove(&self, key: &str);
    }
}

mockall::mock! {
    pub Clock {}

    impl Clone for Clock {
        fn clone(&self) -> Self;
    }

    impl TimeProvider for Clock {
        fn now_millis(&self) -> u64;
    }
}

mockall::mock! {
    pub Timer {}

    impl Clone for Timer {
        fn clone(&self) -> Self;
    }

    impl TimerProvider for Timer {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
    }
}
