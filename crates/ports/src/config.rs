//! Store configuration

use std::time::Duration;

/// How long a toast stays visible unless dismissed first
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub toast_duration: Duration,
}

impl StoreConfig {
    pub fn with_toast_duration(mut self, toast_duration: Duration) -> Self {
        self.toast_duration = toast_duration;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toast_duration_is_three_seconds() {
        assert_eq!(StoreConfig::default().toast_duration.as_millis(), 3000);
    }
}
