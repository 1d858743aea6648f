//! Runner configuration

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use lawyerup_ports::StoreConfig;

/// Where durable state lives
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageTarget {
    /// The per-user config directory
    #[default]
    Default,
    /// Nothing survives the process
    Memory,
    /// A specific JSON file
    File(PathBuf),
}

impl FromStr for StorageTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" => StorageTarget::Default,
            m if m.eq_ignore_ascii_case("memory") => StorageTarget::Memory,
            path => StorageTarget::File(PathBuf::from(path)),
        })
    }
}

/// Configuration loaded from environment
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// `LAWYERUP_STORAGE_PATH`: a file path, or "memory"
    pub storage: StorageTarget,
    /// Store settings; `LAWYERUP_TOAST_MS` sets the toast lifetime
    pub stores: StoreConfig,
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage = lookup("LAWYERUP_STORAGE_PATH")
            .map(|raw| raw.parse::<StorageTarget>())
            .transpose()?
            .unwrap_or_default();

        let mut stores = StoreConfig::default();
        if let Some(raw) = lookup("LAWYERUP_TOAST_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .context("LAWYERUP_TOAST_MS must be a number of milliseconds")?;
            stores = stores.with_toast_duration(Duration::from_millis(ms));
        }

        Ok(Self { storage, stores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = RunnerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.storage, StorageTarget::Default);
        assert_eq!(config.stores.toast_duration, Duration::from_millis(3000));
    }

    #[test]
    fn reads_storage_target_and_toast_duration() {
        let config = RunnerConfig::from_lookup(lookup(&[
            ("LAWYERUP_STORAGE_PATH", "/tmp/lawyerup.json"),
            ("LAWYERUP_TOAST_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(
            config.storage,
            StorageTarget::File(PathBuf::from("/tmp/lawyerup.json"))
        );
        assert_eq!(config.stores.toast_duration, Duration::from_millis(1500));
    }

    #[test]
    fn memory_target_is_case_insensitive() {
        assert_eq!("MEMORY".parse::<StorageTarget>(), Ok(StorageTarget::Memory));
        assert_eq!(" ".parse::<StorageTarget>(), Ok(StorageTarget::Default));
    }

    #[test]
    fn rejects_non_numeric_toast_duration() {
        let err = RunnerConfig::from_lookup(lookup(&[("LAWYERUP_TOAST_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("LAWYERUP_TOAST_MS"));
    }
}
