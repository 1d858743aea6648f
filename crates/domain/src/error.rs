//! Error types for the client state layer
//!
//! `AuthError` is surfaced to callers so the UI can render it inline.
//! `StorageError` never leaves a store: every store recovers from it with a
//! fallback value and a log line.

use thiserror::Error;

/// Errors returned by session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration conflict: the email is already taken.
    #[error("An account with email {email} already exists")]
    DuplicateUser { email: String },

    /// No stored user matches the given email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Errors raised while reading or writing durable payloads.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored payload did not decode into the expected shape.
    #[error("Malformed payload under key {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("Failed to encode payload for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn malformed(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            key: key.into(),
            source,
        }
    }

    pub fn encode(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            key: key.into(),
            source,
        }
    }

    /// Storage key the failure relates to
    pub fn key(&self) -> &str {
        match self {
            Self::Malformed { key, .. } | Self::Encode { key, .. } => key,
        }
    }
}
