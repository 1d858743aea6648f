use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(UserId);
define_id!(ToastId);

/// Notification ids are small integers fixed by the seed list.
pub type NotificationId = u32;

/// Booking identifier.
///
/// Seeded bookings carry fixed tokens (`BK-1001`); bookings created at
/// runtime get `BK-` followed by eight hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub const PREFIX: &'static str = "BK-";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh random booking id.
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(format!("{}{}", Self::PREFIX, &simple[..8].to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_booking_ids_are_prefixed_and_distinct() {
        let a = BookingId::generate();
        let b = BookingId::generate();

        assert!(a.as_str().starts_with(BookingId::PREFIX));
        assert_eq!(a.as_str().len(), BookingId::PREFIX.len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn ids_serialize_as_bare_values() {
        let id = BookingId::from("BK-1001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"BK-1001\"");

        let user = UserId::new();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, format!("\"{}\"", user));
    }
}
