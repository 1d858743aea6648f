//! User accounts and the authenticated session
//!
//! `UserRecord` is what the durable user list holds, password included.
//! `SessionUser` is the copy handed to the rest of the client. It has no
//! password field at all, so a serialized session can never leak one.

use serde::{Deserialize, Serialize};

use super::merge_field;
use crate::ids::UserId;

/// Which side of the marketplace an account is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Lawyer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Lawyer => write!(f, "lawyer"),
        }
    }
}

/// Optional profile details shared by both roles.
///
/// The last three fields are only filled in for lawyers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<u32>,
}

impl Profile {
    /// Apply a patch, returning the merged profile.
    pub fn merge(&self, patch: &ProfilePatch) -> Self {
        Self {
            phone: merge_field(&self.phone, &patch.phone),
            location: merge_field(&self.location, &patch.location),
            bio: merge_field(&self.bio, &patch.bio),
            avatar_url: merge_field(&self.avatar_url, &patch.avatar_url),
            specialization: merge_field(&self.specialization, &patch.specialization),
            bar_number: merge_field(&self.bar_number, &patch.bar_number),
            hourly_rate: merge_field(&self.hourly_rate, &patch.hourly_rate),
        }
    }
}

/// Partial profile update. Every `Some` field replaces the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub specialization: Option<String>,
    pub bar_number: Option<String>,
    pub hourly_rate: Option<u32>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    pub fn with_hourly_rate(mut self, rate: u32) -> Self {
        self.hourly_rate = Some(rate);
        self
    }
}

/// A sign-up candidate before it has been assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile: Profile,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            profile: Profile::default(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }
}

/// Durable user entry. Stored with its password (plaintext demo storage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(flatten)]
    pub profile: Profile,
}

impl UserRecord {
    /// Assign a fresh id to a registration candidate.
    pub fn from_registration(registration: Registration) -> Self {
        Self {
            id: UserId::new(),
            name: registration.name,
            email: registration.email.trim().to_string(),
            password: registration.password,
            role: registration.role,
            profile: registration.profile,
        }
    }

    /// Emails compare case-insensitively, ignoring surrounding whitespace.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.has_email(email) && self.password == password
    }

    /// Password-stripped copy for use as the active session.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            profile: self.profile.clone(),
        }
    }

    pub fn apply(&mut self, patch: &ProfilePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        self.profile = self.profile.merge(patch);
    }
}

/// The authenticated user as seen by the rest of the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(flatten)]
    pub profile: Profile,
}

impl SessionUser {
    pub fn merge(&self, patch: &ProfilePatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: self.email.clone(),
            role: self.role,
            profile: self.profile.merge(patch),
        }
    }

    pub fn is_lawyer(&self) -> bool {
        self.role == Role::Lawyer
    }
}
