//! Authentication session management
//!
//! Accounts live under `storage_keys::USERS`; the signed-in user lives
//! under `storage_keys::SESSION` as a [`SessionUser`], which has no
//! password field. Storage is the source of truth: a new store instance
//! over the same storage picks up the previous session.

use std::sync::{Arc, RwLock};

use lawyerup_domain::{AuthError, ProfilePatch, Registration, Role, SessionUser, UserRecord};
use lawyerup_ports::{storage_keys, StorageProvider};

use crate::lock;
use crate::signal::{ChangeSignal, StoreEvent, Subscription};
use crate::storage::JsonStorage;

/// Payload of the `auth-change` signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(SessionUser),
    SignedOut,
    ProfileUpdated(SessionUser),
    /// Storage changed underneath the store (another tab or process)
    Restored(Option<SessionUser>),
}

impl StoreEvent for SessionEvent {
    const NAME: &'static str = "auth-change";
}

/// Store for the authenticated user
#[derive(Clone)]
pub struct SessionStore<S: StorageProvider> {
    storage: S,
    changes: ChangeSignal<SessionEvent>,
    /// Last session this store observed, used by `refresh()` to detect
    /// writes made by someone else
    observed: Arc<RwLock<Option<SessionUser>>>,
}

impl<S: StorageProvider> SessionStore<S> {
    /// Create a store over the given storage, rehydrating any saved session.
    pub fn new(storage: S) -> Self {
        let observed = storage.read_json_or_warn::<SessionUser>(storage_keys::SESSION);
        Self {
            storage,
            changes: ChangeSignal::new(),
            observed: Arc::new(RwLock::new(observed)),
        }
    }

    /// Create an account.
    ///
    /// Fails with `DuplicateUser` if the email is already registered. Does
    /// not sign the new user in.
    pub fn register(&self, registration: Registration) -> Result<SessionUser, AuthError> {
        let mut users = self.users();
        if users.iter().any(|u| u.has_email(&registration.email)) {
            tracing::debug!(email = %registration.email, "Registration rejected: duplicate email");
            return Err(AuthError::DuplicateUser {
                email: registration.email.trim().to_string(),
            });
        }

        let record = UserRecord::from_registration(registration);
        let session = record.to_session();
        users.push(record);
        self.storage.write_json_or_log(storage_keys::USERS, &users);

        tracing::info!(user_id = %session.id, role = %session.role, "Registered user");
        Ok(session)
    }

    /// Sign in with email and password.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let session = self
            .users()
            .iter()
            .find(|u| u.matches_credentials(email, password))
            .map(UserRecord::to_session)
            .ok_or(AuthError::InvalidCredentials)?;

        self.persist_session(Some(&session));
        tracing::info!(user_id = %session.id, "Signed in");
        self.changes.emit(SessionEvent::SignedIn(session.clone()));
        Ok(session)
    }

    /// The active session, if any. Never fails; a malformed stored session
    /// reads as signed out.
    pub fn session(&self) -> Option<SessionUser> {
        self.storage.read_json_or_warn::<SessionUser>(storage_keys::SESSION)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    /// Clear the active session.
    pub fn logout(&self) {
        self.persist_session(None);
        tracing::info!("Signed out");
        self.changes.emit(SessionEvent::SignedOut);
    }

    /// Merge `patch` into the signed-in user's stored record and session.
    ///
    /// Returns `None` without touching storage when nobody is signed in.
    pub fn update_profile(&self, patch: &ProfilePatch) -> Option<SessionUser> {
        let current = self.session()?;
        let updated = current.merge(patch);

        let mut users = self.users();
        match users.iter_mut().find(|u| u.id == current.id) {
            Some(record) => {
                record.apply(patch);
                self.storage.write_json_or_log(storage_keys::USERS, &users);
            }
            None => {
                tracing::warn!(user_id = %current.id, "Session user missing from user list");
            }
        }

        self.persist_session(Some(&updated));
        tracing::debug!(user_id = %updated.id, "Profile updated");
        self.changes.emit(SessionEvent::ProfileUpdated(updated.clone()));
        Some(updated)
    }

    /// Re-read the stored session and announce it if it changed since this
    /// store last saw it.
    pub fn refresh(&self) -> Option<SessionUser> {
        let stored = self.session();
        let changed = {
            let mut observed = lock::write(&self.observed);
            if *observed == stored {
                false
            } else {
                *observed = stored.clone();
                true
            }
        };

        if changed {
            tracing::debug!(signed_in = stored.is_some(), "Session changed in storage");
            self.changes.emit(SessionEvent::Restored(stored.clone()));
        }
        stored
    }

    /// Number of registered accounts
    pub fn users_len(&self) -> usize {
        self.users().len()
    }

    /// Listen for `auth-change`.
    pub fn subscribe(
        &self,
        callback: impl Fn(&SessionEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.changes.subscribe(callback)
    }

    fn users(&self) -> Vec<UserRecord> {
        self.storage
            .read_json_or_warn(storage_keys::USERS)
            .unwrap_or_default()
    }

    fn persist_session(&self, session: Option<&SessionUser>) {
        match session {
            Some(session) => self.storage.write_json_or_log(storage_keys::SESSION, session),
            None => self.storage.remove(storage_keys::SESSION),
        }
        *lock::write(&self.observed) = session.cloned();
    }
}
