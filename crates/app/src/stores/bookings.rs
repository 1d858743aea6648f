//! Consultation bookings, persisted under `storage_keys::BOOKINGS`.
//!
//! The stored list is newest first. Reads that find no list seed the
//! defaults; reads that find something other than a list fall back to the
//! defaults without touching storage, and the next write replaces the bad
//! payload. Entries inside a list that do not decode as bookings are hidden
//! from readers but written back untouched, so no stored booking is ever
//! dropped.

use serde::{Deserialize, Serialize};

use lawyerup_domain::{Booking, BookingDraft, BookingId, BookingPatch, BookingStatus};
use lawyerup_ports::{storage_keys, StorageProvider};

use crate::seed;
use crate::signal::{ChangeSignal, StoreEvent, Subscription};
use crate::storage::JsonStorage;

/// Payload of the `bookings-updated` signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    Added(Booking),
    Updated(Booking),
}

impl StoreEvent for BookingEvent {
    const NAME: &'static str = "bookings-updated";
}

/// One element of the stored list
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Booking(Booking),
    /// Kept verbatim (unknown status, older record shape, ...)
    Unreadable(serde_json::Value),
}

impl StoredEntry {
    fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Booking(booking) => Some(booking),
            Self::Unreadable(_) => None,
        }
    }

    fn booking_mut(&mut self) -> Option<&mut Booking> {
        match self {
            Self::Booking(booking) => Some(booking),
            Self::Unreadable(_) => None,
        }
    }

    fn into_booking(self) -> Option<Booking> {
        match self {
            Self::Booking(booking) => Some(booking),
            Self::Unreadable(_) => None,
        }
    }
}

#[derive(Clone)]
pub struct BookingStore<S: StorageProvider> {
    storage: S,
    changes: ChangeSignal<BookingEvent>,
}

impl<S: StorageProvider> BookingStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            changes: ChangeSignal::new(),
        }
    }

    /// All readable bookings, newest first.
    pub fn list(&self) -> Vec<Booking> {
        self.entries()
            .into_iter()
            .filter_map(StoredEntry::into_booking)
            .collect()
    }

    pub fn get(&self, id: &BookingId) -> Option<Booking> {
        self.list().into_iter().find(|b| &b.id == id)
    }

    pub fn for_client(&self, user_id: &str) -> Vec<Booking> {
        self.list()
            .into_iter()
            .filter(|b| b.client.id == user_id)
            .collect()
    }

    pub fn for_lawyer(&self, user_id: &str) -> Vec<Booking> {
        self.list()
            .into_iter()
            .filter(|b| b.lawyer.id == user_id)
            .collect()
    }

    /// Prepend a booking and persist.
    ///
    /// A booking whose id is already stored is rejected (returns false) so
    /// ids stay unique.
    pub fn add(&self, booking: Booking) -> bool {
        let mut entries = self.entries();
        if entries
            .iter()
            .filter_map(StoredEntry::booking)
            .any(|b| b.id == booking.id)
        {
            tracing::warn!(booking_id = %booking.id, "Booking id already exists, not added");
            return false;
        }

        entries.insert(0, StoredEntry::Booking(booking.clone()));
        self.storage.write_json_or_log(storage_keys::BOOKINGS, &entries);
        tracing::info!(booking_id = %booking.id, lawyer = %booking.lawyer.name, "Booking added");
        self.changes.emit(BookingEvent::Added(booking));
        true
    }

    /// Create a pending booking from a draft and add it.
    pub fn book(&self, draft: BookingDraft) -> Booking {
        let mut booking = Booking::from_draft(draft);
        while !self.add(booking.clone()) {
            booking.id = BookingId::generate();
        }
        booking
    }

    /// Merge `patch` into the booking with this id and persist. `None` if no
    /// such booking exists.
    pub fn update(&self, id: &BookingId, patch: &BookingPatch) -> Option<Booking> {
        let mut entries = self.entries();
        let entry = entries
            .iter_mut()
            .find_map(|e| e.booking_mut().filter(|b| &b.id == id))?;
        let updated = entry.merge(patch);
        *entry = updated.clone();

        self.storage.write_json_or_log(storage_keys::BOOKINGS, &entries);
        tracing::debug!(booking_id = %id, status = %updated.status, "Booking updated");
        self.changes.emit(BookingEvent::Updated(updated.clone()));
        Some(updated)
    }

    pub fn update_status(&self, id: &BookingId, status: BookingStatus) -> Option<Booking> {
        self.update(id, &BookingPatch::status(status))
    }

    /// Listen for `bookings-updated`. Drop the returned handle on teardown.
    pub fn subscribe(
        &self,
        callback: impl Fn(&BookingEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.changes.subscribe(callback)
    }

    /// The stored list, seeding or falling back to the defaults as needed.
    fn entries(&self) -> Vec<StoredEntry> {
        match self.storage.read_json::<Vec<StoredEntry>>(storage_keys::BOOKINGS) {
            Ok(Some(entries)) => {
                let unreadable = entries.iter().filter(|e| e.booking().is_none()).count();
                if unreadable > 0 {
                    tracing::warn!(unreadable, "Keeping stored bookings that do not decode");
                }
                entries
            }
            Ok(None) => {
                let defaults = seed::default_bookings();
                tracing::debug!(count = defaults.len(), "Seeding default bookings");
                self.storage.write_json_or_log(storage_keys::BOOKINGS, &defaults);
                defaults.into_iter().map(StoredEntry::Booking).collect()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored bookings are malformed, using defaults");
                seed::default_bookings()
                    .into_iter()
                    .map(StoredEntry::Booking)
                    .collect()
            }
        }
    }
}
