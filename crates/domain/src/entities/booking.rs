//! Consultation bookings between a client and a lawyer

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::merge_field;
use crate::ids::BookingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Requested by the client, not yet accepted
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Check if this is a terminal state (no further transitions expected)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Reference to one side of a booking.
///
/// `id` is the user id as a string so seeded demo accounts can use fixed
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_minutes: u32,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, start: NaiveTime, duration_minutes: u32) -> Self {
        Self {
            date,
            start,
            duration_minutes,
        }
    }

    /// Build a slot from calendar parts, `None` if any part is out of range.
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        duration_minutes: u32,
    ) -> Option<Self> {
        Some(Self::new(
            NaiveDate::from_ymd_opt(year, month, day)?,
            NaiveTime::from_hms_opt(hour, minute, 0)?,
            duration_minutes,
        ))
    }

    /// Wall-clock end of the slot (wraps past midnight)
    pub fn end(&self) -> NaiveTime {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub client: Participant,
    pub lawyer: Participant,
    pub slot: TimeSlot,
    pub topic: String,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    /// Turn a draft into a pending booking with a generated id.
    pub fn from_draft(draft: BookingDraft) -> Self {
        Self {
            id: BookingId::generate(),
            client: draft.client,
            lawyer: draft.lawyer,
            slot: draft.slot,
            topic: draft.topic,
            status: BookingStatus::Pending,
            notes: draft.notes,
        }
    }

    /// Apply a patch, returning the merged booking. The id and participants
    /// never change.
    pub fn merge(&self, patch: &BookingPatch) -> Self {
        Self {
            id: self.id.clone(),
            client: self.client.clone(),
            lawyer: self.lawyer.clone(),
            slot: patch.slot.unwrap_or(self.slot),
            topic: patch.topic.clone().unwrap_or_else(|| self.topic.clone()),
            status: patch.status.unwrap_or(self.status),
            notes: merge_field(&self.notes, &patch.notes),
        }
    }
}

/// Booking request before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub client: Participant,
    pub lawyer: Participant,
    pub slot: TimeSlot,
    pub topic: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub slot: Option<TimeSlot>,
    pub topic: Option<String>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}

impl BookingPatch {
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking::from_draft(BookingDraft {
            client: Participant::new("client-1", "Sam Client"),
            lawyer: Participant::new("lawyer-1", "Lee Counsel"),
            slot: TimeSlot::from_parts(2025, 3, 14, 10, 30, 45).unwrap(),
            topic: "Lease review".into(),
            notes: Some("Bring the contract".into()),
        })
    }

    #[test]
    fn drafts_become_pending_bookings() {
        let b = booking();
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(b.id.as_str().starts_with(BookingId::PREFIX));
    }

    #[test]
    fn merge_keeps_unspecified_fields() {
        let b = booking();
        let merged = b.merge(&BookingPatch::status(BookingStatus::Confirmed));

        assert_eq!(merged.status, BookingStatus::Confirmed);
        assert_eq!(merged.topic, b.topic);
        assert_eq!(merged.notes, b.notes);
        assert_eq!(merged.id, b.id);
    }

    #[test]
    fn slot_end_adds_duration() {
        let slot = TimeSlot::from_parts(2025, 3, 14, 23, 30, 45).unwrap();
        assert_eq!(slot.end(), NaiveTime::from_hms_opt(0, 15, 0).unwrap());
    }

    #[test]
    fn invalid_slot_parts_are_rejected() {
        assert!(TimeSlot::from_parts(2025, 2, 30, 9, 0, 30).is_none());
        assert!(TimeSlot::from_parts(2025, 2, 1, 25, 0, 30).is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(BookingStatus::Confirmed.is_upcoming());
    }
}
