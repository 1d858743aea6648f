//! Static seed data for the stores.
//!
//! Notifications are listed newest first. The default bookings are what a
//! fresh install shows before the user has booked anything.

use lawyerup_domain::{
    Booking, BookingId, BookingStatus, Notification, NotificationId, NotificationKind,
    Participant, TimeSlot,
};

struct NotificationSeed {
    id: NotificationId,
    kind: NotificationKind,
    text: &'static str,
    detail: &'static str,
    time_label: &'static str,
    unread: bool,
    link: Option<&'static str>,
}

const NOTIFICATIONS: &[NotificationSeed] = &[
    NotificationSeed {
        id: 1,
        kind: NotificationKind::Booking,
        text: "Consultation confirmed",
        detail: "Sarah Mitchell confirmed your consultation for Friday at 10:00 AM.",
        time_label: "2 min ago",
        unread: true,
        link: Some("/dashboard/bookings"),
    },
    NotificationSeed {
        id: 2,
        kind: NotificationKind::Message,
        text: "New message from David Chen",
        detail: "I've reviewed the lease agreement and have a few notes for you.",
        time_label: "1 hour ago",
        unread: true,
        link: Some("/dashboard/messages"),
    },
    NotificationSeed {
        id: 3,
        kind: NotificationKind::Security,
        text: "New sign-in detected",
        detail: "Your account was accessed from a new device in Chicago, IL.",
        time_label: "3 hours ago",
        unread: true,
        link: Some("/dashboard/settings"),
    },
    NotificationSeed {
        id: 4,
        kind: NotificationKind::Booking,
        text: "Reminder: upcoming consultation",
        detail: "Your session with Maria Gonzalez starts tomorrow at 2:30 PM.",
        time_label: "Yesterday",
        unread: false,
        link: Some("/dashboard/bookings"),
    },
    NotificationSeed {
        id: 5,
        kind: NotificationKind::System,
        text: "Profile 80% complete",
        detail: "Add a phone number and location so lawyers can reach you faster.",
        time_label: "2 days ago",
        unread: false,
        link: Some("/dashboard/profile"),
    },
    NotificationSeed {
        id: 6,
        kind: NotificationKind::System,
        text: "Welcome to LawyerUp",
        detail: "Browse verified lawyers by practice area and book your first consultation.",
        time_label: "1 week ago",
        unread: false,
        link: None,
    },
];

/// The notification list every `NotificationStore` starts from
pub fn notifications() -> Vec<Notification> {
    NOTIFICATIONS
        .iter()
        .map(|seed| Notification {
            id: seed.id,
            kind: seed.kind,
            text: seed.text.to_string(),
            detail: seed.detail.to_string(),
            time_label: seed.time_label.to_string(),
            unread: seed.unread,
            link: seed.link.map(str::to_string),
        })
        .collect()
}

struct BookingSeed {
    id: &'static str,
    client: (&'static str, &'static str),
    lawyer: (&'static str, &'static str),
    /// (year, month, day, hour, minute, duration)
    slot: (i32, u32, u32, u32, u32, u32),
    topic: &'static str,
    status: BookingStatus,
}

const BOOKINGS: &[BookingSeed] = &[
    BookingSeed {
        id: "BK-1003",
        client: ("client-demo", "Alex Morgan"),
        lawyer: ("lawyer-sarah", "Sarah Mitchell"),
        slot: (2025, 7, 18, 10, 0, 60),
        topic: "Employment contract review",
        status: BookingStatus::Confirmed,
    },
    BookingSeed {
        id: "BK-1002",
        client: ("client-demo", "Alex Morgan"),
        lawyer: ("lawyer-david", "David Chen"),
        slot: (2025, 7, 21, 14, 30, 30),
        topic: "Residential lease dispute",
        status: BookingStatus::Pending,
    },
    BookingSeed {
        id: "BK-1001",
        client: ("client-jordan", "Jordan Lee"),
        lawyer: ("lawyer-maria", "Maria Gonzalez"),
        slot: (2025, 6, 30, 9, 0, 45),
        topic: "Immigration visa consultation",
        status: BookingStatus::Completed,
    },
];

/// Bookings shown before anything has been persisted
pub fn default_bookings() -> Vec<Booking> {
    BOOKINGS
        .iter()
        .filter_map(|seed| {
            let (year, month, day, hour, minute, duration) = seed.slot;
            let slot = TimeSlot::from_parts(year, month, day, hour, minute, duration)?;
            Some(Booking {
                id: BookingId::new(seed.id),
                client: Participant::new(seed.client.0, seed.client.1),
                lawyer: Participant::new(seed.lawyer.0, seed.lawyer.1),
                slot,
                topic: seed.topic.to_string(),
                status: seed.status,
                notes: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn notification_ids_are_unique() {
        let list = notifications();
        let ids: HashSet<_> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn notifications_start_with_some_unread() {
        assert!(notifications().iter().any(|n| n.unread));
    }

    #[test]
    fn every_booking_seed_is_valid() {
        assert_eq!(default_bookings().len(), BOOKINGS.len());
    }

    #[test]
    fn booking_seed_ids_are_unique() {
        let list = default_bookings();
        let ids: HashSet<_> = list.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids.len(), list.len());
    }
}
