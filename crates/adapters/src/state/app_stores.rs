//! The four client stores built over one platform

use lawyerup_app::{BookingStore, NotificationStore, SessionStore, ToastQueue};
use lawyerup_ports::StoreConfig;

use super::Platform;

/// Every store a client shell needs.
///
/// The stores share a platform but not state: each one owns its own list
/// and its own change signal.
#[derive(Clone)]
pub struct AppStores {
    pub session: SessionStore<Platform>,
    pub notifications: NotificationStore,
    pub toasts: ToastQueue<Platform, Platform>,
    pub bookings: BookingStore<Platform>,
}

impl AppStores {
    pub fn new(platform: &Platform, config: &StoreConfig) -> Self {
        tracing::debug!(
            toast_ms = config.toast_duration.as_millis() as u64,
            "Building client stores"
        );
        Self {
            session: SessionStore::new(platform.clone()),
            notifications: NotificationStore::new(),
            toasts: ToastQueue::new(platform.clone(), platform.clone(), config),
            bookings: BookingStore::new(platform.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{FixedClock, InMemoryStorage, ManualTimer};
    use lawyerup_domain::{BookingStatus, Registration, Role};
    use lawyerup_ports::{storage_keys, StorageProvider};
    use std::time::Duration;

    fn build() -> (InMemoryStorage, ManualTimer, AppStores) {
        let storage = InMemoryStorage::new();
        let timer = ManualTimer::new();
        let platform = Platform::new(FixedClock::at(0), timer.clone(), storage.clone());
        let stores = AppStores::new(&platform, &StoreConfig::default());
        (storage, timer, stores)
    }

    #[test]
    fn stores_are_independent() {
        let (storage, _timer, stores) = build();

        stores
            .session
            .register(Registration::new("Ada", "ada@example.com", "pw", Role::Client))
            .unwrap();
        stores.session.login("ada@example.com", "pw").unwrap();

        // Signing in touches neither bookings nor notifications
        assert!(storage.load(storage_keys::BOOKINGS).is_none());
        assert_eq!(
            stores.notifications.unread_count(),
            NotificationStore::new().unread_count()
        );
        assert!(stores.toasts.is_empty());
    }

    #[test]
    fn toasts_expire_through_the_platform_timer() {
        let (_storage, timer, stores) = build();
        stores.toasts.success("Booking requested");

        timer.advance(Duration::from_millis(3_000));

        assert!(stores.toasts.is_empty());
    }

    #[test]
    fn bookings_persist_through_platform_storage() {
        let (storage, _timer, stores) = build();
        let first = stores.bookings.list()[0].id.clone();
        stores
            .bookings
            .update_status(&first, BookingStatus::Cancelled);

        let platform = Platform::new(FixedClock::at(0), ManualTimer::new(), storage);
        let reloaded = AppStores::new(&platform, &StoreConfig::default());
        assert_eq!(
            reloaded.bookings.get(&first).map(|b| b.status),
            Some(BookingStatus::Cancelled)
        );
    }
}
