//! Notification panel state.
//!
//! In memory only: every new store starts from the seed list again.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use lawyerup_domain::{Notification, NotificationId, NotificationKind};

use crate::lock;
use crate::seed;
use crate::signal::{ChangeSignal, StoreEvent, Subscription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Read(NotificationId),
    /// `count` entries went from unread to read
    AllRead { count: usize },
    Reseeded,
}

impl StoreEvent for NotificationEvent {
    const NAME: &'static str = "notifications-changed";
}

#[derive(Clone)]
pub struct NotificationStore {
    seed: Arc<Vec<Notification>>,
    entries: Arc<RwLock<Vec<Notification>>>,
    changes: ChangeSignal<NotificationEvent>,
}

impl NotificationStore {
    /// Store seeded with the built-in notification list.
    pub fn new() -> Self {
        Self::with_seed(seed::notifications())
    }

    /// Store seeded with a custom list, newest first.
    ///
    /// Ids must be unique; a repeated id keeps only its first entry.
    pub fn with_seed(seed: Vec<Notification>) -> Self {
        let mut seen = HashSet::new();
        let seed: Vec<Notification> = seed
            .into_iter()
            .filter(|n| {
                let first = seen.insert(n.id);
                if !first {
                    tracing::warn!(notification_id = n.id, "Dropping duplicate notification id");
                }
                first
            })
            .collect();
        Self {
            entries: Arc::new(RwLock::new(seed.clone())),
            seed: Arc::new(seed),
            changes: ChangeSignal::new(),
        }
    }

    pub fn list(&self) -> Vec<Notification> {
        lock::read(&self.entries).clone()
    }

    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        lock::read(&self.entries)
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    pub fn by_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        lock::read(&self.entries)
            .iter()
            .filter(|n| n.kind == kind)
            .cloned()
            .collect()
    }

    pub fn unread(&self) -> Vec<Notification> {
        lock::read(&self.entries)
            .iter()
            .filter(|n| n.unread)
            .cloned()
            .collect()
    }

    /// Count of unread entries, computed from the current list.
    pub fn unread_count(&self) -> usize {
        lock::read(&self.entries)
            .iter()
            .filter(|n| n.unread)
            .count()
    }

    /// Mark one entry read. Unknown ids and already-read entries are no-ops.
    pub fn mark_read(&self, id: NotificationId) {
        let changed = lock::write(&self.entries)
            .iter_mut()
            .find(|n| n.id == id)
            .map(Notification::mark_read)
            .unwrap_or(false);

        if changed {
            tracing::debug!(notification_id = id, "Notification marked read");
            self.changes.emit(NotificationEvent::Read(id));
        }
    }

    pub fn mark_all_read(&self) {
        let count = lock::write(&self.entries)
            .iter_mut()
            .map(Notification::mark_read)
            .filter(|changed| *changed)
            .count();

        if count > 0 {
            tracing::debug!(count, "All notifications marked read");
            self.changes.emit(NotificationEvent::AllRead { count });
        }
    }

    /// Restore the seed list, unread flags included.
    pub fn reseed(&self) {
        *lock::write(&self.entries) = self.seed.as_ref().clone();
        self.changes.emit(NotificationEvent::Reseeded);
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&NotificationEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.changes.subscribe(callback)
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn note(id: NotificationId, kind: NotificationKind, unread: bool) -> Notification {
        Notification {
            id,
            kind,
            text: format!("n{id}"),
            detail: String::new(),
            time_label: "now".into(),
            unread,
            link: None,
        }
    }

    fn small_store() -> NotificationStore {
        NotificationStore::with_seed(vec![
            note(3, NotificationKind::Message, true),
            note(2, NotificationKind::Booking, true),
            note(1, NotificationKind::System, false),
        ])
    }

    #[test]
    fn test_seeded_on_construction() {
        let store = NotificationStore::new();
        assert_eq!(store.list(), seed::notifications());
        assert!(store.unread_count() > 0);
    }

    #[test]
    fn test_mark_read_clears_one_flag() {
        let store = small_store();
        store.mark_read(3);

        assert_eq!(store.get(3).map(|n| n.unread), Some(false));
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn test_mark_read_absent_id_leaves_list_unchanged() {
        let store = small_store();
        let before = store.list();

        store.mark_read(99);

        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_mark_all_read_zeroes_unread_count() {
        let store = NotificationStore::new();
        store.mark_read(1);
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);

        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_order_is_preserved() {
        let store = small_store();
        store.mark_all_read();
        let ids: Vec<_> = store.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_events_only_on_real_changes() {
        let store = small_store();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let _sub = store.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

        store.mark_read(1); // already read
        store.mark_read(42); // absent
        store.mark_read(3);
        store.mark_all_read();
        store.mark_all_read();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                NotificationEvent::Read(3),
                NotificationEvent::AllRead { count: 1 }
            ]
        );
    }

    #[test]
    fn test_reseed_restores_unread_flags() {
        let store = small_store();
        store.mark_all_read();
        store.reseed();
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_filters() {
        let store = small_store();
        assert_eq!(store.by_kind(NotificationKind::Booking).len(), 1);
        assert_eq!(
            store.unread().iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![3, 2]
        );
    }

    #[test]
    fn test_duplicate_seed_ids_keep_first_entry() {
        let store = NotificationStore::with_seed(vec![
            note(2, NotificationKind::Message, true),
            note(2, NotificationKind::System, true),
            note(1, NotificationKind::Booking, true),
        ]);

        assert_eq!(store.list().len(), 2);
        assert_eq!(store.get(2).map(|n| n.kind), Some(NotificationKind::Message));

        store.mark_read(2);
        assert_eq!(store.unread_count(), 1);

        store.reseed();
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = small_store();
        let panel = store.clone();
        panel.mark_all_read();
        assert_eq!(store.unread_count(), 0);
    }
}
