//! Transient toast messages.
//!
//! Every pushed toast schedules its own removal through the injected
//! [`TimerProvider`]. Timers cannot be cancelled, so expiry and an explicit
//! `dismiss` may both try to remove the same toast; whichever runs second
//! finds nothing and does nothing.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use lawyerup_domain::{Toast, ToastAction, ToastId, ToastSeverity};
use lawyerup_ports::{StoreConfig, TimeProvider, TimerProvider};

use crate::lock;
use crate::signal::{ChangeSignal, StoreEvent, Subscription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(Toast),
    Dismissed(ToastId),
    Expired(ToastId),
    Cleared,
}

impl StoreEvent for ToastEvent {
    const NAME: &'static str = "toasts-changed";
}

struct ToastState {
    toasts: RwLock<Vec<Toast>>,
    changes: ChangeSignal<ToastEvent>,
}

impl ToastState {
    /// Remove by id. Returns false if the toast was already gone.
    fn remove(&self, id: ToastId) -> bool {
        let mut toasts = lock::write(&self.toasts);
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }
}

/// Queue of visible toasts, in insertion order
#[derive(Clone)]
pub struct ToastQueue<T: TimerProvider, C: TimeProvider> {
    state: Arc<ToastState>,
    timer: T,
    clock: C,
    duration: Duration,
}

impl<T: TimerProvider, C: TimeProvider> ToastQueue<T, C> {
    pub fn new(timer: T, clock: C, config: &StoreConfig) -> Self {
        Self {
            state: Arc::new(ToastState {
                toasts: RwLock::new(Vec::new()),
                changes: ChangeSignal::new(),
            }),
            timer,
            clock,
            duration: config.toast_duration,
        }
    }

    /// Show a toast and schedule its expiry. Returns the new toast's id.
    pub fn push(
        &self,
        message: impl Into<String>,
        severity: ToastSeverity,
        action: Option<ToastAction>,
    ) -> ToastId {
        let toast = Toast::new(message, severity, self.clock.now_millis()).with_action(action);
        let id = toast.id;

        lock::write(&self.state.toasts).push(toast.clone());
        tracing::debug!(toast_id = %id, ?severity, "Toast shown");
        self.state.changes.emit(ToastEvent::Shown(toast));

        let state = Arc::downgrade(&self.state);
        self.timer.schedule(
            self.duration,
            Box::new(move || {
                let Some(state) = state.upgrade() else {
                    return;
                };
                if state.remove(id) {
                    tracing::debug!(toast_id = %id, "Toast expired");
                    state.changes.emit(ToastEvent::Expired(id));
                }
            }),
        );

        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastSeverity::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastSeverity::Error, None)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastSeverity::Info, None)
    }

    /// Remove a toast now. Returns false (and does nothing) if it is
    /// already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let removed = self.state.remove(id);
        if removed {
            tracing::debug!(toast_id = %id, "Toast dismissed");
            self.state.changes.emit(ToastEvent::Dismissed(id));
        }
        removed
    }

    /// Remove every visible toast. Pending expiry timers become no-ops.
    pub fn clear(&self) {
        let had_any = {
            let mut toasts = lock::write(&self.state.toasts);
            let had_any = !toasts.is_empty();
            toasts.clear();
            had_any
        };
        if had_any {
            self.state.changes.emit(ToastEvent::Cleared);
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        lock::read(&self.state.toasts).clone()
    }

    pub fn len(&self) -> usize {
        lock::read(&self.state.toasts).len()
    }

    pub fn is_empty(&self) -> bool {
        lock::read(&self.state.toasts).is_empty()
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&ToastEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.state.changes.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawyerup_adapters::infrastructure::testing::{FixedClock, ManualTimer};
    use lawyerup_ports::outbound::testing::{MockClock, MockTimer};
    use std::sync::Mutex;

    fn queue() -> (ManualTimer, ToastQueue<ManualTimer, FixedClock>) {
        let timer = ManualTimer::new();
        let queue = ToastQueue::new(
            timer.clone(),
            FixedClock::at(1_000),
            &StoreConfig::default(),
        );
        (timer, queue)
    }

    fn record_events(
        queue: &ToastQueue<ManualTimer, FixedClock>,
    ) -> (Arc<Mutex<Vec<ToastEvent>>>, Subscription) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let sub = queue.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        (events, sub)
    }

    #[test]
    fn test_push_appends_in_insertion_order() {
        let (_timer, queue) = queue();
        let a = queue.success("Saved");
        let b = queue.error("Failed");
        let c = queue.push(
            "Booked",
            ToastSeverity::Info,
            Some(ToastAction::new("View", "/dashboard/bookings")),
        );

        let ids: Vec<_> = queue.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(
            queue.list()[2].action.as_ref().map(|a| a.href.as_str()),
            Some("/dashboard/bookings")
        );
        assert_eq!(queue.list()[0].created_at_ms, 1_000);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_timer, queue) = queue();
        assert_ne!(queue.info("one"), queue.info("two"));
    }

    #[test]
    fn test_toast_expires_after_configured_duration() {
        let (timer, queue) = queue();
        queue.info("Hello");

        timer.advance(Duration::from_millis(2_999));
        assert_eq!(queue.len(), 1);

        timer.advance(Duration::from_millis(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_before_expiry_removes_exactly_once() {
        let (timer, queue) = queue();
        let (events, _sub) = record_events(&queue);
        let id = queue.info("Hello");

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        timer.advance(Duration::from_millis(3_000));

        assert!(queue.is_empty());
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ToastEvent::Shown(_)));
        assert_eq!(events[1], ToastEvent::Dismissed(id));
    }

    #[test]
    fn test_dismiss_after_expiry_is_noop() {
        let (timer, queue) = queue();
        let id = queue.info("Hello");

        timer.advance(Duration::from_millis(3_000));
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_expiry_only_removes_its_own_toast() {
        let (timer, queue) = queue();
        let first = queue.info("first");
        timer.advance(Duration::from_millis(2_000));
        let second = queue.info("second");

        timer.advance(Duration::from_millis(1_000));

        let ids: Vec<_> = queue.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second]);
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn test_dismissing_unknown_id_is_noop() {
        let (_timer, queue) = queue();
        queue.info("keep me");
        assert!(!queue.dismiss(ToastId::new()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_clear_then_timers_are_harmless() {
        let (timer, queue) = queue();
        let (events, _sub) = record_events(&queue);
        queue.info("a");
        queue.info("b");

        queue.clear();
        timer.advance(Duration::from_millis(3_000));

        assert!(queue.is_empty());
        assert_eq!(events.lock().unwrap().last(), Some(&ToastEvent::Cleared));
        assert_eq!(events.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_timer_outliving_queue_does_nothing() {
        let (timer, queue) = queue();
        queue.info("orphan");
        drop(queue);

        timer.advance(Duration::from_millis(3_000));
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_push_schedules_with_configured_delay() {
        let mut timer = MockTimer::new();
        timer
            .expect_schedule()
            .withf(|delay, _| *delay == Duration::from_millis(500))
            .times(1)
            .return_const(());
        let mut clock = MockClock::new();
        clock.expect_now_millis().return_const(42u64);

        let config = StoreConfig::default().with_toast_duration(Duration::from_millis(500));
        let queue = ToastQueue::new(timer, clock, &config);
        queue.info("short-lived");

        assert_eq!(queue.list()[0].created_at_ms, 42);
    }
}
