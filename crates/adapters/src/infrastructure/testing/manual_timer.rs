//! Timer that only fires when the test advances it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use lawyerup_ports::TimerProvider;

type Task = Box<dyn FnOnce() + Send + 'static>;

struct Scheduled {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct State {
    now: Duration,
    next_seq: u64,
    queue: Vec<Scheduled>,
}

/// Virtual-time timer.
///
/// Tasks run in due order (ties in scheduling order) when `advance` moves
/// virtual time past them. A task may schedule further tasks; those run in
/// the same `advance` call if they fall due within it.
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<State>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.lock().now + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.lock().now = target;
    }

    /// Run every pending task regardless of its due time.
    pub fn fire_all(&self) {
        let latest = self
            .lock()
            .queue
            .iter()
            .map(|s| s.due)
            .max()
            .unwrap_or_default();
        let now = self.now();
        if latest > now {
            self.advance(latest - now);
        }
    }

    /// Tasks scheduled but not yet run
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.lock();
        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= target)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;
        let scheduled = state.queue.remove(index);
        state.now = scheduled.due;
        Some(scheduled.task)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TimerProvider for ManualTimer {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.lock();
        let scheduled = Scheduled {
            due: state.now + delay,
            seq: state.next_seq,
            task,
        };
        state.next_seq += 1;
        state.queue.push(scheduled);
    }
}
