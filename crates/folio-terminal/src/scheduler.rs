//! Tick-driven deferred tasks.
//!
//! Time only moves when the owner calls [`Scheduler::pop_due`] /
//! [`Scheduler::advance_to`] from its frame loop, so behavior is fully
//! deterministic under test. Each task carries a [`CancelToken`]; cancelled
//! tasks are dropped without firing.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
struct Task<T> {
    due_ms: u64,
    seq: u64,
    token: CancelToken,
    payload: T,
}

/// A queue of payloads released once the clock reaches their due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    tasks: Vec<Task<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            tasks: Vec::new(),
        }
    }

    /// Current scheduler clock in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `payload` to fire `delay_ms` after the current clock.
    pub fn schedule(&mut self, delay_ms: u32, token: &CancelToken, payload: T) {
        let due_ms = self.now_ms + u64::from(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        log::debug!("scheduled task {seq} due at {due_ms} ms");
        self.tasks.push(Task {
            due_ms,
            seq,
            token: token.clone(),
            payload,
        });
    }

    /// Remove and return the earliest task due at or before `until_ms`,
    /// moving the clock to its due time. Ties fire in scheduling order.
    /// Cancelled tasks are discarded along the way.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        loop {
            let index = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= until_ms)
                .min_by_key(|(_, t)| (t.due_ms, t.seq))
                .map(|(i, _)| i)?;
            let task = self.tasks.remove(index);
            self.now_ms = self.now_ms.max(task.due_ms);
            if task.token.is_cancelled() {
                log::debug!("dropped cancelled task {}", task.seq);
                continue;
            }
            return Some(task.payload);
        }
    }

    /// Move the clock forward to `until_ms` (never backward).
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Tasks that are queued and not cancelled.
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| !t.token.is_cancelled())
            .count()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}
