//! Deferred router for the console.

use std::collections::VecDeque;

use folio_terminal::{Page, Router, Terminal};

/// Queues navigation requests so the destination is mounted after the
/// dispatcher call has returned.
#[derive(Debug, Default)]
pub struct QueuedRouter {
    pending: VecDeque<Page>,
}

impl QueuedRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount every queued page in order. Returns whether anything mounted.
    pub fn flush(&mut self, terminal: &mut Terminal) -> bool {
        let mut mounted = false;
        while let Some(page) = self.pending.pop_front() {
            terminal.mount_page(page);
            mounted = true;
        }
        mounted
    }
}

impl Router for QueuedRouter {
    fn navigate_to(&mut self, page: Page) {
        self.pending.push_back(page);
    }
}
