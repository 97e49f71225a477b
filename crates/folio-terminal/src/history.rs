//! Recall history: previously submitted commands, most recent first.
//!
//! The list is deduplicated and bounded. It is persisted as a JSON array of
//! strings under one key of a [`KeyValueStore`], written in full on every
//! change and read once when the session starts.

use folio_store::KeyValueStore;
use folio_types::error::Result;

/// Default number of remembered commands.
pub const DEFAULT_CAPACITY: usize = 50;

/// Direction of an Up/Down recall step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up: toward older entries.
    Older,
    /// Down: toward newer entries, then back to an empty line.
    Newer,
}

#[derive(Debug, Clone)]
pub struct RecallHistory {
    entries: Vec<String>,
    capacity: usize,
    key: String,
}

impl RecallHistory {
    /// An empty history persisted under `key`.
    pub fn new(key: &str, capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            key: key.to_string(),
        }
    }

    /// Load from `store`. Missing data yields an empty history; unreadable or
    /// malformed data is logged and also yields an empty history.
    pub fn load(store: &dyn KeyValueStore, key: &str, capacity: usize) -> Self {
        let mut history = Self::new(key, capacity);
        match Self::read(store, key) {
            Ok(Some(saved)) => {
                for entry in saved {
                    let entry = entry.trim();
                    if !entry.is_empty() && !history.entries.iter().any(|e| e == entry) {
                        history.entries.push(entry.to_string());
                    }
                }
                history.entries.truncate(history.capacity);
                log::debug!("loaded {} history entries", history.entries.len());
            },
            Ok(None) => {},
            Err(e) => log::warn!("failed to load command history: {e}"),
        }
        history
    }

    fn read(store: &dyn KeyValueStore, key: &str) -> Result<Option<Vec<String>>> {
        match store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Move `command` to the front, evicting the oldest entry past capacity,
    /// and persist. Blank input is ignored. Returns whether anything changed.
    pub fn record(&mut self, command: &str, store: &mut dyn KeyValueStore) -> bool {
        let command = command.trim();
        if command.is_empty() {
            return false;
        }
        self.entries.retain(|e| e != command);
        self.entries.insert(0, command.to_string());
        self.entries.truncate(self.capacity);
        if let Err(e) = self.persist(store) {
            log::warn!("failed to save command history: {e}");
        }
        true
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set(&self.key, &json)
    }

    /// One recall step from `current` (none = not browsing).
    ///
    /// Returns the text to place in the input and the new position, or
    /// `None` when the step does nothing. Stepping newer past the most recent
    /// entry yields an empty string and no position.
    pub fn navigate(
        &self,
        direction: Direction,
        current: Option<usize>,
    ) -> Option<(String, Option<usize>)> {
        match direction {
            Direction::Older => {
                if self.entries.is_empty() {
                    return None;
                }
                let last = self.entries.len() - 1;
                let next = current.map_or(0, |i| (i + 1).min(last));
                Some((self.entries[next].clone(), Some(next)))
            },
            Direction::Newer => match current {
                Some(0) => Some((String::new(), None)),
                Some(i) => {
                    let next = (i - 1).min(self.entries.len().checked_sub(1)?);
                    Some((self.entries[next].clone(), Some(next)))
                },
                None => None,
            },
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
