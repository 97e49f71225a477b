//! Prefix autocomplete over the command registry.

use std::sync::LazyLock;

use crate::projects::Category;
use crate::registry::{ArgSchema, COMMANDS};

/// Default cap on returned candidates.
pub const MAX_SUGGESTIONS: usize = 5;

/// An autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Full invocation, e.g. `projects gamedev`.
    pub command: String,
    pub description: String,
}

/// Listed commands in registry order, then the argument forms of every
/// command that takes a category.
static CANDIDATES: LazyLock<Vec<Suggestion>> = LazyLock::new(|| {
    let plain = COMMANDS.iter().filter(|c| c.listed).map(|c| Suggestion {
        command: c.name.to_string(),
        description: c.description.to_string(),
    });
    let with_args = COMMANDS
        .iter()
        .filter(|c| c.listed && c.args == ArgSchema::Category)
        .flat_map(|c| {
            Category::ALL.into_iter().map(move |cat| Suggestion {
                command: format!("{} {cat}", c.name),
                description: cat.description().to_string(),
            })
        });
    plain.chain(with_args).collect()
});

/// Every candidate, in ranking order.
pub fn candidates() -> &'static [Suggestion] {
    &CANDIDATES
}

/// Candidates whose invocation starts with `partial` (case-insensitive), at
/// most `limit` of them. Blank input yields nothing.
pub fn suggest(partial: &str, limit: usize) -> Vec<Suggestion> {
    if partial.trim().is_empty() {
        return Vec::new();
    }
    let needle = partial.to_lowercase();
    CANDIDATES
        .iter()
        .filter(|c| c.command.to_lowercase().starts_with(&needle))
        .take(limit)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The suggestion popup: current candidates, cursor, and visibility.
#[derive(Debug, Clone, Default)]
pub struct SuggestionState {
    items: Vec<Suggestion>,
    selected: Option<usize>,
    visible: bool,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the input buffer. The cursor resets to the first item,
    /// or to none when nothing matches.
    pub fn update(&mut self, input: &str, limit: usize) {
        self.items = suggest(input, limit);
        self.visible = !self.items.is_empty();
        self.selected = self.visible.then_some(0);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Move the cursor down, wrapping to the top.
    pub fn select_next(&mut self) {
        if !self.visible || self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        if !self.visible || self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.selected = Some(self.selected.map_or(len - 1, |i| (i + len - 1) % len));
    }

    /// Take the selected candidate (Enter). Requires a visible selection.
    pub fn accept_selected(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        let command = self.selected_item()?.command.clone();
        self.hide();
        Some(command)
    }

    /// Take the selected candidate, or the first one (Tab).
    pub fn accept(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        let index = self.selected.unwrap_or(0);
        let command = self.items.get(index)?.command.clone();
        self.hide();
        Some(command)
    }
}
