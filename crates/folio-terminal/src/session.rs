//! Per-session terminal state: output log, input buffer, route, navigation
//! stack, and dispatch state.

use std::fmt;

use crate::registry::{self, Page};

/// Where the dispatcher is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    /// Output is pending behind the typing delay.
    Busy,
    /// A router call is in progress.
    Navigating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command.
    Command,
    Output,
    Error,
    System,
}

/// Unique line identity within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(u64);

impl LineId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub kind: LineKind,
    pub text: String,
}

/// Mutable state of one terminal session.
#[derive(Debug, Default)]
pub struct SessionState {
    output_log: Vec<Line>,
    input: String,
    /// `None` is the default (home) route.
    current_route: Option<Page>,
    navigation_stack: Vec<Page>,
    state: DispatchState,
    next_id: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Output log ----------------------------------------------------------

    pub fn output_log(&self) -> &[Line] {
        &self.output_log
    }

    /// Append a line with a fresh id.
    pub fn append(&mut self, kind: LineKind, text: impl Into<String>) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.output_log.push(Line {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Replace the whole log with `lines` of one kind. Ids keep increasing.
    pub fn replace_log(&mut self, kind: LineKind, lines: Vec<String>) {
        self.output_log.clear();
        for text in lines {
            self.append(kind, text);
        }
    }

    /// Empty the log and return to the default route.
    pub fn clear(&mut self) {
        self.output_log.clear();
        self.current_route = None;
    }

    // -- Input buffer --------------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    // -- Routing -------------------------------------------------------------

    pub fn current_route(&self) -> Option<Page> {
        self.current_route
    }

    /// Set the route. `Home` is stored as the default route.
    pub fn set_route(&mut self, page: Page) {
        self.current_route = (page != Page::Home).then_some(page);
    }

    pub fn navigation_stack(&self) -> &[Page] {
        &self.navigation_stack
    }

    /// Remember the current route (or `Home`) before leaving it.
    pub fn push_current(&mut self) {
        let from = self.current_route.unwrap_or(Page::Home);
        self.navigation_stack.push(from);
    }

    /// Previous route, or `Home` when there is none.
    pub fn pop_previous(&mut self) -> Page {
        self.navigation_stack.pop().unwrap_or(Page::Home)
    }

    /// `~/portfolio` or `~/portfolio/<route>`.
    pub fn current_path(&self) -> String {
        registry::route_path(self.current_route)
    }

    /// Shell prompt, e.g. `visitor@kris.rabbittale.co:~/portfolio/skills$`.
    pub fn prompt(&self, username: &str, hostname: &str) -> String {
        format!("{username}@{hostname}:{}$", self.current_path())
    }

    // -- Dispatch state ------------------------------------------------------

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn set_state(&mut self, state: DispatchState) {
        if self.state != state {
            log::debug!("dispatch state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    pub fn is_idle(&self) -> bool {
        self.state == DispatchState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_across_clear() {
        let mut s = SessionState::new();
        let a = s.append(LineKind::Output, "one");
        s.clear();
        let b = s.append(LineKind::Output, "two");
        assert!(b > a);
        assert_eq!(b.to_string(), "line-1");
    }

    #[test]
    fn replace_log_keeps_ids_increasing() {
        let mut s = SessionState::new();
        s.append(LineKind::Command, "help");
        s.replace_log(LineKind::Output, vec!["a".into(), "b".into()]);
        let ids: Vec<u64> = s.output_log().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn clear_resets_route() {
        let mut s = SessionState::new();
        s.set_route(Page::Skills);
        s.append(LineKind::Output, "x");
        s.clear();
        assert!(s.output_log().is_empty());
        assert_eq!(s.current_route(), None);
    }

    #[test]
    fn home_is_default_route() {
        let mut s = SessionState::new();
        s.set_route(Page::About);
        s.set_route(Page::Home);
        assert_eq!(s.current_route(), None);
    }

    #[test]
    fn navigation_stack_uses_home_sentinel() {
        let mut s = SessionState::new();
        s.push_current();
        s.set_route(Page::Skills);
        s.push_current();
        assert_eq!(s.navigation_stack(), [Page::Home, Page::Skills]);
        assert_eq!(s.pop_previous(), Page::Skills);
        assert_eq!(s.navigation_stack(), [Page::Home]);
        assert_eq!(s.pop_previous(), Page::Home);
        assert_eq!(s.pop_previous(), Page::Home);
    }

    #[test]
    fn prompt_reflects_route() {
        let mut s = SessionState::new();
        assert_eq!(
            s.prompt("visitor", "kris.rabbittale.co"),
            "visitor@kris.rabbittale.co:~/portfolio$"
        );
        s.set_route(Page::Skills);
        assert_eq!(
            s.prompt("visitor", "kris.rabbittale.co"),
            "visitor@kris.rabbittale.co:~/portfolio/skills$"
        );
    }

    #[test]
    fn input_editing() {
        let mut s = SessionState::new();
        s.push_char('h');
        s.push_char('i');
        assert_eq!(s.pop_char(), Some('i'));
        assert_eq!(s.input(), "h");
        s.clear_input();
        assert_eq!(s.input(), "");
    }
}
