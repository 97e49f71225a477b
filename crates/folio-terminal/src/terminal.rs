//! The terminal session facade.
//!
//! Owns the dispatcher, recall history, and suggestion popup, and maps
//! [`InputEvent`]s onto them the way the portfolio's input line behaves:
//! suggestions take priority over history for Up/Down, Enter and Tab accept a
//! suggestion into the input without running it, and a second Enter submits.

use folio_platform::{Date, TimeService};
use folio_store::KeyValueStore;
use folio_types::config::TerminalConfig;
use folio_types::input::{InputEvent, Key};

use crate::dispatcher::{Dispatcher, Router, Submit, TerminalEvent};
use crate::history::{Direction, RecallHistory};
use crate::registry::{self, Page, RouteContext};
use crate::session::{DispatchState, Line};
use crate::suggest::SuggestionState;

/// Date used when the clock cannot be read.
const FALLBACK_DATE: Date = Date::new(2025, 1, 1);

pub struct Terminal {
    config: TerminalConfig,
    dispatcher: Dispatcher,
    recall: RecallHistory,
    recall_index: Option<usize>,
    suggestions: SuggestionState,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn TimeService>,
}

/// Build a [`RouteContext`] from disjoint parts of the terminal.
fn route_context<'a>(
    config: &'a TerminalConfig,
    clock: &dyn TimeService,
    current_route: Option<Page>,
) -> RouteContext<'a> {
    let today = match clock.now() {
        Ok(now) => now.date(),
        Err(e) => {
            log::warn!("clock unavailable, using {FALLBACK_DATE}: {e}");
            FALLBACK_DATE
        },
    };
    RouteContext {
        today,
        current_route,
        username: &config.username,
        hostname: &config.hostname,
        seed: clock.entropy(),
    }
}

impl Terminal {
    /// Start a session: load recall history from `store` and mount
    /// `initial_route` (or home).
    pub fn new(
        config: TerminalConfig,
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn TimeService>,
        initial_route: Option<&str>,
    ) -> Self {
        let recall = RecallHistory::load(
            store.as_ref(),
            &config.history_key,
            config.history_capacity,
        );
        let mut dispatcher = Dispatcher::new(config.typing_delay_ms, config.refocus_delay_ms);
        let ctx = route_context(&config, clock.as_ref(), None);
        dispatcher.mount(initial_route, &ctx);
        log::debug!(
            "terminal ready for {}@{} with {} recalled commands",
            config.username,
            config.hostname,
            recall.len()
        );
        Self {
            config,
            dispatcher,
            recall,
            recall_index: None,
            suggestions: SuggestionState::new(),
            store,
            clock,
        }
    }

    // -- Input ---------------------------------------------------------------

    /// Apply one input event. Returns the submission outcome when the event
    /// submitted the input line.
    ///
    /// Input is ignored while a command is in flight. `Quit` is honored in
    /// any state.
    pub fn handle_input(&mut self, event: &InputEvent, router: &mut dyn Router) -> Option<Submit> {
        if matches!(event, InputEvent::Quit) {
            self.shutdown();
            return None;
        }
        if self.dispatcher.state() != DispatchState::Idle || self.dispatcher.is_shut_down() {
            return None;
        }
        match event {
            InputEvent::TextInput(ch) => {
                self.dispatcher.session_mut().push_char(*ch);
                self.input_changed();
            },
            InputEvent::Backspace => {
                self.dispatcher.session_mut().pop_char();
                self.input_changed();
            },
            InputEvent::SetText(text) => {
                self.dispatcher.session_mut().set_input(text.as_str());
                self.input_changed();
            },
            InputEvent::KeyPress(key) => return self.handle_key(*key, router),
            InputEvent::Quit => {},
        }
        None
    }

    fn handle_key(&mut self, key: Key, router: &mut dyn Router) -> Option<Submit> {
        match key {
            Key::Enter => {
                if let Some(command) = self.suggestions.accept_selected() {
                    self.dispatcher.session_mut().set_input(command);
                } else {
                    return Some(self.submit(router));
                }
            },
            Key::Tab => {
                if let Some(command) = self.suggestions.accept() {
                    self.dispatcher.session_mut().set_input(command);
                }
            },
            Key::Escape => self.suggestions.hide(),
            Key::Up => {
                if self.suggestions.is_visible() {
                    self.suggestions.select_prev();
                } else {
                    self.recall_step(Direction::Older);
                }
            },
            Key::Down => {
                if self.suggestions.is_visible() {
                    self.suggestions.select_next();
                } else {
                    self.recall_step(Direction::Newer);
                }
            },
        }
        None
    }

    fn input_changed(&mut self) {
        let input = self.dispatcher.session().input().to_string();
        self.suggestions.update(&input, self.config.max_suggestions);
    }

    fn recall_step(&mut self, direction: Direction) {
        if let Some((text, index)) = self.recall.navigate(direction, self.recall_index) {
            self.dispatcher.session_mut().set_input(text);
            self.recall_index = index;
        }
    }

    // -- Submission ----------------------------------------------------------

    /// Submit the current input line.
    pub fn submit(&mut self, router: &mut dyn Router) -> Submit {
        if self.dispatcher.state() != DispatchState::Idle || self.dispatcher.is_shut_down() {
            log::debug!("submission rejected: {:?}", self.dispatcher.state());
            return Submit::Rejected;
        }
        let raw = self.dispatcher.session().input().to_string();
        if raw.trim().is_empty() {
            return Submit::Ignored;
        }

        self.recall.record(&registry::normalize(&raw), self.store.as_mut());
        self.recall_index = None;
        self.suggestions.hide();

        let current = self.dispatcher.session().current_route();
        let ctx = route_context(&self.config, self.clock.as_ref(), current);
        self.dispatcher.dispatch(&raw, &ctx, router)
    }

    /// Replace the input line with `line` and submit it.
    pub fn submit_line(&mut self, line: &str, router: &mut dyn Router) -> Submit {
        if !self.dispatcher.session().is_idle() {
            return Submit::Rejected;
        }
        self.dispatcher.session_mut().set_input(line);
        self.submit(router)
    }

    // -- Lifecycle -----------------------------------------------------------

    /// Advance time; see [`Dispatcher::tick`].
    pub fn tick(&mut self, dt_ms: u32) -> Vec<TerminalEvent> {
        self.dispatcher.tick(dt_ms)
    }

    /// Router callback: show `page` as the new screen.
    pub fn mount_page(&mut self, page: Page) {
        let ctx = route_context(&self.config, self.clock.as_ref(), Some(page));
        self.dispatcher.mount_page(page, &ctx);
    }

    /// Cancel everything still scheduled.
    pub fn shutdown(&mut self) {
        self.dispatcher.shutdown();
    }

    pub fn is_shut_down(&self) -> bool {
        self.dispatcher.is_shut_down()
    }

    // -- Accessors -----------------------------------------------------------

    pub fn output_log(&self) -> &[Line] {
        self.dispatcher.session().output_log()
    }

    pub fn input(&self) -> &str {
        self.dispatcher.session().input()
    }

    pub fn prompt(&self) -> String {
        self.dispatcher
            .session()
            .prompt(&self.config.username, &self.config.hostname)
    }

    pub fn current_route(&self) -> Option<Page> {
        self.dispatcher.session().current_route()
    }

    pub fn navigation_stack(&self) -> &[Page] {
        self.dispatcher.session().navigation_stack()
    }

    pub fn state(&self) -> DispatchState {
        self.dispatcher.state()
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.state() != DispatchState::Idle
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    pub fn recall(&self) -> &RecallHistory {
        &self.recall
    }

    pub fn recall_index(&self) -> Option<usize> {
        self.recall_index
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use folio_platform::SystemTime;
    use folio_store::MemoryStore;
    use folio_types::error::{FolioError, Result};

    use super::*;
    use crate::session::LineKind;

    struct FixedClock(Option<SystemTime>);

    impl TimeService for FixedClock {
        fn now(&self) -> Result<SystemTime> {
            self.0
                .ok_or_else(|| FolioError::Platform("no clock".into()))
        }
        fn entropy(&self) -> u64 {
            0
        }
    }

    fn clock() -> Box<FixedClock> {
        Box::new(FixedClock(Some(SystemTime {
            year: 2025,
            month: 8,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0,
        })))
    }

    #[derive(Default)]
    struct QueueRouter {
        queued: Vec<Page>,
    }

    impl Router for QueueRouter {
        fn navigate_to(&mut self, page: Page) {
            self.queued.push(page);
        }
    }

    fn terminal() -> Terminal {
        Terminal::new(
            TerminalConfig::default(),
            Box::new(MemoryStore::new()),
            clock(),
            None,
        )
    }

    fn type_text(t: &mut Terminal, text: &str, router: &mut QueueRouter) {
        for ch in text.chars() {
            t.handle_input(&InputEvent::TextInput(ch), router);
        }
    }

    fn press(t: &mut Terminal, key: Key, router: &mut QueueRouter) -> Option<Submit> {
        t.handle_input(&InputEvent::KeyPress(key), router)
    }

    #[test]
    fn starts_at_home() {
        let t = terminal();
        assert_eq!(t.current_route(), None);
        assert!(t.output_log()[0].text.contains("24 years old"));
        assert_eq!(t.prompt(), "visitor@kris.rabbittale.co:~/portfolio$");
    }

    #[test]
    fn initial_route_mounts_page() {
        let t = Terminal::new(
            TerminalConfig::default(),
            Box::new(MemoryStore::new()),
            clock(),
            Some("contact"),
        );
        assert_eq!(t.current_route(), Some(Page::Contact));
        assert_eq!(t.output_log()[0].text, "GET IN TOUCH");
    }

    #[test]
    fn clock_failure_uses_fallback_date() {
        let t = Terminal::new(
            TerminalConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(FixedClock(None)),
            Some("about"),
        );
        assert!(t.output_log().iter().any(|l| l.text == "🎂 Age: 23 years old"));
    }

    #[test]
    fn history_loaded_from_store() {
        let store = MemoryStore::with_entry("portfolio-history", r#"["skills","help"]"#);
        let t = Terminal::new(TerminalConfig::default(), Box::new(store), clock(), None);
        assert_eq!(t.recall().entries(), ["skills", "help"]);
    }

    #[test]
    fn typing_updates_suggestions() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        type_text(&mut t, "ne", &mut router);
        assert!(t.suggestions().is_visible());
        assert_eq!(t.suggestions().items()[0].command, "neofetch");
        t.handle_input(&InputEvent::Backspace, &mut router);
        t.handle_input(&InputEvent::Backspace, &mut router);
        assert!(!t.suggestions().is_visible());
    }

    #[test]
    fn enter_accepts_then_submits() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        type_text(&mut t, "who", &mut router);
        assert_eq!(press(&mut t, Key::Enter, &mut router), None);
        assert_eq!(t.input(), "whoami");
        assert!(!t.suggestions().is_visible());
        assert_eq!(press(&mut t, Key::Enter, &mut router), Some(Submit::Pending));
    }

    #[test]
    fn tab_accepts_selected() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        type_text(&mut t, "projects ", &mut router);
        press(&mut t, Key::Down, &mut router);
        press(&mut t, Key::Tab, &mut router);
        assert_eq!(t.input(), "projects backend");
    }

    #[test]
    fn escape_hides_suggestions() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        type_text(&mut t, "h", &mut router);
        press(&mut t, Key::Escape, &mut router);
        assert!(!t.suggestions().is_visible());
        assert_eq!(t.input(), "h");
    }

    #[test]
    fn submit_records_normalized_history() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("  PWD ", &mut router);
        assert_eq!(t.recall().entries(), ["pwd"]);
        assert_eq!(
            t.store().get("portfolio-history").unwrap().as_deref(),
            Some(r#"["pwd"]"#)
        );
        assert_eq!(t.input(), "");
    }

    #[test]
    fn clear_is_recorded_too() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        assert_eq!(t.submit_line("clear", &mut router), Submit::Cleared);
        assert!(t.output_log().is_empty());
        assert_eq!(t.recall().entries(), ["clear"]);
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        assert_eq!(t.submit_line("   ", &mut router), Submit::Ignored);
        assert!(t.recall().is_empty());
    }

    #[test]
    fn up_down_walk_history() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("help", &mut router);
        t.tick(400);
        t.submit_line("pwd", &mut router);
        t.tick(400);

        press(&mut t, Key::Up, &mut router);
        assert_eq!(t.input(), "pwd");
        press(&mut t, Key::Up, &mut router);
        assert_eq!(t.input(), "help");
        press(&mut t, Key::Up, &mut router);
        assert_eq!(t.input(), "help");
        press(&mut t, Key::Down, &mut router);
        assert_eq!(t.input(), "pwd");
        press(&mut t, Key::Down, &mut router);
        assert_eq!(t.input(), "");
        assert_eq!(t.recall_index(), None);
    }

    #[test]
    fn up_moves_suggestion_cursor_when_visible() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("help", &mut router);
        t.tick(400);
        type_text(&mut t, "c", &mut router);
        press(&mut t, Key::Up, &mut router);
        assert_eq!(t.input(), "c");
        assert_eq!(t.suggestions().selected(), Some(2));
    }

    #[test]
    fn input_ignored_while_busy() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("help", &mut router);
        assert!(t.is_busy());
        type_text(&mut t, "x", &mut router);
        assert_eq!(t.input(), "");
        assert_eq!(t.submit_line("about", &mut router), Submit::Rejected);
        assert_eq!(t.recall().entries(), ["help"]);
    }

    #[test]
    fn navigation_round_trip() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        assert_eq!(
            t.submit_line("skills", &mut router),
            Submit::Navigated(Page::Skills)
        );
        for page in router.queued.drain(..) {
            t.mount_page(page);
        }
        assert_eq!(t.current_route(), Some(Page::Skills));
        assert_eq!(t.prompt(), "visitor@kris.rabbittale.co:~/portfolio/skills$");
        assert_eq!(t.output_log()[0].text, "SKILLS & EXPERTISE");

        t.submit_line("back", &mut router);
        for page in router.queued.drain(..) {
            t.mount_page(page);
        }
        assert_eq!(t.current_route(), None);
    }

    #[test]
    fn commit_after_typing_delay() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("nope", &mut router);
        assert!(t.tick(299).is_empty());
        let events = t.tick(1);
        assert_eq!(
            events,
            vec![TerminalEvent::Committed {
                kind: LineKind::Error,
                lines: 1
            }]
        );
        assert!(!t.is_busy());
    }

    #[test]
    fn shutdown_cancels_pending_commit() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("banner", &mut router);
        let len = t.output_log().len();
        t.shutdown();
        assert!(t.tick(1000).is_empty());
        assert_eq!(t.output_log().len(), len);
    }

    #[test]
    fn quit_event_shuts_down_while_busy() {
        let mut t = terminal();
        let mut router = QueueRouter::default();
        t.submit_line("neofetch", &mut router);
        assert!(t.is_busy());
        let len = t.output_log().len();
        assert_eq!(t.handle_input(&InputEvent::Quit, &mut router), None);
        assert!(t.is_shut_down());
        assert!(t.tick(1000).is_empty());
        assert_eq!(t.output_log().len(), len);
        type_text(&mut t, "help", &mut router);
        assert_eq!(t.input(), "");
    }

    #[test]
    fn zero_delay_commits_on_next_tick() {
        let config = TerminalConfig {
            typing_delay_ms: 0,
            ..TerminalConfig::default()
        };
        let mut t = Terminal::new(config, Box::new(MemoryStore::new()), clock(), None);
        let mut router = QueueRouter::default();
        t.submit_line("quote", &mut router);
        assert!(t.is_busy());
        assert_eq!(t.tick(0).len(), 1);
        assert!(!t.is_busy());
    }
}
