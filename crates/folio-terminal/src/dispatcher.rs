//! Command dispatch.
//!
//! A submission is resolved, evaluated, and applied to the session. Output
//! is not committed immediately: the command echo appears at once, and the
//! output lines follow after a simulated typing delay driven by [`tick`].
//! Only one submission may be in flight; anything submitted meanwhile is
//! rejected.
//!
//! [`tick`]: Dispatcher::tick

use crate::content;
use crate::registry::{self, CommandKind, CommandResult, Page, RouteContext};
use crate::scheduler::{CancelToken, Scheduler};
use crate::session::{DispatchState, LineKind, SessionState};

/// Receives navigation requests. The implementor is expected to mount the
/// destination (via `mount_page`) once the call has returned.
pub trait Router {
    fn navigate_to(&mut self, page: Page);
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Blank input; nothing happened.
    Ignored,
    /// Another submission is still in flight, or the session was shut down.
    Rejected,
    /// The log was emptied.
    Cleared,
    /// The router was asked to show this page.
    Navigated(Page),
    /// Output (or an error) will be committed after the typing delay.
    Pending,
    /// Recognized, but nothing to do.
    Unchanged,
}

/// Notifications produced while advancing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Deferred lines were appended to the log.
    Committed { kind: LineKind, lines: usize },
    /// The input line should regain focus.
    Refocus,
}

#[derive(Debug)]
enum Deferred {
    Commit { kind: LineKind, lines: Vec<String> },
    Refocus,
}

#[derive(Debug)]
pub struct Dispatcher {
    session: SessionState,
    scheduler: Scheduler<Deferred>,
    lifetime: CancelToken,
    typing_delay_ms: u32,
    refocus_delay_ms: u32,
}

impl Dispatcher {
    pub fn new(typing_delay_ms: u32, refocus_delay_ms: u32) -> Self {
        Self {
            session: SessionState::new(),
            scheduler: Scheduler::new(),
            lifetime: CancelToken::new(),
            typing_delay_ms,
            refocus_delay_ms,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn state(&self) -> DispatchState {
        self.session.state()
    }

    /// Deferred tasks still queued.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    // -- Mounting ------------------------------------------------------------

    /// Render the initial route without delay. A page name or an output
    /// command shows that content; anything else shows home.
    pub fn mount(&mut self, initial_route: Option<&str>, ctx: &RouteContext<'_>) {
        let target = initial_route.and_then(|name| mount_target(name, ctx));
        let (page, lines) = match target {
            Some(target) => target,
            None => {
                if let Some(name) = initial_route {
                    log::warn!("unknown initial route {name:?}, showing home");
                }
                (Page::Home, content::page_lines(Page::Home, ctx))
            },
        };
        log::info!("mounted {}", registry::route_path(Some(page)));
        self.session.replace_log(LineKind::Output, lines);
        self.session.set_route(page);
    }

    /// Show `page` after the router has navigated to it.
    pub fn mount_page(&mut self, page: Page, ctx: &RouteContext<'_>) {
        log::info!("mounted {}", registry::route_path(Some(page)));
        self.session
            .replace_log(LineKind::Output, content::page_lines(page, ctx));
        self.session.set_route(page);
    }

    // -- Dispatch ------------------------------------------------------------

    /// Run one command line.
    pub fn dispatch(
        &mut self,
        raw: &str,
        ctx: &RouteContext<'_>,
        router: &mut dyn Router,
    ) -> Submit {
        if self.lifetime.is_cancelled() {
            return Submit::Rejected;
        }
        if !self.session.is_idle() {
            log::debug!("rejected {raw:?} while {:?}", self.session.state());
            return Submit::Rejected;
        }
        if raw.trim().is_empty() {
            return Submit::Ignored;
        }
        self.session.clear_input();

        let resolved = match registry::resolve(raw) {
            Ok(resolved) => resolved,
            Err(err) => {
                log::debug!("unresolved command {raw:?}");
                return self.defer(raw, LineKind::Error, vec![err.to_string()]);
            },
        };
        log::debug!("dispatching {:?}", resolved.kind());

        match registry::evaluate(&resolved, ctx) {
            CommandResult::OutputLines(lines) => self.defer(raw, LineKind::Output, lines),
            CommandResult::Navigate(page) => {
                self.session.push_current();
                self.navigate(page, router);
                Submit::Navigated(page)
            },
            CommandResult::Back => {
                let page = self.session.pop_previous();
                if resolved.kind() == CommandKind::ParentDir {
                    log::debug!("cd .. returning to {page}");
                }
                self.navigate(page, router);
                Submit::Navigated(page)
            },
            CommandResult::Clear => {
                self.session.clear();
                Submit::Cleared
            },
            CommandResult::NoOp => Submit::Unchanged,
        }
    }

    fn defer(&mut self, echo: &str, kind: LineKind, lines: Vec<String>) -> Submit {
        self.session.append(LineKind::Command, echo);
        self.session.set_state(DispatchState::Busy);
        self.scheduler.schedule(
            self.typing_delay_ms,
            &self.lifetime,
            Deferred::Commit { kind, lines },
        );
        Submit::Pending
    }

    fn navigate(&mut self, page: Page, router: &mut dyn Router) {
        self.session.set_state(DispatchState::Navigating);
        log::info!("navigating to {}", registry::route_path(Some(page)));
        router.navigate_to(page);
        self.session.set_state(DispatchState::Idle);
    }

    // -- Time ----------------------------------------------------------------

    /// Advance the clock by `dt_ms`, committing whatever falls due.
    pub fn tick(&mut self, dt_ms: u32) -> Vec<TerminalEvent> {
        let until = self.scheduler.now_ms() + u64::from(dt_ms);
        let mut events = Vec::new();
        while let Some(task) = self.scheduler.pop_due(until) {
            match task {
                Deferred::Commit { kind, lines } => {
                    let count = lines.len();
                    for text in lines {
                        self.session.append(kind, text);
                    }
                    self.session.set_state(DispatchState::Idle);
                    self.scheduler.schedule(
                        self.refocus_delay_ms,
                        &self.lifetime,
                        Deferred::Refocus,
                    );
                    events.push(TerminalEvent::Committed { kind, lines: count });
                },
                Deferred::Refocus => events.push(TerminalEvent::Refocus),
            }
        }
        self.scheduler.advance_to(until);
        events
    }

    /// Tear down: nothing scheduled so far will be committed, and further
    /// submissions are rejected.
    pub fn shutdown(&mut self) {
        if !self.lifetime.is_cancelled() {
            log::debug!("dispatcher shut down with {} pending", self.pending_tasks());
            self.lifetime.cancel();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }
}

/// Content for a mount-time route name.
fn mount_target(name: &str, ctx: &RouteContext<'_>) -> Option<(Page, Vec<String>)> {
    if let Some(page) = Page::from_name(name) {
        return Some((page, content::page_lines(page, ctx)));
    }
    let resolved = registry::resolve(name).ok()?;
    if resolved.arg != registry::Arg::None {
        return None;
    }
    content::command_lines(resolved.kind(), ctx).map(|lines| (Page::Home, lines))
}
