//! Command engine for the portfolio terminal.
//!
//! Input lines are resolved against a static command registry and dispatched
//! against a session: page commands go through a [`Router`], output commands
//! append lines after a simulated typing delay, and a small set of commands
//! (`clear`, `back`) act on the session directly. Around the dispatcher sit
//! a prefix autocomplete, a persisted recall history, and the line renderer
//! that turns raw output into link-aware segments.

mod content;
pub mod dispatcher;
pub mod history;
pub mod projects;
pub mod registry;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod suggest;
mod terminal;

/// Navigation seam implemented by the front end.
pub use dispatcher::Router;
/// Outcome of a submission.
pub use dispatcher::Submit;
/// Notifications produced by `Terminal::tick`.
pub use dispatcher::TerminalEvent;
/// Recall history of submitted commands.
pub use history::RecallHistory;
/// A navigable route.
pub use registry::Page;
/// Segment a line for display.
pub use render::{Segment, SegmentKind, Tone, render, render_line};
/// Log line types.
pub use session::{DispatchState, Line, LineId, LineKind};
/// Autocomplete candidates.
pub use suggest::{Suggestion, SuggestionState, suggest};
/// The session facade.
pub use terminal::Terminal;
