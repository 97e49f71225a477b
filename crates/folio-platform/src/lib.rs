//! Platform services used by the terminal core.
//!
//! The core only needs a wall clock (for age and year-dependent content) and
//! a little entropy for random picks. Both come through [`TimeService`] so
//! tests can pin them.

mod services;

pub use services::{Date, DesktopPlatform, SystemTime, TimeService};
