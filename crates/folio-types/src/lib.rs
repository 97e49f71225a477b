//! Foundation types for folio.
//!
//! Platform-agnostic types shared by every folio crate: the error type,
//! input events fed to the terminal, and the terminal configuration.

pub mod config;
pub mod error;
pub mod input;
