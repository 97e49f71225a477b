//! Error types for folio.

use std::io;

/// Errors produced by the folio crates.
///
/// None of these are fatal to a terminal session: the core converts them to
/// visible lines or silent defaults at the point of detection.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
