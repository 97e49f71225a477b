//! Terminal configuration.
//!
//! Loaded from a TOML file by the front end. Every field has a default, so an
//! empty document (or no file at all) yields the stock portfolio terminal.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Runtime configuration for a terminal session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// User shown in the prompt and by `whoami`.
    pub username: String,
    /// Host shown in the prompt and by `whoami`.
    pub hostname: String,
    /// Simulated typing delay before command output is committed.
    pub typing_delay_ms: u32,
    /// Delay before the input line is refocused after a command completes.
    pub refocus_delay_ms: u32,
    /// Maximum number of recall-history entries.
    pub history_capacity: usize,
    /// Key-value store key holding the recall history.
    pub history_key: String,
    /// Maximum number of autocomplete candidates.
    pub max_suggestions: usize,
    /// Directory backing the file key-value store.
    pub data_dir: PathBuf,
    /// Emit ANSI colors in the console front end.
    pub color: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            username: "visitor".to_string(),
            hostname: "kris.rabbittale.co".to_string(),
            typing_delay_ms: 300,
            refocus_delay_ms: 50,
            history_capacity: 50,
            history_key: "portfolio-history".to_string(),
            max_suggestions: 5,
            data_dir: PathBuf::from(".folio"),
            color: true,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| FolioError::Config(format!("folio.toml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(FolioError::Config(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.history_key.trim().is_empty() {
            return Err(FolioError::Config("history_key must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_terminal() {
        let c = TerminalConfig::default();
        assert_eq!(c.username, "visitor");
        assert_eq!(c.hostname, "kris.rabbittale.co");
        assert_eq!(c.typing_delay_ms, 300);
        assert_eq!(c.refocus_delay_ms, 50);
        assert_eq!(c.history_capacity, 50);
        assert_eq!(c.history_key, "portfolio-history");
        assert_eq!(c.max_suggestions, 5);
    }

    #[test]
    fn empty_document_is_default() {
        let c = TerminalConfig::from_toml("").unwrap();
        assert_eq!(c, TerminalConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let c = TerminalConfig::from_toml(
            r#"
            username = "guest"
            typing_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(c.username, "guest");
        assert_eq!(c.typing_delay_ms, 0);
        assert_eq!(c.hostname, "kris.rabbittale.co");
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = TerminalConfig::from_toml("username = ").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(err.to_string().contains("folio.toml"));
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = TerminalConfig::from_toml("history_capacity = 0").unwrap_err();
        assert!(err.to_string().contains("history_capacity"));
    }

    #[test]
    fn blank_history_key_rejected() {
        let err = TerminalConfig::from_toml("history_key = \"  \"").unwrap_err();
        assert!(err.to_string().contains("history_key"));
    }

    #[test]
    fn serializes_back_to_toml() {
        let c = TerminalConfig::default();
        let text = toml::to_string(&c).unwrap();
        let back = TerminalConfig::from_toml(&text).unwrap();
        assert_eq!(back, c);
    }
}
