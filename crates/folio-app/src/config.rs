//! Configuration discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_types::config::TerminalConfig;
use folio_types::error::Result;

/// Default configuration file, relative to the working directory.
const DEFAULT_PATH: &str = "folio.toml";

/// Load from `FOLIO_CONFIG`, else `./folio.toml`, else defaults.
pub fn load() -> Result<TerminalConfig> {
    let explicit = std::env::var_os("FOLIO_CONFIG").map(PathBuf::from);
    let required = explicit.is_some();
    let path = explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    load_from(&path, required)
}

/// Parse `path`. A missing file yields defaults unless `required`.
pub fn load_from(path: &Path, required: bool) -> Result<TerminalConfig> {
    match fs::read_to_string(path) {
        Ok(source) => {
            log::info!("Loaded config from {}", path.display());
            TerminalConfig::from_toml(&source)
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            log::debug!("no {}, using defaults", path.display());
            Ok(TerminalConfig::default())
        },
        Err(e) => Err(e.into()),
    }
}
