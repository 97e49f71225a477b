//! folio console entry point.
//!
//! Line-mode front end for the portfolio terminal. Each input line is one
//! submission; a line ending in `?` lists completions for what precedes it.
//! `exit`, `quit`, or end of input leaves.
//!
//! The initial route comes from the first argument or `FOLIO_ROUTE`; the
//! configuration from `FOLIO_CONFIG` or `./folio.toml`.

mod config;
mod console;
mod print;
mod router;

use std::io;

use anyhow::Result;

use folio_platform::DesktopPlatform;
use folio_store::{FileStore, KeyValueStore, MemoryStore};
use folio_terminal::Terminal;

use console::Console;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load()?;
    log::info!(
        "Starting folio as {}@{}",
        config.username,
        config.hostname
    );

    // Persist recall history under the data dir; fall back to memory.
    let store: Box<dyn KeyValueStore> = match FileStore::open(&config.data_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!(
                "cannot open {}: {e}; history will not persist",
                config.data_dir.display()
            );
            Box::new(MemoryStore::new())
        },
    };

    // Resolve initial route from CLI arg or FOLIO_ROUTE env var.
    let route = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_ROUTE").ok());

    let color = config.color;
    let terminal = Terminal::new(
        config,
        store,
        Box::new(DesktopPlatform::new()),
        route.as_deref(),
    );

    let mut console = Console::new(terminal, color, io::stdout());
    console.run(io::stdin().lock())?;

    log::info!("folio shut down cleanly");
    Ok(())
}
