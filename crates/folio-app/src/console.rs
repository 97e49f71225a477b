//! Line-mode session loop.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;

use folio_terminal::{Submit, Terminal, TerminalEvent};
use folio_types::input::InputEvent;

use crate::print::Printer;
use crate::router::QueuedRouter;

/// Frame length used to advance the terminal clock while output is pending.
const FRAME_MS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    terminal: Terminal,
    router: QueuedRouter,
    printer: Printer,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(terminal: Terminal, color: bool, out: W) -> Self {
        Self {
            terminal,
            router: QueuedRouter::new(),
            printer: Printer::new(color),
            out,
        }
    }

    /// Print the mounted screen, then process `input` line by line.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.flush_log()?;
        self.prompt()?;
        for line in input.lines() {
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
            self.prompt()?;
        }
        self.terminal.handle_input(&InputEvent::Quit, &mut self.router);
        Ok(())
    }

    /// Process one console line.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if matches!(trimmed, "exit" | "quit") {
            self.terminal.handle_input(&InputEvent::Quit, &mut self.router);
            return Ok(Flow::Quit);
        }

        if let Some(prefix) = trimmed.strip_suffix('?') {
            let set = |text: &str| InputEvent::SetText(text.to_string());
            self.terminal.handle_input(&set(prefix), &mut self.router);
            let items = self.terminal.suggestions().items().to_vec();
            self.terminal.handle_input(&set(""), &mut self.router);
            self.printer.print_suggestions(&items, &mut self.out)?;
            return Ok(Flow::Continue);
        }

        match self.terminal.submit_line(line, &mut self.router) {
            Submit::Navigated(page) => {
                log::debug!("navigated to {page}");
                self.router.flush(&mut self.terminal);
                self.printer.clear_screen(&mut self.out)?;
            },
            Submit::Cleared => self.printer.clear_screen(&mut self.out)?,
            Submit::Pending => self.wait_for_commit(),
            Submit::Ignored | Submit::Rejected | Submit::Unchanged => {},
        }
        self.flush_log()?;
        Ok(Flow::Continue)
    }

    /// Advance time until the pending output is committed.
    fn wait_for_commit(&mut self) {
        while self.terminal.is_busy() {
            std::thread::sleep(Duration::from_millis(u64::from(FRAME_MS)));
            for event in self.terminal.tick(FRAME_MS) {
                if let TerminalEvent::Committed { kind, lines } = event {
                    log::debug!("committed {lines} {kind:?} lines");
                }
            }
        }
    }

    fn flush_log(&mut self) -> Result<()> {
        self.printer
            .print_new(self.terminal.output_log(), &mut self.out)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{} ", self.terminal.prompt())?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}
