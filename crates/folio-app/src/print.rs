//! Segment printing with optional ANSI styling.

use std::io::{self, Write};

use folio_terminal::{Line, LineId, LineKind, Segment, SegmentKind, Suggestion, Tone, render_line};

const RESET: &str = "\x1b[0m";

/// ANSI style for a segment kind.
fn style(kind: &SegmentKind) -> Option<&'static str> {
    match kind {
        SegmentKind::Plain | SegmentKind::Command => None,
        SegmentKind::Header => Some("\x1b[1;38;5;75m"),
        SegmentKind::Tone(tone) => Some(match tone {
            Tone::Orange => "\x1b[38;5;208m",
            Tone::Pink => "\x1b[38;5;205m",
            Tone::Cyan => "\x1b[38;5;44m",
            Tone::Purple => "\x1b[38;5;141m",
            Tone::Yellow => "\x1b[38;5;221m",
            Tone::Coral => "\x1b[38;5;209m",
            Tone::Mint => "\x1b[38;5;121m",
            Tone::Lime => "\x1b[38;5;154m",
        }),
        SegmentKind::Link { .. } => Some("\x1b[4;38;5;114m"),
        SegmentKind::Mail { .. } => Some("\x1b[4;38;5;111m"),
        SegmentKind::Error => Some("\x1b[38;5;203m"),
        SegmentKind::System => Some("\x1b[2m"),
    }
}

/// Prints log lines once each, in order.
#[derive(Debug)]
pub struct Printer {
    color: bool,
    last: Option<LineId>,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color, last: None }
    }

    /// Format one segment. Without color, link targets are spelled out.
    pub fn segment(&self, segment: &Segment) -> String {
        if self.color {
            return match style(&segment.kind) {
                Some(code) => format!("{code}{}{RESET}", segment.text),
                None => segment.text.clone(),
            };
        }
        match &segment.kind {
            SegmentKind::Link { url } if !url.ends_with(&segment.text) => {
                format!("{} <{url}>", segment.text)
            },
            _ => segment.text.clone(),
        }
    }

    pub fn line(&self, line: &Line) -> String {
        render_line(line).iter().map(|s| self.segment(s)).collect()
    }

    /// Print log lines not printed yet. Command echoes are skipped: the
    /// console already shows what was typed.
    pub fn print_new(&mut self, log: &[Line], out: &mut impl Write) -> io::Result<()> {
        for line in log {
            if self.last.is_some_and(|last| line.id <= last) {
                continue;
            }
            self.last = Some(line.id);
            if line.kind == LineKind::Command {
                continue;
            }
            writeln!(out, "{}", self.line(line))?;
        }
        Ok(())
    }

    pub fn print_suggestions(&self, items: &[Suggestion], out: &mut impl Write) -> io::Result<()> {
        if items.is_empty() {
            return writeln!(out, "(no matches)");
        }
        for item in items {
            writeln!(out, "  {:<20}{}", item.command, item.description)?;
        }
        Ok(())
    }

    pub fn clear_screen(&self, out: &mut impl Write) -> io::Result<()> {
        if self.color {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        Ok(())
    }
}
