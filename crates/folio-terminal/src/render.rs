//! Output line segmentation.
//!
//! Raw output lines carry `LINK:` markers and bare email addresses. At render
//! time each line is split into [`Segment`]s: links first, then emails in the
//! remaining text, then every leftover piece is classified as a header, a
//! toned (emoji-prefixed) line, or plain text. Front ends only map segment
//! kinds to styles.

use std::sync::LazyLock;

use regex::Regex;

use crate::session::{Line, LineKind};

/// `LINK:<url>[:<display>]`; the url runs to the next whitespace or `:`.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"LINK:((?:https?://|mailto:)[^\s:]+)(?::(\S+))?").expect("valid link pattern")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email pattern")
});

/// Accent color picked from a line's leading symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Orange,
    Pink,
    Cyan,
    Purple,
    Yellow,
    Coral,
    Mint,
    Lime,
}

/// Leading-symbol rules, first match wins. Emoji are matched without their
/// variation selector so both presentations hit.
const TONE_RULES: &[(&[&str], Tone)] = &[
    (&["🔥", "🚀", "⭐", "✨", "💫"], Tone::Orange),
    (&["🎮", "🎯", "🎨", "🎪", "🎭"], Tone::Pink),
    (&["💻", "\u{1F5A5}", "⚡", "🔧", "\u{1F6E0}"], Tone::Cyan),
    (&["📱", "📊", "📈", "📋", "📝"], Tone::Purple),
    (&["🌟", "⏰", "🏆", "✅"], Tone::Yellow),
    (&["\u{2764}", "💭", "🤝", "👋", "🎂"], Tone::Coral),
    (&["🌍", "🌐", "🔗"], Tone::Mint),
    (&["\u{1F579}", "🎲"], Tone::Lime),
    (&["📍"], Tone::Yellow),
    (&["💼"], Tone::Purple),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    /// A section heading (`Tech Stack:`).
    Header,
    Tone(Tone),
    /// A hyperlink; `text` is the display label.
    Link { url: String },
    /// An email address, targeted as `mailto:`.
    Mail { address: String },
    /// Echo of a submitted command.
    Command,
    Error,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Link or mail target, if any.
    pub fn href(&self) -> Option<String> {
        match &self.kind {
            SegmentKind::Link { url } => Some(url.clone()),
            SegmentKind::Mail { address } => Some(format!("mailto:{address}")),
            _ => None,
        }
    }
}

/// Classify a piece of non-link text.
pub fn categorize(text: &str) -> SegmentKind {
    if text.contains("LINK:") {
        return SegmentKind::Plain;
    }
    if text.ends_with(':') && !text.contains("   ") {
        return SegmentKind::Header;
    }
    TONE_RULES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|p| text.starts_with(p)))
        .map_or(SegmentKind::Plain, |(_, tone)| SegmentKind::Tone(*tone))
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Split non-link text around email addresses.
fn push_text(text: &str, out: &mut Vec<Segment>) {
    if text.is_empty() {
        return;
    }
    let mut last = 0;
    for m in EMAIL_RE.find_iter(text) {
        if m.start() > last {
            let before = &text[last..m.start()];
            out.push(Segment::new(before, categorize(before)));
        }
        out.push(Segment::new(
            m.as_str(),
            SegmentKind::Mail {
                address: m.as_str().to_string(),
            },
        ));
        last = m.end();
    }
    if last < text.len() {
        let rest = &text[last..];
        out.push(Segment::new(rest, categorize(rest)));
    }
}

/// Segment one output line. Pure: the same line always yields the same
/// segments. An empty line yields no segments.
pub fn render(line: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in LINK_RE.captures_iter(line) {
        let (Some(whole), Some(url)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&line[last..whole.start()], &mut out);
        let url = url.as_str();
        let display = caps
            .get(2)
            .map_or_else(|| strip_scheme(url), |d| d.as_str());
        out.push(Segment::new(
            display,
            SegmentKind::Link {
                url: url.to_string(),
            },
        ));
        last = whole.end();
    }
    push_text(&line[last..], &mut out);
    out
}

/// Segment a log line. Only output lines are post-processed; other kinds
/// become a single segment.
pub fn render_line(line: &Line) -> Vec<Segment> {
    let kind = match line.kind {
        LineKind::Output => return render(&line.text),
        LineKind::Command => SegmentKind::Command,
        LineKind::Error => SegmentKind::Error,
        LineKind::System => SegmentKind::System,
    };
    vec![Segment::new(line.text.clone(), kind)]
}
