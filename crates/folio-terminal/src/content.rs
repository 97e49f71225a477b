//! Page and command texts.
//!
//! Every producer returns plain `Vec<String>` lines. Links are embedded as
//! `LINK:<url>[:<display>]` markers and resolved by [`crate::render`].

use folio_platform::Date;

use crate::projects;
use crate::registry::{COMMANDS, CommandKind, Group, Page, RouteContext};

/// Kris's birth date, for the age shown on home and about.
pub const BIRTH_DATE: Date = Date::new(2001, 7, 11);

/// Year design work started, for "years experience".
pub const DESIGN_SINCE: u16 = 2016;

const NEOFETCH_COLUMN: usize = 36;
const PROGRESS_CELLS: usize = 20;

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| (*s).to_string()).collect()
}

fn age(ctx: &RouteContext<'_>) -> u16 {
    BIRTH_DATE.years_until(ctx.today)
}

fn skill_years(ctx: &RouteContext<'_>) -> u16 {
    ctx.today.year.saturating_sub(DESIGN_SINCE)
}

/// A `cells`-wide bar of `█` (filled) and `░` (empty).
pub fn progress_bar(percent: u8, cells: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * cells + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}

fn skill(label: &str, percent: u8, note: &str) -> String {
    format!(
        "  {label:<17}{} {percent}% ({note})",
        progress_bar(percent, PROGRESS_CELLS)
    )
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Lines a page shows when mounted.
pub fn page_lines(page: Page, ctx: &RouteContext<'_>) -> Vec<String> {
    match page {
        Page::Home => home(ctx),
        Page::About => about(ctx),
        Page::Skills => skills(ctx),
        Page::Projects => projects::listing(),
        Page::Contact => contact(),
        Page::Social => social(),
    }
}

fn home(ctx: &RouteContext<'_>) -> Vec<String> {
    let mut out = vec![
        format!("👋 Hey! I'm Kris German, {} years old UI/UX Designer", age(ctx)),
        String::new(),
        "🎨 What I do:".to_string(),
        format!(
            "   • UI/UX Design since {DESIGN_SINCE} ({}+ years experience)",
            skill_years(ctx)
        ),
    ];
    out.extend(lines(&[
        "   • Create beautiful, user-centered interfaces",
        "   • Build intermediate web applications",
        "   • Figma wizard & design systems enthusiast",
        "",
        "💻 Tech Stack:",
        "   • Design: Figma",
        "   • Frontend: React, Next.js, TypeScript",
        "   • Styling: Tailwind CSS, CSS3, SCSS",
        "   • Backend: Still learning... it's my nemesis 😅",
        "",
        "🚀 Available Commands:",
        "   about     skills     projects     contact",
        "   social    help       clear        neofetch",
        "",
        "💡 Tip: Use ↑↓ arrows to navigate command history",
        "",
    ]));
    out
}

fn about(ctx: &RouteContext<'_>) -> Vec<String> {
    let mut out = lines(&["ABOUT ME", "", "👋 Name: Kris German"]);
    out.push(format!("🎂 Age: {} years old", age(ctx)));
    out.push(format!("📅 Born: {}", BIRTH_DATE.long_format()));
    out.extend(lines(&["📍 Location: Poland 🇵🇱", "", "🎨 Professional:"]));
    out.push(format!(
        "   💼 UI/UX Designer with {}+ years experience",
        skill_years(ctx)
    ));
    out.push(format!("   🚀 Started designing in {DESIGN_SINCE}"));
    out.extend(lines(&[
        "   🛠️ Expert in Figma, Adobe Creative Suite",
        "   📱 Specialized in mobile & web interfaces",
        "   ✨ Philosophy: Beautiful meets functional",
        "",
        "💻 Technical Skills:",
        "   🎯 Frontend: HTML, CSS, JS, React, TypeScript",
        "   🔧 Backend: Node.js, Bun (learning)",
        "   🗄️ Database: Supabase (learning)",
        "   🖥️ Server: Linux administration (intermediate)",
        "   🏆 Goal: Full-stack mastery",
        "",
        "🎮 Personal Interests:",
        "   🕹️ Passionate gamer - love exploring new worlds",
        "   🎯 Game development enthusiast",
        "   🚀 Currently working on my own indie games",
        "   🎨 Combining design skills with game creation",
        "   🌟 Always learning new technologies",
        "",
        "✅ Status: Available for freelance work",
        "💭 Motto: \"User-first design, always\"",
        "🌍 Timezone: CET (UTC+1)",
        "",
    ]));
    out
}

fn skills(ctx: &RouteContext<'_>) -> Vec<String> {
    let years = format!("{} years", skill_years(ctx));
    vec![
        "SKILLS & EXPERTISE".to_string(),
        String::new(),
        "🎨 Design Skills:".to_string(),
        skill("UI/UX Design", 95, &years),
        skill("Figma", 90, "Expert"),
        skill("Prototyping", 75, "Advanced"),
        String::new(),
        "💻 Development Skills:".to_string(),
        skill("Frontend Dev", 75, "Intermediate+"),
        skill("React/Next.js", 70, "Intermediate"),
        skill("TypeScript", 65, "Learning"),
        skill("HTML/CSS", 80, "Advanced"),
        skill("JavaScript", 70, "Intermediate"),
        String::new(),
        "🖥️ Technical Skills:".to_string(),
        skill("Linux Server", 50, "Intermediate"),
        skill("Git/GitHub", 75, "Advanced"),
        skill("Backend Dev", 35, "Struggling 😅"),
        skill("Database", 30, "Learning"),
        String::new(),
        "🛠️ Tools & Technologies:".to_string(),
        "  Design: Figma, Adobe XD, Photoshop, Illustrator".to_string(),
        "  Development: VS Code, React, TypeScript, Node.js".to_string(),
        "  Other: Git, Linux, Terminal, Unity, Blender".to_string(),
        String::new(),
        format!("📈 Learning Goals {}:", ctx.today.year),
        "  🎯 Master backend development".to_string(),
        "  🔥 Advanced TypeScript patterns".to_string(),
        "  🗄️ Database optimization".to_string(),
        "  🚀 DevOps & deployment".to_string(),
        "  🎮 Game development with Unity".to_string(),
        String::new(),
    ]
}

fn contact() -> Vec<String> {
    lines(&[
        "GET IN TOUCH",
        "",
        "📧 Email:",
        "   LINK:mailto:kris@rabbittale.co:kris@rabbittale.co",
        "   └─ Business inquiries & collaborations",
        "",
        "💬 Social & Chat:",
        "   🔷 Telegram: LINK:https://t.me/hasiradoo:@hasiradoo",
        "   🎮 Discord: LINK:https://discord.com/users/569975072417251378:@hasiradoo",
        "   🐦 Twitter: LINK:https://twitter.com/hasiradoo:@hasiradoo",
        "   🦋 Bluesky: LINK:https://bsky.app/profile/hasiradoo.rabbittale.co:@hasiradoo.rabbittale.co",
        "",
        "💼 Professional:",
        "   🐙 GitHub: LINK:https://github.com/rabbit-tale-co:github.com/rabbit-tale-co",
        "",
        "📍 Location: Poland 🇵🇱",
        "⏰ Timezone: CET (UTC+1)",
        "",
        "✨ Open for:",
        "  • UI/UX Design projects",
        "  • Frontend development work",
        "  • Design system consulting",
        "  • Figma workshops & training",
        "",
        "🤝 Let's create something amazing!",
        "",
    ])
}

fn social() -> Vec<String> {
    lines(&[
        "SOCIAL LINKS",
        "",
        "🔗 Find me across the web:",
        "",
        "  📱 Chat & Messaging:",
        "     🔷 Telegram    LINK:https://t.me/hasiradoo:@hasiradoo",
        "     🎮 Discord     LINK:https://discord.com/users/569975072417251378:@hasiradoo",
        "     📧 Email       LINK:mailto:kris@rabbittale.co:kris@rabbittale.co",
        "",
        "  🌐 Social Media:",
        "     🐦 Twitter     LINK:https://twitter.com/hasiradoo:@hasiradoo",
        "     🦋 Bluesky     LINK:https://bsky.app/profile/hasiradoo.rabbittale.co:@hasiradoo.rabbittale.co",
        "",
        "  💼 Professional:",
        "     🐙 GitHub      LINK:https://github.com/rabbit-tale-co:github.com/rabbit-tale-co",
        "",
        "💬 Preferred: Telegram or Email",
        "🚀 Follow for design tips & updates!",
        "",
    ])
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Lines produced by an output command, or `None` for commands that only
/// have side effects.
pub fn command_lines(kind: CommandKind, ctx: &RouteContext<'_>) -> Option<Vec<String>> {
    let out = match kind {
        CommandKind::Page(page) => page_lines(page, ctx),
        CommandKind::Help => help(),
        CommandKind::Neofetch => neofetch(),
        CommandKind::Whoami => vec![
            format!("{}@{}", ctx.username, ctx.hostname),
            "Kris German's Interactive Portfolio Terminal".to_string(),
        ],
        CommandKind::Pwd => vec![
            ctx.current_path(),
            "Current location in the portfolio".to_string(),
        ],
        CommandKind::Banner => banner(),
        CommandKind::Quote => quote(ctx.seed),
        CommandKind::EasterEgg => easter_egg(),
        CommandKind::Back | CommandKind::ParentDir | CommandKind::Clear => return None,
    };
    Some(out)
}

fn boxed_title(title: &str) -> [String; 3] {
    [
        "╭─────────────────────────────────────────────────╮".to_string(),
        format!("│{title:>34}{:15}│", ""),
        "╰─────────────────────────────────────────────────╯".to_string(),
    ]
}

fn help() -> Vec<String> {
    let mut out = vec![String::new()];
    out.extend(boxed_title("AVAILABLE COMMANDS"));
    for group in Group::ALL {
        out.push(String::new());
        out.push(group.heading().to_string());
        out.extend(
            COMMANDS
                .iter()
                .filter(|c| c.group == group)
                .map(|c| format!("  {:<18}{}", c.name, c.summary)),
        );
    }
    out.extend(lines(&[
        "",
        "💡 Tips:",
        "  • Use ↑↓ arrows for command history",
        "  • Commands auto-route to new sections",
        "  • Type any command to get started!",
        "",
    ]));
    out
}

const LOGO: [&str; 20] = [
    ",KWN0d;.             :kx;.",
    ":XMMMMWO;           lNMMNd.",
    ":XMMMMMMX:         cXMMMMNl",
    ":XMMMMMMMO.       :XMMMMMMk.",
    ":XMMMMMMMK,      :KMMMMMMWo",
    ":XMMMMMMMK,     ;KMMMMMMWk.",
    ":XMMMMMMMO.    ,0MMMMMMNx.",
    ":XMMMMMMWd.  ,o0MMMMMMXl.",
    ":XMMMMMMX;  'OWWMMMMWk,",
    ":XMMMMMMXc.;OWMMMMMNo.",
    ":XMMMMMMMNXNMMMMMMMWOc.",
    ":XMMMMMMMMMMMMMMMMMMMMXx,",
    ":XMMMMMMMMMWWWMMMMMMMMMMXo.",
    ":XMMMMMWKxc;,;:cxKWMMMMMMNo",
    ":XMMMMNx.        .xWMMMMMMK,",
    ":XMMMMXc.        .cXMMMMMMX;",
    ":XMMMMMN0OOOOO0OO0NMMMMMMMO.",
    "'OMMMMMMMMMMMMMMMMMMMMMMW0;",
    ",ONMMMMMMMMMMMMMMMMMMWKo.",
    ".l0WMMMMMMMMMMMMMWN0o.",
];

const SYSTEM_INFO: [&str; 19] = [
    "Kris@workstation (WIP)",
    "─────────────────",
    "OS: Windows 11 Pro",
    "Host: Custom Build",
    "Kernel: NT 10.0.22631",
    "Uptime: Over 9000 hours",
    "Packages: Too many to count",
    "Shell: PowerShell 7.x",
    "Resolution: 1920x1080@60Hz",
    "DE: Windows 11",
    "WM: DWM",
    "Terminal: Windows Terminal",
    "CPU: Intel i7-17700",
    "GPU: NVIDIA GTX 1080 6GB",
    "Memory: 16GB (don't remember speed)",
    "Storage: 256GB NVMe SSD",
    "Storage: 4TB HDD",
    "Motherboard: ASRock B250 pro4",
    "PSU: 500W 80+ Gold",
];

fn neofetch() -> Vec<String> {
    let rows = LOGO.len().max(SYSTEM_INFO.len());
    let mut out = vec![String::new()];
    out.extend((0..rows).map(|i| {
        let left = LOGO.get(i).copied().unwrap_or("");
        let right = SYSTEM_INFO.get(i).copied().unwrap_or("");
        format!("{left:<NEOFETCH_COLUMN$}{right}")
    }));
    out.push(String::new());
    out
}

fn banner() -> Vec<String> {
    let mut out = vec![String::new()];
    out.extend(LOGO.iter().enumerate().map(|(i, row)| {
        if i == 0 {
            format!("    {row}")
        } else {
            (*row).to_string()
        }
    }));
    out.extend(lines(&[
        "",
        "════════════════════════════════════════════════════════════════════════",
        "                    🎨 KRIS GERMAN - UI/UX DESIGNER 🎨                 ",
        "                                                                        ",
        "         🚀 Welcome to my interactive portfolio terminal! 🌟           ",
        "                   💡 Type \"help\" to get started 🎮                    ",
        "════════════════════════════════════════════════════════════════════════",
        "",
    ]));
    out
}

pub const QUOTES: [&str; 7] = [
    "\"Good design is obvious. Great design is transparent.\" - Joe Sparano",
    "\"Design is not just what it looks like. Design is how it works.\" - Steve Jobs",
    "\"The best interface is no interface.\" - Golden Krishna",
    "\"Simplicity is the ultimate sophistication.\" - Leonardo da Vinci",
    "\"Design is thinking made visual.\" - Saul Bass",
    "\"User experience is everything. It always has been, but it's undervalued.\" - Evan Williams",
    "\"If you think good design is expensive, you should look at bad design.\" - Ralf Speth",
];

fn quote(seed: u64) -> Vec<String> {
    let pick = QUOTES[(seed % QUOTES.len() as u64) as usize];
    let mut out = vec![String::new()];
    out.extend(boxed_title("DESIGN INSPIRATION"));
    out.push(String::new());
    out.push(format!("💭 {pick}"));
    out.push(String::new());
    out
}

fn easter_egg() -> Vec<String> {
    lines(&[
        "",
        "🎉 Congratulations! You found the easter egg!",
        "",
        "🥚 Here's a secret about Kris:",
        "   Despite being a UI/UX expert, he still struggles",
        "   with centering divs sometimes! 😅",
        "",
        "🚀 Thanks for exploring! You're awesome! ✨",
        "",
    ])
}
