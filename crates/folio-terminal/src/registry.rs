//! Command table, resolution, and evaluation.
//!
//! Every command the terminal understands is one row of [`COMMANDS`]. Input is
//! resolved against that table by [`resolve`], and a resolved command is
//! turned into a [`CommandResult`] by [`evaluate`]. Both are pure.

use std::fmt;

use folio_platform::Date;

use crate::content;
use crate::projects::{self, Category, CategoryError};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// A navigable route. `Home` is the default route and the navigation-stack
/// sentinel for "came from home".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Skills,
    Projects,
    Contact,
    Social,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Skills,
        Page::Projects,
        Page::Contact,
        Page::Social,
    ];

    /// Route name as typed and as shown in paths.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Skills => "skills",
            Page::Projects => "projects",
            Page::Contact => "contact",
            Page::Social => "social",
        }
    }

    /// Case-insensitive, trim-tolerant lookup by route name.
    pub fn from_name(name: &str) -> Option<Page> {
        let name = name.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Command table
// ---------------------------------------------------------------------------

/// Grouping used by the `help` screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Navigation,
    System,
    Fun,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Navigation, Group::System, Group::Fun];

    pub fn heading(self) -> &'static str {
        match self {
            Group::Navigation => "🏠 Navigation:",
            Group::System => "🛠️ System:",
            Group::Fun => "🎨 Fun:",
        }
    }
}

/// What a command does, as a closed set of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Page(Page),
    Back,
    ParentDir,
    Help,
    Clear,
    Neofetch,
    Whoami,
    Pwd,
    Banner,
    Quote,
    EasterEgg,
}

/// Argument accepted after the command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSchema {
    None,
    Category,
}

/// One registry row.
#[derive(Debug)]
pub struct CommandSpec {
    /// Invocation name (lowercase, may contain a space: `cd ..`).
    pub name: &'static str,
    /// Autocomplete description.
    pub description: &'static str,
    /// One-liner on the `help` screen.
    pub summary: &'static str,
    pub group: Group,
    pub kind: CommandKind,
    pub args: ArgSchema,
    /// Offered by autocomplete.
    pub listed: bool,
}

const fn cmd(
    name: &'static str,
    description: &'static str,
    summary: &'static str,
    group: Group,
    kind: CommandKind,
) -> CommandSpec {
    CommandSpec {
        name,
        description,
        summary,
        group,
        kind,
        args: ArgSchema::None,
        listed: true,
    }
}

/// The registry, in curated priority order. Autocomplete returns matches in
/// this order.
#[rustfmt::skip]
pub static COMMANDS: [CommandSpec; 16] = [
    cmd("home", "Go to home page", "return to main page", Group::Navigation, CommandKind::Page(Page::Home)),
    cmd("about", "Learn about me", "learn more about Kris", Group::Navigation, CommandKind::Page(Page::About)),
    cmd("skills", "View my skills & expertise", "technical skills & expertise", Group::Navigation, CommandKind::Page(Page::Skills)),
    CommandSpec {
        args: ArgSchema::Category,
        ..cmd("projects", "Browse my projects", "featured work & projects", Group::Navigation, CommandKind::Page(Page::Projects))
    },
    cmd("contact", "Get in touch with me", "get in touch", Group::Navigation, CommandKind::Page(Page::Contact)),
    cmd("social", "Find me on social media", "social media links", Group::Navigation, CommandKind::Page(Page::Social)),
    cmd("help", "Show available commands", "show this help menu", Group::System, CommandKind::Help),
    cmd("clear", "Clear the terminal", "clear the terminal", Group::System, CommandKind::Clear),
    cmd("neofetch", "Display system information", "system info with ASCII art", Group::System, CommandKind::Neofetch),
    cmd("banner", "Show welcome banner", "display welcome banner", Group::Fun, CommandKind::Banner),
    cmd("quote", "Random design quote", "random design quote", Group::Fun, CommandKind::Quote),
    cmd("whoami", "Current user info", "current user information", Group::System, CommandKind::Whoami),
    cmd("pwd", "Show current path", "show current path", Group::System, CommandKind::Pwd),
    cmd("back", "Go back to previous page", "go back to previous page", Group::Navigation, CommandKind::Back),
    cmd("cd ..", "Navigate back", "go back to parent directory", Group::Navigation, CommandKind::ParentDir),
    CommandSpec {
        listed: false,
        ..cmd("easteregg", "Find the hidden surprise", "find the hidden surprise", Group::Fun, CommandKind::EasterEgg)
    },
];

/// Find a row by exact (already normalized) name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// A validated argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    None,
    Category(Result<Category, CategoryError>),
}

/// A command matched against the registry, with its argument.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub spec: &'static CommandSpec,
    pub arg: Arg,
}

impl Resolved {
    pub fn kind(&self) -> CommandKind {
        self.spec.kind
    }
}

/// Input that does not name a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("empty command")]
    Empty,

    #[error("Command not found: {0}\nType 'help' for available commands.")]
    UnknownCommand(String),
}

/// Canonical form of a command line: trimmed and lowercased.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve raw input against the registry.
///
/// The whole normalized line is tried first so multi-word names (`cd ..`)
/// match. Otherwise the line is split at the first whitespace and the base
/// token must name a command that takes an argument.
pub fn resolve(input: &str) -> Result<Resolved, ResolveError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(ResolveError::Empty);
    }

    if let Some(spec) = lookup(&normalized) {
        return Ok(Resolved {
            spec,
            arg: Arg::None,
        });
    }

    if let Some((base, rest)) = normalized.split_once(char::is_whitespace)
        && let Some(spec) = lookup(base)
        && spec.args == ArgSchema::Category
    {
        return Ok(Resolved {
            spec,
            arg: Arg::Category(rest.trim().parse()),
        });
    }

    Err(ResolveError::UnknownCommand(normalized))
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// What running a command amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Lines to append (after the typing delay).
    OutputLines(Vec<String>),
    /// Leave for another page; the page renders itself on mount.
    Navigate(Page),
    /// Empty the log and return to the default route.
    Clear,
    /// Pop the navigation stack.
    Back,
    /// Nothing happens.
    NoOp,
}

/// Everything content producers may depend on besides the command itself.
#[derive(Debug, Clone)]
pub struct RouteContext<'a> {
    pub today: Date,
    pub current_route: Option<Page>,
    pub username: &'a str,
    pub hostname: &'a str,
    /// Seed for random picks.
    pub seed: u64,
}

impl RouteContext<'_> {
    pub fn current_path(&self) -> String {
        route_path(self.current_route)
    }
}

/// Shell-style path of a route: `~/portfolio` or `~/portfolio/<page>`.
pub fn route_path(route: Option<Page>) -> String {
    match route {
        Some(page) => format!("~/portfolio/{page}"),
        None => "~/portfolio".to_string(),
    }
}

/// Turn a resolved command into its effect.
pub fn evaluate(resolved: &Resolved, ctx: &RouteContext<'_>) -> CommandResult {
    match (resolved.spec.kind, &resolved.arg) {
        (CommandKind::Page(Page::Projects), Arg::Category(category)) => {
            CommandResult::OutputLines(projects::filtered(category))
        },
        (CommandKind::Page(Page::Home), _) if ctx.current_route.is_none() => {
            CommandResult::OutputLines(content::page_lines(Page::Home, ctx))
        },
        (CommandKind::Page(page), _) => {
            if ctx.current_route == Some(page) {
                CommandResult::NoOp
            } else {
                CommandResult::Navigate(page)
            }
        },
        (CommandKind::Back | CommandKind::ParentDir, _) => CommandResult::Back,
        (CommandKind::Clear, _) => CommandResult::Clear,
        (kind, _) => match content::command_lines(kind, ctx) {
            Some(lines) => CommandResult::OutputLines(lines),
            None => CommandResult::NoOp,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(route: Option<Page>) -> RouteContext<'static> {
        RouteContext {
            today: Date::new(2025, 8, 1),
            current_route: route,
            username: "visitor",
            hostname: "kris.rabbittale.co",
            seed: 0,
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|c| c.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn names_are_lowercase_and_trimmed() {
        for spec in &COMMANDS {
            assert_eq!(spec.name, normalize(spec.name));
        }
    }

    #[test]
    fn command_surface_is_complete() {
        for name in [
            "home", "about", "skills", "projects", "contact", "social", "back", "cd ..", "help",
            "clear", "neofetch", "whoami", "pwd", "banner", "quote", "easteregg",
        ] {
            assert!(resolve(name).is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn resolve_is_case_and_trim_tolerant() {
        let a = resolve(" Help ").unwrap();
        let b = resolve("help").unwrap();
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.arg, b.arg);
        assert_eq!(resolve("NEOFETCH").unwrap().kind(), CommandKind::Neofetch);
    }

    #[test]
    fn resolve_multi_word_name() {
        assert_eq!(resolve("cd ..").unwrap().kind(), CommandKind::ParentDir);
        assert_eq!(resolve("CD ..").unwrap().kind(), CommandKind::ParentDir);
    }

    #[test]
    fn no_shorthand_outside_the_command_surface() {
        for input in ["cls", "cd..", "cd", "exit"] {
            assert_eq!(
                resolve(input).unwrap_err(),
                ResolveError::UnknownCommand(input.into())
            );
        }
        assert_eq!(
            resolve("cls").unwrap_err().to_string(),
            "Command not found: cls\nType 'help' for available commands."
        );
    }

    #[test]
    fn resolve_category_argument() {
        let r = resolve("projects gamedev").unwrap();
        assert_eq!(r.kind(), CommandKind::Page(Page::Projects));
        assert_eq!(r.arg, Arg::Category(Ok(Category::Gamedev)));
    }

    #[test]
    fn resolve_category_argument_case_folded() {
        let r = resolve("Projects  GameDev ").unwrap();
        assert_eq!(r.arg, Arg::Category(Ok(Category::Gamedev)));
    }

    #[test]
    fn resolve_invalid_category_still_resolves() {
        let r = resolve("projects nonsense").unwrap();
        assert_eq!(
            r.arg,
            Arg::Category(Err(CategoryError::Invalid("nonsense".into())))
        );
    }

    #[test]
    fn argument_on_plain_command_is_unknown() {
        assert_eq!(
            resolve("help me").unwrap_err(),
            ResolveError::UnknownCommand("help me".into())
        );
    }

    #[test]
    fn unknown_command_message() {
        let err = resolve("Foo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Command not found: foo\nType 'help' for available commands."
        );
    }

    #[test]
    fn blank_is_empty_error() {
        assert_eq!(resolve("   ").unwrap_err(), ResolveError::Empty);
    }

    #[test]
    fn page_from_name() {
        assert_eq!(Page::from_name(" About "), Some(Page::About));
        assert_eq!(Page::from_name("help"), None);
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), Some(page));
        }
    }

    #[test]
    fn evaluate_page_navigates() {
        let r = resolve("skills").unwrap();
        assert_eq!(evaluate(&r, &ctx(None)), CommandResult::Navigate(Page::Skills));
    }

    #[test]
    fn evaluate_same_page_is_noop() {
        let r = resolve("skills").unwrap();
        assert_eq!(evaluate(&r, &ctx(Some(Page::Skills))), CommandResult::NoOp);
    }

    #[test]
    fn evaluate_home_at_home_renders_locally() {
        let r = resolve("home").unwrap();
        match evaluate(&r, &ctx(None)) {
            CommandResult::OutputLines(lines) => assert!(lines[0].contains("Kris German")),
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_home_elsewhere_navigates() {
        let r = resolve("home").unwrap();
        assert_eq!(
            evaluate(&r, &ctx(Some(Page::About))),
            CommandResult::Navigate(Page::Home)
        );
    }

    #[test]
    fn evaluate_back_and_parent_dir() {
        for input in ["back", "cd .."] {
            let r = resolve(input).unwrap();
            assert_eq!(evaluate(&r, &ctx(Some(Page::About))), CommandResult::Back);
        }
    }

    #[test]
    fn evaluate_clear() {
        let r = resolve("clear").unwrap();
        assert_eq!(evaluate(&r, &ctx(None)), CommandResult::Clear);
    }

    #[test]
    fn evaluate_filtered_projects_is_output() {
        let r = resolve("projects design").unwrap();
        match evaluate(&r, &ctx(None)) {
            CommandResult::OutputLines(lines) => {
                assert!(lines.iter().any(|l| l.contains("WhiteFox Design")));
            },
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_output_commands() {
        for input in ["help", "neofetch", "whoami", "pwd", "banner", "quote", "easteregg"] {
            let r = resolve(input).unwrap();
            assert!(
                matches!(evaluate(&r, &ctx(None)), CommandResult::OutputLines(_)),
                "{input} should produce output"
            );
        }
    }

    #[test]
    fn current_path_reflects_route() {
        assert_eq!(ctx(None).current_path(), "~/portfolio");
        assert_eq!(ctx(Some(Page::Skills)).current_path(), "~/portfolio/skills");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolve_ignores_case_and_padding(
                idx in 0usize..16,
                left in " {0,4}",
                right in " {0,4}",
                upper in any::<bool>(),
            ) {
                let name = COMMANDS[idx].name;
                let cased = if upper { name.to_uppercase() } else { name.to_string() };
                let padded = format!("{left}{cased}{right}");
                let r = resolve(&padded).unwrap();
                prop_assert_eq!(r.kind(), COMMANDS[idx].kind);
                prop_assert_eq!(r.arg, Arg::None);
            }
        }
    }
}
