//! Project catalogue and its table views.

use std::fmt;
use std::str::FromStr;

/// Project category accepted by `projects <category>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fullstack,
    Backend,
    Gamedev,
    Design,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fullstack,
        Category::Backend,
        Category::Gamedev,
        Category::Design,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Fullstack => "fullstack",
            Category::Backend => "backend",
            Category::Gamedev => "gamedev",
            Category::Design => "design",
        }
    }

    /// Autocomplete description of `projects <category>`.
    pub fn description(self) -> &'static str {
        match self {
            Category::Fullstack => "View fullstack projects",
            Category::Backend => "View backend projects",
            Category::Gamedev => "View game development projects",
            Category::Design => "View design projects",
        }
    }

    /// Line used in the invalid-category guidance.
    fn summary(self) -> &'static str {
        match self {
            Category::Fullstack => "Full-stack web applications",
            Category::Backend => "Server-side applications & bots",
            Category::Gamedev => "Game development projects",
            Category::Design => "Design & portfolio projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An argument that is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("invalid category: {0:?}")]
    Invalid(String),
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryError::Invalid(needle.to_string()))
    }
}

/// A catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub kind: &'static str,
    pub category: Category,
    pub tech: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        name: "CloneTheOn",
        kind: "Web App",
        category: Category::Fullstack,
        tech: "T3 Stack, AI",
        status: "Live",
        description: "AI-powered chat application",
        link: Some("https://t3.rabbittale.co"),
    },
    Project {
        name: "TinyRabbit Bot",
        kind: "Discord Bot",
        category: Category::Backend,
        tech: "Node.js, Discord.js",
        status: "Live",
        description: "Advanced fun & utility bot",
        link: Some("https://github.com/rabbit-tale-co/discord-tinyRabbit"),
    },
    Project {
        name: "TinyBuddies",
        kind: "Mobile Game",
        category: Category::Gamedev,
        tech: "Unity, C#",
        status: "In Dev",
        description: "Tamagotchi-like companion game",
        link: None,
    },
    Project {
        name: "SoundLess",
        kind: "Horror Game",
        category: Category::Gamedev,
        tech: "3D Audio, Unity",
        status: "In Dev",
        description: "3D echolocation horror experience",
        link: None,
    },
    Project {
        name: "WhiteFox Design",
        kind: "Portfolio",
        category: Category::Design,
        tech: "HTML, CSS, JS",
        status: "Live",
        description: "Professional logo design services",
        link: Some("https://whitefoxdesigns.net"),
    },
];

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

const BOX_TOP: &str =
    "╭─────────────────────────────────────────────────────────────────────────╮";
const BOX_BOTTOM: &str =
    "╰─────────────────────────────────────────────────────────────────────────╯";
const TABLE_TOP: &str = "┌─────────────────┬──────────────┬─────────┬──────────────────────────┐";
const TABLE_HEAD: &str = "│ Project         │ Type         │ Status  │ Description              │";
const TABLE_RULE: &str = "├─────────────────┼──────────────┼─────────┼──────────────────────────┤";
const TABLE_BOTTOM: &str =
    "└─────────────────┴──────────────┴─────────┴──────────────────────────┘";

/// Pad to `width` columns, or cut to `width - 3` and append `...`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 3).collect();
        format!("{cut}...")
    } else {
        format!("{text:<width$}")
    }
}

fn row(project: &Project) -> String {
    format!(
        "│ {} │ {} │ {:<7} │ {} │",
        fit(project.name, 15),
        fit(project.kind, 12),
        project.status,
        fit(project.description, 24),
    )
}

/// Table, then the link list for linked projects.
fn table<'a>(projects: impl Iterator<Item = &'a Project> + Clone, out: &mut Vec<String>) {
    out.push(TABLE_TOP.to_string());
    out.push(TABLE_HEAD.to_string());
    out.push(TABLE_RULE.to_string());
    out.extend(projects.clone().map(row));
    out.push(TABLE_BOTTOM.to_string());
    out.push(String::new());
    out.push("🔗 Links:".to_string());
    out.extend(
        projects.filter_map(|p| p.link.map(|link| format!("   {}: LINK:{link}", p.name))),
    );
}

/// The unfiltered `projects` page.
pub fn listing() -> Vec<String> {
    let mut out = vec![
        BOX_TOP.to_string(),
        "│                               PROJECTS                                  │".to_string(),
        BOX_BOTTOM.to_string(),
        String::new(),
        "📂 Categories: fullstack | backend | gamedev | design".to_string(),
        "🔍 Filter: projects <category> (e.g., \"projects gamedev\")".to_string(),
        String::new(),
    ];
    table(PROJECTS.iter(), &mut out);
    out.push(String::new());
    out.push("💡 Use \"projects <category>\" to filter by category".to_string());
    out.push(String::new());
    out
}

/// Projects of one category.
pub fn for_category(category: Category) -> Vec<String> {
    let title = category.name().to_uppercase();
    let mut out = vec![
        BOX_TOP.to_string(),
        format!("│{:26}PROJECTS - {title:<9}{:27}│", "", ""),
        BOX_BOTTOM.to_string(),
        String::new(),
    ];
    table(
        PROJECTS.iter().filter(|p| p.category == category),
        &mut out,
    );
    out.push(String::new());
    out
}

/// Guidance shown for an unknown category.
pub fn invalid_category() -> Vec<String> {
    let mut out = vec![
        "❌ Invalid category!".to_string(),
        String::new(),
        "📂 Available categories:".to_string(),
    ];
    out.extend(
        Category::ALL
            .iter()
            .map(|c| format!("   • {:<9} - {}", c.name(), c.summary())),
    );
    out.push(String::new());
    out.push("💡 Usage: projects <category>".to_string());
    out
}

/// Output of `projects <arg>`.
pub fn filtered(category: &Result<Category, CategoryError>) -> Vec<String> {
    match category {
        Ok(category) => for_category(*category),
        Err(err) => {
            log::debug!("projects: {err}");
            invalid_category()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Body rows of the project table: everything between the header rule
    /// and the bottom border.
    fn table_rows(lines: &[String]) -> Vec<&String> {
        lines
            .iter()
            .skip_while(|l| l.as_str() != TABLE_RULE)
            .skip(1)
            .take_while(|l| l.as_str() != TABLE_BOTTOM)
            .collect()
    }

    #[test]
    fn category_parse() {
        assert_eq!("gamedev".parse::<Category>(), Ok(Category::Gamedev));
        assert_eq!(" Design ".parse::<Category>(), Ok(Category::Design));
        assert_eq!(
            "nonsense".parse::<Category>(),
            Err(CategoryError::Invalid("nonsense".into()))
        );
    }

    #[test]
    fn every_category_has_projects() {
        for category in Category::ALL {
            assert!(PROJECTS.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit("Live", 7), "Live   ");
    }

    #[test]
    fn fit_truncates_long_text() {
        assert_eq!(fit("Tamagotchi-like companion game", 24), "Tamagotchi-like compa...");
        assert_eq!(fit("Tamagotchi-like companion game", 24).chars().count(), 24);
    }

    #[test]
    fn rows_line_up_with_header() {
        let width = TABLE_HEAD.chars().count();
        for project in &PROJECTS {
            assert_eq!(row(project).chars().count(), width, "{}", project.name);
        }
    }

    #[test]
    fn gamedev_yields_only_gamedev_rows() {
        let lines = for_category(Category::Gamedev);
        let rows = table_rows(&lines);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("TinyBuddies"));
        assert!(rows[1].contains("SoundLess"));
        assert!(!lines.iter().any(|l| l.contains("CloneTheOn")));
        assert!(lines[1].contains("PROJECTS - GAMEDEV  "));
        assert!(!rows.contains(&&lines[1]));
    }

    #[test]
    fn table_rows_skip_box_titles() {
        let lines = listing();
        let rows = table_rows(&lines);
        assert!(rows.iter().all(|r| !r.contains("PROJECTS")));
        let expected: Vec<String> = PROJECTS.iter().map(row).collect();
        assert_eq!(rows.into_iter().cloned().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn category_header_is_fixed_width() {
        let width = BOX_TOP.chars().count();
        for category in Category::ALL {
            assert_eq!(for_category(category)[1].chars().count(), width);
        }
    }

    #[test]
    fn category_links_listed() {
        let lines = for_category(Category::Design);
        let link = "   WhiteFox Design: LINK:https://whitefoxdesigns.net";
        assert!(lines.iter().any(|l| l == link));
    }

    #[test]
    fn invalid_category_has_no_table() {
        let lines = filtered(&"nonsense".parse());
        assert_eq!(lines[0], "❌ Invalid category!");
        assert!(table_rows(&lines).is_empty());
        assert!(lines.contains(&"   • backend   - Server-side applications & bots".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("💡 Usage: projects <category>"));
    }

    #[test]
    fn listing_shows_everything() {
        let lines = listing();
        assert_eq!(table_rows(&lines).len(), PROJECTS.len());
        let links = lines.iter().filter(|l| l.contains("LINK:")).count();
        assert_eq!(links, 3);
    }

    #[test]
    fn long_names_are_truncated_in_rows() {
        let r = row(&PROJECTS[1]);
        assert!(r.contains("TinyRabbit Bot "));
        let r = row(&PROJECTS[3]);
        assert!(r.contains("3D echolocation horro..."));
    }
}
