//! Portfolio page content

use serde::{Deserialize, Serialize};

/// Label/value pair shown in the About and Contact sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoItem {
    pub label: String,
    pub value: String,
}

/// Hero statistic, e.g. `"50+"` / `"Projects delivered"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
}

/// Everything the page displays. Missing keys in a config file fall back to
/// the built-in portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub name: String,
    pub subtitle: String,
    pub about: Vec<String>,
    pub info: Vec<InfoItem>,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<ProjectCard>,
    pub contact: Vec<InfoItem>,
}

/// Keeps a skill tag from being wrapped inside itself
pub const TAG_SPACE: char = '\u{a0}';

/// A skill tag as laid out on the page: padded, with unbreakable spaces
pub fn tag_chip(tag: &str) -> String {
    let inner: String = tag
        .chars()
        .map(|c| if c == ' ' { TAG_SPACE } else { c })
        .collect();
    format!("{TAG_SPACE}{inner}{TAG_SPACE}")
}

impl InfoItem {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

impl PortfolioContent {
    /// About paragraphs, a blank row, then the info items
    pub fn about_lines(&self) -> Vec<String> {
        let mut lines = self.about.clone();
        lines.push(String::new());
        lines.extend(self.info.iter().map(InfoItem::text));
        lines
    }

    /// Per category its name and one row of tag chips, blank rows between
    pub fn skill_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, category) in self.skills.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(category.name.clone());
            let chips: Vec<String> = category.tags.iter().map(|t| tag_chip(t)).collect();
            lines.push(chips.join(" "));
        }
        lines
    }

    /// Per project its name, description and tech list, blank rows between
    pub fn project_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, project) in self.projects.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(project.name.clone());
            lines.push(project.description.clone());
            lines.push(project.tech.join(" · "));
        }
        lines
    }
}

fn info(label: &str, value: &str) -> InfoItem {
    InfoItem {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            subtitle: "Full-stack developer building fast, reliable software".to_string(),
            about: vec![
                "I design and build web platforms, developer tools and the".to_string(),
                "infrastructure behind them, with a focus on performance and".to_string(),
                "maintainable code.".to_string(),
            ],
            info: vec![
                info("Location", "Remote"),
                info("Experience", "5 years"),
                info("Availability", "Open to projects"),
            ],
            stats: vec![
                Stat {
                    value: "50+".to_string(),
                    label: "Projects".to_string(),
                },
                Stat {
                    value: "98%".to_string(),
                    label: "Client satisfaction".to_string(),
                },
                Stat {
                    value: "5".to_string(),
                    label: "Years".to_string(),
                },
                Stat {
                    value: "4.9".to_string(),
                    label: "Rating".to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    name: "Frontend".to_string(),
                    tags: tags(&["TypeScript", "React", "CSS", "Accessibility"]),
                },
                SkillCategory {
                    name: "Backend".to_string(),
                    tags: tags(&["Rust", "Node.js", "PostgreSQL", "Redis"]),
                },
                SkillCategory {
                    name: "Tooling".to_string(),
                    tags: tags(&["Docker", "CI/CD", "Linux", "Observability"]),
                },
            ],
            projects: vec![
                ProjectCard {
                    name: "Ledger".to_string(),
                    description: "Multi-tenant invoicing platform".to_string(),
                    tech: tags(&["Rust", "PostgreSQL"]),
                },
                ProjectCard {
                    name: "Pulse".to_string(),
                    description: "Real-time service health dashboard".to_string(),
                    tech: tags(&["TypeScript", "WebSockets"]),
                },
                ProjectCard {
                    name: "Shelf".to_string(),
                    description: "Offline-first reading list app".to_string(),
                    tech: tags(&["React", "IndexedDB"]),
                },
            ],
            contact: vec![
                info("Email", "alex@example.com"),
                info("GitHub", "github.com/alexmorgan"),
            ],
        }
    }
}
