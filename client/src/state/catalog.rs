//! Portfolio catalog records and the built-in catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is the read-mostly data set the whole site renders from:
//! personal info, skills, projects, experience, and social links. It is
//! loaded once at startup and only replaced through
//! [`PortfolioStore::replace_data`](super::portfolio::PortfolioStore::replace_data).

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

// =============================================================
// Records
// =============================================================

/// Singleton biographical record shown in the hero and footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub email: String,
    pub website: String,
    /// Asset path of the profile picture.
    pub profile_image: String,
    pub location: String,
}

/// Grouping used by the skills and about pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Languages,
    Methodologies,
}

impl SkillCategory {
    /// Every category, in display order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Languages,
        SkillCategory::Methodologies,
    ];

    /// Section heading for this category.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Languages => "Languages",
            Self::Methodologies => "Methodologies",
        }
    }

    /// Whether the category counts as a technical skill.
    #[must_use]
    pub fn is_technical(self) -> bool {
        matches!(self, Self::Frontend | Self::Backend | Self::Tools)
    }
}

/// A single skill with a proficiency level in `1..=5`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// Lowest and highest valid [`Skill::level`].
pub const SKILL_LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Lifecycle of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Planned => "Planned",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique within the catalog.
    pub id: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    pub repository_url: String,
    pub demo_url: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub status: ProjectStatus,
}

/// Kind of an experience entry. Jobs and internships are work history;
/// education and courses are academic history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Job,
    Education,
    Internship,
    Course,
}

impl ExperienceKind {
    pub const ALL: [ExperienceKind; 4] = [
        ExperienceKind::Job,
        ExperienceKind::Education,
        ExperienceKind::Internship,
        ExperienceKind::Course,
    ];

    #[must_use]
    pub fn is_work(self) -> bool {
        matches!(self, Self::Job | Self::Internship)
    }

    #[must_use]
    pub fn is_academic(self) -> bool {
        matches!(self, Self::Education | Self::Course)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Unique within the catalog.
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: Date,
    /// `None` while the entry is ongoing.
    pub end_date: Option<Date>,
    pub description: String,
    pub kind: ExperienceKind,
    pub logo: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(default)]
    pub show_in_header: bool,
    #[serde(default)]
    pub show_in_footer: bool,
}

/// The full catalog held by the portfolio store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub social_links: Vec<SocialLink>,
}

impl Default for PortfolioData {
    fn default() -> Self {
        default_catalog()
    }
}

// =============================================================
// Built-in catalog
// =============================================================

fn skill(name: &str, category: SkillCategory, level: u8, description: Option<&str>) -> Skill {
    Skill {
        name: name.to_owned(),
        category,
        level,
        icon: None,
        description: description.map(str::to_owned),
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    organization: &str,
    location: &str,
    start_date: Date,
    end_date: Option<Date>,
    description: &str,
    kind: ExperienceKind,
) -> ExperienceEntry {
    ExperienceEntry {
        id: id.to_owned(),
        title: title.to_owned(),
        organization: organization.to_owned(),
        location: location.to_owned(),
        start_date,
        end_date,
        description: description.to_owned(),
        kind,
        logo: None,
        technologies: None,
        achievements: None,
    }
}

fn link(name: &str, url: &str, icon: &str, show_in_header: bool, show_in_footer: bool) -> SocialLink {
    SocialLink {
        name: name.to_owned(),
        url: url.to_owned(),
        icon: icon.to_owned(),
        show_in_header,
        show_in_footer,
    }
}

/// Catalog the site ships with.
#[must_use]
pub fn default_catalog() -> PortfolioData {
    use ExperienceKind::{Course, Education, Internship};
    use SkillCategory::{Backend, Frontend, Languages, Methodologies, Tools};

    PortfolioData {
        personal_info: PersonalInfo {
            name: "Antonio Espinosa".to_owned(),
            title: "Frontend Developer".to_owned(),
            subtitle: "Frontend Development & Problem Solver".to_owned(),
            description: "I'm Antonio Espinosa, a Ciudad-Real based Software Developer (Frontend stack and \
                          currently forming as Backend also) driven by a relentless passion for learning and \
                          a profound interest for emerging technologies. I also love geopolitics and video games."
                .to_owned(),
            email: "anto.dasein@gmail.com".to_owned(),
            website: "https://anto-dasein.github.io/".to_owned(),
            profile_image: "assets/ducking.gif".to_owned(),
            location: "Spain".to_owned(),
        },
        skills: vec![
            skill("JavaScript", Frontend, 4, None),
            skill("TypeScript", Frontend, 4, None),
            skill("Angular 19+", Frontend, 4, None),
            skill("React", Frontend, 2, Some("Currently learning")),
            skill("HTML5", Frontend, 5, None),
            skill("CSS3", Frontend, 4, None),
            skill("Java", Backend, 3, None),
            skill("MySQL", Backend, 3, None),
            skill("Git", Tools, 4, None),
            skill("Fork", Tools, 3, None),
            skill("Azure DevOps", Tools, 3, None),
            skill("Agile", Methodologies, 4, None),
            skill("Scrum", Methodologies, 4, None),
            skill("Waterfall", Methodologies, 3, None),
            skill("Spanish", Languages, 5, Some("Native")),
            skill("English", Languages, 3, Some("Intermediate (B1)")),
        ],
        projects: vec![Project {
            id: "portfolio-site".to_owned(),
            name: "Personal Portfolio".to_owned(),
            description: "Portfolio website rendered with Leptos and hydrated in the browser.".to_owned(),
            short_description: "Leptos portfolio with a clean design".to_owned(),
            technologies: vec![
                "Rust".to_owned(),
                "Leptos".to_owned(),
                "CSS".to_owned(),
                "GitHub Pages".to_owned(),
            ],
            repository_url: "https://github.com/anto-dasein/anto-dasein.github.io".to_owned(),
            demo_url: Some("https://anto-dasein.github.io/".to_owned()),
            image: None,
            featured: true,
            start_date: date!(2025 - 09 - 01),
            end_date: None,
            status: ProjectStatus::InProgress,
        }],
        experience: vec![
            entry(
                "internship-treasury",
                "Administrative Internship",
                "Consejería de Hacienda y Administraciones Públicas de Castilla-La Mancha",
                "Spain",
                date!(2020 - 01 - 01),
                Some(date!(2020 - 12 - 31)),
                "240-hour internship in public administration, gaining experience in administrative \
                 processes and legal procedures.",
                Internship,
            ),
            entry(
                "multiplatform-development",
                "Higher Degree in Multiplatform Application Development",
                "I.E.S Juan Bosco",
                "Spain",
                date!(2025 - 01 - 01),
                None,
                "Distance learning program focused on multiplatform application development, covering \
                 mobile and web technologies.",
                Education,
            ),
            entry(
                "programming-course",
                "Object-Oriented Programming & Relational Databases (IFCD0112)",
                "Copermática Centro de Formación",
                "Spain",
                date!(2025 - 01 - 01),
                None,
                "Comprehensive course covering object-oriented programming languages and relational \
                 database management systems.",
                Course,
            ),
            entry(
                "freecodecamp",
                "Frontend Development & Relational Databases",
                "FreeCodeCamp",
                "Online",
                date!(2024 - 01 - 01),
                None,
                "Completed frontend development curriculum and relational database certification, \
                 building practical projects and real-world applications.",
                Course,
            ),
            entry(
                "law-degree",
                "Bachelor's Degree in Law",
                "UCLM Melchor Macanaz",
                "Spain",
                date!(2016 - 09 - 01),
                Some(date!(2021 - 06 - 30)),
                "Comprehensive legal education providing strong analytical and problem-solving skills, \
                 critical thinking, and attention to detail.",
                Education,
            ),
        ],
        social_links: vec![
            link("GitHub", "https://github.com/anto-dasein", "github", true, true),
            link(
                "LinkedIn",
                "https://linkedin.com/in/antonio-espinosa-aliaga",
                "linkedin",
                true,
                true,
            ),
            link("Email", "mailto:anto.dasein@gmail.com", "email", false, true),
        ],
    }
}
