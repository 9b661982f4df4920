//! Portfolio data store and its derived views.
//!
//! DESIGN
//! ======
//! The store owns one [`PortfolioData`] value. Every view (featured projects,
//! work history, skills by category, ...) is recomputed from that value on
//! read, so a [`PortfolioStore::replace_data`] is visible to the next read
//! with no invalidation step. Components hold the store in an `RwSignal`
//! provided through context, which gives them push-based re-rendering.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use serde::Deserialize;

use super::catalog::{
    ExperienceEntry, ExperienceKind, PersonalInfo, PortfolioData, Project, Skill, SkillCategory, SocialLink,
};

/// Partial catalog update. Present fields replace the whole field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortfolioPatch {
    pub personal_info: Option<PersonalInfo>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub social_links: Option<Vec<SocialLink>>,
}

impl PortfolioPatch {
    /// Parse a patch from a JSON object with any subset of the catalog fields.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the payload is not a valid patch.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Single source of truth for catalog data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioStore {
    data: PortfolioData,
}

impl PortfolioStore {
    #[must_use]
    pub fn new(data: PortfolioData) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    // =============================================================
    // Full collections
    // =============================================================

    #[must_use]
    pub fn personal_info(&self) -> &PersonalInfo {
        &self.data.personal_info
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.data.skills
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    #[must_use]
    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.data.experience
    }

    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.data.social_links
    }

    // =============================================================
    // Filtered views
    // =============================================================

    /// Projects flagged as featured, in catalog order.
    #[must_use]
    pub fn featured_projects(&self) -> Vec<Project> {
        self.data.projects.iter().filter(|p| p.featured).cloned().collect()
    }

    #[must_use]
    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<Skill> {
        self.data.skills.iter().filter(|s| s.category == category).cloned().collect()
    }

    /// Frontend, backend and tooling skills, in catalog order.
    #[must_use]
    pub fn technical_skills(&self) -> Vec<Skill> {
        self.data.skills.iter().filter(|s| s.category.is_technical()).cloned().collect()
    }

    #[must_use]
    pub fn experience_by_kind(&self, kind: ExperienceKind) -> Vec<ExperienceEntry> {
        self.data.experience.iter().filter(|e| e.kind == kind).cloned().collect()
    }

    /// Jobs and internships, most recent start first.
    #[must_use]
    pub fn work_experience(&self) -> Vec<ExperienceEntry> {
        self.most_recent_first(ExperienceKind::is_work)
    }

    /// Education and courses, most recent start first.
    #[must_use]
    pub fn education(&self) -> Vec<ExperienceEntry> {
        self.most_recent_first(ExperienceKind::is_academic)
    }

    #[must_use]
    pub fn header_links(&self) -> Vec<SocialLink> {
        self.data.social_links.iter().filter(|l| l.show_in_header).cloned().collect()
    }

    #[must_use]
    pub fn footer_links(&self) -> Vec<SocialLink> {
        self.data.social_links.iter().filter(|l| l.show_in_footer).cloned().collect()
    }

    // Stable sort: entries sharing a start date keep catalog order.
    fn most_recent_first(&self, keep: impl Fn(ExperienceKind) -> bool) -> Vec<ExperienceEntry> {
        let mut entries: Vec<ExperienceEntry> =
            self.data.experience.iter().filter(|e| keep(e.kind)).cloned().collect();
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        entries
    }

    // =============================================================
    // Mutation
    // =============================================================

    /// Shallow-merge `patch` into the catalog. No validation is applied.
    pub fn replace_data(&mut self, patch: PortfolioPatch) {
        let PortfolioPatch { personal_info, skills, projects, experience, social_links } = patch;
        if let Some(personal_info) = personal_info {
            self.data.personal_info = personal_info;
        }
        if let Some(skills) = skills {
            self.data.skills = skills;
        }
        if let Some(projects) = projects {
            self.data.projects = projects;
        }
        if let Some(experience) = experience {
            self.data.experience = experience;
        }
        if let Some(social_links) = social_links {
            self.data.social_links = social_links;
        }
    }
}
