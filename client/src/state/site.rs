//! Shared read access for presentation components.
//!
//! DESIGN
//! ======
//! Every page and chrome component needs the same handful of catalog views
//! plus the current theme and its toggle. [`SiteContext`] bundles the two
//! store signals into one `Copy` handle provided through Leptos context, so
//! components compose with it via [`use_site`] instead of re-deriving views.
//! Reads go through the signals and are tracked, so a store mutation
//! re-renders every dependent view before control returns to the caller.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use leptos::prelude::*;

use super::catalog::{ExperienceEntry, PersonalInfo, Project, Skill, SkillCategory, SocialLink};
use super::portfolio::PortfolioStore;
use super::theme::{ColorSchemeSubscription, Theme, ThemeStore};

#[derive(Clone, Copy, Debug)]
pub struct SiteContext {
    portfolio: RwSignal<PortfolioStore>,
    theme: RwSignal<ThemeStore>,
}

impl SiteContext {
    #[must_use]
    pub fn new(portfolio: RwSignal<PortfolioStore>, theme: RwSignal<ThemeStore>) -> Self {
        Self { portfolio, theme }
    }

    /// Read-only view of the portfolio store.
    pub fn portfolio(&self) -> ReadSignal<PortfolioStore> {
        self.portfolio.read_only()
    }

    /// Run `f` against the current store state, tracking the read.
    pub fn with_portfolio<T>(&self, f: impl FnOnce(&PortfolioStore) -> T) -> T {
        self.portfolio.with(f)
    }

    // =============================================================
    // Catalog views
    // =============================================================

    pub fn personal_info(&self) -> PersonalInfo {
        self.with_portfolio(|p| p.personal_info().clone())
    }

    pub fn skills(&self) -> Vec<Skill> {
        self.with_portfolio(|p| p.skills().to_vec())
    }

    pub fn projects(&self) -> Vec<Project> {
        self.with_portfolio(|p| p.projects().to_vec())
    }

    pub fn experience(&self) -> Vec<ExperienceEntry> {
        self.with_portfolio(|p| p.experience().to_vec())
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        self.with_portfolio(|p| p.social_links().to_vec())
    }

    pub fn featured_projects(&self) -> Vec<Project> {
        self.with_portfolio(PortfolioStore::featured_projects)
    }

    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<Skill> {
        self.with_portfolio(|p| p.skills_by_category(category))
    }

    pub fn work_experience(&self) -> Vec<ExperienceEntry> {
        self.with_portfolio(PortfolioStore::work_experience)
    }

    pub fn education(&self) -> Vec<ExperienceEntry> {
        self.with_portfolio(PortfolioStore::education)
    }

    pub fn header_links(&self) -> Vec<SocialLink> {
        self.with_portfolio(PortfolioStore::header_links)
    }

    pub fn footer_links(&self) -> Vec<SocialLink> {
        self.with_portfolio(PortfolioStore::footer_links)
    }

    // =============================================================
    // Theme
    // =============================================================

    pub fn theme(&self) -> Theme {
        self.theme.with(ThemeStore::current)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(ThemeStore::is_dark)
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| {
            t.toggle();
        });
    }

    /// `base` followed by the class of the current theme.
    pub fn theme_classes(&self, base: &str) -> String {
        theme_classes(base, self.theme())
    }
}

/// `"<base> tema-claro"` or `"<base> tema-oscuro"`.
#[must_use]
pub fn theme_classes(base: &str, theme: Theme) -> String {
    format!("{base} {}", theme.css_class())
}

/// Fetch the shared context provided by the root `App`.
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

/// Resolve the starting theme inside `theme`, reflecting it on the page.
pub fn initialize_theme(theme: RwSignal<ThemeStore>) {
    theme.update(|t| {
        t.initialize();
    });
}

/// Keep `theme` following the platform dark-mode setting until the returned
/// subscription is dropped. Has no effect once a preference is saved.
pub fn follow_system_theme(theme: RwSignal<ThemeStore>) -> Option<ColorSchemeSubscription> {
    theme.with_untracked(|t| {
        t.watch_color_scheme(move |prefers_dark| {
            theme.maybe_update(|t| t.adopt_ambient(prefers_dark));
        })
    })
}
