//! Skills page: one section per category with a level bar per skill.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::state::catalog::SkillCategory;
use crate::state::site::use_site;

/// Proficiency band a level falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillTier {
    Expert,
    Advanced,
    Intermediate,
    Learning,
}

impl SkillTier {
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        match level {
            5.. => Self::Expert,
            4 => Self::Advanced,
            3 => Self::Intermediate,
            _ => Self::Learning,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Learning => "Learning",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Expert => "skill-expert",
            Self::Advanced => "skill-advanced",
            Self::Intermediate => "skill-intermediate",
            Self::Learning => "skill-learning",
        }
    }
}

/// Bar width for `level`, 20% per step, capped at 100%.
#[must_use]
pub fn level_percent(level: u8) -> u8 {
    level.min(5) * 20
}

#[component]
pub fn SkillsPage() -> impl IntoView {
    let site = use_site();

    let sections = SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let skills = move || site.skills_by_category(category);
            view! {
                <Show when=move || !skills().is_empty()>
                    <section class="skills-page__category">
                        <h2>{category.label()}</h2>
                        <ul class="skills-page__list">
                            {move || {
                                skills()
                                    .into_iter()
                                    .map(|skill| {
                                        let tier = SkillTier::from_level(skill.level);
                                        view! {
                                            <li class=format!("skills-page__skill {}", tier.css_class())>
                                                <span class="skills-page__name">{skill.name}</span>
                                                <span class="skills-page__tier">{tier.label()}</span>
                                                <div class="skills-page__bar">
                                                    <div
                                                        class="skills-page__fill"
                                                        style=format!("width: {}%", level_percent(skill.level))
                                                    ></div>
                                                </div>
                                                {skill
                                                    .description
                                                    .map(|d| view! { <span class="skills-page__note">{d}</span> })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </Show>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=move || site.theme_classes("skills-page")>
            <h1>"Skills"</h1>
            {sections}
        </div>
    }
}
