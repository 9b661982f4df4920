//! About page: biography, work history, education, and technical skills.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::state::catalog::ExperienceEntry;
use crate::state::site::use_site;
use crate::util::format::{join_technologies, period_label};

/// `mailto:` link for `email`.
#[must_use]
pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// `"Organization · Location"` line under an entry title.
#[must_use]
pub fn entry_subtitle(entry: &ExperienceEntry) -> String {
    format!("{} · {}", entry.organization, entry.location)
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let site = use_site();
    let info = move || site.personal_info();

    view! {
        <div class=move || site.theme_classes("about-page")>
            <section class="about-page__intro">
                <h1>"About"</h1>
                <p class="about-page__description">{move || info().description}</p>
                <p class="about-page__location">{move || info().location}</p>
                <a class="about-page__email" href=move || mailto(&info().email)>
                    {move || info().email}
                </a>
            </section>

            <Show when=move || !site.work_experience().is_empty()>
                <section class="about-page__timeline">
                    <h2>"Experience"</h2>
                    {move || site.work_experience().into_iter().map(timeline_entry).collect::<Vec<_>>()}
                </section>
            </Show>

            <section class="about-page__timeline">
                <h2>"Education"</h2>
                {move || site.education().into_iter().map(timeline_entry).collect::<Vec<_>>()}
            </section>

            <section class="about-page__stack">
                <h2>"Technologies & tools"</h2>
                <ul>
                    {move || {
                        site.with_portfolio(|p| p.technical_skills())
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <li class="about-page__tech">
                                        <span>{skill.name}</span>
                                        <span class="about-page__tech-category">{skill.category.label()}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}

fn timeline_entry(entry: ExperienceEntry) -> impl IntoView {
    let subtitle = entry_subtitle(&entry);
    let period = period_label(entry.start_date, entry.end_date);
    let technologies = entry.technologies.as_deref().map(join_technologies);
    let achievements = entry.achievements.unwrap_or_default();

    view! {
        <article class="timeline-entry">
            <h3 class="timeline-entry__title">{entry.title}</h3>
            <p class="timeline-entry__subtitle">{subtitle}</p>
            <p class="timeline-entry__period">{period}</p>
            <p class="timeline-entry__description">{entry.description}</p>
            {technologies.map(|t| view! { <p class="timeline-entry__technologies">{t}</p> })}
            {(!achievements.is_empty())
                .then(|| {
                    view! {
                        <ul class="timeline-entry__achievements">
                            {achievements.into_iter().map(|a| view! { <li>{a}</li> }).collect::<Vec<_>>()}
                        </ul>
                    }
                })}
        </article>
    }
}
