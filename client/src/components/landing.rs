//! Landing body shown at `/`: hero, primary social links, featured projects,
//! and current studies.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::state::catalog::SocialLink;
use crate::state::site::use_site;
use crate::util::format::period_label;

/// Links repeated in the hero, in this order.
pub const HERO_LINK_NAMES: [&str; 2] = ["GitHub", "LinkedIn"];

/// The subset of `links` shown in the hero.
#[must_use]
pub fn hero_links(links: &[SocialLink]) -> Vec<SocialLink> {
    links.iter().filter(|l| HERO_LINK_NAMES.contains(&l.name.as_str())).cloned().collect()
}

#[component]
pub fn Landing() -> impl IntoView {
    let site = use_site();
    let info = move || site.personal_info();

    view! {
        <section class=move || site.theme_classes("landing")>
            <div class="landing__hero">
                <img class="landing__avatar" src=move || info().profile_image alt=move || info().name/>
                <div class="landing__intro">
                    <h1 class="landing__name">{move || info().name}</h1>
                    <h2 class="landing__title">{move || info().title}</h2>
                    <p class="landing__subtitle">{move || info().subtitle}</p>
                    <p class="landing__description">{move || info().description}</p>
                    <div class="landing__links">
                        {move || {
                            hero_links(&site.social_links())
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            class=format!("landing__link icon-{}", link.icon)
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {link.name}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </div>

            <Show when=move || !site.featured_projects().is_empty()>
                <div class="landing__featured">
                    <h3>"Featured projects"</h3>
                    {move || {
                        site.featured_projects()
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <a href="/projects" class="landing__project">
                                        <span class="landing__project-name">{project.name}</span>
                                        <span class="landing__project-summary">{project.short_description}</span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class="landing__education">
                <h3>"Education"</h3>
                <ul>
                    {move || {
                        site.education()
                            .into_iter()
                            .map(|entry| {
                                let period = period_label(entry.start_date, entry.end_date);
                                view! {
                                    <li class="landing__education-item">
                                        <span class="landing__education-title">{entry.title}</span>
                                        <span class="landing__education-org">{entry.organization}</span>
                                        <span class="landing__education-period">{period}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </section>
    }
}
