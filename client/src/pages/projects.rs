//! Projects page: featured projects first, then the full list filtered by
//! status.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::state::catalog::{Project, ProjectStatus};
use crate::state::site::use_site;
use crate::util::format::{join_technologies, month_year};

/// Image shown for projects without their own.
pub const PLACEHOLDER_IMAGE: &str = "assets/project-placeholder.svg";

/// Status filter selected on the projects page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Status(ProjectStatus),
}

impl ProjectFilter {
    /// Every filter button, in display order.
    #[must_use]
    pub fn options() -> Vec<ProjectFilter> {
        std::iter::once(Self::All)
            .chain(ProjectStatus::ALL.into_iter().map(Self::Status))
            .collect()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Status(status) => status.label(),
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => project.status == status,
        }
    }
}

/// Projects passing `filter`, in catalog order.
#[must_use]
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).cloned().collect()
}

#[must_use]
pub fn project_image(project: &Project) -> &str {
    project.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
}

#[must_use]
pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "project-card__status--completed",
        ProjectStatus::InProgress => "project-card__status--in-progress",
        ProjectStatus::Planned => "project-card__status--planned",
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let site = use_site();
    let filter = RwSignal::new(ProjectFilter::All);

    let buttons = ProjectFilter::options()
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class=move || {
                        if filter.get() == option {
                            "btn projects-page__filter projects-page__filter--active"
                        } else {
                            "btn projects-page__filter"
                        }
                    }
                    on:click=move |_| filter.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=move || site.theme_classes("projects-page")>
            <h1>"Projects"</h1>

            <Show when=move || !site.featured_projects().is_empty()>
                <section class="projects-page__featured">
                    <h2>"Featured"</h2>
                    {move || site.featured_projects().into_iter().map(project_card).collect::<Vec<_>>()}
                </section>
            </Show>

            <div class="projects-page__filters">{buttons}</div>

            <section class="projects-page__list">
                {move || {
                    let visible = site.with_portfolio(|p| filter_projects(p.projects(), filter.get()));
                    if visible.is_empty() {
                        view! { <p class="projects-page__empty">"No projects match this filter."</p> }.into_any()
                    } else {
                        visible.into_iter().map(project_card).collect::<Vec<_>>().into_any()
                    }
                }}
            </section>
        </div>
    }
}

fn project_card(project: Project) -> impl IntoView {
    let image = project_image(&project).to_owned();
    let technologies = join_technologies(&project.technologies);
    let started = month_year(project.start_date);
    let alt = project.name.clone();

    view! {
        <article class="project-card">
            <img class="project-card__image" src=image alt=alt/>
            <h3 class="project-card__name">{project.name}</h3>
            <span class=format!("project-card__status {}", status_class(project.status))>
                {project.status.label()}
            </span>
            <p class="project-card__description">{project.description}</p>
            <p class="project-card__technologies">{technologies}</p>
            <p class="project-card__started">"Started " {started}</p>
            <div class="project-card__links">
                <a href=project.repository_url target="_blank" rel="noopener noreferrer">
                    "Source"
                </a>
                {project
                    .demo_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "Live demo"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
