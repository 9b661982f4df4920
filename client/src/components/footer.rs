//! Site footer: footer-visible social links, "built with" credits, and the
//! copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::state::site::use_site;

/// A technology credited in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credit {
    pub name: &'static str,
    pub logo: &'static str,
    pub url: &'static str,
}

pub const BUILT_WITH: [Credit; 2] = [
    Credit { name: "Rust", logo: "assets/rust.svg", url: "https://www.rust-lang.org" },
    Credit { name: "Leptos", logo: "assets/leptos.svg", url: "https://leptos.dev" },
];

#[must_use]
pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[must_use]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = current_year();

    let credits = BUILT_WITH
        .iter()
        .map(|credit| {
            view! {
                <a href=credit.url class="site-footer__credit" target="_blank" rel="noopener noreferrer">
                    <img src=credit.logo alt=credit.name/>
                    <span>{credit.name}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class=move || site.theme_classes("site-footer")>
            <div class="site-footer__links">
                {move || {
                    site.footer_links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    class=format!("site-footer__link icon-{}", link.icon)
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
            <div class="site-footer__built-with">
                <span>"Built with"</span>
                {credits}
            </div>
            <p class="site-footer__copyright">
                {move || copyright_line(year, &site.personal_info().name)}
            </p>
        </footer>
    }
}
