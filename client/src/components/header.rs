//! Site header with navigation, header social links, and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Reads the shared [`SiteContext`] for the owner's
//! name, header-visible links, and the current theme.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::catalog::SocialLink;
use crate::state::site::use_site;

/// One entry of the top navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About", path: "/about" },
    NavItem { label: "Projects", path: "/projects" },
    NavItem { label: "Skills", path: "/skills" },
];

/// Whether `item_path` is the route currently shown. Trailing slashes are
/// ignored.
#[must_use]
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path.trim_end_matches('/') == item_path.trim_end_matches('/')
}

#[must_use]
pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "site-header__link site-header__link--active"
    } else {
        "site-header__link"
    }
}

/// Glyph for the toggle button: the theme a click switches to.
#[must_use]
pub fn toggle_glyph(is_dark: bool) -> &'static str {
    if is_dark { "☀" } else { "☾" }
}

/// Icon link to one of the owner's profiles, labelled with the profile name.
pub fn social_link(link: SocialLink) -> impl IntoView {
    let name = link.name;
    let title = name.clone();
    view! {
        <a
            href=link.url
            class=format!("site-header__social-link icon-{}", link.icon)
            title=title
            target="_blank"
            rel="noopener noreferrer"
        >
            {name}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let pathname = use_location().pathname;

    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a href=path class=move || nav_link_class(is_active(&pathname.get(), path))>
                    {item.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class=move || site.theme_classes("site-header")>
            <a href="/" class="site-header__brand">
                {move || site.personal_info().name}
            </a>

            <nav class="site-header__nav">{nav}</nav>

            <span class="site-header__spacer"></span>

            <div class="site-header__social">
                {move || {
                    site.header_links()
                        .into_iter()
                        .map(social_link)
                        .collect::<Vec<_>>()
                }}
            </div>

            <button
                class="btn site-header__theme-toggle"
                on:click=move |_| site.toggle_theme()
                title="Toggle dark mode"
            >
                {move || toggle_glyph(site.is_dark())}
            </button>
        </header>
    }
}
