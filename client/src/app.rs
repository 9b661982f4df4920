//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header, landing::Landing};
use crate::pages::{about::AboutPage, projects::ProjectsPage, skills::SkillsPage};
use crate::state::portfolio::PortfolioStore;
use crate::state::site::{SiteContext, follow_system_theme, initialize_theme};
use crate::state::theme::ThemeStore;
use crate::util::browser_theme::browser_env;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared site context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let portfolio = RwSignal::new(PortfolioStore::default());
    let theme = RwSignal::new(ThemeStore::new(browser_env()));
    let site = SiteContext::new(portfolio, theme);
    provide_context(site);

    // Browser-only: SSR always renders the default theme, the saved or
    // system preference is picked up after hydration.
    Effect::new(move || {
        initialize_theme(theme);
        let _subscription = StoredValue::new_local(follow_system_theme(theme));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=move || site.personal_info().name/>

        <Router>
            <Header/>
            <main class=move || site.theme_classes("site-main")>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=Landing/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("skills") view=SkillsPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
