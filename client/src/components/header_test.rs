use super::*;

#[test]
fn nav_items_cover_every_page() {
    let paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    assert_eq!(paths, ["/", "/about", "/projects", "/skills"]);
}

#[test]
fn is_active_matches_exact_route() {
    assert!(is_active("/about", "/about"));
    assert!(is_active("/about/", "/about"));
    assert!(is_active("/", "/"));
    assert!(!is_active("/about", "/"));
    assert!(!is_active("/", "/about"));
    assert!(!is_active("/projects", "/skills"));
}

#[test]
fn nav_link_class_marks_active() {
    assert_eq!(nav_link_class(false), "site-header__link");
    assert!(nav_link_class(true).ends_with("site-header__link--active"));
}

#[test]
fn toggle_glyph_shows_target_theme() {
    assert_eq!(toggle_glyph(true), "☀");
    assert_eq!(toggle_glyph(false), "☾");
}

#[test]
fn social_link_renders_name_as_title_and_label() {
    use leptos::tachys::view::RenderHtml;

    let link = SocialLink {
        name: "GitHub".to_owned(),
        url: "https://github.com/example".to_owned(),
        icon: "github".to_owned(),
        show_in_header: true,
        show_in_footer: true,
    };
    let html = social_link(link).into_view().to_html();
    assert!(html.contains(r#"href="https://github.com/example""#));
    assert!(html.contains(r#"title="GitHub""#));
    assert!(html.contains("icon-github"));
    assert!(html.contains(">GitHub</a>"));
}
