#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{DEFAULT_THEME, STORAGE_KEY, Theme, ThemeStore};

#[test]
fn local_storage_is_empty_outside_browser() {
    LocalStorage.save(STORAGE_KEY, "oscuro");
    assert_eq!(LocalStorage.load(STORAGE_KEY), None);
}

#[test]
fn document_root_is_noop_but_callable() {
    DocumentRoot.set_attribute("data-theme", "dark");
    DocumentRoot.swap_class(&Theme::CSS_CLASSES, "tema-oscuro");
}

#[test]
fn color_scheme_has_no_answer_outside_browser() {
    assert_eq!(PrefersColorScheme.prefers_dark(), None);
    assert!(PrefersColorScheme.subscribe(Box::new(|_| {})).is_none());
}

#[test]
fn browser_env_resolves_default_during_ssr() {
    let mut store = ThemeStore::init(browser_env());
    assert_eq!(store.current(), DEFAULT_THEME);
    assert_eq!(store.toggle(), Theme::Dark);
}
