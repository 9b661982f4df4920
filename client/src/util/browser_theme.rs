//! Browser backends for the theme store.
//!
//! Wires [`ThemeEnv`] to `localStorage`, the `<html>` element, and the
//! `(prefers-color-scheme: dark)` media query. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Every backend is best-effort: SSR builds compile them to no-ops and any
//! failing web-sys call is discarded, so server rendering stays
//! deterministic and a locked-down browser just loses the side effect.

#[cfg(test)]
#[path = "browser_theme_test.rs"]
mod browser_theme_test;

use std::sync::Arc;

use crate::state::theme::{
    ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription, DisplaySurface, PreferenceStorage, ThemeEnv,
};

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme backends backed by the current browser window.
#[must_use]
pub fn browser_env() -> ThemeEnv {
    ThemeEnv {
        storage: Some(Arc::new(LocalStorage)),
        surface: Some(Arc::new(DocumentRoot)),
        color_scheme: Some(Arc::new(PrefersColorScheme)),
    }
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl DisplaySurface for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = document_element() {
                let _ = el.set_attribute(name, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }

    fn swap_class(&self, remove: &[&str], add: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = document_element() {
                let classes = el.class_list();
                for class in remove {
                    let _ = classes.remove_1(class);
                }
                let _ = classes.add_1(add);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (remove, add);
        }
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefersColorScheme;

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

impl ColorSchemeSource for PrefersColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            dark_query().map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn subscribe(&self, on_change: ColorSchemeListener) -> Option<ColorSchemeSubscription> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let mq = dark_query()?;
            let cb = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
            );
            mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
                .ok()?;

            Some(ColorSchemeSubscription::new(move || {
                let _ = mq.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            None
        }
    }
}
