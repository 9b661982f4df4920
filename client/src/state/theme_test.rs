use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::*;

// =============================================================
// In-memory backends
// =============================================================

#[derive(Default)]
struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.lock().unwrap().insert(key.to_owned(), value.to_owned());
        storage
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Default)]
struct FakeRoot {
    attributes: Mutex<HashMap<String, String>>,
    classes: Mutex<Vec<String>>,
}

impl FakeRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.lock().unwrap().get(name).cloned()
    }

    fn classes(&self) -> Vec<String> {
        self.classes.lock().unwrap().clone()
    }
}

impl DisplaySurface for FakeRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.lock().unwrap().insert(name.to_owned(), value.to_owned());
    }

    fn swap_class(&self, remove: &[&str], add: &str) {
        let mut classes = self.classes.lock().unwrap();
        classes.retain(|c| !remove.contains(&c.as_str()));
        classes.push(add.to_owned());
    }
}

#[derive(Default)]
struct FakeScheme {
    prefers_dark: Option<bool>,
    listeners: Arc<Mutex<Vec<(usize, ColorSchemeListener)>>>,
    next_id: AtomicUsize,
}

impl FakeScheme {
    fn preferring(prefers_dark: bool) -> Self {
        Self { prefers_dark: Some(prefers_dark), ..Self::default() }
    }

    fn emit(&self, prefers_dark: bool) {
        for (_, listener) in self.listeners.lock().unwrap().iter() {
            listener(prefers_dark);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl ColorSchemeSource for FakeScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn subscribe(&self, on_change: ColorSchemeListener) -> Option<ColorSchemeSubscription> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().unwrap().push((id, on_change));
        let listeners = Arc::clone(&self.listeners);
        Some(ColorSchemeSubscription::new(move || {
            listeners.lock().unwrap().retain(|(other, _)| *other != id);
        }))
    }
}

struct Harness {
    storage: Arc<MemoryStorage>,
    root: Arc<FakeRoot>,
    scheme: Arc<FakeScheme>,
}

impl Harness {
    fn new(storage: MemoryStorage, scheme: FakeScheme) -> Self {
        Self { storage: Arc::new(storage), root: Arc::new(FakeRoot::default()), scheme: Arc::new(scheme) }
    }

    fn blank() -> Self {
        Self::new(MemoryStorage::default(), FakeScheme::default())
    }

    fn env(&self) -> ThemeEnv {
        ThemeEnv {
            storage: Some(Arc::clone(&self.storage) as Arc<dyn PreferenceStorage>),
            surface: Some(Arc::clone(&self.root) as Arc<dyn DisplaySurface>),
            color_scheme: Some(Arc::clone(&self.scheme) as Arc<dyn ColorSchemeSource>),
        }
    }

    fn saved(&self) -> Option<String> {
        self.storage.get(STORAGE_KEY)
    }
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn theme_parses_persisted_names() {
    assert_eq!("claro".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("oscuro".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("neon".parse::<Theme>(), Err(ThemeParseError("neon".to_owned())));
    assert!("Oscuro".parse::<Theme>().is_err());
}

#[test]
fn theme_surface_values() {
    assert_eq!(Theme::Dark.attribute_value(), "dark");
    assert_eq!(Theme::Light.attribute_value(), "light");
    assert_eq!(Theme::Dark.css_class(), "tema-oscuro");
    assert_eq!(Theme::Light.css_class(), "tema-claro");
    assert_eq!(Theme::Dark.to_string(), "oscuro");
}

#[test]
fn theme_toggled_is_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn saved_preference_wins_over_ambient() {
    let h = Harness::new(MemoryStorage::with_entry(STORAGE_KEY, "oscuro"), FakeScheme::preferring(false));
    let store = ThemeStore::init(h.env());
    assert_eq!(store.current(), Theme::Dark);
}

#[test]
fn ambient_used_without_saved_preference() {
    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(true));
    assert_eq!(ThemeStore::init(h.env()).current(), Theme::Dark);

    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(false));
    assert_eq!(ThemeStore::init(h.env()).current(), Theme::Light);
}

#[test]
fn invalid_saved_value_falls_through_to_ambient() {
    let h = Harness::new(MemoryStorage::with_entry(STORAGE_KEY, "neon"), FakeScheme::preferring(true));
    assert_eq!(ThemeStore::init(h.env()).current(), Theme::Dark);
}

#[test]
fn default_when_nothing_answers() {
    let h = Harness::blank();
    assert_eq!(ThemeStore::init(h.env()).current(), DEFAULT_THEME);
    assert_eq!(ThemeStore::init(ThemeEnv::detached()).current(), DEFAULT_THEME);
}

#[test]
fn init_applies_to_surface_without_persisting() {
    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(true));
    let _store = ThemeStore::init(h.env());
    assert_eq!(h.root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(h.root.classes(), ["tema-oscuro"]);
    assert_eq!(h.saved(), None);
}

#[test]
fn new_touches_no_backend() {
    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(true));
    let store = ThemeStore::new(h.env());
    assert_eq!(store.current(), DEFAULT_THEME);
    assert!(h.root.classes().is_empty());
    assert_eq!(h.storage.writes.load(Ordering::SeqCst), 0);
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn set_theme_round_trips_through_storage_and_surface() {
    let h = Harness::blank();
    let mut store = ThemeStore::init(h.env());

    assert_eq!(store.set_theme("oscuro"), Theme::Dark);
    assert_eq!(store.current().as_str(), "oscuro");
    assert!(store.is_dark());
    assert_eq!(h.saved().as_deref(), Some("oscuro"));
    let classes = h.root.classes();
    assert!(classes.iter().any(|c| c == "tema-oscuro"));
    assert!(!classes.iter().any(|c| c == "tema-claro"));
    assert_eq!(h.root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
}

#[test]
fn set_theme_invalid_falls_back_to_default() {
    let h = Harness::new(MemoryStorage::with_entry(STORAGE_KEY, "oscuro"), FakeScheme::default());
    let mut store = ThemeStore::init(h.env());
    assert!(store.is_dark());

    assert_eq!(store.set_theme("neon"), Theme::Light);
    assert_eq!(store.current().as_str(), "claro");
    assert_eq!(h.saved().as_deref(), Some("claro"));
    assert_eq!(h.root.classes(), ["tema-claro"]);
}

#[test]
fn toggle_twice_restores_original() {
    let h = Harness::blank();
    let mut store = ThemeStore::init(h.env());
    let original = store.current();

    assert_eq!(store.toggle(), original.toggled());
    assert_eq!(h.saved().as_deref(), Some(original.toggled().as_str()));
    store.toggle();
    assert_eq!(store.current(), original);
    assert_eq!(h.saved().as_deref(), Some(original.as_str()));
}

#[test]
fn classes_stay_mutually_exclusive() {
    let h = Harness::blank();
    let mut store = ThemeStore::init(h.env());
    for _ in 0..3 {
        store.toggle();
        assert_eq!(h.root.classes(), [store.current().css_class()]);
    }
}

#[test]
fn every_mutation_persists() {
    let h = Harness::blank();
    let mut store = ThemeStore::init(h.env());
    store.toggle();
    store.set(Theme::Dark);
    store.set_theme("claro");
    assert_eq!(h.storage.writes.load(Ordering::SeqCst), 3);
}

#[test]
fn mutations_without_backends_do_not_panic() {
    let mut store = ThemeStore::init(ThemeEnv::detached());
    store.toggle();
    store.set_theme("neon");
    store.set_theme("oscuro");
    assert!(store.is_dark());
    assert_eq!(store.saved_preference(), None);
}

// =============================================================
// Ambient adoption
// =============================================================

#[test]
fn adopt_ambient_follows_system_without_saved_preference() {
    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(false));
    let mut store = ThemeStore::init(h.env());

    assert!(store.adopt_ambient(true));
    assert!(store.is_dark());
    assert_eq!(h.root.classes(), ["tema-oscuro"]);
    assert_eq!(h.saved(), None);
    assert!(!store.adopt_ambient(true));
}

#[test]
fn adopt_ambient_ignored_once_preference_saved() {
    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(false));
    let mut store = ThemeStore::init(h.env());
    store.set(Theme::Light);

    assert!(!store.adopt_ambient(true));
    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn adopt_ambient_treats_unparseable_saved_value_as_unset() {
    let h = Harness::new(MemoryStorage::with_entry(STORAGE_KEY, "sepia"), FakeScheme::preferring(false));
    let mut store = ThemeStore::init(h.env());

    assert!(store.adopt_ambient(true));
    assert!(store.is_dark());
    assert_eq!(h.saved().as_deref(), Some("sepia"));
}

#[test]
fn watch_color_scheme_delivers_changes_until_cancelled() {
    let h = Harness::new(MemoryStorage::default(), FakeScheme::preferring(false));
    let store = Arc::new(Mutex::new(ThemeStore::init(h.env())));

    let subscription = {
        let target = Arc::clone(&store);
        store.lock().unwrap().watch_color_scheme(move |dark| {
            target.lock().unwrap().adopt_ambient(dark);
        })
    }
    .expect("fake source supports subscriptions");
    assert_eq!(h.scheme.listener_count(), 1);

    h.scheme.emit(true);
    assert!(store.lock().unwrap().is_dark());

    subscription.cancel();
    assert_eq!(h.scheme.listener_count(), 0);
    h.scheme.emit(false);
    assert!(store.lock().unwrap().is_dark());
}

#[test]
fn dropping_subscription_unsubscribes() {
    let h = Harness::blank();
    let store = ThemeStore::init(h.env());
    {
        let _subscription = store.watch_color_scheme(|_| {});
        assert_eq!(h.scheme.listener_count(), 1);
    }
    assert_eq!(h.scheme.listener_count(), 0);
}

#[test]
fn watch_color_scheme_without_source_is_none() {
    let store = ThemeStore::init(ThemeEnv::detached());
    assert!(store.watch_color_scheme(|_| {}).is_none());
}
