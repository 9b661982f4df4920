//! Light/dark theme state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme store owns the current [`Theme`] and keeps two outside surfaces
//! in step with it: the document root (a `data-theme` attribute plus a
//! `tema-*` class for CSS) and a persisted preference under
//! [`STORAGE_KEY`]. Both surfaces, and the platform's dark-mode signal, are
//! injected through [`ThemeEnv`] so the store runs unchanged in the browser,
//! during SSR, and in tests.
//!
//! TRADE-OFFS
//! ==========
//! Every backend is optional. A missing storage or document skips that side
//! effect silently; nothing here can fail the caller.
//!
//! Only explicit choices (`toggle`, `set`, `set_theme`) are persisted. The
//! initial resolution and ambient adoption touch the document only, so a
//! visitor who never picks a theme keeps following the system setting.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "tema-portfolio";

/// Theme used when nothing else decides.
pub const DEFAULT_THEME: Theme = Theme::Light;

/// Document attribute CSS selects on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// =============================================================
// Theme value
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Every class the store may put on the document root.
    pub const CSS_CLASSES: [&'static str; 2] = ["tema-claro", "tema-oscuro"];

    /// Persisted form: `"claro"` or `"oscuro"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "claro",
            Self::Dark => "oscuro",
        }
    }

    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => Self::CSS_CLASSES[0],
            Self::Dark => Self::CSS_CLASSES[1],
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme string that is neither `"claro"` nor `"oscuro"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme {0:?}, expected \"claro\" or \"oscuro\"")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claro" => Ok(Self::Light),
            "oscuro" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

// =============================================================
// Environment seams
// =============================================================

/// Simple persistent key-value storage (browser `localStorage`).
pub trait PreferenceStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Root element of the rendered document.
pub trait DisplaySurface: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
    /// Remove every class in `remove`, then add `add`.
    fn swap_class(&self, remove: &[&str], add: &str);
}

/// Callback receiving the new "prefers dark" value.
pub type ColorSchemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// The platform's "prefers dark" signal.
pub trait ColorSchemeSource: Send + Sync {
    /// Current value, or `None` when the platform cannot answer.
    fn prefers_dark(&self) -> Option<bool>;

    /// Call `on_change` whenever the signal flips. `None` when the platform
    /// offers no change notifications.
    fn subscribe(&self, on_change: ColorSchemeListener) -> Option<ColorSchemeSubscription>;
}

/// Live ambient-signal subscription. Dropping it unsubscribes.
#[must_use = "dropping the subscription cancels it"]
pub struct ColorSchemeSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ColorSchemeSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ColorSchemeSubscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for ColorSchemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Injected backends. `None` means unavailable.
#[derive(Clone, Default)]
pub struct ThemeEnv {
    pub storage: Option<Arc<dyn PreferenceStorage>>,
    pub surface: Option<Arc<dyn DisplaySurface>>,
    pub color_scheme: Option<Arc<dyn ColorSchemeSource>>,
}

impl ThemeEnv {
    /// No backends at all.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }
}

impl fmt::Debug for ThemeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEnv")
            .field("storage", &self.storage.is_some())
            .field("surface", &self.surface.is_some())
            .field("color_scheme", &self.color_scheme.is_some())
            .finish()
    }
}

// =============================================================
// Store
// =============================================================

#[derive(Clone, Debug)]
pub struct ThemeStore {
    current: Theme,
    env: ThemeEnv,
}

impl ThemeStore {
    /// Store holding [`DEFAULT_THEME`]. Touches no backend until
    /// [`initialize`](Self::initialize) or a mutation.
    #[must_use]
    pub fn new(env: ThemeEnv) -> Self {
        Self { current: DEFAULT_THEME, env }
    }

    /// [`new`](Self::new) followed by [`initialize`](Self::initialize).
    #[must_use]
    pub fn init(env: ThemeEnv) -> Self {
        let mut store = Self::new(env);
        store.initialize();
        store
    }

    /// Resolve the starting theme and reflect it on the document.
    pub fn initialize(&mut self) -> Theme {
        self.current = self.resolve_initial();
        self.apply_to_surface();
        self.current
    }

    /// Saved preference, else the ambient signal, else [`DEFAULT_THEME`].
    #[must_use]
    pub fn resolve_initial(&self) -> Theme {
        if let Some(saved) = self.saved_preference() {
            return saved;
        }
        self.env
            .color_scheme
            .as_ref()
            .and_then(|source| source.prefers_dark())
            .map_or(DEFAULT_THEME, Theme::from_prefers_dark)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current == Theme::Dark
    }

    #[must_use]
    pub fn env(&self) -> &ThemeEnv {
        &self.env
    }

    /// Valid theme found in storage, if any.
    #[must_use]
    pub fn saved_preference(&self) -> Option<Theme> {
        let raw = self.env.storage.as_ref()?.load(STORAGE_KEY)?;
        raw.parse().ok()
    }

    // =============================================================
    // Mutation
    // =============================================================

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    /// Switch to `theme`, update the document, then persist it.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.apply_to_surface();
        if let Some(storage) = &self.env.storage {
            storage.save(STORAGE_KEY, theme.as_str());
        }
    }

    /// Parse and apply a persisted-form theme name. Unknown names fall back
    /// to [`DEFAULT_THEME`] with a warning.
    pub fn set_theme(&mut self, raw: &str) -> Theme {
        let theme = raw.parse().unwrap_or_else(|err: ThemeParseError| {
            leptos::logging::warn!("{err}; using {DEFAULT_THEME}");
            DEFAULT_THEME
        });
        self.set(theme);
        theme
    }

    /// Follow an ambient change unless the visitor saved a preference.
    /// A stored value that does not parse as a theme is not a preference.
    /// Returns whether the current theme changed.
    pub fn adopt_ambient(&mut self, prefers_dark: bool) -> bool {
        if self.saved_preference().is_some() {
            return false;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        if theme == self.current {
            return false;
        }
        self.current = theme;
        self.apply_to_surface();
        true
    }

    /// Subscribe to ambient changes through the injected source.
    pub fn watch_color_scheme(
        &self,
        on_change: impl Fn(bool) + Send + Sync + 'static,
    ) -> Option<ColorSchemeSubscription> {
        self.env.color_scheme.as_ref()?.subscribe(Box::new(on_change))
    }

    fn apply_to_surface(&self) {
        if let Some(surface) = &self.env.surface {
            surface.set_attribute(THEME_ATTRIBUTE, self.current.attribute_value());
            surface.swap_class(&Theme::CSS_CLASSES, self.current.css_class());
        }
    }
}
