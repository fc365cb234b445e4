//! Dark-mode preference state with persistence and DOM reflection.
//!
//! Resolution order at construction: the `color-scheme` key in durable
//! storage (literal `"dark"` or `"light"`), then the OS media preference,
//! then light. Every change, the initial value included, toggles the `dark`
//! class on the document root and writes the choice back to storage.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write leaves the in-memory flag and
//! the DOM marker correct and is never surfaced; the next change simply
//! attempts the write again.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::store::{Store, Subscription};
use crate::host::{self, Host};

/// Storage key for the persisted scheme choice.
const STORAGE_KEY: &str = "color-scheme";

/// Class reflected onto the document root while dark mode is active.
const ROOT_CLASS: &str = "dark";

/// Reactive dark-mode flag.
///
/// The reflection listener is installed before the constructor returns, so
/// observable side effects track every state the store ever holds.
#[derive(Debug)]
pub struct ThemeStore {
    state: Store<bool>,
    _reflect: Subscription,
}

impl ThemeStore {
    /// Build a store over the given host, resolving the initial scheme and
    /// installing the reflection listener.
    pub fn with_host(host: Arc<dyn Host>) -> Self {
        let state = Store::new(resolve_initial(host.as_ref()));
        let reflect_sub = {
            let host = Arc::clone(&host);
            state.subscribe(move |dark: &bool| reflect(host.as_ref(), *dark))
        };
        Self {
            state,
            _reflect: reflect_sub,
        }
    }

    /// Build a store over the default host for this build.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(host::default_host())
    }

    /// Whether dark mode is currently active.
    pub fn is_dark(&self) -> bool {
        self.state.get()
    }

    /// Force dark mode on or off.
    pub fn set_dark_mode(&self, value: bool) {
        self.state.set(value);
    }

    /// Flip the current scheme.
    pub fn toggle_dark_mode(&self) {
        self.state.update(|dark| !*dark);
    }

    /// Observe every scheme change; the listener also fires immediately
    /// with the current flag.
    pub fn subscribe(&self, listener: impl Fn(&bool) + Send + Sync + 'static) -> Subscription {
        self.state.subscribe(listener)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial scheme: persisted choice first, then the OS preference, then
/// light. Unrecognized stored values count as no stored preference.
fn resolve_initial(host: &dyn Host) -> bool {
    match host.read_preference(STORAGE_KEY).as_deref() {
        Some("dark") => true,
        Some("light") => false,
        _ => host.system_prefers_dark().unwrap_or(false),
    }
}

/// Persisted value for a scheme flag.
fn scheme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Mirror the flag onto the environment: root class, then persisted
/// preference. Write failures are swallowed.
fn reflect(host: &dyn Host, dark: bool) {
    host.set_root_class(ROOT_CLASS, dark);
    let _ = host.write_preference(STORAGE_KEY, scheme_name(dark));
}

/// Process-wide theme store over the build's default host; alive from first
/// use until process exit.
pub static THEME: Lazy<ThemeStore> = Lazy::new(ThemeStore::new);
