//! In-memory host for tests and headless embedding.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use super::{Host, HostError};

/// Host with map-backed storage, a scriptable system preference, and a
/// switch that makes writes fail.
///
/// Exists so store behavior, including the silent-degradation paths, can be
/// exercised without a browser. Share it as `Arc<MemoryHost>` to inspect
/// what a store did to the environment.
#[derive(Debug, Default)]
pub struct MemoryHost {
    prefs: Mutex<BTreeMap<String, String>>,
    root_classes: Mutex<BTreeSet<String>>,
    prefers_dark: Mutex<Option<bool>>,
    fail_writes: AtomicBool,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored preference, bypassing the fail-writes switch.
    pub fn seed_preference(&self, key: &str, value: &str) {
        self.prefs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    /// Script the answer for [`Host::system_prefers_dark`].
    pub fn set_system_prefers_dark(&self, value: Option<bool>) {
        *self
            .prefers_dark
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// Make subsequent [`Host::write_preference`] calls fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Stored value for `key`, if any.
    #[must_use]
    pub fn preference(&self, key: &str) -> Option<String> {
        self.prefs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Whether `class` is currently present on the fake document root.
    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(class)
    }
}

impl Host for MemoryHost {
    fn read_preference(&self, key: &str) -> Option<String> {
        self.preference(key)
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(HostError::StorageWrite("simulated quota failure".to_owned()));
        }
        self.seed_preference(key, value);
        Ok(())
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        *self
            .prefers_dark
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut classes = self
            .root_classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }
}
