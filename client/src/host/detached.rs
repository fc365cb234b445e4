//! Fallback host for execution contexts without a browser.

#[cfg(test)]
#[path = "detached_test.rs"]
mod detached_test;

use super::{Host, HostError};

/// Host whose every capability reports "unavailable".
///
/// Native builds and any future server-rendering path get this by default,
/// so store construction and mutation stay safe with zero environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedHost;

impl Host for DetachedHost {
    fn read_preference(&self, _key: &str) -> Option<String> {
        None
    }

    fn write_preference(&self, _key: &str, _value: &str) -> Result<(), HostError> {
        Err(HostError::StorageUnavailable)
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        None
    }

    fn set_root_class(&self, _class: &str, _enabled: bool) {}
}
