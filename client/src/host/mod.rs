//! Injectable browser-capability seam for the stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Store logic never calls `web-sys` directly; it talks to a [`Host`] so the
//! same code runs against the real browser, a detached stub, or an in-memory
//! fake under test. Every capability is best-effort: missing pieces of the
//! environment degrade to "unavailable" answers instead of errors the stores
//! would have to handle.

#[cfg(feature = "browser")]
pub mod browser;
pub mod detached;
pub mod memory;

use std::sync::Arc;

/// Failure persisting a preference.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No durable storage exists in this execution context.
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// Storage exists but rejected the write (quota, permissions).
    #[error("preference write rejected: {0}")]
    StorageWrite(String),
}

/// Capabilities the stores need from the surrounding environment.
pub trait Host: Send + Sync {
    /// Read a persisted preference. `None` covers a missing key, unavailable
    /// storage, and thrown access errors alike.
    fn read_preference(&self, key: &str) -> Option<String>;

    /// Persist a preference. The caller decides whether the failure matters.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when storage is missing or rejects the write.
    fn write_preference(&self, key: &str, value: &str) -> Result<(), HostError>;

    /// The OS-reported dark-scheme preference, or `None` when the media
    /// query is unsupported or unanswerable.
    fn system_prefers_dark(&self) -> Option<bool>;

    /// Toggle a class on the document root element. No-op outside a browser.
    fn set_root_class(&self, class: &str, enabled: bool);
}

/// Host for the current build: the live browser under the `browser` feature,
/// detached stubs otherwise.
#[must_use]
pub fn default_host() -> Arc<dyn Host> {
    #[cfg(feature = "browser")]
    {
        Arc::new(browser::BrowserHost)
    }
    #[cfg(not(feature = "browser"))]
    {
        Arc::new(detached::DetachedHost)
    }
}
