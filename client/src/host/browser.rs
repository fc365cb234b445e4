//! Live browser host backed by `web-sys`.
//!
//! Only compiled under the `browser` feature. Every capability re-checks the
//! environment at call time: `window` can be absent in workers and during
//! teardown, and `localStorage` throws in some privacy modes.

use super::{Host, HostError};

/// Host reading and mutating the real page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn read_preference(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), HostError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(HostError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| HostError::StorageWrite(format!("{e:?}")))
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(query.matches())
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force(class, enabled);
        }
    }
}
