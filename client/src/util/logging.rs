//! Console logging bootstrap.
//!
//! The app shell calls [`init`] once at startup. Browser builds route the
//! `log` facade to the devtools console; native builds leave the facade
//! uninstalled and every `log` macro becomes a no-op.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Install the console logger at debug level.
///
/// Safe to call more than once; a repeat install attempt is ignored.
pub fn init() {
    #[cfg(feature = "browser")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
