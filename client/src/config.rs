//! Client configuration resolved at build time.
//!
//! WASM bundles carry no runtime environment, so the API base URL is baked
//! in from the `API_URL` compile-time variable, with a local-gateway
//! default for development builds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Gateway origin used when `API_URL` is not set at compile time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Base URL for the platform API.
#[must_use]
pub fn api_url() -> String {
    let url = option_env!("API_URL").unwrap_or(DEFAULT_API_URL);
    log::debug!("api base url: {url}");
    url.to_owned()
}
