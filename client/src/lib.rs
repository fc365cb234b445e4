//! State and API-access layer for the storefront web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! UI views import this crate for everything below the component layer:
//! `state` holds the reactive stores (auth session, theme preference) and the
//! observer primitive they share, `net` wraps the platform's v1 HTTP API,
//! `host` isolates browser capabilities behind an injectable trait, and
//! `config`/`util` cover base-URL resolution and logging bootstrap. Native
//! builds (tests, tooling) compile every browser touchpoint to deterministic
//! stubs; the `browser` feature enables the real `web-sys`/`gloo-net` paths.

pub mod config;
pub mod host;
pub mod net;
pub mod state;
pub mod util;
