//! Reactive stores observed by the UI views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` is the observer-pattern container; `auth` and `theme` are the
//! module-scoped singleton stores built on it. Views read and subscribe
//! freely but mutate only through the exposed setters.

pub mod auth;
pub mod store;
pub mod theme;
