//! Networking for the platform's v1 HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the shared typed client; wire shapes live in the sibling
//! `schema` crate so this module stays transport-only.

pub mod api;
