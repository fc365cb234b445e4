//! Utility helpers shared across the client crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment bootstrap concerns from store and
//! networking logic.

pub mod logging;
