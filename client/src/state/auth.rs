//! Auth-session state for the current storefront user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views observe this store for "who is logged in and with what credentials".
//! Login and registration flows write the token and profile as the API
//! returns them; nothing here persists, so a page reload starts signed out
//! until the app shell re-establishes the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use once_cell::sync::Lazy;
use schema::{AuthToken, User};

use super::store::{Store, Subscription};

/// Snapshot of the auth session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Profile of the signed-in user, once fetched.
    pub profile: Option<User>,
    /// Credentials for authenticated API calls, once issued.
    pub tokens: Option<AuthToken>,
    /// Whether a login or profile fetch is in flight.
    pub is_loading: bool,
}

/// Reactive container for the auth session.
///
/// Each setter replaces exactly one field and leaves the rest untouched;
/// profile and tokens are independent, and neither is validated here. The
/// store trusts its callers; expiry, refresh, and logout policy live with
/// the flows driving it.
#[derive(Clone, Debug)]
pub struct AuthStore {
    state: Store<AuthState>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Store::new(AuthState::default()),
        }
    }

    /// Snapshot of the current session.
    pub fn get(&self) -> AuthState {
        self.state.get()
    }

    /// Observe every session change; the listener also fires immediately
    /// with the current state.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    /// Replace the stored credentials, notifying subscribers.
    pub fn set_tokens(&self, tokens: AuthToken) {
        self.state.update(|state| AuthState {
            tokens: Some(tokens),
            ..state.clone()
        });
    }

    /// Replace the stored profile, notifying subscribers.
    pub fn set_profile(&self, profile: User) {
        self.state.update(|state| AuthState {
            profile: Some(profile),
            ..state.clone()
        });
    }

    /// Flag a login or profile fetch as in flight, notifying subscribers.
    pub fn set_loading(&self, loading: bool) {
        self.state.update(|state| AuthState {
            is_loading: loading,
            ..state.clone()
        });
    }

    /// Reset to the signed-out state, notifying subscribers.
    pub fn clear(&self) {
        self.state.set(AuthState::default());
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide auth store; alive from first use until process exit.
pub static AUTH: Lazy<AuthStore> = Lazy::new(AuthStore::new);
