use super::*;

use std::sync::{Arc, Mutex};

// =============================================================
// Helpers
// =============================================================

fn make_token(access_token: &str) -> AuthToken {
    AuthToken {
        token_type: "Bearer".to_owned(),
        access_token: access_token.to_owned(),
        expires_in: 86400,
    }
}

fn make_user(id: &str) -> User {
    User {
        id: id.to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Nguyen".to_owned(),
        email: "alice@example.com".to_owned(),
        created_at: Some(1_700_000_000),
        updated_at: None,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = AuthStore::new().get();
    assert_eq!(state.profile, None);
    assert_eq!(state.tokens, None);
    assert!(!state.is_loading);
}

// =============================================================
// Whole-field replacement
// =============================================================

#[test]
fn set_tokens_replaces_only_tokens() {
    let store = AuthStore::new();
    store.set_profile(make_user("u-1"));
    store.set_loading(true);

    store.set_tokens(make_token("t-1"));

    let state = store.get();
    assert_eq!(state.tokens, Some(make_token("t-1")));
    assert_eq!(state.profile, Some(make_user("u-1")));
    assert!(state.is_loading);
}

#[test]
fn set_profile_replaces_only_profile() {
    let store = AuthStore::new();
    store.set_tokens(make_token("t-1"));

    store.set_profile(make_user("u-1"));

    let state = store.get();
    assert_eq!(state.profile, Some(make_user("u-1")));
    assert_eq!(state.tokens, Some(make_token("t-1")));
    assert!(!state.is_loading);
}

#[test]
fn each_field_reflects_most_recent_setter_call() {
    let store = AuthStore::new();
    store.set_tokens(make_token("t-1"));
    store.set_profile(make_user("u-1"));
    store.set_tokens(make_token("t-2"));

    let state = store.get();
    assert_eq!(state.tokens, Some(make_token("t-2")));
    assert_eq!(state.profile, Some(make_user("u-1")));
}

#[test]
fn profile_then_tokens_sets_both_without_touching_loading() {
    let store = AuthStore::new();
    store.set_profile(make_user("u-1"));
    store.set_tokens(make_token("t-1"));

    let state = store.get();
    assert!(state.profile.is_some());
    assert!(state.tokens.is_some());
    assert!(!state.is_loading);
}

#[test]
fn set_loading_leaves_session_fields_untouched() {
    let store = AuthStore::new();
    store.set_tokens(make_token("t-1"));

    store.set_loading(true);
    assert!(store.get().is_loading);
    assert_eq!(store.get().tokens, Some(make_token("t-1")));

    store.set_loading(false);
    assert!(!store.get().is_loading);
    assert_eq!(store.get().tokens, Some(make_token("t-1")));
}

#[test]
fn clear_restores_signed_out_state() {
    let store = AuthStore::new();
    store.set_profile(make_user("u-1"));
    store.set_tokens(make_token("t-1"));
    store.set_loading(true);

    store.clear();

    assert_eq!(store.get(), AuthState::default());
}

// =============================================================
// Observation
// =============================================================

#[test]
fn subscribers_see_every_transition() {
    let store = AuthStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(move |state: &AuthState| {
        sink.lock()
            .unwrap()
            .push((state.tokens.is_some(), state.is_loading));
    });

    store.set_loading(true);
    store.set_tokens(make_token("t-1"));
    store.set_loading(false);

    let transitions = seen.lock().unwrap().clone();
    assert_eq!(
        transitions,
        vec![(false, false), (false, true), (true, true), (true, false)]
    );
}
