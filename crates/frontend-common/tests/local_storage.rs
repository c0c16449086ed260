//! Browser tests for the localStorage token store and the browser-only setup around it.
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend-common`.

#![cfg(target_arch = "wasm32")]

use notes_frontend_common::auth::{LocalTokenStore, TokenKind, TokenStore};
use notes_frontend_common::{create_authenticated_client, init_logging};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn raw_item(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
}

#[wasm_bindgen_test]
fn test_stores_raw_strings_under_fixed_keys() {
    let store = LocalTokenStore;
    store.clear();

    store.set(TokenKind::Access, "a.b.c").unwrap();
    store.set(TokenKind::Refresh, "r-1").unwrap();

    assert_eq!(raw_item("access_token").as_deref(), Some("a.b.c"));
    assert_eq!(raw_item("refresh_token").as_deref(), Some("r-1"));
    assert_eq!(store.get(TokenKind::Access).as_deref(), Some("a.b.c"));
}

#[wasm_bindgen_test]
fn test_clear_removes_both_tokens() {
    let store = LocalTokenStore;
    store.set(TokenKind::Access, "a").unwrap();
    store.set(TokenKind::Refresh, "r").unwrap();

    store.clear();

    assert_eq!(store.get(TokenKind::Access), None);
    assert_eq!(store.get(TokenKind::Refresh), None);
}

#[wasm_bindgen_test]
fn test_authenticated_client_follows_stored_session() {
    let store = LocalTokenStore;
    store.clear();
    assert!(create_authenticated_client(&store).unwrap().is_none());

    store.set(TokenKind::Access, "a").unwrap();
    assert!(create_authenticated_client(&store).unwrap().is_some());

    store.clear();
    assert!(create_authenticated_client(&store).unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_init_logging_is_repeatable() {
    init_logging();
    init_logging();
    tracing::info!("logging initialised");
}
