use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert!(store.token().is_none());
}

#[test]
fn memory_store_set_then_clear() {
    let store = MemoryTokenStore::default();
    store.set_token("abc");
    assert_eq!(store.token().as_deref(), Some("abc"));
    store.clear_token();
    assert!(store.token().is_none());
}

#[test]
fn memory_store_clones_share_the_slot() {
    let store = MemoryTokenStore::with_token("first");
    let other = store.clone();
    other.set_token("second");
    assert_eq!(store.token().as_deref(), Some("second"));
}

// =============================================================
// Browser helpers off-browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_off_browser() {
    let store = BrowserTokenStore;
    store.set_token("ignored");
    assert!(store.token().is_none());
    assert!(load_json::<Vec<String>>("anything").is_none());
}
