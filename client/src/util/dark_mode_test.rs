#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_light_off_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_returns_the_flipped_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn toggle_does_not_persist_off_browser() {
    toggle(false);
    assert!(!read_preference());
}
