#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn from_preference_is_light_off_browser() {
    assert!(!ThemeState::from_preference().dark);
}

#[test]
fn toggle_flips_dark_flag() {
    let mut theme = ThemeState::default();
    theme.toggle();
    assert!(theme.dark);
    theme.toggle();
    assert!(!theme.dark);
    theme.apply();
}
