//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Seed from the persisted (or system) preference.
    pub fn from_preference() -> Self {
        Self { dark: dark_mode::read_preference() }
    }

    /// Push the current value onto the document.
    pub fn apply(self) {
        dark_mode::apply(self.dark);
    }

    /// Flip and persist the preference.
    pub fn toggle(&mut self) {
        self.dark = dark_mode::toggle(self.dark);
    }
}
