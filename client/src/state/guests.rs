//! Guest directory state.

#[cfg(test)]
#[path = "guests_test.rs"]
mod guests_test;

use serde::{Deserialize, Serialize};

/// A hotel guest record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub vip: bool,
}

/// Guest list with the current selection and search filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuestState {
    pub guests: Vec<Guest>,
    pub selected: Option<String>,
    pub filter: String,
}

impl GuestState {
    /// Replace the whole list (e.g. after a fetch). Drops a stale selection.
    pub fn replace_all(&mut self, guests: Vec<Guest>) {
        self.guests = guests;
        if let Some(id) = &self.selected {
            if !self.guests.iter().any(|g| &g.id == id) {
                self.selected = None;
            }
        }
    }

    /// Insert a guest or overwrite the one with the same id.
    pub fn upsert(&mut self, guest: Guest) {
        match self.guests.iter_mut().find(|g| g.id == guest.id) {
            Some(existing) => *existing = guest,
            None => self.guests.push(guest),
        }
    }

    /// Remove a guest by id. Returns the removed record.
    pub fn remove(&mut self, id: &str) -> Option<Guest> {
        let idx = self.guests.iter().position(|g| g.id == id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.guests.remove(idx))
    }

    /// Select a guest; unknown ids clear the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.filter(|id| self.get(id).is_some()).map(str::to_owned);
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_owned();
    }

    pub fn get(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    pub fn selected_guest(&self) -> Option<&Guest> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Guests whose name or email contains the filter, case-insensitively.
    pub fn filtered(&self) -> Vec<&Guest> {
        let needle = self.filter.trim().to_lowercase();
        self.guests
            .iter()
            .filter(|g| {
                needle.is_empty()
                    || g.name.to_lowercase().contains(&needle)
                    || g.email.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
