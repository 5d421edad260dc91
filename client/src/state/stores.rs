//! Composition root for the application stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AppStores`] and provides it as context. Components take
//! the whole bundle with [`use_stores`] and touch only the slice they need,
//! always through that slice's methods. Slices are independent of each other;
//! the gate depends only on `auth`.

#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use leptos::prelude::*;

use super::auth::AuthState;
use super::guests::{Guest, GuestState};
use super::modal::ModalState;
use super::reservations::{Reservation, ReservationState};
use super::room_reservation::RoomReservationState;
use super::rooms::{Room, RoomState};
use super::theme::ThemeState;
use super::toast::ToastState;
use crate::util::storage::{load_json, save_json};

pub const ROOMS_KEY: &str = "innkeeper_rooms";
pub const GUESTS_KEY: &str = "innkeeper_guests";
pub const RESERVATIONS_KEY: &str = "innkeeper_reservations";

/// Every client store, as copyable signal handles.
#[derive(Clone, Copy, Debug)]
pub struct AppStores {
    pub theme: RwSignal<ThemeState>,
    pub auth: RwSignal<AuthState>,
    pub room_reservation: RwSignal<RoomReservationState>,
    pub rooms: RwSignal<RoomState>,
    pub reservations: RwSignal<ReservationState>,
    pub modal: RwSignal<ModalState>,
    pub guests: RwSignal<GuestState>,
    pub toasts: RwSignal<ToastState>,
}

impl AppStores {
    /// Create all stores with their initial values.
    ///
    /// Browser-persisted values (theme, session) start at their defaults so
    /// server and client render the same markup; `App` seeds them after mount.
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(ThemeState::default()),
            auth: RwSignal::new(AuthState::default()),
            room_reservation: RwSignal::new(RoomReservationState::default()),
            rooms: RwSignal::new(RoomState::default()),
            reservations: RwSignal::new(ReservationState::default()),
            modal: RwSignal::new(ModalState::default()),
            guests: RwSignal::new(GuestState::default()),
            toasts: RwSignal::new(ToastState::default()),
        }
    }

    /// Install the stores as context for the current owner and its children.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Reload rooms, guests and reservations saved by [`Self::persist_records`].
    pub fn restore_records(self) {
        if let Some(rooms) = load_json::<Vec<Room>>(ROOMS_KEY) {
            self.rooms.update(|r| r.replace_all(rooms));
        }
        if let Some(guests) = load_json::<Vec<Guest>>(GUESTS_KEY) {
            self.guests.update(|g| g.replace_all(guests));
        }
        if let Some(reservations) = load_json::<Vec<Reservation>>(RESERVATIONS_KEY) {
            self.reservations.update(|r| r.replace_all(reservations));
        }
    }

    /// Save rooms, guests and reservations to browser storage on every change.
    ///
    /// The first run of each effect only subscribes, so the empty initial
    /// stores never overwrite saved records.
    pub fn persist_records(self) {
        Effect::new(move |prev: Option<()>| {
            self.rooms.with(|r| {
                if prev.is_some() {
                    save_json(ROOMS_KEY, &r.rooms);
                }
            });
        });
        Effect::new(move |prev: Option<()>| {
            self.guests.with(|g| {
                if prev.is_some() {
                    save_json(GUESTS_KEY, &g.guests);
                }
            });
        });
        Effect::new(move |prev: Option<()>| {
            self.reservations.with(|r| {
                if prev.is_some() {
                    save_json(RESERVATIONS_KEY, &r.reservations);
                }
            });
        });
    }

    pub fn notify_success(self, message: impl Into<String>) {
        let message = message.into();
        self.toasts.update(|t| {
            t.success(message);
        });
    }

    pub fn notify_error(self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.toasts.update(|t| {
            t.error(message);
        });
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the stores installed by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_stores() -> AppStores {
    expect_context::<AppStores>()
}
