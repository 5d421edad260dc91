//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `rooms`, `guests`, etc.) so individual
//! pages can depend on small focused models. `stores` bundles them into the
//! single context value the app provides.

pub mod auth;
pub mod guests;
pub mod modal;
pub mod reservations;
pub mod room_reservation;
pub mod rooms;
pub mod stores;
pub mod theme;
pub mod toast;
