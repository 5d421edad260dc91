//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navigation, toasts, dialogs, fallbacks) and
//! the route wrappers, reading/writing shared state through `AppStores`.

pub mod guest_form;
pub mod lazy_page;
pub mod loading;
pub mod modal_host;
pub mod nav;
pub mod not_found;
pub mod protected_route;
pub mod room_form;
pub mod toaster;
