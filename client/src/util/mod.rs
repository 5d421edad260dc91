//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage, the theme preference and the route gate live here, apart
//! from page and component code.

pub mod auth;
pub mod dark_mode;
pub mod storage;
