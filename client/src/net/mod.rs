//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the auth calls, `transport` abstracts the HTTP exchange so
//! the browser (`gloo-net`) and tests can share the same client, and `types`
//! defines the request/response schema.

pub mod api;
pub mod transport;
pub mod types;
