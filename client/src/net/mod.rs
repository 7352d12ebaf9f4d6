//! Networking modules for the rental backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the bearer-authenticated requests, `types` defines the wire
//! schema, and `error` the failure taxonomy callers branch on.

pub mod api;
pub mod error;
pub mod types;
