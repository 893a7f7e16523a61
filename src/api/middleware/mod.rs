//! HTTP middleware for the request pipeline.
//!
//! Ordering is significant: `auth` must run before `require_admin`, which
//! reads the identity `auth` placed into request extensions.

pub mod auth;
pub mod require_admin;
pub mod tracing;
