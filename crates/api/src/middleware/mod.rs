//! Request middleware.
//!
//! - [`auth::require_identity`] -- verifies the bearer token and attaches a
//!   [`auth::RequestIdentity`] to the request.

pub mod auth;
