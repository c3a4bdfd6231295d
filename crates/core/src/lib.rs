//! Domain building blocks shared by the database and API crates.
//!
//! - [`types`] -- id and timestamp aliases.
//! - [`error`] -- the [`error::CoreError`] taxonomy.
//! - [`ownership`] -- resource ownership checks against the request identity.
//! - [`validation`] -- input checks for registration and workout payloads.

pub mod error;
pub mod ownership;
pub mod types;
pub mod validation;
