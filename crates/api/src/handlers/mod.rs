pub mod auth;
pub mod recommendation;
pub mod workout;
