//! HTTP handlers for the users API.

pub mod user;
pub use user::*;
