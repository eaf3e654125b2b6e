//! Domain logic shared by the trivia and coffee shop services.
//!
//! Nothing in this crate touches the network or the database; the `db` crate
//! persists these types and the `api` crate exposes them over HTTP.

pub mod error;
pub mod pagination;
pub mod permissions;
pub mod quiz;
pub mod recipe;
pub mod types;
