//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that write it

pub mod category;
pub mod drink;
pub mod lenient;
pub mod question;
