//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod drink_repo;
pub mod question_repo;

pub use category_repo::CategoryRepo;
pub use drink_repo::DrinkRepo;
pub use question_repo::QuestionRepo;
