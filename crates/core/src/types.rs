/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Quiz category id meaning "every category".
pub const ALL_CATEGORIES: DbId = 0;
