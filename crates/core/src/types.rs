/// Person primary keys are PostgreSQL SERIAL (32-bit).
pub type DbId = i32;
