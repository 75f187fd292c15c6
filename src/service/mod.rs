//! Request-scoped operations. Each one acquires its own connection or
//! transaction from the pool and releases it before returning.

pub mod attendance;
pub mod dashboard;
pub mod employee;

/// Whether `e` is the storage layer refusing a duplicate key.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}
