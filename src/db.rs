use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        // writers queue on the lock for this long before giving up
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// In-memory database with the schema applied. A single connection keeps
/// every query on the same database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    init_db("sqlite::memory:", 1)
        .await
        .expect("in-memory database")
}

/// Fresh database file under the temp dir, shared by several connections.
#[cfg(test)]
pub async fn file_pool(name: &str) -> SqlitePool {
    let path = std::env::temp_dir().join(format!("hrms-lite-{}-{name}.db", std::process::id()));
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }

    init_db(&format!("sqlite://{}", path.display()), 8)
        .await
        .expect("file database")
}
