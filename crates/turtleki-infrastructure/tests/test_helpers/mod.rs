use sqlx::SqlitePool;
use turtleki_infrastructure::persistence::Database;

/// Fresh in-memory database with the full schema applied.
pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::in_memory().await.expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");
    db.pool().clone()
}
