use turtleki_infrastructure::persistence::Database;

#[tokio::test]
async fn opens_and_migrates_a_file_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("nested").join("turtleki.db");
    let db_path = db_path.to_str().expect("utf-8 path");

    let db = Database::new(db_path).await.expect("open database");
    db.run_migrations().await.expect("run migrations");

    // migrations are idempotent
    db.run_migrations().await.expect("re-run migrations");

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(db.pool())
    .await
    .expect("list tables");

    for expected in ["player", "settings", "actions", "quests", "workouts"] {
        assert!(
            tables.iter().any(|t| t == expected),
            "missing table {}",
            expected
        );
    }
}
