use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use turtleki_domain::ledger::{KiActionEntry, LedgerMutation, LedgerUnitOfWork, WorkoutEntry};
use turtleki_domain::player::PlayerState;
use turtleki_domain::shared::DomainError;

use super::result_ext::ResultExt;

/// Applies one reward transaction as a single sqlite transaction:
/// player upsert, action log appends, and the optional workout row
/// commit together or not at all.
pub struct SqliteLedgerUnitOfWork {
    pool: Arc<SqlitePool>,
}

impl SqliteLedgerUnitOfWork {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

async fn save_player(
    tx: &mut Transaction<'_, Sqlite>,
    player: &PlayerState,
) -> Result<(), DomainError> {
    let query = r#"
        INSERT INTO player (id, ki_total, ki_today, streak, last_daily_reset, last_training, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        ON CONFLICT(id) DO UPDATE SET
            ki_total = ?2,
            ki_today = ?3,
            streak = ?4,
            last_daily_reset = ?5,
            last_training = ?6,
            created_at = ?7,
            updated_at = ?8
    "#;

    sqlx::query(query)
        .bind("player")
        .bind(i64::from(player.ki_total()))
        .bind(i64::from(player.ki_today()))
        .bind(i64::from(player.streak()))
        .bind(player.last_daily_reset())
        .bind(player.last_training())
        .bind(player.created_at())
        .bind(player.updated_at())
        .execute(&mut **tx)
        .await
        .map_repo_error("Ledger apply: save player")?;

    Ok(())
}

async fn append_action(
    tx: &mut Transaction<'_, Sqlite>,
    entry: &KiActionEntry,
) -> Result<(), DomainError> {
    sqlx::query(
        "INSERT INTO actions (date, action, ki_delta, created_at, note) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(entry.date)
    .bind(entry.action.as_str())
    .bind(i64::from(entry.ki_delta))
    .bind(entry.created_at)
    .bind(entry.note.as_deref())
    .execute(&mut **tx)
    .await
    .map_repo_error("Ledger apply: append action entry")?;

    Ok(())
}

async fn append_workout(
    tx: &mut Transaction<'_, Sqlite>,
    entry: &WorkoutEntry,
) -> Result<(), DomainError> {
    sqlx::query(
        "INSERT INTO workouts (date, template_id, completed_at, duration_sec, mode) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(entry.date)
    .bind(&entry.template_id)
    .bind(entry.completed_at)
    .bind(entry.duration_sec.map(i64::from))
    .bind(entry.mode.as_str())
    .execute(&mut **tx)
    .await
    .map_repo_error("Ledger apply: append workout entry")?;

    Ok(())
}

#[async_trait]
impl LedgerUnitOfWork for SqliteLedgerUnitOfWork {
    async fn apply(&self, mutation: LedgerMutation) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_repo_error("Ledger apply: begin transaction")?;

        save_player(&mut tx, &mutation.player).await?;

        for entry in &mutation.actions {
            append_action(&mut tx, entry).await?;
        }

        if let Some(workout) = &mutation.workout {
            append_workout(&mut tx, workout).await?;
        }

        tx.commit()
            .await
            .map_repo_error("Ledger apply: commit transaction")?;

        Ok(())
    }
}
