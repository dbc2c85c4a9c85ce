use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use turtleki_domain::ledger::{SnapshotRepository, StateSnapshot};
use turtleki_domain::shared::DomainError;

use super::action_log_repo::ActionRow;
use super::player_repo::PlayerRow;
use super::quest_log_repo::QuestRow;
use super::settings_repo::SettingsRow;
use super::workout_log_repo::WorkoutRow;
use crate::persistence::{ResultExt, SqliteRepositoryBase};

/// Whole-store export/replace for the data transfer flows. Replacing
/// clears and repopulates all five tables in one transaction so a
/// failed import leaves the previous state untouched.
pub struct SqliteSnapshotRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSnapshotRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

async fn clear_tables(tx: &mut Transaction<'_, Sqlite>) -> Result<(), DomainError> {
    for table in ["player", "settings", "actions", "quests", "workouts"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut **tx)
            .await
            .map_repo_error("Clear table")?;
    }
    Ok(())
}

#[async_trait]
impl SnapshotRepository for SqliteSnapshotRepository {
    async fn export(&self) -> Result<StateSnapshot, DomainError> {
        let player = sqlx::query_as::<_, PlayerRow>(
            "SELECT ki_total, ki_today, streak, last_daily_reset, last_training, created_at, updated_at FROM player WHERE id = 'player'",
        )
        .fetch_optional(self.base.pool())
        .await
        .map_repo_error("Export player")?
        .map(|r| r.into_player())
        .transpose()?;

        let settings = sqlx::query_as::<_, SettingsRow>(
            "SELECT daily_ki_cap, difficulty, reduce_motion FROM settings WHERE id = 'settings'",
        )
        .fetch_optional(self.base.pool())
        .await
        .map_repo_error("Export settings")?
        .map(|r| r.into_settings())
        .transpose()?;

        let actions = sqlx::query_as::<_, ActionRow>(
            "SELECT id, date, action, ki_delta, created_at, note FROM actions ORDER BY id ASC",
        )
        .fetch_all(self.base.pool())
        .await
        .map_repo_error("Export actions")?
        .into_iter()
        .map(|r| r.into_entry())
        .collect::<Result<Vec<_>, _>>()?;

        let quests = sqlx::query_as::<_, QuestRow>(
            "SELECT id, date, quest_id, completed_at, chosen_action FROM quests ORDER BY id ASC",
        )
        .fetch_all(self.base.pool())
        .await
        .map_repo_error("Export quests")?
        .into_iter()
        .map(|r| r.into_completion())
        .collect::<Result<Vec<_>, _>>()?;

        let workouts = sqlx::query_as::<_, WorkoutRow>(
            "SELECT id, date, template_id, completed_at, duration_sec, mode FROM workouts ORDER BY id ASC",
        )
        .fetch_all(self.base.pool())
        .await
        .map_repo_error("Export workouts")?
        .into_iter()
        .map(|r| r.into_entry())
        .collect::<Result<Vec<_>, _>>()?;

        Ok(StateSnapshot {
            player,
            settings,
            actions,
            quests,
            workouts,
        })
    }

    async fn replace_all(&self, snapshot: StateSnapshot) -> Result<(), DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_repo_error("Replace all: begin transaction")?;

        clear_tables(&mut tx).await?;

        if let Some(player) = &snapshot.player {
            sqlx::query(
                "INSERT INTO player (id, ki_total, ki_today, streak, last_daily_reset, last_training, created_at, updated_at) VALUES ('player', ?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .bind(i64::from(player.ki_total()))
            .bind(i64::from(player.ki_today()))
            .bind(i64::from(player.streak()))
            .bind(player.last_daily_reset())
            .bind(player.last_training())
            .bind(player.created_at())
            .bind(player.updated_at())
            .execute(&mut *tx)
            .await
            .map_repo_error("Replace all: insert player")?;
        }

        if let Some(settings) = &snapshot.settings {
            sqlx::query(
                "INSERT INTO settings (id, daily_ki_cap, difficulty, reduce_motion) VALUES ('settings', ?1, ?2, ?3)",
            )
            .bind(i64::from(settings.daily_ki_cap()))
            .bind(settings.difficulty().as_str())
            .bind(settings.reduce_motion())
            .execute(&mut *tx)
            .await
            .map_repo_error("Replace all: insert settings")?;
        }

        for entry in &snapshot.actions {
            sqlx::query(
                "INSERT INTO actions (date, action, ki_delta, created_at, note) VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(entry.date)
            .bind(entry.action.as_str())
            .bind(i64::from(entry.ki_delta))
            .bind(entry.created_at)
            .bind(entry.note.as_deref())
            .execute(&mut *tx)
            .await
            .map_repo_error("Replace all: insert action entry")?;
        }

        for completion in &snapshot.quests {
            sqlx::query(
                "INSERT INTO quests (date, quest_id, completed_at, chosen_action) VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(completion.date)
            .bind(&completion.quest_id)
            .bind(completion.completed_at)
            .bind(completion.chosen_action.map(|a| a.as_str()))
            .execute(&mut *tx)
            .await
            .map_repo_error("Replace all: insert quest completion")?;
        }

        for entry in &snapshot.workouts {
            sqlx::query(
                "INSERT INTO workouts (date, template_id, completed_at, duration_sec, mode) VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(entry.date)
            .bind(&entry.template_id)
            .bind(entry.completed_at)
            .bind(entry.duration_sec.map(i64::from))
            .bind(entry.mode.as_str())
            .execute(&mut *tx)
            .await
            .map_repo_error("Replace all: insert workout entry")?;
        }

        tx.commit()
            .await
            .map_repo_error("Replace all: commit transaction")?;

        Ok(())
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_repo_error("Clear all: begin transaction")?;

        clear_tables(&mut tx).await?;

        tx.commit()
            .await
            .map_repo_error("Clear all: commit transaction")?;

        Ok(())
    }
}
