use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

use turtleki_domain::player::{PlayerRepository, PlayerState};
use turtleki_domain::shared::DomainError;

use super::stored_u32;
use crate::persistence::SqliteRepositoryBase;

const PLAYER_KEY: &str = "player";

#[derive(FromRow)]
pub(crate) struct PlayerRow {
    ki_total: i64,
    ki_today: i64,
    streak: i64,
    last_daily_reset: NaiveDate,
    last_training: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerRow {
    pub(crate) fn into_player(self) -> Result<PlayerState, DomainError> {
        Ok(PlayerState::restore(
            stored_u32(self.ki_total, "ki_total")?,
            stored_u32(self.ki_today, "ki_today")?,
            stored_u32(self.streak, "streak")?,
            self.last_daily_reset,
            self.last_training,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqlitePlayerRepository {
    base: SqliteRepositoryBase,
}

impl SqlitePlayerRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn save(&self, player: &PlayerState) -> Result<(), DomainError> {
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

        self.base
            .execute(
                sqlx::query(query)
                    .bind(PLAYER_KEY)
                    .bind(i64::from(player.ki_total()))
                    .bind(i64::from(player.ki_today()))
                    .bind(i64::from(player.streak()))
                    .bind(player.last_daily_reset())
                    .bind(player.last_training())
                    .bind(player.created_at())
                    .bind(player.updated_at()),
                "Save player",
            )
            .await?;

        Ok(())
    }

    async fn find(&self) -> Result<Option<PlayerState>, DomainError> {
        let query = "SELECT ki_total, ki_today, streak, last_daily_reset, last_training, created_at, updated_at FROM player WHERE id = ?1";

        let row: Option<PlayerRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(PLAYER_KEY), "Find player")
            .await?;

        row.map(|r| r.into_player()).transpose()
    }
}
