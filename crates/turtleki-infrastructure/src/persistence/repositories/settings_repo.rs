use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use turtleki_domain::settings::{Difficulty, SettingsRepository, SettingsState};
use turtleki_domain::shared::DomainError;

use super::stored_u32;
use crate::persistence::SqliteRepositoryBase;

const SETTINGS_KEY: &str = "settings";

#[derive(FromRow)]
pub(crate) struct SettingsRow {
    daily_ki_cap: i64,
    difficulty: String,
    reduce_motion: bool,
}

impl SettingsRow {
    pub(crate) fn into_settings(self) -> Result<SettingsState, DomainError> {
        let difficulty = Difficulty::parse(&self.difficulty).ok_or_else(|| {
            DomainError::DataIntegrity(format!("Unknown stored difficulty: {}", self.difficulty))
        })?;

        Ok(SettingsState::restore(
            stored_u32(self.daily_ki_cap, "daily_ki_cap")?,
            difficulty,
            self.reduce_motion,
        ))
    }
}

pub struct SqliteSettingsRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSettingsRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn save(&self, settings: &SettingsState) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO settings (id, daily_ki_cap, difficulty, reduce_motion)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                daily_ki_cap = ?2,
                difficulty = ?3,
                reduce_motion = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(SETTINGS_KEY)
                    .bind(i64::from(settings.daily_ki_cap()))
                    .bind(settings.difficulty().as_str())
                    .bind(settings.reduce_motion()),
                "Save settings",
            )
            .await?;

        Ok(())
    }

    async fn find(&self) -> Result<Option<SettingsState>, DomainError> {
        let query =
            "SELECT daily_ki_cap, difficulty, reduce_motion FROM settings WHERE id = ?1";

        let row: Option<SettingsRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(SETTINGS_KEY), "Find settings")
            .await?;

        row.map(|r| r.into_settings()).transpose()
    }
}
