use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

use turtleki_domain::ledger::{ActionLogRepository, ActionType, KiActionEntry};
use turtleki_domain::shared::DomainError;

use super::stored_u32;
use crate::persistence::{ResultExt, SqliteRepositoryBase};

#[derive(FromRow)]
pub(crate) struct ActionRow {
    id: i64,
    date: NaiveDate,
    action: String,
    ki_delta: i64,
    created_at: DateTime<Utc>,
    note: Option<String>,
}

impl ActionRow {
    pub(crate) fn into_entry(self) -> Result<KiActionEntry, DomainError> {
        let action = ActionType::parse(&self.action).ok_or_else(|| {
            DomainError::DataIntegrity(format!("Unknown stored action type: {}", self.action))
        })?;

        Ok(KiActionEntry {
            id: Some(self.id),
            date: self.date,
            action,
            ki_delta: stored_u32(self.ki_delta, "ki_delta")?,
            created_at: self.created_at,
            note: self.note,
        })
    }
}

pub struct SqliteActionLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteActionLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

const SELECT_COLUMNS: &str = "id, date, action, ki_delta, created_at, note";

#[async_trait]
impl ActionLogRepository for SqliteActionLogRepository {
    async fn append(&self, entry: &KiActionEntry) -> Result<(), DomainError> {
        let query =
            "INSERT INTO actions (date, action, ki_delta, created_at, note) VALUES (?1, ?2, ?3, ?4, ?5)";

        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.date)
                    .bind(entry.action.as_str())
                    .bind(i64::from(entry.ki_delta))
                    .bind(entry.created_at)
                    .bind(entry.note.as_deref()),
                "Append action entry",
            )
            .await?;

        Ok(())
    }

    async fn count_for_day(
        &self,
        date: NaiveDate,
        action: ActionType,
    ) -> Result<u64, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM actions WHERE date = ?1 AND action = ?2")
                .bind(date)
                .bind(action.as_str())
                .fetch_one(self.base.pool())
                .await
                .map_repo_error("Count actions for day")?;

        Ok(count as u64)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<KiActionEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM actions WHERE date = ?1 ORDER BY created_at ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<ActionRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(date), "Find actions by date")
            .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn find_all(&self) -> Result<Vec<KiActionEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM actions ORDER BY date ASC, created_at ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<ActionRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "Find all actions")
            .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn find_recent(&self, limit: u32) -> Result<Vec<KiActionEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM actions ORDER BY created_at DESC LIMIT ?1",
            SELECT_COLUMNS
        );

        let rows: Vec<ActionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(i64::from(limit)),
                "Find recent actions",
            )
            .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }
}
