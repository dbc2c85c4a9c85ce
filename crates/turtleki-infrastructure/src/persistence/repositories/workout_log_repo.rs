use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

use turtleki_domain::ledger::{WorkoutEntry, WorkoutLogRepository, WorkoutMode};
use turtleki_domain::shared::DomainError;

use super::stored_u32;
use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
pub(crate) struct WorkoutRow {
    id: i64,
    date: NaiveDate,
    template_id: String,
    completed_at: DateTime<Utc>,
    duration_sec: Option<i64>,
    mode: String,
}

impl WorkoutRow {
    pub(crate) fn into_entry(self) -> Result<WorkoutEntry, DomainError> {
        let mode = WorkoutMode::parse(&self.mode).ok_or_else(|| {
            DomainError::DataIntegrity(format!("Unknown stored workout mode: {}", self.mode))
        })?;

        let duration_sec = self
            .duration_sec
            .map(|d| stored_u32(d, "duration_sec"))
            .transpose()?;

        Ok(WorkoutEntry {
            id: Some(self.id),
            date: self.date,
            template_id: self.template_id,
            completed_at: self.completed_at,
            duration_sec,
            mode,
        })
    }
}

pub struct SqliteWorkoutLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteWorkoutLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

const SELECT_COLUMNS: &str = "id, date, template_id, completed_at, duration_sec, mode";

#[async_trait]
impl WorkoutLogRepository for SqliteWorkoutLogRepository {
    async fn append(&self, entry: &WorkoutEntry) -> Result<(), DomainError> {
        let query =
            "INSERT INTO workouts (date, template_id, completed_at, duration_sec, mode) VALUES (?1, ?2, ?3, ?4, ?5)";

        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.date)
                    .bind(&entry.template_id)
                    .bind(entry.completed_at)
                    .bind(entry.duration_sec.map(i64::from))
                    .bind(entry.mode.as_str()),
                "Append workout entry",
            )
            .await?;

        Ok(())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<WorkoutEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM workouts WHERE date = ?1 ORDER BY completed_at ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<WorkoutRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(date), "Find workouts by date")
            .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn find_all(&self) -> Result<Vec<WorkoutEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM workouts ORDER BY date ASC, completed_at ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<WorkoutRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "Find all workouts")
            .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn find_recent(&self, limit: u32) -> Result<Vec<WorkoutEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM workouts ORDER BY completed_at DESC LIMIT ?1",
            SELECT_COLUMNS
        );

        let rows: Vec<WorkoutRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(i64::from(limit)),
                "Find recent workouts",
            )
            .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }
}
