use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

use turtleki_domain::ledger::{ActionType, QuestCompletion, QuestLogRepository};
use turtleki_domain::shared::DomainError;

use crate::persistence::{ResultExt, SqliteRepositoryBase};

#[derive(FromRow)]
pub(crate) struct QuestRow {
    id: i64,
    date: NaiveDate,
    quest_id: String,
    completed_at: DateTime<Utc>,
    chosen_action: Option<String>,
}

impl QuestRow {
    pub(crate) fn into_completion(self) -> Result<QuestCompletion, DomainError> {
        let chosen_action = self
            .chosen_action
            .map(|s| {
                ActionType::parse(&s).ok_or_else(|| {
                    DomainError::DataIntegrity(format!("Unknown stored action type: {}", s))
                })
            })
            .transpose()?;

        Ok(QuestCompletion {
            id: Some(self.id),
            date: self.date,
            quest_id: self.quest_id,
            completed_at: self.completed_at,
            chosen_action,
        })
    }
}

pub struct SqliteQuestLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteQuestLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

const SELECT_COLUMNS: &str = "id, date, quest_id, completed_at, chosen_action";

#[async_trait]
impl QuestLogRepository for SqliteQuestLogRepository {
    async fn append(&self, completion: &QuestCompletion) -> Result<(), DomainError> {
        let query =
            "INSERT INTO quests (date, quest_id, completed_at, chosen_action) VALUES (?1, ?2, ?3, ?4)";

        self.base
            .execute(
                sqlx::query(query)
                    .bind(completion.date)
                    .bind(&completion.quest_id)
                    .bind(completion.completed_at)
                    .bind(completion.chosen_action.map(|a| a.as_str())),
                "Append quest completion",
            )
            .await?;

        Ok(())
    }

    async fn count_for_day(&self, date: NaiveDate, quest_id: &str) -> Result<u64, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM quests WHERE date = ?1 AND quest_id = ?2")
                .bind(date)
                .bind(quest_id)
                .fetch_one(self.base.pool())
                .await
                .map_repo_error("Count quest completions for day")?;

        Ok(count as u64)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<QuestCompletion>, DomainError> {
        let query = format!(
            "SELECT {} FROM quests WHERE date = ?1 ORDER BY completed_at ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<QuestRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(date), "Find quests by date")
            .await?;

        rows.into_iter().map(|r| r.into_completion()).collect()
    }

    async fn find_all(&self) -> Result<Vec<QuestCompletion>, DomainError> {
        let query = format!(
            "SELECT {} FROM quests ORDER BY date ASC, completed_at ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<QuestRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "Find all quests")
            .await?;

        rows.into_iter().map(|r| r.into_completion()).collect()
    }
}
