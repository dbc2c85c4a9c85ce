use async_trait::async_trait;
use chrono::NaiveDate;

use crate::player::PlayerState;
use crate::settings::SettingsState;
use crate::shared::DomainError;

use super::entries::{KiActionEntry, QuestCompletion, WorkoutEntry};
use super::value_objects::ActionType;

/// Append-only KI action log.
#[async_trait]
pub trait ActionLogRepository: Send + Sync {
    /// Append an entry outside any surrounding transaction.
    async fn append(&self, entry: &KiActionEntry) -> Result<(), DomainError>;

    /// Number of entries for (date, action). Row existence is the sole
    /// source of truth for "already claimed today".
    async fn count_for_day(&self, date: NaiveDate, action: ActionType)
        -> Result<u64, DomainError>;

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<KiActionEntry>, DomainError>;

    /// All entries ordered by date ascending, for per-day aggregation.
    async fn find_all(&self) -> Result<Vec<KiActionEntry>, DomainError>;

    /// Most recent entries first.
    async fn find_recent(&self, limit: u32) -> Result<Vec<KiActionEntry>, DomainError>;
}

/// Append-only quest completion log.
#[async_trait]
pub trait QuestLogRepository: Send + Sync {
    async fn append(&self, completion: &QuestCompletion) -> Result<(), DomainError>;

    async fn count_for_day(&self, date: NaiveDate, quest_id: &str) -> Result<u64, DomainError>;

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<QuestCompletion>, DomainError>;

    async fn find_all(&self) -> Result<Vec<QuestCompletion>, DomainError>;
}

/// Append-only workout session log.
#[async_trait]
pub trait WorkoutLogRepository: Send + Sync {
    async fn append(&self, entry: &WorkoutEntry) -> Result<(), DomainError>;

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<WorkoutEntry>, DomainError>;

    async fn find_all(&self) -> Result<Vec<WorkoutEntry>, DomainError>;

    /// Most recent sessions first.
    async fn find_recent(&self, limit: u32) -> Result<Vec<WorkoutEntry>, DomainError>;
}

/// Everything one reward transaction touches: the updated player row and
/// the log rows that justify it.
#[derive(Debug, Clone)]
pub struct LedgerMutation {
    pub player: PlayerState,
    pub actions: Vec<KiActionEntry>,
    pub workout: Option<WorkoutEntry>,
}

/// Atomic application of a reward transaction. Implementations must
/// apply the whole mutation or none of it; a credited player without its
/// log entry (or vice versa) must never be observable.
///
/// The already-claimed check runs as a plain read before `apply` is
/// called. That read-then-decide split is safe under this crate's
/// single-writer assumption (one device, one process); a multi-writer
/// port would have to move the uniqueness check inside the transaction.
#[async_trait]
pub trait LedgerUnitOfWork: Send + Sync {
    async fn apply(&self, mutation: LedgerMutation) -> Result<(), DomainError>;
}

/// Full persisted state, as one value: the two singletons plus the
/// three append-only logs.
#[derive(Debug, Clone, Default)]
pub struct StateSnapshot {
    pub player: Option<PlayerState>,
    pub settings: Option<SettingsState>,
    pub actions: Vec<KiActionEntry>,
    pub quests: Vec<QuestCompletion>,
    pub workouts: Vec<WorkoutEntry>,
}

/// Whole-store snapshot operations backing export/import/reset.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn export(&self) -> Result<StateSnapshot, DomainError>;

    /// Atomically clear all five tables and repopulate from the
    /// snapshot. Absent singletons and empty logs simply leave their
    /// tables empty.
    async fn replace_all(&self, snapshot: StateSnapshot) -> Result<(), DomainError>;

    /// Atomically clear all five tables.
    async fn clear_all(&self) -> Result<(), DomainError>;
}
