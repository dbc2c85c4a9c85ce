mod action_log_repo;
mod player_repo;
mod quest_log_repo;
mod settings_repo;
mod snapshot_repo;
mod workout_log_repo;

pub use action_log_repo::SqliteActionLogRepository;
pub use player_repo::SqlitePlayerRepository;
pub use quest_log_repo::SqliteQuestLogRepository;
pub use settings_repo::SqliteSettingsRepository;
pub use snapshot_repo::SqliteSnapshotRepository;
pub use workout_log_repo::SqliteWorkoutLogRepository;

use turtleki_domain::shared::DomainError;

/// Stored counters are non-negative by construction; anything else in
/// the file is corruption, not a recoverable condition.
pub(crate) fn stored_u32(value: i64, field: &str) -> Result<u32, DomainError> {
    u32::try_from(value)
        .map_err(|_| DomainError::DataIntegrity(format!("Stored {} out of range: {}", field, value)))
}
