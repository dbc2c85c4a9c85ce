mod domain_service;
mod entries;
mod repository;
mod value_objects;

#[cfg(test)]
mod domain_service_test;

pub use domain_service::{CappedCredit, RewardDomainService};
pub use entries::{KiActionEntry, QuestCompletion, WorkoutEntry};
pub use repository::{
    ActionLogRepository, LedgerMutation, LedgerUnitOfWork, QuestLogRepository, SnapshotRepository,
    StateSnapshot, WorkoutLogRepository,
};
pub use value_objects::{ActionType, WorkoutMode};
