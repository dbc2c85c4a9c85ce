// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod catalog;
pub mod ledger;
pub mod plan;
pub mod player;
pub mod progression;
pub mod rules;
pub mod settings;
pub mod shared;

// Re-exports for convenience
pub use ledger::{ActionType, WorkoutMode};
pub use shared::DomainError;
