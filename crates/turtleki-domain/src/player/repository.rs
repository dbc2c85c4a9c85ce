use async_trait::async_trait;

use crate::shared::DomainError;

use super::aggregate::PlayerState;

/// Persistence for the single player record.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert or overwrite the player record.
    async fn save(&self, player: &PlayerState) -> Result<(), DomainError>;

    /// The player record, or `None` before first-launch seeding.
    async fn find(&self) -> Result<Option<PlayerState>, DomainError>;
}
