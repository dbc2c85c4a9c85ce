use async_trait::async_trait;

use crate::shared::DomainError;

use super::aggregate::SettingsState;

/// Persistence for the single settings record.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Insert or overwrite the settings record.
    async fn save(&self, settings: &SettingsState) -> Result<(), DomainError>;

    /// The settings record, or `None` before first-launch seeding.
    async fn find(&self) -> Result<Option<SettingsState>, DomainError>;
}
