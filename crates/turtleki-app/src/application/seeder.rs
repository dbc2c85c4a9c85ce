use std::sync::Arc;

use tracing::info;

use turtleki_domain::player::{PlayerRepository, PlayerState};
use turtleki_domain::settings::{SettingsRepository, SettingsState};
use turtleki_domain::shared::{date, DomainError};

/// First-launch seeding: create the player and settings singletons with
/// their defaults if they are missing. Runs on every start and after
/// import/reset; existing records are left untouched.
pub struct Seeder {
    player_repo: Arc<dyn PlayerRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
}

impl Seeder {
    pub fn new(
        player_repo: Arc<dyn PlayerRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            player_repo,
            settings_repo,
        }
    }

    pub async fn seed_if_needed(&self) -> Result<(), DomainError> {
        if self.player_repo.find().await?.is_none() {
            let player = PlayerState::new(date::today());
            self.player_repo.save(&player).await?;
            info!("seeded player state with zero defaults");
        }

        if self.settings_repo.find().await?.is_none() {
            let settings = SettingsState::new();
            self.settings_repo.save(&settings).await?;
            info!("seeded default settings");
        }

        Ok(())
    }
}
