use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use turtleki_domain::ledger::{SnapshotRepository, StateSnapshot};
use turtleki_domain::shared::DomainError;

use crate::application::dtos::ExportPayload;
use crate::application::seeder::Seeder;

/// Export, import and full reset of the persisted state. Import
/// validates the payload before anything is cleared, so a malformed
/// file never leaves the store half-written.
pub struct DataTransferService {
    snapshot_repo: Arc<dyn SnapshotRepository>,
    seeder: Arc<Seeder>,
}

impl DataTransferService {
    pub fn new(snapshot_repo: Arc<dyn SnapshotRepository>, seeder: Arc<Seeder>) -> Self {
        Self {
            snapshot_repo,
            seeder,
        }
    }

    pub async fn export_json(&self) -> Result<serde_json::Value, DomainError> {
        let snapshot = self.snapshot_repo.export().await?;

        let payload = ExportPayload {
            exported_at: Some(Utc::now()),
            player: snapshot.player,
            settings: snapshot.settings,
            actions: snapshot.actions,
            quests: snapshot.quests,
            workouts: snapshot.workouts,
        };

        serde_json::to_value(&payload).map_err(|e| DomainError::Serialization(e.to_string()))
    }

    pub async fn import_json(&self, payload: serde_json::Value) -> Result<(), DomainError> {
        if !payload.is_object() {
            return Err(DomainError::InvalidInput(
                "Import payload must be a JSON object".to_string(),
            ));
        }

        let payload: ExportPayload = serde_json::from_value(payload)
            .map_err(|e| DomainError::InvalidInput(format!("Malformed import payload: {}", e)))?;

        let imported_actions = payload.actions.len();
        let imported_quests = payload.quests.len();
        let imported_workouts = payload.workouts.len();

        self.snapshot_repo
            .replace_all(StateSnapshot {
                player: payload.player,
                settings: payload.settings,
                actions: payload.actions,
                quests: payload.quests,
                workouts: payload.workouts,
            })
            .await?;

        // the payload may omit the singletons; restore the defaults
        self.seeder.seed_if_needed().await?;

        info!(
            actions = imported_actions,
            quests = imported_quests,
            workouts = imported_workouts,
            "import applied"
        );

        Ok(())
    }

    pub async fn hard_reset(&self) -> Result<(), DomainError> {
        self.snapshot_repo.clear_all().await?;
        self.seeder.seed_if_needed().await?;
        info!("all data cleared and reseeded");
        Ok(())
    }
}
