use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use turtleki_domain::ledger::{KiActionEntry, QuestCompletion, WorkoutEntry};
use turtleki_domain::player::PlayerState;
use turtleki_domain::settings::SettingsState;

/// The on-disk export shape. Every collection is optional on the way
/// in: a payload missing a table simply leaves that table empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPayload {
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub player: Option<PlayerState>,
    #[serde(default)]
    pub settings: Option<SettingsState>,
    #[serde(default)]
    pub actions: Vec<KiActionEntry>,
    #[serde(default)]
    pub quests: Vec<QuestCompletion>,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
}
