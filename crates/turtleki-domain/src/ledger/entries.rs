use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{ActionType, WorkoutMode};

/// One claimed KI action. Append-only: entries are never updated or
/// deleted except by a full reset/import. `ki_delta` records the amount
/// actually credited after cap clamping, not the nominal reward, so the
/// log is the ground truth of what was paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KiActionEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub action: ActionType,
    pub ki_delta: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

impl KiActionEntry {
    pub fn new(date: NaiveDate, action: ActionType, ki_delta: u32, note: Option<String>) -> Self {
        Self {
            id: None,
            date,
            action,
            ki_delta,
            created_at: Utc::now(),
            note,
        }
    }
}

/// One completed daily quest. Existence of a row for (date, quest_id) is
/// the sole source of truth for completion; there is no separate flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCompletion {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub quest_id: String,
    pub completed_at: DateTime<Utc>,
    /// For the multi-option quest: the action the user chose.
    #[serde(default)]
    pub chosen_action: Option<ActionType>,
}

impl QuestCompletion {
    pub fn new(date: NaiveDate, quest_id: &str, chosen_action: Option<ActionType>) -> Self {
        Self {
            id: None,
            date,
            quest_id: quest_id.to_string(),
            completed_at: Utc::now(),
            chosen_action,
        }
    }
}

/// One finalized workout session. Written even when the session earned
/// no KI, so history is independent of reward eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub template_id: String,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub duration_sec: Option<u32>,
    pub mode: WorkoutMode,
}

impl WorkoutEntry {
    pub fn new(
        date: NaiveDate,
        template_id: &str,
        duration_sec: Option<u32>,
        mode: WorkoutMode,
    ) -> Self {
        Self {
            id: None,
            date,
            template_id: template_id.to_string(),
            completed_at: Utc::now(),
            duration_sec,
            mode,
        }
    }
}
