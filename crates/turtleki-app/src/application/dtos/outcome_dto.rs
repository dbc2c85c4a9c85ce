use serde::{Deserialize, Serialize};

/// Result of a once-per-day action claim. Cap and duplicate conditions
/// are normal outcomes here, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub ki_added: u32,
    pub capped: bool,
    pub message: String,
}

/// Result of finalizing a workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutOutcome {
    pub ki_added: u32,
    pub streak: u32,
    pub bonus_ki: u32,
    pub message: String,
}

/// Result of completing a daily quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestOutcome {
    pub ki_added: u32,
    pub message: String,
}
