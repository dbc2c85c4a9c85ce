use serde::{Deserialize, Serialize};

/// A rewardable activity. The set is closed: an unknown action type is a
/// caller/catalog mismatch and cannot be represented, so reward lookups
/// never fail at runtime. Strings read back from storage that match no
/// variant surface as `DomainError::DataIntegrity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    WorkoutQuick,
    WorkoutFull,
    #[serde(rename = "capsule_30")]
    Capsule30,
    #[serde(rename = "capsule_60")]
    Capsule60,
    Walk,
    Mobility,
    Sleep,
    Food,
    StreakBonus,
    ManualAdjust,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::WorkoutQuick => "workout_quick",
            ActionType::WorkoutFull => "workout_full",
            ActionType::Capsule30 => "capsule_30",
            ActionType::Capsule60 => "capsule_60",
            ActionType::Walk => "walk",
            ActionType::Mobility => "mobility",
            ActionType::Sleep => "sleep",
            ActionType::Food => "food",
            ActionType::StreakBonus => "streak_bonus",
            ActionType::ManualAdjust => "manual_adjust",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "workout_quick" => Some(ActionType::WorkoutQuick),
            "workout_full" => Some(ActionType::WorkoutFull),
            "capsule_30" => Some(ActionType::Capsule30),
            "capsule_60" => Some(ActionType::Capsule60),
            "walk" => Some(ActionType::Walk),
            "mobility" => Some(ActionType::Mobility),
            "sleep" => Some(ActionType::Sleep),
            "food" => Some(ActionType::Food),
            "streak_bonus" => Some(ActionType::StreakBonus),
            "manual_adjust" => Some(ActionType::ManualAdjust),
            _ => None,
        }
    }

    /// Human-readable label used in outcome messages.
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::WorkoutQuick => "workout quick",
            ActionType::WorkoutFull => "workout full",
            ActionType::Capsule30 => "capsule 30",
            ActionType::Capsule60 => "capsule 60",
            ActionType::Walk => "walk",
            ActionType::Mobility => "mobility",
            ActionType::Sleep => "sleep",
            ActionType::Food => "food",
            ActionType::StreakBonus => "streak bonus",
            ActionType::ManualAdjust => "manual adjust",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a logged workout session was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutMode {
    Quick,
    Full,
    #[serde(rename = "capsule_30")]
    Capsule30,
    #[serde(rename = "capsule_60")]
    Capsule60,
}

impl WorkoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutMode::Quick => "quick",
            WorkoutMode::Full => "full",
            WorkoutMode::Capsule30 => "capsule_30",
            WorkoutMode::Capsule60 => "capsule_60",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quick" => Some(WorkoutMode::Quick),
            "full" => Some(WorkoutMode::Full),
            "capsule_30" => Some(WorkoutMode::Capsule30),
            "capsule_60" => Some(WorkoutMode::Capsule60),
            _ => None,
        }
    }

    pub fn is_capsule(&self) -> bool {
        matches!(self, WorkoutMode::Capsule30 | WorkoutMode::Capsule60)
    }

    /// The once-per-day action claimed when a session in this mode is
    /// finalized.
    pub fn claim_action(&self) -> ActionType {
        match self {
            WorkoutMode::Quick => ActionType::WorkoutQuick,
            WorkoutMode::Full => ActionType::WorkoutFull,
            WorkoutMode::Capsule30 => ActionType::Capsule30,
            WorkoutMode::Capsule60 => ActionType::Capsule60,
        }
    }
}

impl std::fmt::Display for WorkoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
