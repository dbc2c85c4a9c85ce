//! Reward economy rules: how much each action pays, how difficulty
//! scales prescriptions, and which actions count against the daily cap.

use crate::ledger::ActionType;
use crate::settings::Difficulty;

/// Nominal KI for an action, before cap clamping.
pub fn reward_ki(action: ActionType) -> u32 {
    match action {
        ActionType::WorkoutQuick => 10,
        ActionType::WorkoutFull => 20,
        ActionType::Capsule30 => 20,
        ActionType::Capsule60 => 40,
        ActionType::Walk => 5,
        ActionType::Mobility => 5,
        ActionType::Sleep => 5,
        ActionType::Food => 5,
        ActionType::StreakBonus => 25,
        ActionType::ManualAdjust => 0,
    }
}

pub fn difficulty_multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.85,
        Difficulty::Normal => 1.0,
        Difficulty::Hard => 1.15,
    }
}

/// The daily cap applies to every action except the streak bonus, which
/// may intentionally push the user over the cap. The match is spelled
/// out variant by variant so adding an action type forces a decision
/// here instead of silently inheriting a default.
pub fn is_capped_action(action: ActionType) -> bool {
    match action {
        ActionType::StreakBonus => false,
        ActionType::WorkoutQuick
        | ActionType::WorkoutFull
        | ActionType::Capsule30
        | ActionType::Capsule60
        | ActionType::Walk
        | ActionType::Mobility
        | ActionType::Sleep
        | ActionType::Food
        | ActionType::ManualAdjust => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_table_matches_economy() {
        assert_eq!(reward_ki(ActionType::WorkoutQuick), 10);
        assert_eq!(reward_ki(ActionType::WorkoutFull), 20);
        assert_eq!(reward_ki(ActionType::Capsule30), 20);
        assert_eq!(reward_ki(ActionType::Capsule60), 40);
        assert_eq!(reward_ki(ActionType::Walk), 5);
        assert_eq!(reward_ki(ActionType::StreakBonus), 25);
        assert_eq!(reward_ki(ActionType::ManualAdjust), 0);
    }

    #[test]
    fn difficulty_multipliers() {
        assert_eq!(difficulty_multiplier(Difficulty::Easy), 0.85);
        assert_eq!(difficulty_multiplier(Difficulty::Normal), 1.0);
        assert_eq!(difficulty_multiplier(Difficulty::Hard), 1.15);
    }

    #[test]
    fn only_streak_bonus_escapes_the_cap() {
        assert!(!is_capped_action(ActionType::StreakBonus));
        assert!(is_capped_action(ActionType::WorkoutFull));
        assert!(is_capped_action(ActionType::Walk));
        assert!(is_capped_action(ActionType::ManualAdjust));
    }
}
