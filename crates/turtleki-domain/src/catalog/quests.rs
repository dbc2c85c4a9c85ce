use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::ledger::ActionType;

/// The multi-option quest: the user reports either a walk or a mobility
/// session and the chosen action is what gets claimed.
pub const WALK_OR_MOBILITY_QUEST_ID: &str = "side_walk_or_mobility";

/// A daily checklist item. `action` ties the quest to the reward
/// mechanism; the main workout quest has none because its KI flows
/// through workout completion instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDefinition {
    pub quest_id: String,
    pub title: String,
    pub description: String,
    pub reward_ki: u32,
    #[serde(default)]
    pub action: Option<ActionType>,
}

fn quest(
    quest_id: &str,
    title: &str,
    description: &str,
    reward_ki: u32,
    action: Option<ActionType>,
) -> QuestDefinition {
    QuestDefinition {
        quest_id: quest_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        reward_ki,
        action,
    }
}

pub static DAILY_QUESTS: Lazy<Vec<QuestDefinition>> = Lazy::new(|| {
    vec![
        quest(
            "main_workout",
            "Main Quest: Training",
            "Complete today's workout (full or quick mode).",
            0,
            None,
        ),
        quest(
            WALK_OR_MOBILITY_QUEST_ID,
            "Side Quest: Gentle movement",
            "Take a 20-30 min walk or do 8-12 min of mobility work.",
            5,
            Some(ActionType::Walk),
        ),
        quest(
            "discipline_sleep",
            "Discipline Quest: Rest",
            "Slept well (self-reported).",
            5,
            Some(ActionType::Sleep),
        ),
        quest(
            "discipline_food",
            "Discipline Quest: Nutrition",
            "Ate decently today (self-reported).",
            5,
            Some(ActionType::Food),
        ),
    ]
});

pub fn quest_by_id(quest_id: &str) -> Option<&'static QuestDefinition> {
    DAILY_QUESTS.iter().find(|q| q.quest_id == quest_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_workout_quest_carries_no_action() {
        let quest = quest_by_id("main_workout").expect("main quest in catalog");
        assert_eq!(quest.action, None);
        assert_eq!(quest.reward_ki, 0);
    }

    #[test]
    fn unknown_quest_id_resolves_to_none() {
        assert!(quest_by_id("fetch_the_dragon_balls").is_none());
    }
}
