use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use turtleki_domain::catalog::{quest_by_id, QuestDefinition, DAILY_QUESTS, WALK_OR_MOBILITY_QUEST_ID};
use turtleki_domain::ledger::{ActionType, QuestCompletion, QuestLogRepository};
use turtleki_domain::shared::DomainError;

use crate::application::dtos::QuestOutcome;

use super::game_service::GameService;

/// Daily quest tracking. A completion row per (date, quest) is the
/// completion flag; rewards are delegated to the game service so quest
/// KI obeys the same once-per-day and cap rules as everything else.
pub struct QuestService {
    quest_log: Arc<dyn QuestLogRepository>,
    game: Arc<GameService>,
}

impl QuestService {
    pub fn new(quest_log: Arc<dyn QuestLogRepository>, game: Arc<GameService>) -> Self {
        Self { quest_log, game }
    }

    /// The fixed daily quest list.
    pub fn daily_quest_defs() -> &'static [QuestDefinition] {
        &DAILY_QUESTS
    }

    pub async fn is_quest_completed(
        &self,
        date: NaiveDate,
        quest_id: &str,
    ) -> Result<bool, DomainError> {
        Ok(self.quest_log.count_for_day(date, quest_id).await? > 0)
    }

    /// Complete a quest for the day, idempotently. The completion row
    /// is written before any reward claim: completion stands on its own
    /// even if the associated action was already claimed today.
    pub async fn complete_quest(
        &self,
        date: NaiveDate,
        quest_id: &str,
        action_override: Option<ActionType>,
    ) -> Result<QuestOutcome, DomainError> {
        if self.is_quest_completed(date, quest_id).await? {
            return Ok(QuestOutcome {
                ki_added: 0,
                message: "Quest already completed today.".to_string(),
            });
        }

        let def = quest_by_id(quest_id)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown quest: {}", quest_id)))?;

        if quest_id == WALK_OR_MOBILITY_QUEST_ID {
            if let Some(choice) = action_override {
                if !matches!(choice, ActionType::Walk | ActionType::Mobility) {
                    return Err(DomainError::InvalidInput(format!(
                        "Quest choice must be walk or mobility, got {}",
                        choice
                    )));
                }
            }
        }

        let completion = QuestCompletion::new(date, quest_id, action_override);
        self.quest_log.append(&completion).await?;
        info!(%date, quest_id, "quest completed");

        // Multi-option quest: claim whichever action the user chose.
        if quest_id == WALK_OR_MOBILITY_QUEST_ID {
            let action = action_override.unwrap_or(ActionType::Walk);
            let claim = self
                .game
                .claim_action_once_per_day(date, action, Some(format!("quest:{}", quest_id)))
                .await?;
            return Ok(QuestOutcome {
                ki_added: claim.ki_added,
                message: claim.message,
            });
        }

        if let Some(action) = def.action {
            let claim = self
                .game
                .claim_action_once_per_day(date, action, Some(format!("quest:{}", quest_id)))
                .await?;
            return Ok(QuestOutcome {
                ki_added: claim.ki_added,
                message: claim.message,
            });
        }

        // The main workout quest earns nothing here; its KI comes from
        // workout completion, which keeps the two paths from double
        // counting.
        Ok(QuestOutcome {
            ki_added: 0,
            message: "Quest recorded.".to_string(),
        })
    }
}
