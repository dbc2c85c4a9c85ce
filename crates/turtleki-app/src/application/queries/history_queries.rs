use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use turtleki_domain::ledger::{
    ActionLogRepository, KiActionEntry, QuestLogRepository, WorkoutEntry, WorkoutLogRepository,
};
use turtleki_domain::shared::DomainError;

use crate::application::dtos::TodayOverviewDto;

/// Read-side log views for the day screen and history lists.
pub struct HistoryQueries {
    action_log: Arc<dyn ActionLogRepository>,
    quest_log: Arc<dyn QuestLogRepository>,
    workout_log: Arc<dyn WorkoutLogRepository>,
}

impl HistoryQueries {
    pub fn new(
        action_log: Arc<dyn ActionLogRepository>,
        quest_log: Arc<dyn QuestLogRepository>,
        workout_log: Arc<dyn WorkoutLogRepository>,
    ) -> Self {
        Self {
            action_log,
            quest_log,
            workout_log,
        }
    }

    /// Everything logged for one date, in one read.
    pub async fn today_overview(&self, date: NaiveDate) -> Result<TodayOverviewDto, DomainError> {
        let (quests, actions, workouts) = tokio::try_join!(
            self.quest_log.find_by_date(date),
            self.action_log.find_by_date(date),
            self.workout_log.find_by_date(date),
        )?;

        info!(
            "[history] today_overview date={} quests={} actions={} workouts={}",
            date,
            quests.len(),
            actions.len(),
            workouts.len()
        );

        Ok(TodayOverviewDto {
            quests,
            actions,
            workouts,
        })
    }

    pub async fn recent_actions(&self, limit: u32) -> Result<Vec<KiActionEntry>, DomainError> {
        self.action_log.find_recent(limit).await
    }

    pub async fn recent_workouts(&self, limit: u32) -> Result<Vec<WorkoutEntry>, DomainError> {
        self.workout_log.find_recent(limit).await
    }
}
