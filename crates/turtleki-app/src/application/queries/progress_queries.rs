use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use turtleki_domain::catalog::Transformation;
use turtleki_domain::ledger::ActionLogRepository;
use turtleki_domain::plan::{generate_workout_plan, WorkoutPlan};
use turtleki_domain::player::{PlayerRepository, PlayerState};
use turtleki_domain::progression::{progress_to_next, unlocked_transformations, Progress};
use turtleki_domain::settings::{SettingsRepository, SettingsState};
use turtleki_domain::shared::{date, DomainError};

use crate::application::dtos::DailyKiPointDto;

/// Read-side progression views: current/next transformation, the daily
/// KI chart series, and today's generated plan.
pub struct ProgressQueries {
    player_repo: Arc<dyn PlayerRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    action_log: Arc<dyn ActionLogRepository>,
}

impl ProgressQueries {
    pub fn new(
        player_repo: Arc<dyn PlayerRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        action_log: Arc<dyn ActionLogRepository>,
    ) -> Self {
        Self {
            player_repo,
            settings_repo,
            action_log,
        }
    }

    pub async fn player_state(&self) -> Result<PlayerState, DomainError> {
        self.player_repo
            .find()
            .await?
            .ok_or_else(|| DomainError::NotSeeded("player state missing".to_string()))
    }

    pub async fn settings_state(&self) -> Result<SettingsState, DomainError> {
        self.settings_repo
            .find()
            .await?
            .ok_or_else(|| DomainError::NotSeeded("settings missing".to_string()))
    }

    pub async fn progress(&self) -> Result<Progress, DomainError> {
        let player = self.player_state().await?;
        Ok(progress_to_next(player.ki_total()))
    }

    pub async fn unlocked(&self) -> Result<Vec<Transformation>, DomainError> {
        let player = self.player_state().await?;
        Ok(unlocked_transformations(player.ki_total())
            .into_iter()
            .cloned()
            .collect())
    }

    /// The deterministic plan for a date, derived from current KI and
    /// settings. Nothing is stored; the same inputs regenerate the same
    /// plan.
    pub async fn workout_plan(&self, plan_date: NaiveDate) -> Result<WorkoutPlan, DomainError> {
        let player = self.player_state().await?;
        let settings = self.settings_state().await?;
        generate_workout_plan(player.ki_total(), &settings, plan_date)
    }

    /// Continuous per-day KI series from the first logged action up to
    /// `today`, zero-filled for idle days, with a running total.
    pub async fn daily_ki_series(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<DailyKiPointDto>, DomainError> {
        let actions = self.action_log.find_all().await?;
        if actions.is_empty() {
            return Ok(Vec::new());
        }

        let mut first = actions[0].date;
        if first > today {
            first = today;
        }

        let mut points = Vec::new();
        let mut cumulative = 0u32;
        let mut cursor = first;
        let mut idx = 0usize;

        while cursor <= today {
            let mut ki = 0u32;
            while idx < actions.len() && actions[idx].date == cursor {
                ki += actions[idx].ki_delta;
                idx += 1;
            }
            cumulative += ki;
            points.push(DailyKiPointDto {
                date: cursor,
                ki,
                cumulative,
            });
            cursor = date::add_days(cursor, 1);
        }

        info!("[progress] daily_ki_series days={}", points.len());
        Ok(points)
    }
}
