use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use turtleki_domain::ledger::{
    ActionLogRepository, ActionType, KiActionEntry, LedgerMutation, LedgerUnitOfWork,
    RewardDomainService, WorkoutEntry, WorkoutLogRepository, WorkoutMode,
};
use turtleki_domain::player::{PlayerRepository, PlayerState};
use turtleki_domain::rules;
use turtleki_domain::settings::{Difficulty, SettingsRepository, SettingsState};
use turtleki_domain::shared::DomainError;

use crate::application::dtos::{ClaimOutcome, WorkoutOutcome};

/// The reward ledger: the only writer of player state. Applies
/// currency-earning transactions, enforces once-per-day claims and the
/// daily cap, maintains the streak, and appends the immutable logs.
pub struct GameService {
    player_repo: Arc<dyn PlayerRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    action_log: Arc<dyn ActionLogRepository>,
    workout_log: Arc<dyn WorkoutLogRepository>,
    ledger: Arc<dyn LedgerUnitOfWork>,
}

impl GameService {
    pub fn new(
        player_repo: Arc<dyn PlayerRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        action_log: Arc<dyn ActionLogRepository>,
        workout_log: Arc<dyn WorkoutLogRepository>,
        ledger: Arc<dyn LedgerUnitOfWork>,
    ) -> Self {
        Self {
            player_repo,
            settings_repo,
            action_log,
            workout_log,
            ledger,
        }
    }

    async fn require_player(&self) -> Result<PlayerState, DomainError> {
        self.player_repo
            .find()
            .await?
            .ok_or_else(|| DomainError::NotSeeded("player state missing".to_string()))
    }

    async fn require_settings(&self) -> Result<SettingsState, DomainError> {
        self.settings_repo
            .find()
            .await?
            .ok_or_else(|| DomainError::NotSeeded("settings missing".to_string()))
    }

    /// Zero `ki_today` once per calendar day. Idempotent: a second call
    /// on the same day is a no-op.
    pub async fn ensure_daily_reset(&self, today: NaiveDate) -> Result<(), DomainError> {
        let mut player = self.require_player().await?;
        if player.needs_daily_reset(today) {
            player.apply_daily_reset(today);
            self.player_repo.save(&player).await?;
            info!(%today, "daily KI reset applied");
        }
        Ok(())
    }

    async fn already_claimed_today(
        &self,
        today: NaiveDate,
        action: ActionType,
    ) -> Result<bool, DomainError> {
        Ok(self.action_log.count_for_day(today, action).await? > 0)
    }

    /// Claim an action's reward, at most once per (day, action type).
    /// A duplicate claim credits nothing and mutates nothing.
    pub async fn claim_action_once_per_day(
        &self,
        today: NaiveDate,
        action: ActionType,
        note: Option<String>,
    ) -> Result<ClaimOutcome, DomainError> {
        if self.already_claimed_today(today, action).await? {
            return Ok(ClaimOutcome {
                ki_added: 0,
                capped: false,
                message: "Already claimed this action today.".to_string(),
            });
        }

        let mut player = self.require_player().await?;
        let settings = self.require_settings().await?;

        let nominal = rules::reward_ki(action);
        let credit = RewardDomainService::clamp_to_cap(
            action,
            nominal,
            settings.daily_ki_cap(),
            player.ki_today(),
        );

        player.credit(credit.credited);

        let entry = KiActionEntry::new(today, action, credit.credited, note);
        self.ledger
            .apply(LedgerMutation {
                player,
                actions: vec![entry],
                workout: None,
            })
            .await?;

        let message = if credit.credited > 0 {
            format!("+{} KI ({})", credit.credited, action.label())
        } else if credit.capped {
            "Daily cap reached. You've done enough today 🐢".to_string()
        } else {
            "Action recorded.".to_string()
        };

        info!(
            %today,
            action = action.as_str(),
            ki_added = credit.credited,
            capped = credit.capped,
            "action claimed"
        );

        Ok(ClaimOutcome {
            ki_added: credit.credited,
            capped: credit.capped,
            message,
        })
    }

    /// Finalize a workout session (quick or full mode).
    ///
    /// The session always lands in the workout log, even when the
    /// reward was already claimed today. The KI claim follows the
    /// once-per-day rule; the streak advances only on the first
    /// training of the day, and every 7th consecutive day grants a
    /// cap-exempt bonus logged as its own entry. A credit capped to
    /// zero still counts as training for the streak.
    pub async fn complete_workout(
        &self,
        today: NaiveDate,
        template_id: &str,
        mode: WorkoutMode,
        duration_sec: Option<u32>,
    ) -> Result<WorkoutOutcome, DomainError> {
        self.finish_session(today, template_id, mode, duration_sec)
            .await
    }

    /// Finalize a capsule gym session (30 or 60 minutes). Same rules as
    /// `complete_workout` with the capsule action types; the derived
    /// template id names the capsule variant.
    pub async fn complete_capsule_workout(
        &self,
        today: NaiveDate,
        variant: WorkoutMode,
        duration_sec: Option<u32>,
    ) -> Result<WorkoutOutcome, DomainError> {
        let template_id = match variant {
            WorkoutMode::Capsule30 => "capsule_gym_30",
            WorkoutMode::Capsule60 => "capsule_gym_60",
            WorkoutMode::Quick | WorkoutMode::Full => {
                return Err(DomainError::InvalidInput(format!(
                    "Not a capsule variant: {}",
                    variant
                )))
            }
        };

        self.finish_session(today, template_id, variant, duration_sec)
            .await
    }

    async fn finish_session(
        &self,
        today: NaiveDate,
        template_id: &str,
        mode: WorkoutMode,
        duration_sec: Option<u32>,
    ) -> Result<WorkoutOutcome, DomainError> {
        let action = mode.claim_action();

        if self.already_claimed_today(today, action).await? {
            // history is kept regardless of reward eligibility
            let entry = WorkoutEntry::new(today, template_id, duration_sec, mode);
            self.workout_log.append(&entry).await?;

            let player = self.require_player().await?;
            return Ok(WorkoutOutcome {
                ki_added: 0,
                streak: player.streak(),
                bonus_ki: 0,
                message: "Workout saved. Today's workout KI was already claimed.".to_string(),
            });
        }

        let mut player = self.require_player().await?;
        let settings = self.require_settings().await?;

        let nominal = rules::reward_ki(action);
        let credit = RewardDomainService::clamp_to_cap(
            action,
            nominal,
            settings.daily_ki_cap(),
            player.ki_today(),
        );

        // Streak moves only on the first training of the day; the
        // reward credit has no say in it.
        let mut streak = player.streak();
        let mut bonus_ki = 0;
        if !player.trained_on(today) {
            streak = RewardDomainService::next_streak(player.last_training(), today, player.streak());
            bonus_ki = RewardDomainService::streak_bonus(streak);
        }

        player.credit(credit.credited + bonus_ki);
        player.record_training(today, streak);

        let mut actions = vec![KiActionEntry::new(
            today,
            action,
            credit.credited,
            Some(template_id.to_string()),
        )];
        if bonus_ki > 0 {
            actions.push(KiActionEntry::new(
                today,
                ActionType::StreakBonus,
                bonus_ki,
                Some(format!("streak={}", streak)),
            ));
        }

        let workout = WorkoutEntry::new(today, template_id, duration_sec, mode);

        self.ledger
            .apply(LedgerMutation {
                player,
                actions,
                workout: Some(workout),
            })
            .await?;

        let message = if credit.credited > 0 {
            let bonus_part = if bonus_ki > 0 {
                format!(" +{} KI bonus", bonus_ki)
            } else {
                String::new()
            };
            format!("Workout complete: +{} KI{} ✅", credit.credited, bonus_part)
        } else if credit.capped {
            "Workout saved. Daily cap reached; no more KI today 🐢".to_string()
        } else {
            "Workout saved.".to_string()
        };

        info!(
            %today,
            template_id,
            mode = mode.as_str(),
            ki_added = credit.credited,
            bonus_ki,
            streak,
            "workout finalized"
        );

        Ok(WorkoutOutcome {
            ki_added: credit.credited,
            streak,
            bonus_ki,
            message,
        })
    }

    pub async fn set_daily_ki_cap(&self, cap: u32) -> Result<(), DomainError> {
        let mut settings = self.require_settings().await?;
        settings.set_daily_ki_cap(cap);
        self.settings_repo.save(&settings).await?;
        info!(cap = settings.daily_ki_cap(), "daily KI cap updated");
        Ok(())
    }

    pub async fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), DomainError> {
        let mut settings = self.require_settings().await?;
        settings.set_difficulty(difficulty);
        self.settings_repo.save(&settings).await?;
        info!(difficulty = difficulty.as_str(), "difficulty updated");
        Ok(())
    }

    pub async fn set_reduce_motion(&self, reduce_motion: bool) -> Result<(), DomainError> {
        let mut settings = self.require_settings().await?;
        settings.set_reduce_motion(reduce_motion);
        self.settings_repo.save(&settings).await?;
        Ok(())
    }
}
