use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The single player record. `ki_total` is lifetime currency and never
/// decreases; `ki_today` is the daily-capped subset and resets once per
/// calendar day. Invariant: `ki_today <= ki_total`.
///
/// Mutated exclusively through the reward ledger; created once at first
/// launch by the seeder with all-zero defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    ki_total: u32,
    ki_today: u32,
    streak: u32,
    last_daily_reset: NaiveDate,
    last_training: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerState {
    pub fn new(today: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            ki_total: 0,
            ki_today: 0,
            streak: 0,
            last_daily_reset: today,
            last_training: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        ki_total: u32,
        ki_today: u32,
        streak: u32,
        last_daily_reset: NaiveDate,
        last_training: Option<NaiveDate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ki_total,
            ki_today,
            streak,
            last_daily_reset,
            last_training,
            created_at,
            updated_at,
        }
    }

    pub fn ki_total(&self) -> u32 {
        self.ki_total
    }

    pub fn ki_today(&self) -> u32 {
        self.ki_today
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_daily_reset(&self) -> NaiveDate {
        self.last_daily_reset
    }

    pub fn last_training(&self) -> Option<NaiveDate> {
        self.last_training
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn needs_daily_reset(&self, today: NaiveDate) -> bool {
        self.last_daily_reset != today
    }

    /// Zero today's KI and stamp the reset date. Calling again on the
    /// same day is a no-op.
    pub fn apply_daily_reset(&mut self, today: NaiveDate) {
        if self.needs_daily_reset(today) {
            self.ki_today = 0;
            self.last_daily_reset = today;
            self.touch();
        }
    }

    /// Credit KI to both counters. Both grow by the same amount, so the
    /// `ki_today <= ki_total` invariant is preserved.
    pub fn credit(&mut self, amount: u32) {
        self.ki_total += amount;
        self.ki_today += amount;
        self.touch();
    }

    pub fn trained_on(&self, date: NaiveDate) -> bool {
        self.last_training == Some(date)
    }

    /// Record a training day with the streak value computed for it.
    pub fn record_training(&mut self, today: NaiveDate, streak: u32) {
        self.last_training = Some(today);
        self.streak = streak;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
