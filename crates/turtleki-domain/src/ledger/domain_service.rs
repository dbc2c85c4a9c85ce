use chrono::NaiveDate;

use crate::rules;
use crate::shared::date;

use super::value_objects::ActionType;

/// Outcome of clamping a nominal reward against the daily cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedCredit {
    pub credited: u32,
    pub capped: bool,
}

/// Pure reward/streak arithmetic, free of storage concerns. The ledger
/// service decides when to call these; they decide how much.
pub struct RewardDomainService;

impl RewardDomainService {
    /// KI granted at every streak milestone (multiples of 7 days).
    pub const STREAK_MILESTONE_DAYS: u32 = 7;

    /// Clamp a nominal reward to what is left under today's cap.
    /// Cap-exempt actions pass through untouched; `capped` flags any
    /// reduction, including a reduction to zero.
    pub fn clamp_to_cap(
        action: ActionType,
        nominal: u32,
        daily_ki_cap: u32,
        ki_today: u32,
    ) -> CappedCredit {
        if !rules::is_capped_action(action) {
            return CappedCredit {
                credited: nominal,
                capped: false,
            };
        }

        let remaining = daily_ki_cap.saturating_sub(ki_today);
        if remaining == 0 {
            CappedCredit {
                credited: 0,
                capped: true,
            }
        } else if nominal > remaining {
            CappedCredit {
                credited: remaining,
                capped: true,
            }
        } else {
            CappedCredit {
                credited: nominal,
                capped: false,
            }
        }
    }

    /// Streak value after training on `today`. Consecutive days extend
    /// the streak; any gap resets it to 1. No partial credit.
    pub fn next_streak(last_training: Option<NaiveDate>, today: NaiveDate, current: u32) -> u32 {
        match last_training {
            Some(last) if date::is_yesterday(last, today) => current + 1,
            _ => 1,
        }
    }

    /// Bonus KI for reaching a streak milestone, 0 otherwise. The bonus
    /// is exempt from the daily cap.
    pub fn streak_bonus(streak: u32) -> u32 {
        if streak > 0 && streak % Self::STREAK_MILESTONE_DAYS == 0 {
            rules::reward_ki(ActionType::StreakBonus)
        } else {
            0
        }
    }
}
