use chrono::NaiveDate;

use super::domain_service::{CappedCredit, RewardDomainService};
use super::value_objects::ActionType;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

#[test]
fn clamp_passes_through_under_cap() {
    let credit = RewardDomainService::clamp_to_cap(ActionType::Walk, 5, 50, 0);
    assert_eq!(
        credit,
        CappedCredit {
            credited: 5,
            capped: false
        }
    );
}

#[test]
fn clamp_partial_credit_near_cap() {
    // cap 50, 45 already earned, nominal 20: only 5 KI left to give
    let credit = RewardDomainService::clamp_to_cap(ActionType::WorkoutFull, 20, 50, 45);
    assert_eq!(
        credit,
        CappedCredit {
            credited: 5,
            capped: true
        }
    );
}

#[test]
fn clamp_to_zero_at_cap() {
    let credit = RewardDomainService::clamp_to_cap(ActionType::WorkoutQuick, 10, 50, 50);
    assert_eq!(
        credit,
        CappedCredit {
            credited: 0,
            capped: true
        }
    );
}

#[test]
fn streak_bonus_is_cap_exempt() {
    let credit = RewardDomainService::clamp_to_cap(ActionType::StreakBonus, 25, 50, 50);
    assert_eq!(
        credit,
        CappedCredit {
            credited: 25,
            capped: false
        }
    );
}

#[test]
fn streak_extends_after_consecutive_day() {
    let streak =
        RewardDomainService::next_streak(Some(date("2026-08-05")), date("2026-08-06"), 4);
    assert_eq!(streak, 5);
}

#[test]
fn streak_resets_after_gap() {
    let streak =
        RewardDomainService::next_streak(Some(date("2026-08-03")), date("2026-08-06"), 12);
    assert_eq!(streak, 1);
}

#[test]
fn streak_starts_at_one_for_first_training() {
    assert_eq!(
        RewardDomainService::next_streak(None, date("2026-08-06"), 0),
        1
    );
}

#[test]
fn bonus_granted_only_at_milestones() {
    assert_eq!(RewardDomainService::streak_bonus(0), 0);
    assert_eq!(RewardDomainService::streak_bonus(6), 0);
    assert_eq!(RewardDomainService::streak_bonus(7), 25);
    assert_eq!(RewardDomainService::streak_bonus(8), 0);
    assert_eq!(RewardDomainService::streak_bonus(14), 25);
    assert_eq!(RewardDomainService::streak_bonus(21), 25);
}
