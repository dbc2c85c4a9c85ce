use chrono::NaiveDate;

use super::aggregate::PlayerState;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

#[test]
fn new_player_starts_at_zero() {
    let player = PlayerState::new(date("2026-08-06"));
    assert_eq!(player.ki_total(), 0);
    assert_eq!(player.ki_today(), 0);
    assert_eq!(player.streak(), 0);
    assert_eq!(player.last_training(), None);
    assert!(!player.needs_daily_reset(date("2026-08-06")));
}

#[test]
fn daily_reset_is_idempotent() {
    let mut player = PlayerState::new(date("2026-08-05"));
    player.credit(30);

    player.apply_daily_reset(date("2026-08-06"));
    assert_eq!(player.ki_today(), 0);
    assert_eq!(player.ki_total(), 30);

    // second call on the same day changes nothing
    player.credit(10);
    player.apply_daily_reset(date("2026-08-06"));
    assert_eq!(player.ki_today(), 10);
    assert_eq!(player.ki_total(), 40);
}

#[test]
fn credit_preserves_today_within_total() {
    let mut player = PlayerState::new(date("2026-08-06"));
    player.credit(25);
    player.credit(5);
    assert_eq!(player.ki_total(), 30);
    assert_eq!(player.ki_today(), 30);
    assert!(player.ki_today() <= player.ki_total());
}

#[test]
fn record_training_marks_the_day() {
    let mut player = PlayerState::new(date("2026-08-06"));
    assert!(!player.trained_on(date("2026-08-06")));

    player.record_training(date("2026-08-06"), 1);
    assert!(player.trained_on(date("2026-08-06")));
    assert_eq!(player.streak(), 1);
    assert!(!player.trained_on(date("2026-08-07")));
}
