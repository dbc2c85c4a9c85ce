use chrono::NaiveDate;

use turtleki_domain::ledger::ActionType;

use crate::bootstrap::TurtleKiApp;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

async fn app() -> TurtleKiApp {
    TurtleKiApp::in_memory().await.expect("in-memory app")
}

#[tokio::test]
async fn daily_series_is_continuous_and_zero_filled() {
    let app = app().await;
    let day1 = date("2026-08-01");
    let day4 = date("2026-08-04");

    app.game.ensure_daily_reset(day1).await.expect("reset");
    app.game
        .claim_action_once_per_day(day1, ActionType::Walk, None)
        .await
        .expect("claim");

    app.game.ensure_daily_reset(day4).await.expect("reset");
    app.game
        .claim_action_once_per_day(day4, ActionType::Capsule60, None)
        .await
        .expect("claim");

    let series = app
        .progress
        .daily_ki_series(date("2026-08-05"))
        .await
        .expect("series");

    assert_eq!(series.len(), 5);
    assert_eq!(series[0].date, day1);
    assert_eq!(series[0].ki, 5);
    assert_eq!(series[1].ki, 0);
    assert_eq!(series[2].ki, 0);
    assert_eq!(series[3].ki, 40);
    assert_eq!(series[4].ki, 0);
    assert_eq!(series[4].cumulative, 45);

    // cumulative never decreases
    for pair in series.windows(2) {
        assert!(pair[1].cumulative >= pair[0].cumulative);
    }
}

#[tokio::test]
async fn daily_series_is_empty_without_actions() {
    let app = app().await;
    let series = app
        .progress
        .daily_ki_series(date("2026-08-06"))
        .await
        .expect("series");
    assert!(series.is_empty());
}

#[tokio::test]
async fn progress_view_tracks_earned_ki() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");
    app.game
        .claim_action_once_per_day(today, ActionType::Capsule60, None)
        .await
        .expect("claim");

    let progress = app.progress.progress().await.expect("progress");
    assert_eq!(progress.current_ki, 40);
    assert_eq!(progress.next_ki, Some(100));
    assert_eq!(progress.remaining, Some(60));

    let unlocked = app.progress.unlocked().await.expect("unlocked");
    assert_eq!(unlocked.len(), 1);
}

#[tokio::test]
async fn plan_query_derives_from_stored_state() {
    let app = app().await;
    let today = date("2026-08-06");

    let plan = app.progress.workout_plan(today).await.expect("plan");
    assert_eq!(plan.template_id, "turtle_basic");
    assert_eq!(plan.date, today);

    let again = app.progress.workout_plan(today).await.expect("plan again");
    assert_eq!(plan, again);
}
