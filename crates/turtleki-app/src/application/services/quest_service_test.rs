use chrono::NaiveDate;

use turtleki_domain::catalog::WALK_OR_MOBILITY_QUEST_ID;
use turtleki_domain::ledger::ActionType;
use turtleki_domain::shared::DomainError;

use crate::application::services::QuestService;
use crate::bootstrap::TurtleKiApp;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

async fn app() -> TurtleKiApp {
    TurtleKiApp::in_memory().await.expect("in-memory app")
}

#[test]
fn daily_quest_defs_expose_the_catalog() {
    let defs = QuestService::daily_quest_defs();
    assert_eq!(defs.len(), 4);
    assert!(defs.iter().any(|q| q.quest_id == "main_workout"));
}

#[tokio::test]
async fn completing_a_quest_twice_writes_one_row_and_credits_once() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");

    let first = app
        .quests
        .complete_quest(today, "discipline_sleep", None)
        .await
        .expect("complete quest");
    assert_eq!(first.ki_added, 5);

    let second = app
        .quests
        .complete_quest(today, "discipline_sleep", None)
        .await
        .expect("complete again");
    assert_eq!(second.ki_added, 0);
    assert_eq!(second.message, "Quest already completed today.");

    let overview = app.history.today_overview(today).await.expect("overview");
    assert_eq!(overview.quests.len(), 1);
    let sleep_entries: Vec<_> = overview
        .actions
        .iter()
        .filter(|a| a.action == ActionType::Sleep)
        .collect();
    assert_eq!(sleep_entries.len(), 1);

    assert!(app
        .quests
        .is_quest_completed(today, "discipline_sleep")
        .await
        .expect("completed check"));
}

#[tokio::test]
async fn main_workout_quest_grants_no_ki() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");

    let outcome = app
        .quests
        .complete_quest(today, "main_workout", None)
        .await
        .expect("complete quest");
    assert_eq!(outcome.ki_added, 0);
    assert_eq!(outcome.message, "Quest recorded.");

    let player = app.progress.player_state().await.expect("player");
    assert_eq!(player.ki_total(), 0);

    // completion stands even though no currency moved
    let overview = app.history.today_overview(today).await.expect("overview");
    assert_eq!(overview.quests.len(), 1);
}

#[tokio::test]
async fn multi_option_quest_claims_the_chosen_action() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");

    let outcome = app
        .quests
        .complete_quest(today, WALK_OR_MOBILITY_QUEST_ID, Some(ActionType::Mobility))
        .await
        .expect("complete quest");
    assert_eq!(outcome.ki_added, 5);

    let overview = app.history.today_overview(today).await.expect("overview");
    assert_eq!(overview.quests[0].chosen_action, Some(ActionType::Mobility));
    assert!(overview
        .actions
        .iter()
        .any(|a| a.action == ActionType::Mobility));
    assert!(!overview.actions.iter().any(|a| a.action == ActionType::Walk));
}

#[tokio::test]
async fn multi_option_quest_defaults_to_walk() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");

    app.quests
        .complete_quest(today, WALK_OR_MOBILITY_QUEST_ID, None)
        .await
        .expect("complete quest");

    let overview = app.history.today_overview(today).await.expect("overview");
    assert!(overview.actions.iter().any(|a| a.action == ActionType::Walk));
}

#[tokio::test]
async fn invalid_choice_is_rejected_before_writing() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");

    let err = app
        .quests
        .complete_quest(today, WALK_OR_MOBILITY_QUEST_ID, Some(ActionType::Sleep))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let overview = app.history.today_overview(today).await.expect("overview");
    assert!(overview.quests.is_empty());
}

#[tokio::test]
async fn unknown_quest_is_rejected_before_writing() {
    let app = app().await;
    let today = date("2026-08-06");

    let err = app
        .quests
        .complete_quest(today, "fetch_the_dragon_balls", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let overview = app.history.today_overview(today).await.expect("overview");
    assert!(overview.quests.is_empty());
}

#[tokio::test]
async fn completion_is_recorded_even_when_the_action_was_claimed() {
    let app = app().await;
    let today = date("2026-08-06");
    app.game.ensure_daily_reset(today).await.expect("reset");

    // the walk was already claimed outside the quest flow
    app.game
        .claim_action_once_per_day(today, ActionType::Walk, None)
        .await
        .expect("claim walk");

    let outcome = app
        .quests
        .complete_quest(today, WALK_OR_MOBILITY_QUEST_ID, Some(ActionType::Walk))
        .await
        .expect("complete quest");
    assert_eq!(outcome.ki_added, 0);

    // the completion row exists; the walk entry was not duplicated
    let overview = app.history.today_overview(today).await.expect("overview");
    assert_eq!(overview.quests.len(), 1);
    let walk_entries: Vec<_> = overview
        .actions
        .iter()
        .filter(|a| a.action == ActionType::Walk)
        .collect();
    assert_eq!(walk_entries.len(), 1);
}
