/// E2E Test: one full training day
///
/// Validates the whole flow end to end:
/// 1. First launch seeds player and settings
/// 2. Daily reset rolls the counters
/// 3. Quests and the workout earn KI under the cap
/// 4. Progression reflects the new total
/// 5. Export then import reproduces the state
use chrono::NaiveDate;

use turtleki_app::TurtleKiApp;
use turtleki_domain::catalog::WALK_OR_MOBILITY_QUEST_ID;
use turtleki_domain::ledger::{ActionType, WorkoutMode};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

#[tokio::test]
async fn e2e_full_training_day() {
    let app = TurtleKiApp::in_memory().await.expect("open app");
    let today = date("2026-08-06");

    // ============================================================
    // Step 1: First launch state
    // ============================================================
    let player = app.progress.player_state().await.expect("player seeded");
    assert_eq!(player.ki_total(), 0);
    let settings = app.progress.settings_state().await.expect("settings seeded");
    assert_eq!(settings.daily_ki_cap(), 50);

    println!("✓ Step 1: Seeded player and settings");

    // ============================================================
    // Step 2: Daily reset
    // ============================================================
    app.game.ensure_daily_reset(today).await.expect("reset");

    // ============================================================
    // Step 3: Morning quests
    // ============================================================
    let walk = app
        .quests
        .complete_quest(today, WALK_OR_MOBILITY_QUEST_ID, Some(ActionType::Walk))
        .await
        .expect("walk quest");
    assert_eq!(walk.ki_added, 5);

    let sleep = app
        .quests
        .complete_quest(today, "discipline_sleep", None)
        .await
        .expect("sleep quest");
    assert_eq!(sleep.ki_added, 5);

    println!("✓ Step 3: Quests earned {} KI", walk.ki_added + sleep.ki_added);

    // ============================================================
    // Step 4: The day's workout, generated then completed
    // ============================================================
    let plan = app.progress.workout_plan(today).await.expect("plan");
    assert_eq!(plan.template_id, "turtle_basic");

    app.quests
        .complete_quest(today, "main_workout", None)
        .await
        .expect("main quest");

    let workout = app
        .game
        .complete_workout(today, &plan.template_id, WorkoutMode::Full, Some(1500))
        .await
        .expect("workout");
    assert_eq!(workout.ki_added, 20);
    assert_eq!(workout.streak, 1);

    println!("✓ Step 4: Workout complete, streak {}", workout.streak);

    // ============================================================
    // Step 5: Progression reflects the day
    // ============================================================
    let player = app.progress.player_state().await.expect("player");
    assert_eq!(player.ki_total(), 30);
    assert_eq!(player.ki_today(), 30);

    let progress = app.progress.progress().await.expect("progress");
    assert_eq!(progress.remaining, Some(70));

    let overview = app.history.today_overview(today).await.expect("overview");
    assert_eq!(overview.quests.len(), 3);
    assert_eq!(overview.actions.len(), 3);
    assert_eq!(overview.workouts.len(), 1);

    println!("✓ Step 5: {} KI total", player.ki_total());

    // ============================================================
    // Step 6: Export, wipe, import
    // ============================================================
    let exported = app.data_transfer.export_json().await.expect("export");
    app.data_transfer.hard_reset().await.expect("reset");
    app.data_transfer
        .import_json(exported)
        .await
        .expect("import");

    let restored = app.progress.player_state().await.expect("player");
    assert_eq!(restored.ki_total(), 30);
    assert_eq!(restored.streak(), 1);

    let overview = app.history.today_overview(today).await.expect("overview");
    assert_eq!(overview.actions.len(), 3);

    println!("✓ Step 6: Export/import round trip complete");
}
