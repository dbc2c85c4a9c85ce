use chrono::NaiveDate;

use crate::catalog::{TransformationKey, TRANSFORMATIONS};
use crate::settings::{Difficulty, SettingsState};

use super::{generate_workout_plan, scale_exercise};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

fn settings(difficulty: Difficulty) -> SettingsState {
    let mut s = SettingsState::new();
    s.set_difficulty(difficulty);
    s
}

#[test]
fn plan_is_deterministic() {
    let s = settings(Difficulty::Normal);
    let a = generate_workout_plan(700, &s, date("2026-08-06")).expect("plan");
    let b = generate_workout_plan(700, &s, date("2026-08-06")).expect("plan");
    assert_eq!(a, b);
}

#[test]
fn zero_ki_produces_the_foundation_plan() {
    let s = settings(Difficulty::Normal);
    let plan = generate_workout_plan(0, &s, date("2026-08-06")).expect("plan");

    assert_eq!(plan.template_id, "turtle_basic");
    assert_eq!(plan.transformation, TransformationKey::Normal);
    // warm-up, two main blocks, finisher, cool-down
    assert_eq!(plan.blocks.len(), 5);

    let strength = &plan.blocks[1];
    assert_eq!(strength.exercises[0].id, "pushup_knee");
    assert_eq!(strength.exercises[1].id, "squat");
}

#[test]
fn split_alternates_by_day_parity() {
    let s = settings(Difficulty::Normal);

    // even day of month prefers the A side
    let even = generate_workout_plan(600, &s, date("2026-08-06")).expect("plan");
    assert_eq!(even.template_id, "turtle_ssj_A");
    assert!(even.blocks.iter().any(|b| b.name == "Block A (Push)"));

    let odd = generate_workout_plan(600, &s, date("2026-08-07")).expect("plan");
    assert_eq!(odd.template_id, "turtle_ssj_B");
    assert!(odd.blocks.iter().any(|b| b.name == "Block A (Legs)"));
}

#[test]
fn higher_split_tier_wins_over_lower_split() {
    let s = settings(Difficulty::Normal);
    let plan = generate_workout_plan(1000, &s, date("2026-08-06")).expect("plan");
    assert_eq!(plan.template_id, "turtle_ssj2_A");
}

#[test]
fn unified_template_ignores_parity() {
    let s = settings(Difficulty::Normal);
    for d in ["2026-08-06", "2026-08-07"] {
        let plan = generate_workout_plan(1500, &s, date(d)).expect("plan");
        assert_eq!(plan.template_id, "turtle_ssj3");
    }
}

#[test]
fn difficulty_scales_reps_and_holds() {
    let hard = generate_workout_plan(0, &settings(Difficulty::Hard), date("2026-08-06"))
        .expect("plan");
    let strength = &hard.blocks[1];
    // knee push-ups: 8 reps * 1.15 rounds to 9
    assert_eq!(strength.exercises[0].reps, Some(9));

    let accessories = &hard.blocks[2];
    // plank: 20s * 1.15 rounds to 23
    assert_eq!(accessories.exercises[1].time_sec, Some(23));

    let easy = generate_workout_plan(0, &settings(Difficulty::Easy), date("2026-08-06"))
        .expect("plan");
    assert_eq!(easy.blocks[1].exercises[0].reps, Some(7));
}

#[test]
fn set_counts_are_never_scaled() {
    let hard = generate_workout_plan(0, &settings(Difficulty::Hard), date("2026-08-06"))
        .expect("plan");
    let easy = generate_workout_plan(0, &settings(Difficulty::Easy), date("2026-08-06"))
        .expect("plan");
    for (hb, eb) in hard.blocks.iter().zip(easy.blocks.iter()) {
        for (he, ee) in hb.exercises.iter().zip(eb.exercises.iter()) {
            assert_eq!(he.sets, ee.sets);
        }
    }
}

#[test]
fn scaling_floors_hold() {
    let mut tiny = crate::catalog::pick_best_exercise(0, &["squat"]).expect("squat");
    tiny.reps = Some(1);
    let scaled = scale_exercise(&tiny, 0.85);
    assert_eq!(scaled.reps, Some(1));

    let mut short = crate::catalog::pick_best_exercise(0, &["plank"]).expect("plank");
    short.time_sec = Some(10);
    let scaled = scale_exercise(&short, 0.85);
    assert_eq!(scaled.time_sec, Some(10));
}

#[test]
fn finisher_block_present_at_every_tier() {
    // The design note said the finisher would only be recommended from
    // a certain tier up; the shipped behavior appends it always. Pin
    // the observed behavior so a change here is deliberate.
    let s = settings(Difficulty::Normal);
    for t in TRANSFORMATIONS.iter() {
        let plan = generate_workout_plan(t.min_ki, &s, date("2026-08-06")).expect("plan");
        assert!(
            plan.blocks.iter().any(|b| b.name.starts_with("Finisher")),
            "no finisher at ki={}",
            t.min_ki
        );
    }
}

#[test]
fn warmup_and_cooldown_are_unscaled() {
    let hard = generate_workout_plan(0, &settings(Difficulty::Hard), date("2026-08-06"))
        .expect("plan");
    let warmup = &hard.blocks[0];
    assert_eq!(warmup.exercises[0].time_sec, Some(180));
    let cooldown = hard.blocks.last().expect("cooldown");
    assert_eq!(cooldown.exercises[0].time_sec, Some(120));
}
