//! Deterministic workout plan generation. A plan is a pure function of
//! (lifetime KI, settings, date): same inputs always produce the same
//! plan, so the UI can re-derive it at any time instead of storing it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    pick_best_exercise, Exercise, TemplateKind, TransformationKey, WorkoutTemplate, TEMPLATES,
};
use crate::progression::current_transformation;
use crate::rules::difficulty_multiplier;
use crate::settings::SettingsState;
use crate::shared::DomainError;

#[cfg(test)]
mod generator_test;

const PUSH_CANDIDATES: &[&str] = &["pushup_knee", "pushup", "pushup_slow", "pushup_decline"];
const LEG_CANDIDATES: &[&str] = &["squat", "squat_pause", "lunge", "split_squat", "jump_squat"];
const CORE_CANDIDATES: &[&str] = &["plank", "plank_30", "hollow", "side_plank", "mountain_climbers"];
const TRICEPS_CANDIDATES: &[&str] = &["dips_chair", "pushup"];
const CONDITIONING_CANDIDATES: &[&str] = &["mountain_climbers", "burpees", "bear_crawl"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBlock {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub date: NaiveDate,
    pub template_id: String,
    pub name: String,
    pub estimated_minutes: u32,
    pub transformation: TransformationKey,
    pub notes: Vec<String>,
    pub blocks: Vec<WorkoutBlock>,
}

/// The highest unlocked template. Split templates alternate sides by
/// day-of-month parity (even day prefers A); if the preferred side has
/// no unlocked sibling sharing the id prefix, the originally selected
/// template stands.
fn pick_template(ki_total: u32, date: NaiveDate) -> &'static WorkoutTemplate {
    let mut unlocked: Vec<&'static WorkoutTemplate> = TEMPLATES
        .iter()
        .filter(|t| ki_total >= t.min_ki)
        .collect();
    unlocked.sort_by(|a, b| b.min_ki.cmp(&a.min_ki));

    let best = unlocked.first().copied().unwrap_or(&TEMPLATES[0]);

    if matches!(best.kind, TemplateKind::SplitA | TemplateKind::SplitB) {
        let want_a = date.day() % 2 == 0;
        let wanted_kind = if want_a {
            TemplateKind::SplitA
        } else {
            TemplateKind::SplitB
        };
        let prefix = best
            .id
            .strip_suffix("_A")
            .or_else(|| best.id.strip_suffix("_B"))
            .unwrap_or(&best.id);

        let sibling = unlocked
            .iter()
            .find(|t| t.id.starts_with(prefix) && t.kind == wanted_kind)
            .copied();
        return sibling.unwrap_or(best);
    }

    best
}

/// Scale reps or hold time by the difficulty multiplier. Set counts are
/// left alone so session structure stays stable across difficulties.
fn scale_exercise(exercise: &Exercise, multiplier: f64) -> Exercise {
    let mut scaled = exercise.clone();
    if let Some(reps) = scaled.reps {
        scaled.reps = Some(((f64::from(reps) * multiplier).round() as u32).max(1));
    }
    if let Some(time_sec) = scaled.time_sec {
        scaled.time_sec = Some(((f64::from(time_sec) * multiplier).round() as u32).max(10));
    }
    scaled
}

fn static_block(name: &str, exercises: Vec<Exercise>) -> WorkoutBlock {
    WorkoutBlock {
        name: name.to_string(),
        exercises,
    }
}

fn warmup_block() -> WorkoutBlock {
    static_block(
        "Warm-up (3-5 min)",
        vec![
            Exercise {
                id: "warm_mobility".to_string(),
                name: "General mobility (neck, shoulders, hips)".to_string(),
                sets: 1,
                reps: None,
                time_sec: Some(180),
                rest_sec: 0,
                min_ki: 0,
                tags: vec!["warmup".to_string()],
                description: None,
                tips: Vec::new(),
            },
            Exercise {
                id: "warm_activation".to_string(),
                name: "Activation (easy squats + arm swings)".to_string(),
                sets: 1,
                reps: None,
                time_sec: Some(120),
                rest_sec: 0,
                min_ki: 0,
                tags: vec!["warmup".to_string()],
                description: None,
                tips: Vec::new(),
            },
        ],
    )
}

fn cooldown_block() -> WorkoutBlock {
    static_block(
        "Cool-down (2-4 min)",
        vec![
            Exercise {
                id: "cool_breath".to_string(),
                name: "Nasal breathing + easy walking".to_string(),
                sets: 1,
                reps: None,
                time_sec: Some(120),
                rest_sec: 0,
                min_ki: 0,
                tags: vec!["cooldown".to_string()],
                description: None,
                tips: Vec::new(),
            },
            Exercise {
                id: "cool_stretch".to_string(),
                name: "Gentle stretching (legs/chest)".to_string(),
                sets: 1,
                reps: None,
                time_sec: Some(120),
                rest_sec: 0,
                min_ki: 0,
                tags: vec!["cooldown".to_string()],
                description: None,
                tips: Vec::new(),
            },
        ],
    )
}

pub fn generate_workout_plan(
    ki_total: u32,
    settings: &SettingsState,
    date: NaiveDate,
) -> Result<WorkoutPlan, DomainError> {
    let template = pick_template(ki_total, date);
    let transformation = current_transformation(ki_total).key;
    let multiplier = difficulty_multiplier(settings.difficulty());

    // One pick per muscle-group category, highest unlocked variant.
    let push = pick_best_exercise(ki_total, PUSH_CANDIDATES)?;
    let legs = pick_best_exercise(ki_total, LEG_CANDIDATES)?;
    let core = pick_best_exercise(ki_total, CORE_CANDIDATES)?;
    let triceps = pick_best_exercise(ki_total, TRICEPS_CANDIDATES)?;
    let conditioning = pick_best_exercise(ki_total, CONDITIONING_CANDIDATES)?;

    let mut blocks = vec![warmup_block()];

    match template.kind {
        TemplateKind::SplitA => {
            blocks.push(static_block(
                "Block A (Push)",
                vec![
                    scale_exercise(&push, multiplier),
                    scale_exercise(&triceps, multiplier),
                ],
            ));
            blocks.push(static_block(
                "Block B (Core)",
                vec![scale_exercise(&core, multiplier)],
            ));
        }
        TemplateKind::SplitB => {
            blocks.push(static_block(
                "Block A (Legs)",
                vec![scale_exercise(&legs, multiplier)],
            ));
            blocks.push(static_block(
                "Block B (Core + stability)",
                vec![scale_exercise(&core, multiplier)],
            ));
        }
        TemplateKind::Full => {
            blocks.push(static_block(
                "Block A (Strength)",
                vec![
                    scale_exercise(&push, multiplier),
                    scale_exercise(&legs, multiplier),
                ],
            ));
            blocks.push(static_block(
                "Block B (Accessories)",
                vec![
                    scale_exercise(&triceps, multiplier),
                    scale_exercise(&core, multiplier),
                ],
            ));
        }
    }

    // The finisher is appended for every tier, matching long-standing
    // behavior; see the generator tests for the pinned expectation.
    blocks.push(static_block(
        "Finisher (optional, 3-6 min)",
        vec![scale_exercise(&conditioning, multiplier)],
    ));
    blocks.push(cooldown_block());

    Ok(WorkoutPlan {
        date,
        template_id: template.id.clone(),
        name: template.name.clone(),
        estimated_minutes: template.estimated_minutes,
        transformation,
        notes: template.notes.clone(),
        blocks,
    })
}
