use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// A bodyweight exercise prescription. Either `reps` or `time_sec` is
/// set, never both. `min_ki` gates when the variant unlocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub time_sec: Option<u32>,
    pub rest_sec: u32,
    pub min_ki: u32,
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[allow(clippy::too_many_arguments)]
fn reps_exercise(
    id: &str,
    name: &str,
    sets: u32,
    reps: u32,
    rest_sec: u32,
    min_ki: u32,
    tags: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets,
        reps: Some(reps),
        time_sec: None,
        rest_sec,
        min_ki,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: None,
        tips: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn timed_exercise(
    id: &str,
    name: &str,
    sets: u32,
    time_sec: u32,
    rest_sec: u32,
    min_ki: u32,
    tags: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets,
        reps: None,
        time_sec: Some(time_sec),
        rest_sec,
        min_ki,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: None,
        tips: Vec::new(),
    }
}

pub static EXERCISES: Lazy<Vec<Exercise>> = Lazy::new(|| {
    vec![
        // Push
        reps_exercise("pushup_knee", "Knee push-ups", 3, 8, 60, 0, &["push"]),
        reps_exercise("pushup", "Push-ups", 3, 8, 60, 50, &["push"]),
        reps_exercise(
            "pushup_slow",
            "Slow push-ups (3s descent)",
            4,
            10,
            75,
            300,
            &["push"],
        ),
        reps_exercise(
            "pushup_decline",
            "Decline push-ups",
            4,
            10,
            90,
            600,
            &["push"],
        ),
        reps_exercise(
            "dips_chair",
            "Chair/bench dips",
            3,
            10,
            75,
            250,
            &["push", "triceps"],
        ),
        // Legs
        reps_exercise("squat", "Air squats", 3, 15, 60, 0, &["legs"]),
        reps_exercise(
            "squat_pause",
            "Paused squats (1s at bottom)",
            4,
            15,
            75,
            100,
            &["legs"],
        ),
        reps_exercise("lunge", "Lunges", 3, 10, 75, 100, &["legs"]),
        reps_exercise(
            "split_squat",
            "Split squats (static)",
            4,
            10,
            90,
            600,
            &["legs"],
        ),
        reps_exercise(
            "jump_squat",
            "Jump squats",
            4,
            12,
            90,
            1000,
            &["legs", "power"],
        ),
        // Core
        timed_exercise("plank", "Plank", 3, 20, 45, 0, &["core"]),
        timed_exercise("plank_30", "Plank", 3, 30, 45, 100, &["core"]),
        timed_exercise("side_plank", "Side plank", 3, 25, 45, 600, &["core"]),
        timed_exercise("hollow", "Hollow hold", 3, 30, 45, 300, &["core"]),
        timed_exercise(
            "mountain_climbers",
            "Mountain climbers",
            3,
            30,
            45,
            600,
            &["conditioning", "core"],
        ),
        // Conditioning
        reps_exercise("burpees", "Burpees", 4, 8, 90, 1000, &["conditioning"]),
        timed_exercise(
            "bear_crawl",
            "Bear crawl (out and back)",
            4,
            25,
            75,
            1500,
            &["conditioning"],
        ),
    ]
});

/// The most appropriate exercise for a KI total from a candidate id
/// list: the highest-threshold unlocked variant, falling back to the
/// lowest-threshold candidate so a plan is always producible. An empty
/// candidate pool means the caller and catalog disagree.
pub fn pick_best_exercise(ki_total: u32, candidates: &[&str]) -> Result<Exercise, DomainError> {
    let pool: Vec<&Exercise> = EXERCISES
        .iter()
        .filter(|e| candidates.contains(&e.id.as_str()))
        .collect();

    let picked = pool
        .iter()
        .filter(|e| e.min_ki <= ki_total)
        .max_by_key(|e| e.min_ki)
        .or_else(|| pool.iter().min_by_key(|e| e.min_ki))
        .ok_or_else(|| {
            DomainError::DataIntegrity(format!(
                "No exercise candidates found in catalog: {:?}",
                candidates
            ))
        })?;

    Ok((*picked).clone())
}
