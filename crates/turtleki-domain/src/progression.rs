//! Maps a lifetime KI total onto the transformation ladder.

use serde::{Deserialize, Serialize};

use crate::catalog::{Transformation, TRANSFORMATIONS};

/// The highest transformation reached. The ladder starts at 0 KI, so
/// this always resolves.
pub fn current_transformation(ki_total: u32) -> &'static Transformation {
    let mut current = &TRANSFORMATIONS[0];
    for t in TRANSFORMATIONS.iter() {
        if ki_total >= t.min_ki {
            current = t;
        }
    }
    current
}

/// The next rung to unlock, or `None` at the top of the ladder.
pub fn next_transformation(ki_total: u32) -> Option<&'static Transformation> {
    TRANSFORMATIONS.iter().find(|t| ki_total < t.min_ki)
}

pub fn unlocked_transformations(ki_total: u32) -> Vec<&'static Transformation> {
    TRANSFORMATIONS
        .iter()
        .filter(|t| ki_total >= t.min_ki)
        .collect()
}

/// Combined progression view for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub current_name: String,
    pub next_name: Option<String>,
    pub current_ki: u32,
    pub next_ki: Option<u32>,
    pub remaining: Option<u32>,
}

pub fn progress_to_next(ki_total: u32) -> Progress {
    let current = current_transformation(ki_total);
    let next = next_transformation(ki_total);
    Progress {
        current_name: format!("{} {}", current.glyph, current.name),
        next_name: next.map(|t| format!("{} {}", t.glyph, t.name)),
        current_ki: ki_total,
        next_ki: next.map(|t| t.min_ki),
        remaining: next.map(|t| t.min_ki.saturating_sub(ki_total)),
    }
}
