use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Structural type of a template: one unified full-body session, or one
/// side of a two-day split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Full,
    SplitA,
    SplitB,
}

/// A workout prescription tier. Base prescriptions come from the
/// exercise catalog and are scaled by difficulty at plan time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub min_ki: u32,
    pub estimated_minutes: u32,
    pub kind: TemplateKind,
    pub notes: Vec<String>,
}

fn template(
    id: &str,
    name: &str,
    min_ki: u32,
    estimated_minutes: u32,
    kind: TemplateKind,
    notes: &[&str],
) -> WorkoutTemplate {
    WorkoutTemplate {
        id: id.to_string(),
        name: name.to_string(),
        min_ki,
        estimated_minutes,
        kind,
        notes: notes.iter().map(|n| n.to_string()).collect(),
    }
}

pub static TEMPLATES: Lazy<Vec<WorkoutTemplate>> = Lazy::new(|| {
    vec![
        template(
            "turtle_basic",
            "Turtle School - Foundations",
            0,
            18,
            TemplateKind::Full,
            &["Technique over speed", "Leave 1-2 reps in reserve"],
        ),
        template(
            "turtle_kaioken",
            "Kaioken - Controlled volume",
            100,
            22,
            TemplateKind::Full,
            &["Breathe and control the pace", "Take full rests"],
        ),
        template(
            "turtle_kaioken10",
            "Kaioken x10 - Intensity",
            300,
            26,
            TemplateKind::Full,
            &["Keep strict form", "Joint pain means drop a variant"],
        ),
        template(
            "turtle_ssj_A",
            "Super Saiyan - Day A (Push + core)",
            600,
            28,
            TemplateKind::SplitA,
            &["Push volume goes up", "Solid core"],
        ),
        template(
            "turtle_ssj_B",
            "Super Saiyan - Day B (Legs + core)",
            600,
            28,
            TemplateKind::SplitB,
            &["Legs and stability", "Watch knee tracking"],
        ),
        template(
            "turtle_ssj2_A",
            "SSJ2 - Power (A)",
            1000,
            32,
            TemplateKind::SplitA,
            &["Explosive but controlled", "Do not chase failure"],
        ),
        template(
            "turtle_ssj2_B",
            "SSJ2 - Power (B)",
            1000,
            32,
            TemplateKind::SplitB,
            &["Moderate jumps", "Full recovery"],
        ),
        template(
            "turtle_ssj3",
            "SSJ3 - Endurance",
            1500,
            34,
            TemplateKind::Full,
            &["Circuits", "Steady pace"],
        ),
        template(
            "turtle_ssj4",
            "SSJ4 - Total strength",
            2200,
            36,
            TemplateKind::Full,
            &["Body control", "Warm up well"],
        ),
        template(
            "turtle_god",
            "Saiyan God - Precision",
            3000,
            30,
            TemplateKind::Full,
            &["Less but better", "Perfect reps"],
        ),
        template(
            "turtle_blue",
            "Blue - Explosive",
            4000,
            34,
            TemplateKind::Full,
            &["Explosiveness plus technique", "Enough rest"],
        ),
        template(
            "turtle_blue_kaioken",
            "Blue + Kaioken - Alternating",
            5500,
            36,
            TemplateKind::Full,
            &["Self-regulate", "Exhausted? Switch to quick mode"],
        ),
        template(
            "turtle_ui",
            "Ultra Instinct - Flow",
            7000,
            34,
            TemplateKind::Full,
            &["Flow", "Clean movement"],
        ),
        template(
            "turtle_mui",
            "Mastered UI - Mastery",
            9000,
            36,
            TemplateKind::Full,
            &["Consistency", "Details and breathing"],
        ),
    ]
});
