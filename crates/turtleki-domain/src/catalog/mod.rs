// Compiled-in catalog tables. Pure data, no behavior beyond lookups.

mod exercises;
mod quests;
mod templates;
mod transformations;

pub use exercises::{pick_best_exercise, Exercise, EXERCISES};
pub use quests::{quest_by_id, QuestDefinition, DAILY_QUESTS, WALK_OR_MOBILITY_QUEST_ID};
pub use templates::{TemplateKind, WorkoutTemplate, TEMPLATES};
pub use transformations::{Transformation, TransformationKey, TRANSFORMATIONS};
