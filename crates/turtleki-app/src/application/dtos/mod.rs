mod export_dto;
mod outcome_dto;
mod overview_dto;

pub use export_dto::ExportPayload;
pub use outcome_dto::{ClaimOutcome, QuestOutcome, WorkoutOutcome};
pub use overview_dto::{DailyKiPointDto, TodayOverviewDto};
