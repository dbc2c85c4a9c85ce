use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use turtleki_domain::ledger::{KiActionEntry, QuestCompletion, WorkoutEntry};

/// Everything the day screen needs in one read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayOverviewDto {
    pub quests: Vec<QuestCompletion>,
    pub actions: Vec<KiActionEntry>,
    pub workouts: Vec<WorkoutEntry>,
}

/// One point of the progress chart: KI earned that day plus the running
/// total. Days without entries appear with `ki = 0` so the series is
/// continuous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyKiPointDto {
    pub date: NaiveDate,
    pub ki: u32,
    pub cumulative: u32,
}
