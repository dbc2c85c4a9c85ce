//! Composition root. A UI host (desktop shell, CLI, test harness) opens
//! one `TurtleKiApp` and talks to the services; nothing here renders or
//! schedules anything.

use std::sync::Arc;

use anyhow::Context;

use turtleki_domain::ledger::{
    ActionLogRepository, LedgerUnitOfWork, QuestLogRepository, SnapshotRepository,
    WorkoutLogRepository,
};
use turtleki_domain::player::PlayerRepository;
use turtleki_domain::settings::SettingsRepository;
use turtleki_domain::shared::date;
use turtleki_infrastructure::logging::init_logger;
use turtleki_infrastructure::persistence::repositories::{
    SqliteActionLogRepository, SqlitePlayerRepository, SqliteQuestLogRepository,
    SqliteSettingsRepository, SqliteSnapshotRepository, SqliteWorkoutLogRepository,
};
use turtleki_infrastructure::persistence::{Database, SqliteLedgerUnitOfWork};

use crate::application::queries::{HistoryQueries, ProgressQueries};
use crate::application::seeder::Seeder;
use crate::application::services::{DataTransferService, GameService, QuestService};

pub struct TurtleKiApp {
    pub game: Arc<GameService>,
    pub quests: Arc<QuestService>,
    pub data_transfer: Arc<DataTransferService>,
    pub progress: Arc<ProgressQueries>,
    pub history: Arc<HistoryQueries>,
}

impl TurtleKiApp {
    /// Open the app against the platform data directory, with logging
    /// into its `logs/` subdirectory.
    pub async fn open_default() -> anyhow::Result<Self> {
        let data_dir = dirs::data_dir()
            .context("no platform data directory")?
            .join("turtleki");

        init_logger(data_dir.join("logs"))?;

        let db_path = data_dir.join("turtleki.db");
        let db_path = db_path.to_str().context("non UTF-8 data directory")?;
        Self::open(db_path).await
    }

    /// Open the app against a specific database file.
    pub async fn open(db_path: &str) -> anyhow::Result<Self> {
        let db = Database::new(db_path).await?;
        Self::assemble(db).await
    }

    /// Fully in-memory instance for tests and throwaway sessions.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let db = Database::in_memory().await?;
        Self::assemble(db).await
    }

    async fn assemble(db: Database) -> anyhow::Result<Self> {
        db.run_migrations().await?;
        let pool = Arc::new(db.pool().clone());

        let player_repo: Arc<dyn PlayerRepository> =
            Arc::new(SqlitePlayerRepository::new(pool.clone()));
        let settings_repo: Arc<dyn SettingsRepository> =
            Arc::new(SqliteSettingsRepository::new(pool.clone()));
        let action_log: Arc<dyn ActionLogRepository> =
            Arc::new(SqliteActionLogRepository::new(pool.clone()));
        let quest_log: Arc<dyn QuestLogRepository> =
            Arc::new(SqliteQuestLogRepository::new(pool.clone()));
        let workout_log: Arc<dyn WorkoutLogRepository> =
            Arc::new(SqliteWorkoutLogRepository::new(pool.clone()));
        let snapshot_repo: Arc<dyn SnapshotRepository> =
            Arc::new(SqliteSnapshotRepository::new(pool.clone()));
        let ledger: Arc<dyn LedgerUnitOfWork> =
            Arc::new(SqliteLedgerUnitOfWork::new(pool.clone()));

        let seeder = Arc::new(Seeder::new(player_repo.clone(), settings_repo.clone()));
        seeder.seed_if_needed().await?;

        let game = Arc::new(GameService::new(
            player_repo.clone(),
            settings_repo.clone(),
            action_log.clone(),
            workout_log.clone(),
            ledger,
        ));

        // roll the daily counters as soon as the store is open
        game.ensure_daily_reset(date::today()).await?;

        let quests = Arc::new(QuestService::new(quest_log.clone(), game.clone()));
        let data_transfer = Arc::new(DataTransferService::new(snapshot_repo, seeder));
        let progress = Arc::new(ProgressQueries::new(
            player_repo.clone(),
            settings_repo.clone(),
            action_log.clone(),
        ));
        let history = Arc::new(HistoryQueries::new(action_log, quest_log, workout_log));

        Ok(Self {
            game,
            quests,
            data_transfer,
            progress,
            history,
        })
    }
}
