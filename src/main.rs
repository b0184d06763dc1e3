mod settings;

use chrono::Duration;
use database::{HistoryStore, PlayerDatasetLoader};
use engine::{Assistant, PlayerPool, SessionStore, TeamRecommender};
use env_logger::Env;
use log::info;
use parking_lot::Mutex;
use settings::Settings;
use std::sync::Arc;
use std::time::Instant;
use web::{TeamAppData, TeamBuilderServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    dotenv::dotenv().ok();

    let settings = Settings::from_env()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log_filter())).init();

    info!("starting in {} environment", settings.environment);

    let started = Instant::now();

    let table = PlayerDatasetLoader::load(&settings.data_path)?;
    let pool = Arc::new(PlayerPool::from_table(&table)?);

    info!(
        "player pool loaded: {} players, {} ms",
        pool.len(),
        started.elapsed().as_millis()
    );

    let history = HistoryStore::open(&settings.history_path)?;

    let data = TeamAppData {
        recommender: Arc::new(
            TeamRecommender::new(Arc::clone(&pool)).with_language(settings.language),
        ),
        assistant: Arc::new(Assistant::new(pool, settings.language)),
        sessions: Arc::new(Mutex::new(SessionStore::new(Duration::minutes(
            settings.session_ttl_minutes,
        )))),
        history: Arc::new(history),
        default_budget: settings.default_budget,
        environment: settings.environment.clone(),
    };

    TeamBuilderServer::new(data, settings.port, settings.cors_origins)
        .run()
        .await?;

    Ok(())
}
