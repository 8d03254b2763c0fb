use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use advisor_core::{
    advisors::{
        AdvisorCommandService, AdvisorCommandServiceTrait, AdvisorProfile,
        AdvisorProfileValidator, AdvisorQueryService, AdvisorQueryServiceTrait,
        AdvisorRepositoryTrait,
    },
    health_status::HealthStatusGenerator,
    pagination::Paginator,
};
use advisor_storage_memory::InMemoryRepository;
use advisor_storage_sqlite::{db, AdvisorRepository};

pub struct AppState {
    pub advisor_command_service: Arc<dyn AdvisorCommandServiceTrait>,
    pub advisor_query_service: Arc<dyn AdvisorQueryServiceTrait>,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn AdvisorRepositoryTrait>> {
    let Some(path) = config.db_path.as_deref() else {
        tracing::info!("ADVISOR_DB_PATH not set; advisors are kept in memory");
        return Ok(Arc::new(InMemoryRepository::<AdvisorProfile>::new()));
    };

    let db_path = db::init(path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.as_ref().clone())?;
    Ok(Arc::new(AdvisorRepository::new(pool, writer)))
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let repository = build_repository(config)?;

    let advisor_command_service = Arc::new(AdvisorCommandService::new(
        repository.clone(),
        Arc::new(HealthStatusGenerator::new()),
        Arc::new(AdvisorProfileValidator::new()),
    ));
    let advisor_query_service = Arc::new(AdvisorQueryService::new(repository, Paginator::new()));

    Ok(Arc::new(AppState {
        advisor_command_service,
        advisor_query_service,
        default_page_size: config.default_page_size,
        max_page_size: config.max_page_size,
    }))
}
