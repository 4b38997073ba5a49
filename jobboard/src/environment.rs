//! Concrete service types and how they are put together.

use jobboard_config::Config;
use jobboard_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use jobboard_core_jobs_impl::JobsFeatureServiceImpl;
use jobboard_draft_impl::{DraftStoreImpl, FileDraftPersistence};
use jobboard_persistence_postgres::{jobs::PostgresJobsRepository, PostgresDatabase};
use jobboard_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = jobboard_api_rest::RestServer<HealthFeature, JobsFeature>;

// Persistence
pub type Database = PostgresDatabase;
pub type JobsRepo = PostgresJobsRepository;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database>;
pub type JobsFeature = JobsFeatureServiceImpl<Database, Id, Time, JobsRepo>;

// Draft
pub type DraftStore = DraftStoreImpl<FileDraftPersistence>;

pub fn jobs_feature(db: Database) -> JobsFeature {
    JobsFeature::new(db, Id::default(), Time::default(), JobsRepo::default())
}

pub fn health_feature(config: &Config, db: Database) -> HealthFeature {
    HealthFeature::new(
        Time::default(),
        db,
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    )
}

pub fn rest_server(config: &Config, db: Database) -> RestServer {
    RestServer::new(health_feature(config, db.clone()), jobs_feature(db))
}

pub fn draft_store(config: &Config) -> DraftStore {
    DraftStore::load(FileDraftPersistence::new(&config.draft.path))
}
