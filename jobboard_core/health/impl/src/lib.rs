use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use jobboard_core_health_contracts::{HealthFeatureService, HealthStatus};
use jobboard_persistence_contracts::Database;
use jobboard_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time, Db> {
    time: Time,
    db: Db,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db> HealthFeatureServiceImpl<Time, Db> {
    pub fn new(time: Time, db: Db, config: HealthFeatureConfig) -> Self {
        Self {
            time,
            db,
            config,
            state: Default::default(),
        }
    }
}

impl<Time, Db> HealthFeatureService for HealthFeatureServiceImpl<Time, Db>
where
    Time: TimeService,
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err:#}"))
            .is_ok();

        cache_guard
            .insert(CachedStatus {
                status: HealthStatus { database },
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use jobboard_demo::NOW;
    use jobboard_persistence_contracts::MockDatabase;
    use jobboard_shared_contracts::time::MockTimeService;

    use super::*;

    const TTL: Duration = Duration::from_secs(10);

    type Sut = HealthFeatureServiceImpl<MockTimeService, MockDatabase>;

    fn sut(time: MockTimeService, db: MockDatabase) -> Sut {
        Sut::new(time, db, HealthFeatureConfig { cache_ttl: TTL })
    }

    #[tokio::test]
    async fn database_up() {
        // Arrange
        let sut = sut(
            MockTimeService::new().with_now(*NOW),
            MockDatabase::new().with_ping(true),
        );

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { database: true });
    }

    #[tokio::test]
    async fn database_down() {
        // Arrange
        let sut = sut(
            MockTimeService::new().with_now(*NOW),
            MockDatabase::new().with_ping(false),
        );

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { database: false });
    }

    #[tokio::test]
    async fn cached_until_ttl_expires() {
        // Arrange
        let mut time = MockTimeService::new();
        let mut seq = mockall::Sequence::new();
        for offset in [TimeDelta::zero(), TimeDelta::seconds(9), TimeDelta::seconds(10)] {
            time.expect_now()
                .once()
                .in_sequence(&mut seq)
                .return_const(*NOW + offset);
        }
        let mut db = MockDatabase::new();
        let mut pings = mockall::Sequence::new();
        db.expect_ping()
            .once()
            .in_sequence(&mut pings)
            .return_once(|| Box::pin(std::future::ready(Ok(()))));
        db.expect_ping()
            .once()
            .in_sequence(&mut pings)
            .return_once(|| Box::pin(std::future::ready(Err(anyhow::anyhow!("gone")))));

        let sut = sut(time, db);

        // Act
        let first = sut.get_status().await;
        let cached = sut.get_status().await;
        let refreshed = sut.get_status().await;

        // Assert
        assert!(first.database);
        assert!(cached.database);
        assert!(!refreshed.database);
    }
}
