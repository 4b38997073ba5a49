use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use jobboard_persistence_contracts::jobs::JobsRepository;
use uuid::{uuid, Uuid};

pub mod jobs;

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");

/// The reference "now" of the demo dataset.
pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap());

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl JobsRepository<Txn>,
) -> anyhow::Result<()> {
    jobs::create(txn, repo).await
}
