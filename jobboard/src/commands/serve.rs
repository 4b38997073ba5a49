use jobboard_config::Config;
use jobboard_persistence_contracts::Database;
use tracing::info;

use crate::{database, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    let server = environment::rest_server(&config, database);
    info!("Starting http server on {}", config.http.address);
    server.serve(config.http.address).await
}
