use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use jobboard_core_health_contracts::HealthFeatureService;
use jobboard_core_jobs_contracts::JobsFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Jobs> {
    health: Health,
    jobs: Jobs,
}

impl<Health, Jobs> RestServer<Health, Jobs>
where
    Health: HealthFeatureService,
    Jobs: JobsFeatureService,
{
    pub fn new(health: Health, jobs: Jobs) -> Self {
        Self { health, jobs }
    }

    pub async fn serve(self, address: SocketAddr) -> anyhow::Result<()> {
        let listener = TcpListener::bind(address).await?;
        self.serve_on(listener).await
    }

    /// Serves requests on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router()).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .merge(routes::jobs::router(Arc::new(self.jobs)));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
