use jobboard_api_rest::RestServer;
use jobboard_core_health_contracts::MockHealthFeatureService;
use jobboard_core_jobs_contracts::MockJobsFeatureService;
use tokio::net::TcpListener;

/// Starts the server on an ephemeral port and returns its base url.
pub async fn serve(health: MockHealthFeatureService, jobs: MockJobsFeatureService) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(RestServer::new(health, jobs).serve_on(listener));

    format!("http://{address}")
}

#[allow(dead_code, reason = "unused by the health tests")]
pub async fn serve_jobs(jobs: MockJobsFeatureService) -> String {
    serve(MockHealthFeatureService::new(), jobs).await
}
