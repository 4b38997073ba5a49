use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};
use jobboard_core_jobs_contracts::{JobGetError, JobListError, JobSubmitError, JobsFeatureService};
use jobboard_core_listing as listing;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    errors::{failure, internal_server_error, success},
    models::job::{ApiJobPosting, ApiListingQuery, ApiRawJobInput},
};

pub const CREATED_MESSAGE: &str = "Job posted successfully and awaiting approval";

pub fn router(service: Arc<impl JobsFeatureService>) -> Router<()> {
    Router::new()
        .route("/jobs", routing::get(list).post(create))
        .route("/jobs/:id", routing::get(get))
        .with_state(service)
}

async fn list(
    service: State<Arc<impl JobsFeatureService>>,
    query: Result<Query<ApiListingQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    let jobs = match service.list_approved().await {
        Ok(jobs) => jobs,
        Err(JobListError::StoreUnavailable(err)) => {
            return internal_server_error(err.context("Job store unavailable"))
        }
    };

    let jobs = match query.into_listing_query() {
        Some(query) => listing::apply(&jobs, &query),
        None => jobs,
    };

    success(
        StatusCode::OK,
        None,
        jobs.into_iter()
            .map(ApiJobPosting::from)
            .collect::<Vec<_>>(),
    )
}

async fn get(
    service: State<Arc<impl JobsFeatureService>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return failure(StatusCode::NOT_FOUND, &JobGetError::NotFound.to_string());
    };

    match service.get_approved(id.into()).await {
        Ok(job) => success(StatusCode::OK, None, ApiJobPosting::from(job)),
        Err(err @ JobGetError::NotFound) => failure(StatusCode::NOT_FOUND, &err.to_string()),
        Err(JobGetError::StoreUnavailable(err)) => {
            internal_server_error(err.context("Job store unavailable"))
        }
    }
}

async fn create(
    service: State<Arc<impl JobsFeatureService>>,
    input: Result<Json<ApiRawJobInput>, JsonRejection>,
) -> Response {
    let input = match input {
        Ok(Json(input)) => input,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    match service.submit(input.into()).await {
        Ok(job) => {
            info!(job_id = %*job.id, "Job submitted for approval");
            success(
                StatusCode::CREATED,
                Some(CREATED_MESSAGE),
                ApiJobPosting::from(job),
            )
        }
        Err(err @ JobSubmitError::Validation(_)) => {
            failure(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err @ JobSubmitError::StoreUnavailable(_)) => {
            error!("Failed to store job: {:#}", anyhow::Error::from(err));
            failure(StatusCode::BAD_REQUEST, "Job store unavailable")
        }
    }
}
