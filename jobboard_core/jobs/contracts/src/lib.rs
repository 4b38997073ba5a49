use std::future::Future;

use jobboard_models::{
    job::{JobId, JobPosting, RawJobInput, ValidatedJobInput},
    validation::ValidationError,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobsFeatureService: Send + Sync + 'static {
    /// Return all approved postings, newest first.
    fn list_approved(&self) -> impl Future<Output = Result<Vec<JobPosting>, JobListError>> + Send;

    /// Return the approved posting with the given id.
    ///
    /// Pending postings are reported as not found.
    fn get_approved(
        &self,
        job_id: JobId,
    ) -> impl Future<Output = Result<JobPosting, JobGetError>> + Send;

    /// Store a new posting that waits for moderation.
    ///
    /// The posting is created with a fresh id, `status = pending`,
    /// `is_featured = false` and identical creation and update timestamps.
    fn create_pending(
        &self,
        input: ValidatedJobInput,
    ) -> impl Future<Output = Result<JobPosting, JobCreateError>> + Send;

    /// Validate a submission and store it as a pending posting.
    fn submit(
        &self,
        input: RawJobInput,
    ) -> impl Future<Output = Result<JobPosting, JobSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum JobListError {
    #[error("Job store unavailable")]
    StoreUnavailable(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobGetError {
    #[error("Job not found")]
    NotFound,
    #[error("Job store unavailable")]
    StoreUnavailable(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobCreateError {
    #[error("Job store unavailable")]
    StoreUnavailable(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum JobSubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Job store unavailable")]
    StoreUnavailable(#[source] anyhow::Error),
}

impl From<JobCreateError> for JobSubmitError {
    fn from(err: JobCreateError) -> Self {
        match err {
            JobCreateError::StoreUnavailable(err) => Self::StoreUnavailable(err),
        }
    }
}

#[cfg(feature = "mock")]
impl MockJobsFeatureService {
    pub fn with_list_approved(mut self, result: Result<Vec<JobPosting>, JobListError>) -> Self {
        self.expect_list_approved()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_approved(
        mut self,
        job_id: JobId,
        result: Result<JobPosting, JobGetError>,
    ) -> Self {
        self.expect_get_approved()
            .once()
            .with(mockall::predicate::eq(job_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_create_pending(
        mut self,
        input: ValidatedJobInput,
        result: Result<JobPosting, JobCreateError>,
    ) -> Self {
        self.expect_create_pending()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit(
        mut self,
        input: RawJobInput,
        result: Result<JobPosting, JobSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
