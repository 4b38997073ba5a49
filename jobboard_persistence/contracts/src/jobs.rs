use std::future::Future;

use jobboard_models::job::{JobId, JobPosting, JobStatus};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobsRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return all postings with the given status, newest first.
    fn list_by_status(
        &self,
        txn: &mut Txn,
        status: JobStatus,
    ) -> impl Future<Output = anyhow::Result<Vec<JobPosting>>> + Send;

    /// Return the posting with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<JobPosting>>> + Send;

    /// Create a new posting.
    fn create(
        &self,
        txn: &mut Txn,
        job: &JobPosting,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockJobsRepository<Txn> {
    pub fn with_list_by_status(mut self, status: JobStatus, result: Vec<JobPosting>) -> Self {
        self.expect_list_by_status()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(status))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_by_status_error(mut self, status: JobStatus) -> Self {
        self.expect_list_by_status()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(status))
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("query failed"))))
            });
        self
    }

    pub fn with_get(mut self, job_id: JobId, result: Option<JobPosting>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job_id))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, job: JobPosting, ok: bool) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job))
            .return_once(move |_, _| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("write failed"))
                }))
            });
        self
    }
}
