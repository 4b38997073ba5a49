use jobboard_core_jobs_contracts::{
    JobCreateError, JobGetError, JobListError, JobSubmitError, JobsFeatureService,
};
use jobboard_models::{
    job::{JobId, JobPosting, JobStatus, RawJobInput, ValidatedJobInput},
    validation::validate,
};
use jobboard_persistence_contracts::{jobs::JobsRepository, Database, Transaction};
use jobboard_shared_contracts::{id::IdService, time::TimeService};
use jobboard_utils::trace_instrument;

#[cfg(test)]
mod tests;

/// The job store gateway.
///
/// Every call opens its own transaction. The transaction owns one pooled
/// connection and releases it when dropped, so no connection outlives the
/// call that acquired it.
#[derive(Debug, Clone, Default)]
pub struct JobsFeatureServiceImpl<Db, Id, Time, JobsRepo> {
    db: Db,
    id: Id,
    time: Time,
    jobs_repo: JobsRepo,
}

impl<Db, Id, Time, JobsRepo> JobsFeatureServiceImpl<Db, Id, Time, JobsRepo> {
    pub fn new(db: Db, id: Id, time: Time, jobs_repo: JobsRepo) -> Self {
        Self {
            db,
            id,
            time,
            jobs_repo,
        }
    }
}

impl<Db, Id, Time, JobsRepo> JobsFeatureService for JobsFeatureServiceImpl<Db, Id, Time, JobsRepo>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    JobsRepo: JobsRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_approved(&self) -> Result<Vec<JobPosting>, JobListError> {
        let mut txn = self.db.begin_transaction().await?;

        self.jobs_repo
            .list_by_status(&mut txn, JobStatus::Approved)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn get_approved(&self, job_id: JobId) -> Result<JobPosting, JobGetError> {
        let mut txn = self.db.begin_transaction().await?;

        self.jobs_repo
            .get(&mut txn, job_id)
            .await?
            .filter(JobPosting::is_public)
            .ok_or(JobGetError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn create_pending(&self, input: ValidatedJobInput) -> Result<JobPosting, JobCreateError> {
        let now = self.time.now();

        let ValidatedJobInput {
            job_title,
            company_name,
            description,
            job_type,
            salary,
            location,
            contact_email,
            contact_phone,
            company_description,
            ..
        } = input;

        let job = JobPosting {
            id: self.id.generate(),
            job_title,
            company_name,
            description,
            job_type,
            salary,
            location,
            contact_email,
            contact_phone,
            company_description,
            status: JobStatus::Pending,
            is_featured: false,
            created_at: now,
            updated_at: now,
        };

        let mut txn = self.db.begin_transaction().await?;
        self.jobs_repo.create(&mut txn, &job).await?;
        txn.commit().await?;

        Ok(job)
    }

    #[trace_instrument(skip(self))]
    async fn submit(&self, input: RawJobInput) -> Result<JobPosting, JobSubmitError> {
        let input = validate(&input)?;
        self.create_pending(input).await.map_err(Into::into)
    }
}
