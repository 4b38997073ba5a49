use bb8_postgres::tokio_postgres::Row;
use chrono::{DateTime, Utc};
use jobboard_models::job::{JobId, JobPosting, JobStatus};
use jobboard_persistence_contracts::jobs::JobsRepository;
use jobboard_utils::trace_instrument;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresJobsRepository;

columns!(jobs as "j": "id", "job_title", "company_name", "description", "job_type", "salary", "location", "contact_email", "contact_phone", "company_description", "status", "is_featured", "created_at", "updated_at");

impl JobsRepository<PostgresTransaction> for PostgresJobsRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list_by_status(
        &self,
        txn: &mut PostgresTransaction,
        status: JobStatus,
    ) -> anyhow::Result<Vec<JobPosting>> {
        txn.txn()?
            .query(
                &format!(
                    "select {JOBS_COLS} from jobs j where j.status=$1 order by j.created_at desc"
                ),
                &[&status.as_str()],
            )
            .await?
            .iter()
            .map(|row| decode_job(row, &mut Default::default()))
            .collect()
    }

    #[trace_instrument(skip(self, txn))]
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
    ) -> anyhow::Result<Option<JobPosting>> {
        txn.txn()?
            .query_opt(
                &format!("select {JOBS_COLS} from jobs j where j.id=$1"),
                &[&*job_id],
            )
            .await?
            .map(|row| decode_job(&row, &mut Default::default()))
            .transpose()
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(&self, txn: &mut PostgresTransaction, job: &JobPosting) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into jobs ({JOBS_COL_NAMES}) values ({})",
                    arg_indices(1..=JOBS_CNT)
                ),
                &[
                    &*job.id,
                    &job.job_title,
                    &job.company_name,
                    &job.description,
                    &job.job_type,
                    &job.salary,
                    &job.location,
                    &job.contact_email,
                    &job.contact_phone,
                    &job.company_description,
                    &job.status.as_str(),
                    &job.is_featured,
                    &job.created_at,
                    &job.updated_at,
                ],
            )
            .await?;

        Ok(())
    }
}

fn decode_job(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<JobPosting> {
    Ok(JobPosting {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        job_title: row.get(cnt.idx()),
        company_name: row.get(cnt.idx()),
        description: row.get(cnt.idx()),
        job_type: row.get(cnt.idx()),
        salary: row.get(cnt.idx()),
        location: row.get(cnt.idx()),
        contact_email: row.get(cnt.idx()),
        contact_phone: row.get(cnt.idx()),
        company_description: row.get(cnt.idx()),
        status: row.get::<_, &str>(cnt.idx()).parse()?,
        is_featured: row.get(cnt.idx()),
        created_at: row.get::<_, DateTime<Utc>>(cnt.idx()),
        updated_at: row.get::<_, DateTime<Utc>>(cnt.idx()),
    })
}
