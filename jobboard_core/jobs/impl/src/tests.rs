use jobboard_core_jobs_contracts::{
    JobCreateError, JobGetError, JobListError, JobSubmitError, JobsFeatureService,
};
use jobboard_demo::{
    jobs::{APPROVED_JOBS, DATA_ANALYST, FRONTEND_DEVELOPER},
    NOW, UUID1,
};
use jobboard_models::{
    job::{JobId, JobPosting, JobStatus, RawJobInput},
    validation::{validate, JobField, ValidationError},
};
use jobboard_persistence_contracts::{
    jobs::MockJobsRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::{id::MockIdService, time::MockTimeService};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::JobsFeatureServiceImpl;

type Sut = JobsFeatureServiceImpl<
    MockDatabase,
    MockIdService,
    MockTimeService,
    MockJobsRepository<MockTransaction>,
>;

fn submission() -> RawJobInput {
    RawJobInput {
        job_title: Some("Site Reliability Engineer".into()),
        company_name: Some("UptimeCo".into()),
        description: Some("Keep the lights on.".into()),
        job_type: Some("Full-Time".into()),
        salary: Some("$120K - $160K".into()),
        location: Some("Berlin".into()),
        contact_email: Some("hiring@uptime.example".into()),
        contact_phone: Some("+49 1512345678".into()),
        company_description: None,
    }
}

fn expected_posting() -> JobPosting {
    JobPosting {
        id: UUID1.into(),
        job_title: "Site Reliability Engineer".into(),
        company_name: "UptimeCo".into(),
        description: "Keep the lights on.".into(),
        job_type: "Full-Time".into(),
        salary: "$120K - $160K".into(),
        location: "Berlin".into(),
        contact_email: "hiring@uptime.example".into(),
        contact_phone: Some("+49 1512345678".into()),
        company_description: None,
        status: JobStatus::Pending,
        is_featured: false,
        created_at: *NOW,
        updated_at: *NOW,
    }
}

#[tokio::test]
async fn list_approved_ok() {
    // Arrange
    let expected = APPROVED_JOBS.iter().copied().cloned().collect::<Vec<_>>();

    let db = MockDatabase::build(false);
    let jobs_repo =
        MockJobsRepository::new().with_list_by_status(JobStatus::Approved, expected.clone());

    let sut = Sut {
        db,
        jobs_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_approved().await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn list_approved_empty() {
    // Arrange
    let db = MockDatabase::build(false);
    let jobs_repo = MockJobsRepository::new().with_list_by_status(JobStatus::Approved, vec![]);

    let sut = Sut {
        db,
        jobs_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_approved().await;

    // Assert
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn list_approved_connection_refused() {
    // Arrange
    let sut = Sut {
        db: MockDatabase::unavailable(),
        ..Sut::default()
    };

    // Act
    let result = sut.list_approved().await;

    // Assert
    assert_matches!(result, Err(JobListError::StoreUnavailable(_)));
}

#[tokio::test]
async fn list_approved_query_failed() {
    // Arrange
    let db = MockDatabase::build(false);
    let jobs_repo = MockJobsRepository::new().with_list_by_status_error(JobStatus::Approved);

    let sut = Sut {
        db,
        jobs_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_approved().await;

    // Assert
    assert_matches!(result, Err(JobListError::StoreUnavailable(_)));
}

#[tokio::test]
async fn get_approved_ok() {
    // Arrange
    let db = MockDatabase::build(false);
    let jobs_repo = MockJobsRepository::new()
        .with_get(FRONTEND_DEVELOPER.id, Some(FRONTEND_DEVELOPER.clone()));

    let sut = Sut {
        db,
        jobs_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_approved(FRONTEND_DEVELOPER.id).await;

    // Assert
    assert_eq!(result.unwrap(), *FRONTEND_DEVELOPER);
}

#[tokio::test]
async fn get_approved_pending_is_not_found() {
    // Arrange
    let db = MockDatabase::build(false);
    let jobs_repo =
        MockJobsRepository::new().with_get(DATA_ANALYST.id, Some(DATA_ANALYST.clone()));

    let sut = Sut {
        db,
        jobs_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_approved(DATA_ANALYST.id).await;

    // Assert
    assert_matches!(result, Err(JobGetError::NotFound));
}

#[tokio::test]
async fn get_approved_unknown_is_not_found() {
    // Arrange
    let db = MockDatabase::build(false);
    let jobs_repo = MockJobsRepository::new().with_get(UUID1.into(), None);

    let sut = Sut {
        db,
        jobs_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_approved(UUID1.into()).await;

    // Assert
    assert_matches!(result, Err(JobGetError::NotFound));
}

#[tokio::test]
async fn create_pending_ok() {
    // Arrange
    let expected = expected_posting();

    let db = MockDatabase::build(true);
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(*NOW);
    let jobs_repo = MockJobsRepository::new().with_create(expected.clone(), true);

    let sut = Sut {
        db,
        id,
        time,
        jobs_repo,
    };

    // Act
    let result = sut.create_pending(validate(&submission()).unwrap()).await;

    // Assert
    let job = result.unwrap();
    assert_eq!(job, expected);
    assert_eq!(job.created_at, job.updated_at);
}

#[tokio::test]
async fn create_pending_write_failed() {
    // Arrange
    let expected = expected_posting();

    let db = MockDatabase::build(false);
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(*NOW);
    let jobs_repo = MockJobsRepository::new().with_create(expected, false);

    let sut = Sut {
        db,
        id,
        time,
        jobs_repo,
    };

    // Act
    let result = sut.create_pending(validate(&submission()).unwrap()).await;

    // Assert
    assert_matches!(result, Err(JobCreateError::StoreUnavailable(_)));
}

#[tokio::test]
async fn create_pending_connection_refused() {
    // Arrange
    let sut = Sut {
        db: MockDatabase::unavailable(),
        id: MockIdService::new().with_generate(JobId::from(UUID1)),
        time: MockTimeService::new().with_now(*NOW),
        ..Sut::default()
    };

    // Act
    let result = sut.create_pending(validate(&submission()).unwrap()).await;

    // Assert
    assert_matches!(result, Err(JobCreateError::StoreUnavailable(_)));
}

#[tokio::test]
async fn submit_ok() {
    // Arrange
    let expected = expected_posting();

    let db = MockDatabase::build(true);
    let id = MockIdService::new().with_generate(expected.id);
    let time = MockTimeService::new().with_now(*NOW);
    let jobs_repo = MockJobsRepository::new().with_create(expected.clone(), true);

    let sut = Sut {
        db,
        id,
        time,
        jobs_repo,
    };

    // Act
    let result = sut.submit(submission()).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn submit_missing_title_touches_nothing() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(RawJobInput {
            job_title: None,
            ..submission()
        })
        .await;

    // Assert
    assert_matches!(
        result,
        Err(JobSubmitError::Validation(ValidationError::MissingField(
            JobField::JobTitle
        )))
    );
}

#[tokio::test]
async fn submit_invalid_phone() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(RawJobInput {
            contact_phone: Some("12345".into()),
            ..submission()
        })
        .await;

    // Assert
    assert_matches!(
        result,
        Err(JobSubmitError::Validation(ValidationError::InvalidPhone))
    );
}

#[tokio::test]
async fn submit_store_unavailable() {
    // Arrange
    let sut = Sut {
        db: MockDatabase::unavailable(),
        id: MockIdService::new().with_generate(JobId::from(UUID1)),
        time: MockTimeService::new().with_now(*NOW),
        ..Sut::default()
    };

    // Act
    let result = sut.submit(submission()).await;

    // Assert
    assert_matches!(result, Err(JobSubmitError::StoreUnavailable(_)));
}
