use std::sync::LazyLock;

use chrono::TimeDelta;
use jobboard_models::job::{JobPosting, JobStatus};
use jobboard_persistence_contracts::jobs::JobsRepository;
use uuid::{uuid, Uuid};

use crate::NOW;

pub static FRONTEND_DEVELOPER: LazyLock<JobPosting> = LazyLock::new(|| {
    approved(
        uuid!("c4dba95e-8498-40fb-8412-7faecaf94787"),
        2,
        true,
        [
            "Frontend Developer",
            "TechCorp",
            "We are looking for an experienced frontend developer to join our team building modern web applications with React and Next.js.",
            "Full-Time",
            "$80K - $120K",
            "San Francisco",
        ],
    )
});

pub static UX_DESIGNER: LazyLock<JobPosting> = LazyLock::new(|| {
    approved(
        uuid!("2b6f0cc9-1c0a-4a8e-9d47-5c3f6f1e8a01"),
        5,
        false,
        [
            "UX Designer",
            "DesignHub",
            "Join our design team to create beautiful and intuitive user experiences for our products. Experience with Figma required.",
            "Full-Time",
            "$70K - $100K",
            "Remote",
        ],
    )
});

pub static BACKEND_ENGINEER: LazyLock<JobPosting> = LazyLock::new(|| {
    approved(
        uuid!("7e1d4f3a-8b2c-4d5e-9f60-1a2b3c4d5e6f"),
        1,
        true,
        [
            "Backend Engineer",
            "DataSystems",
            "Looking for a backend engineer to develop and maintain our server infrastructure and APIs using Node.js and MongoDB.",
            "Full-Time",
            "$90K - $130K",
            "New York",
        ],
    )
});

pub static MARKETING_INTERN: LazyLock<JobPosting> = LazyLock::new(|| {
    approved(
        uuid!("a3c5e7f9-0b1d-4f2a-8c3e-5d7f9a1b3c5e"),
        7,
        false,
        [
            "Marketing Intern",
            "GrowthMarketing",
            "Summer internship opportunity for marketing students to learn digital marketing strategies and campaign management.",
            "Internship",
            "$20K - $25K",
            "London",
        ],
    )
});

pub static DEVOPS_SPECIALIST: LazyLock<JobPosting> = LazyLock::new(|| {
    approved(
        uuid!("5f4e3d2c-1b0a-4987-a654-3210fedcba98"),
        3,
        true,
        [
            "DevOps Specialist",
            "CloudSolutions",
            "Seeking a DevOps engineer to streamline our deployment processes and cloud infrastructure using AWS and Kubernetes.",
            "Contract",
            "$110K - $150K",
            "Remote",
        ],
    )
});

pub static PRODUCT_MANAGER: LazyLock<JobPosting> = LazyLock::new(|| {
    approved(
        uuid!("0f9e8d7c-6b5a-4493-8281-706f5e4d3c2b"),
        10,
        false,
        [
            "Product Manager",
            "InnovateTech",
            "Lead product development from conception to launch, working with engineering, design, and marketing teams.",
            "Full-Time",
            "$100K - $140K",
            "San Francisco",
        ],
    )
});

/// Submitted today, still waiting for moderation.
pub static DATA_ANALYST: LazyLock<JobPosting> = LazyLock::new(|| JobPosting {
    status: JobStatus::Pending,
    is_featured: false,
    contact_phone: Some("+1-5551234567".into()),
    company_description: Some("Numbers, but friendly.".into()),
    ..approved(
        uuid!("d1e2f3a4-b5c6-4d7e-8f90-a1b2c3d4e5f6"),
        0,
        false,
        [
            "Data Analyst",
            "Numbersmith",
            "Turn raw data into insights for our product and design teams.",
            "Part-Time",
            "Under $50K",
            "Remote",
        ],
    )
});

/// Every demo posting in insertion order.
pub static ALL_JOBS: LazyLock<Vec<&JobPosting>> = LazyLock::new(|| {
    vec![
        &FRONTEND_DEVELOPER,
        &UX_DESIGNER,
        &BACKEND_ENGINEER,
        &MARKETING_INTERN,
        &DEVOPS_SPECIALIST,
        &PRODUCT_MANAGER,
        &DATA_ANALYST,
    ]
});

/// The public listing of the demo dataset, newest first.
pub static APPROVED_JOBS: LazyLock<Vec<&JobPosting>> = LazyLock::new(|| {
    vec![
        &BACKEND_ENGINEER,
        &FRONTEND_DEVELOPER,
        &DEVOPS_SPECIALIST,
        &UX_DESIGNER,
        &MARKETING_INTERN,
        &PRODUCT_MANAGER,
    ]
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl JobsRepository<Txn>,
) -> anyhow::Result<()> {
    for &job in &*ALL_JOBS {
        repo.create(txn, job).await?;
    }

    Ok(())
}

fn approved(id: Uuid, days_ago: i64, is_featured: bool, fields: [&str; 6]) -> JobPosting {
    let [job_title, company_name, description, job_type, salary, location] =
        fields.map(ToOwned::to_owned);
    let created_at = *NOW - TimeDelta::days(days_ago);

    JobPosting {
        id: id.into(),
        contact_email: format!(
            "jobs@{}.example",
            company_name.to_lowercase()
        ),
        job_title,
        company_name,
        description,
        job_type,
        salary,
        location,
        contact_phone: None,
        company_description: None,
        status: JobStatus::Approved,
        is_featured,
        created_at,
        updated_at: created_at,
    }
}
