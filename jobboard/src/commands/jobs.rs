use std::collections::BTreeSet;

use chrono::Utc;
use clap::{Args, Subcommand};
use jobboard_config::Config;
use jobboard_core_jobs_contracts::JobsFeatureService;
use jobboard_core_listing::{
    self as listing, days_ago_label, salary_range_label, ListingQuery, SortKey,
};
use jobboard_models::job::{JobPosting, JobType};
use uuid::Uuid;

use crate::{database, environment};

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List approved postings
    #[command(aliases(["ls", "l"]))]
    List(ListArgs),
    /// Show a single approved posting
    #[command(aliases(["g"]))]
    Get { id: Uuid },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show postings whose title, company or description contain this
    /// text
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(short, long, help = job_type_help())]
    pub job_type: Vec<String>,
    /// Only show postings in one of these locations
    #[arg(short, long)]
    pub location: Vec<String>,
    /// Sort order (newest, oldest, salary-high-low, salary-low-high,
    /// title-asc, title-desc)
    #[arg(long, default_value_t)]
    pub sort: SortKey,
}

fn job_type_help() -> String {
    let known = JobType::ALL.map(JobType::as_str).join(", ");
    format!("Only show postings with one of these job types ({known})")
}

impl JobsCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let db = database::connect(&config.database).await?;
        let jobs = environment::jobs_feature(db);

        match self {
            Self::List(args) => list(jobs, args).await,
            Self::Get { id } => get(jobs, id).await,
        }
    }
}

async fn list(jobs: impl JobsFeatureService, args: ListArgs) -> anyhow::Result<()> {
    let ListArgs {
        search,
        job_type,
        location,
        sort,
    } = args;

    let query = ListingQuery {
        search_text: search.unwrap_or_default(),
        selected_job_types: job_type.into_iter().collect(),
        selected_locations: location.into_iter().collect(),
        sort_key: sort,
    };

    let approved = jobs.list_approved().await?;
    let result = listing::apply(&approved, &query);
    if result.is_empty() {
        println!("No jobs found");
        if query.has_filters() {
            print_facets(&approved);
        }
    }

    let now = Utc::now();
    for job in &result {
        println!(
            "{featured}{title} @ {company} | {location} | {job_type} | {salary} | {posted} | {id}",
            featured = if job.is_featured { "* " } else { "" },
            title = job.job_title,
            company = job.company_name,
            location = job.location,
            job_type = job.job_type,
            salary = salary_range_label(&job.salary),
            posted = days_ago_label(job.created_at, now),
            id = *job.id,
        );
    }

    Ok(())
}

fn print_facets(jobs: &[JobPosting]) {
    let (job_types, locations) = listing::facet_values(jobs);
    let join = |values: BTreeSet<&str>| values.into_iter().collect::<Vec<_>>().join(", ");
    println!("Available job types: {}", join(job_types));
    println!("Available locations: {}", join(locations));
}

async fn get(jobs: impl JobsFeatureService, id: Uuid) -> anyhow::Result<()> {
    let job = jobs.get_approved(id.into()).await?;
    print_job(&job);
    Ok(())
}

fn print_job(job: &JobPosting) {
    println!("{}", job.job_title);
    println!("{} | {} | {}", job.company_name, job.location, job.job_type);
    println!("Salary: {}", salary_range_label(&job.salary));
    println!("Posted: {}", days_ago_label(job.created_at, Utc::now()));
    println!();
    println!("{}", job.description);
    if let Some(company_description) = &job.company_description {
        println!();
        println!("About {}: {company_description}", job.company_name);
    }
    println!();
    println!("Contact: {}", job.contact_email);
    if let Some(phone) = &job.contact_phone {
        println!("Phone: {phone}");
    }
}
