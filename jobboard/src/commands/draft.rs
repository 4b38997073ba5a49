use std::future::Future;

use anyhow::bail;
use clap::{Args, Subcommand};
use jobboard_config::Config;
use jobboard_core_jobs_contracts::JobsFeatureService;
use jobboard_draft_contracts::DraftStore;
use jobboard_models::{
    draft::{DraftFormPatch, DraftState},
    job::JobPosting,
    validation::validate,
};
use tracing::info;

use crate::{database, environment};

#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Print the saved draft
    #[command(aliases(["s"]))]
    Show {
        /// Print the raw JSON document
        #[arg(long)]
        json: bool,
    },
    /// Update fields of the draft
    Set(SetArgs),
    /// Clear the form, keeping the dark mode preference
    Reset,
    /// Toggle the dark mode preference
    DarkMode,
    /// Validate the draft and submit it for approval
    Submit,
    /// Delete the saved draft including all preferences
    Forget,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(long)]
    job_type: Option<String>,
    #[arg(long)]
    job_title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    company_name: Option<String>,
    #[arg(long)]
    company_description: Option<String>,
    #[arg(long)]
    contact_email: Option<String>,
    #[arg(long)]
    contact_phone: Option<String>,
}

impl From<SetArgs> for DraftFormPatch {
    fn from(args: SetArgs) -> Self {
        Self {
            job_type: args.job_type.into(),
            job_title: args.job_title.into(),
            description: args.description.into(),
            salary: args.salary.into(),
            location: args.location.into(),
            company_name: args.company_name.into(),
            company_description: args.company_description.into(),
            contact_email: args.contact_email.into(),
            contact_phone: args.contact_phone.into(),
        }
    }
}

impl DraftCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut store = environment::draft_store(&config);

        match self {
            Self::Show { json } => show(store.get(), json)?,
            Self::Set(args) => {
                let patch = DraftFormPatch::from(args);
                if !patch.is_update() {
                    bail!("Nothing to update, pass at least one field");
                }
                store.set(patch)?;
                show(store.get(), false)?;
            }
            Self::Reset => store.reset()?,
            Self::DarkMode => {
                let dark_mode = store.toggle_dark_mode()?;
                println!("Dark mode {}", if dark_mode { "on" } else { "off" });
            }
            Self::Submit => {
                let jobs = async {
                    let db = database::connect(&config.database).await?;
                    anyhow::Ok(environment::jobs_feature(db))
                };
                submit(&mut store, jobs).await?;
                println!("Job posted successfully and awaiting approval");
            }
            Self::Forget => store.forget()?,
        }

        Ok(())
    }
}

fn show(state: &DraftState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(());
    }

    let form = &state.form;
    for (label, value) in [
        ("Job type", &form.job_type),
        ("Job title", &form.job_title),
        ("Description", &form.description),
        ("Salary", &form.salary),
        ("Location", &form.location),
        ("Company name", &form.company_name),
        ("Company description", &form.company_description),
        ("Contact email", &form.contact_email),
        ("Contact phone", &form.contact_phone),
    ] {
        println!("{label:>20}: {value}");
    }
    println!("{:>20}: {}", "Dark mode", state.dark_mode);
    if state.submit_success {
        println!("Your last posting was submitted and is awaiting approval.");
    }

    Ok(())
}

/// Validates the draft and stores it as a pending posting.
///
/// `jobs` is only awaited once the draft is valid. On success the form is
/// reset and `submit_success` is set; on failure `is_submitting` is cleared
/// and the form is kept.
async fn submit<Jobs: JobsFeatureService>(
    store: &mut impl DraftStore,
    jobs: impl Future<Output = anyhow::Result<Jobs>>,
) -> anyhow::Result<JobPosting> {
    let input = validate(&store.get().form.to_raw_input())?;

    store.set_submit_success(false)?;
    store.set_is_submitting(true)?;

    let result = async { anyhow::Ok(jobs.await?.create_pending(input).await?) }.await;

    let job = match result {
        Ok(job) => job,
        Err(err) => {
            store.set_is_submitting(false)?;
            return Err(err);
        }
    };

    info!(job_id = %*job.id, "Draft submitted");
    store.reset()?;
    store.set_submit_success(true)?;

    Ok(job)
}
