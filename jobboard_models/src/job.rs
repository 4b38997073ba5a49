use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::macros::id;

id!(JobId);

/// A single job advertisement as stored by the job store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: JobId,
    pub job_title: String,
    pub company_name: String,
    pub description: String,
    pub job_type: String,
    pub salary: String,
    pub location: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub company_description: Option<String>,
    pub status: JobStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// Whether the posting may appear on the public listing.
    pub fn is_public(&self) -> bool {
        self.status == JobStatus::Approved
    }
}

/// Moderation state of a posting. Only approved postings are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Pending,
    Approved,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown job status {0:?}")]
pub struct UnknownJobStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnknownJobStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            _ => Err(UnknownJobStatus(s.into())),
        }
    }
}

/// Employment types offered by the submission form.
///
/// Postings store the submitted job type verbatim, so values outside this
/// set can still appear in the job store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl JobType {
    pub const ALL: [Self; 5] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
        Self::Temporary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::PartTime => "Part-Time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
            Self::Temporary => "Temporary",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salary bands offered by the submission form. Salaries are free text, the
/// bands are only suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SalaryBand {
    Under50K,
    From50KTo100K,
    From100KTo150K,
    Above150K,
    Negotiable,
}

impl SalaryBand {
    pub const ALL: [Self; 5] = [
        Self::Under50K,
        Self::From50KTo100K,
        Self::From100KTo150K,
        Self::Above150K,
        Self::Negotiable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Under50K => "Under $50K",
            Self::From50KTo100K => "$50K - $100K",
            Self::From100KTo150K => "$100K - $150K",
            Self::Above150K => "Above $150K",
            Self::Negotiable => "Negotiable",
        }
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unchecked job submission. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawJobInput {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub company_description: Option<String>,
}

/// A job submission that passed [`validate`](crate::validation::validate).
///
/// Values are exactly those of the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidatedJobInput {
    pub job_title: String,
    pub company_name: String,
    pub description: String,
    pub job_type: String,
    pub salary: String,
    pub location: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub company_description: Option<String>,
}

impl From<ValidatedJobInput> for RawJobInput {
    fn from(value: ValidatedJobInput) -> Self {
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
        } = value;

        Self {
            job_title: Some(job_title),
            company_name: Some(company_name),
            description: Some(description),
            job_type: Some(job_type),
            salary: Some(salary),
            location: Some(location),
            contact_email: Some(contact_email),
            contact_phone,
            company_description,
        }
    }
}
