//! Required-field and format checks for job submissions.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::job::{RawJobInput, ValidatedJobInput};

/// Non-space text, an `@`, non-space text, a dot and more non-space text.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Optional `+` country code of 1-3 digits with an optional separator,
/// followed by exactly ten digits.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+[0-9]{1,3}[- ]?)?[0-9]{10}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    JobTitle,
    CompanyName,
    Description,
    JobType,
    Salary,
    Location,
    ContactEmail,
}

impl JobField {
    /// Required fields in the order they are checked.
    pub const REQUIRED: [Self; 7] = [
        Self::JobTitle,
        Self::CompanyName,
        Self::Description,
        Self::JobType,
        Self::Salary,
        Self::Location,
        Self::ContactEmail,
    ];

    /// The field name as used in the JSON API.
    pub fn name(self) -> &'static str {
        match self {
            Self::JobTitle => "jobTitle",
            Self::CompanyName => "companyName",
            Self::Description => "description",
            Self::JobType => "jobType",
            Self::Salary => "salary",
            Self::Location => "location",
            Self::ContactEmail => "contactEmail",
        }
    }

    fn get(self, input: &RawJobInput) -> Option<&str> {
        match self {
            Self::JobTitle => input.job_title.as_deref(),
            Self::CompanyName => input.company_name.as_deref(),
            Self::Description => input.description.as_deref(),
            Self::JobType => input.job_type.as_deref(),
            Self::Salary => input.salary.as_deref(),
            Self::Location => input.location.as_deref(),
            Self::ContactEmail => input.contact_email.as_deref(),
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(JobField),
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid phone number format")]
    InvalidPhone,
}

/// Checks a job submission, failing on the first problem found.
///
/// Required fields are checked in [`JobField::REQUIRED`] order and a field
/// counts as missing when it is absent, empty or whitespace-only. The email
/// and the (optional) phone number are checked afterwards. The input is
/// never normalized.
pub fn validate(input: &RawJobInput) -> Result<ValidatedJobInput, ValidationError> {
    let required = |field: JobField| {
        field
            .get(input)
            .filter(|value| !value.trim().is_empty())
            .map(ToOwned::to_owned)
            .ok_or(ValidationError::MissingField(field))
    };

    let job_title = required(JobField::JobTitle)?;
    let company_name = required(JobField::CompanyName)?;
    let description = required(JobField::Description)?;
    let job_type = required(JobField::JobType)?;
    let salary = required(JobField::Salary)?;
    let location = required(JobField::Location)?;
    let contact_email = required(JobField::ContactEmail)?;

    if !EMAIL_REGEX.is_match(&contact_email) {
        return Err(ValidationError::InvalidEmail);
    }

    if let Some(phone) = input.contact_phone.as_deref().filter(|p| !p.is_empty()) {
        if !PHONE_REGEX.is_match(phone) {
            return Err(ValidationError::InvalidPhone);
        }
    }

    Ok(ValidatedJobInput {
        job_title,
        company_name,
        description,
        job_type,
        salary,
        location,
        contact_email,
        contact_phone: input.contact_phone.clone(),
        company_description: input.company_description.clone(),
    })
}
