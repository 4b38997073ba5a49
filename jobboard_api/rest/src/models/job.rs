use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use jobboard_core_listing::{ListingQuery, SortKey};
use jobboard_models::job::{JobId, JobPosting, JobStatus, RawJobInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiJobPosting {
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
    pub status: ApiJobStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobPosting> for ApiJobPosting {
    fn from(job: JobPosting) -> Self {
        let JobPosting {
            id,
            job_title,
            company_name,
            description,
            job_type,
            salary,
            location,
            contact_email,
            contact_phone,
            company_description,
            status,
            is_featured,
            created_at,
            updated_at,
        } = job;

        Self {
            id,
            job_title,
            company_name,
            description,
            job_type,
            salary,
            location,
            contact_email,
            contact_phone,
            company_description,
            status: status.into(),
            is_featured,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiJobStatus {
    Pending,
    Approved,
}

impl From<JobStatus> for ApiJobStatus {
    fn from(value: JobStatus) -> Self {
        match value {
            JobStatus::Pending => Self::Pending,
            JobStatus::Approved => Self::Approved,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiRawJobInput {
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

impl From<ApiRawJobInput> for RawJobInput {
    fn from(value: ApiRawJobInput) -> Self {
        let ApiRawJobInput {
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
            job_title,
            company_name,
            description,
            job_type,
            salary,
            location,
            contact_email,
            contact_phone,
            company_description,
        }
    }
}

/// Query parameters of `GET /jobs`. Facet values are comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiListingQuery {
    pub search: Option<String>,
    pub job_types: Option<String>,
    pub locations: Option<String>,
    pub sort: Option<String>,
}

impl ApiListingQuery {
    /// `None` if the client did not ask for any filtering or sorting.
    pub fn into_listing_query(self) -> Option<ListingQuery> {
        let Self {
            search,
            job_types,
            locations,
            sort,
        } = self;

        if search.is_none() && job_types.is_none() && locations.is_none() && sort.is_none() {
            return None;
        }

        let split = |values: Option<String>| {
            values
                .iter()
                .flat_map(|values| values.split(','))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned)
                .collect::<BTreeSet<_>>()
        };

        Some(ListingQuery {
            search_text: search.unwrap_or_default(),
            selected_job_types: split(job_types),
            selected_locations: split(locations),
            sort_key: sort.as_deref().map(SortKey::parse_lenient).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query() {
        assert_eq!(ApiListingQuery::default().into_listing_query(), None);
    }

    #[test]
    fn comma_separated_facets() {
        let query = ApiListingQuery {
            job_types: Some("Full-Time, Contract,".into()),
            sort: Some("price".into()),
            ..Default::default()
        };

        let result = query.into_listing_query().unwrap();

        assert_eq!(
            result,
            ListingQuery {
                selected_job_types: BTreeSet::from(["Contract".into(), "Full-Time".into()]),
                ..Default::default()
            }
        );
    }
}
