//! Client-side search, facet filters and sort orders for the public job
//! listing.

use std::{cmp::Ordering, collections::BTreeSet};

use jobboard_models::job::JobPosting;

pub use crate::{
    labels::{days_ago_label, salary_range_label},
    sort::{SortKey, UnknownSortKey},
};

mod labels;
mod sort;

/// What the visitor currently searches for, filters by and sorts by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search_text: String,
    pub selected_job_types: BTreeSet<String>,
    pub selected_locations: BTreeSet<String>,
    pub sort_key: SortKey,
}

impl ListingQuery {
    pub fn toggle_job_type(&mut self, job_type: &str) {
        toggle(&mut self.selected_job_types, job_type);
    }

    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.selected_locations, location);
    }

    /// Drops all facet selections. Search text and sort order are kept.
    pub fn clear_filters(&mut self) {
        self.selected_job_types.clear();
        self.selected_locations.clear();
    }

    pub fn has_filters(&self) -> bool {
        !self.selected_job_types.is_empty() || !self.selected_locations.is_empty()
    }

    fn matches(&self, job: &JobPosting, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || [&job.job_title, &job.company_name, &job.description]
                .into_iter()
                .any(|text| text.to_lowercase().contains(needle));

        let matches_facets = (self.selected_job_types.is_empty()
            || self.selected_job_types.contains(&job.job_type))
            && (self.selected_locations.is_empty()
                || self.selected_locations.contains(&job.location));

        matches_search && matches_facets
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}

/// Filters and sorts `jobs` according to `query`.
///
/// A posting is kept if the search text is empty or occurs (ignoring case)
/// in its title, company name or description, and if it matches every facet
/// that has a selection. Within a facet any selected value matches. The
/// sort is stable, so postings that compare equal keep their input order.
pub fn apply(jobs: &[JobPosting], query: &ListingQuery) -> Vec<JobPosting> {
    let needle = query.search_text.to_lowercase();

    let mut out = jobs
        .iter()
        .filter(|job| query.matches(job, &needle))
        .cloned()
        .collect::<Vec<_>>();

    out.sort_by(|a, b| compare(query.sort_key, a, b));
    out
}

fn compare(sort_key: SortKey, a: &JobPosting, b: &JobPosting) -> Ordering {
    match sort_key {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Oldest => a.created_at.cmp(&b.created_at),
        SortKey::SalaryHighLow => {
            first_salary_number(&b.salary).cmp(&first_salary_number(&a.salary))
        }
        SortKey::SalaryLowHigh => {
            first_salary_number(&a.salary).cmp(&first_salary_number(&b.salary))
        }
        SortKey::TitleAsc => compare_titles(&a.job_title, &b.job_title),
        SortKey::TitleDesc => compare_titles(&b.job_title, &a.job_title),
    }
}

/// The first run of ASCII digits in a salary text, `0` if there is none.
///
/// `"$80K - $120K"` yields `80`. Values too large for `u64` saturate.
pub fn first_salary_number(salary: &str) -> u64 {
    salary
        .bytes()
        .skip_while(|b| !b.is_ascii_digit())
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

/// Orders titles alphabetically ignoring case. Titles that differ only in
/// case put lowercase first.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Distinct job types and locations of `jobs`, e.g. to offer as facet
/// values.
pub fn facet_values(jobs: &[JobPosting]) -> (BTreeSet<&str>, BTreeSet<&str>) {
    jobs.iter()
        .map(|job| (job.job_type.as_str(), job.location.as_str()))
        .unzip()
}
