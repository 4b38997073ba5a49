use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

static SALARY_RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]+K).*\$([0-9]+K)").unwrap());

/// Shortens a salary for display: `"$80K - $120K"` becomes `"80K - 120K"`.
///
/// Salaries that are not a dollar range are returned unchanged.
pub fn salary_range_label(salary: &str) -> String {
    if salary.is_empty() {
        return "Not specified".into();
    }

    match SALARY_RANGE_REGEX.captures(salary) {
        Some(range) => format!("{} - {}", &range[1], &range[2]),
        None => salary.into(),
    }
}

/// `"Today"` for postings younger than a day, otherwise `"<n>d ago"`.
pub fn days_ago_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - created_at).num_days() {
        days @ 1.. => format!("{days}d ago"),
        _ => "Today".into(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn salary_ranges() {
        for (salary, expected) in [
            ("$80K - $120K", "80K - 120K"),
            ("$100K - $150K", "100K - 150K"),
            ("Negotiable", "Negotiable"),
            ("Under $50K", "Under $50K"),
            ("", "Not specified"),
        ] {
            assert_eq!(salary_range_label(salary), expected);
        }
    }

    #[test]
    fn days_ago() {
        let now = Utc::now();

        assert_eq!(days_ago_label(now - TimeDelta::hours(23), now), "Today");
        assert_eq!(days_ago_label(now - TimeDelta::hours(49), now), "2d ago");
        assert_eq!(days_ago_label(now + TimeDelta::hours(5), now), "Today");
    }
}
