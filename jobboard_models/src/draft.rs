use jobboard_utils::patch::Patch;
use serde::{Deserialize, Serialize};

use crate::job::{JobType, RawJobInput, SalaryBand};

/// The in-progress content of the "post a job" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Patch)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftForm {
    pub job_type: String,
    pub job_title: String,
    pub description: String,
    pub salary: String,
    pub location: String,
    pub company_name: String,
    pub company_description: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            job_type: JobType::FullTime.as_str().into(),
            job_title: String::new(),
            description: String::new(),
            salary: SalaryBand::Under50K.as_str().into(),
            location: String::new(),
            company_name: String::new(),
            company_description: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
        }
    }
}

impl DraftForm {
    /// Converts the draft into a submission. Empty optional fields are
    /// treated as absent, empty required fields are left for the validator
    /// to reject.
    pub fn to_raw_input(&self) -> RawJobInput {
        let optional = |value: &str| Some(value.to_owned()).filter(|v| !v.is_empty());

        RawJobInput {
            job_title: Some(self.job_title.clone()),
            company_name: Some(self.company_name.clone()),
            description: Some(self.description.clone()),
            job_type: Some(self.job_type.clone()),
            salary: Some(self.salary.clone()),
            location: Some(self.location.clone()),
            contact_email: Some(self.contact_email.clone()),
            contact_phone: optional(&self.contact_phone),
            company_description: optional(&self.company_description),
        }
    }
}

/// Everything the form remembers between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftState {
    #[serde(rename = "formData")]
    pub form: DraftForm,
    pub dark_mode: bool,
    pub is_submitting: bool,
    pub submit_success: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let form = DraftForm::default();

        assert_eq!(form.job_type, "Full-Time");
        assert_eq!(form.salary, "Under $50K");
        assert!(form.job_title.is_empty());
        assert!(form.contact_phone.is_empty());
    }

    #[test]
    fn to_raw_input_drops_empty_optionals() {
        let form = DraftForm {
            job_title: "Product Manager".into(),
            company_description: "We build things".into(),
            ..Default::default()
        };

        let raw = form.to_raw_input();

        assert_eq!(raw.job_title.as_deref(), Some("Product Manager"));
        assert_eq!(raw.location.as_deref(), Some(""));
        assert_eq!(raw.contact_phone, None);
        assert_eq!(raw.company_description.as_deref(), Some("We build things"));
    }

    #[test]
    fn state_json_shape() {
        let state = DraftState {
            dark_mode: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["darkMode"], true);
        assert_eq!(json["formData"]["jobType"], "Full-Time");
        assert_eq!(
            serde_json::from_value::<DraftState>(serde_json::json!({"darkMode": true})).unwrap(),
            state
        );
    }
}
