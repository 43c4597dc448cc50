use serde::{Deserialize, Deserializer};

use crate::letter::style::{LetterLength, Template, Tone};

/// Who is applying. Only `full_name` is required; the rest are free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantProfile {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub current_role: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub years_of_experience: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub key_skills: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub achievements: String,
}

/// The role being applied for. `company_name` and `job_title` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobTarget {
    #[serde(deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub hiring_manager: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub job_description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub motivation: String,
}

/// Framing options chosen in the form. Unknown tags resolve to defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePreferences {
    pub template: Template,
    pub tone: Tone,
    pub length: LetterLength,
    /// Accepted for wire compatibility; every request goes to the remote model.
    #[serde(rename = "useAI", deserialize_with = "null_as_true")]
    pub use_ai: bool,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            template: Template::default(),
            tone: Tone::default(),
            length: LetterLength::default(),
            use_ai: true,
        }
    }
}

/// Request body for POST /api/generate-cover-letter.
///
/// The wire format is flat camelCase, exactly as the form posts it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(flatten)]
    pub applicant: ApplicantProfile,
    #[serde(flatten)]
    pub job: JobTarget,
    #[serde(flatten)]
    pub style: StylePreferences,
}

impl GenerationRequest {
    /// Names of required fields that are empty or whitespace-only.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.applicant.full_name) {
            missing.push("fullName");
        }
        if is_blank(&self.job.company_name) {
            missing.push("companyName");
        }
        if is_blank(&self.job.job_title) {
            missing.push("jobTitle");
        }
        missing
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// JSON `null` reads the same as an absent key: an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}
