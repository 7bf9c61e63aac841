use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::ApplicationStatus;

/// Metadata kept in place of the uploaded resume. The file bytes are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMeta {
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// MIME type reported by the upload.
    pub file_type: String,
}

/// A candidate's submitted application as it is tracked on the board and
/// persisted in the durable snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
    pub job_id: String,
    #[serde(with = "crate::utils::time::millis")]
    pub created_at: DateTime<Utc>,
    pub status: ApplicationStatus,

    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub years_experience: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub resume_meta: ResumeMeta,

    // Recruiter-owned, editable at any stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_draft: Option<String>,
}

impl Application {
    pub fn score_label(&self) -> String {
        match self.score {
            Some(score) => format!("{}/5", score),
            None => "—".to_string(),
        }
    }
}
