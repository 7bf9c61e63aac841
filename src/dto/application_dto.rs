use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::models::application::{Application, ResumeMeta};
use crate::models::status::ApplicationStatus;
use crate::utils::validation::{
    split_skills, validate, validate_phone, validate_resume_type, validate_skills_text,
};

/// Everything the apply wizard collects across its three steps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFormPayload {
    #[validate(length(min = 1, max = 80, message = "Full name is required (max 80 characters)"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(
        length(min = 1, max = 20, message = "Phone is required (max 20 characters)"),
        custom(function = "validate_phone")
    )]
    pub phone: String,
    #[validate(range(max = 50, message = "Years of experience must be between 0 and 50"))]
    pub years_experience: u32,
    #[validate(
        length(min = 1, max = 250, message = "Enter at least one skill (max 250 characters)"),
        custom(function = "validate_skills_text")
    )]
    pub skills_text: String,
    #[validate(length(max = 200, message = "Too long"))]
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[validate(nested)]
    pub resume: ResumeUpload,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpload {
    #[validate(length(min = 1, message = "Resume file is required"))]
    pub file_name: String,
    #[validate(range(max = 5242880, message = "Max file size is 5MB"))]
    pub file_size: u64,
    #[validate(custom(function = "validate_resume_type"))]
    pub file_type: String,
}

impl ApplicationFormPayload {
    /// Builds the stored record. Assumes the payload already passed validation.
    pub fn into_application(
        self,
        job_id: &str,
        application_id: String,
        created_at: DateTime<Utc>,
    ) -> Application {
        let portfolio_url = self
            .portfolio_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Application {
            application_id,
            job_id: job_id.to_string(),
            created_at,
            status: ApplicationStatus::INITIAL,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            years_experience: self.years_experience,
            skills: split_skills(&self.skills_text),
            portfolio_url,
            resume_meta: ResumeMeta {
                file_name: self.resume.file_name,
                file_size: self.resume.file_size,
                file_type: self.resume.file_type,
            },
            score: None,
            notes: None,
            interview_date_time: None,
            offer_draft: None,
        }
    }

    /// Validates, then stamps a fresh id and the current time.
    pub fn submit(self, job_id: &str) -> Result<Application> {
        validate(&self)?;
        Ok(self.into_application(
            job_id,
            crate::utils::id::generate_application_id(),
            crate::utils::time::now(),
        ))
    }
}

/// Recruiter edits. `None` leaves a field alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_patch_score"))]
pub struct ApplicationPatch {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub score: Option<Option<u8>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub interview_date_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub offer_draft: Option<Option<String>>,
}

impl ApplicationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(mut self, score: u8) -> Self {
        self.score = Some(Some(score));
        self
    }

    pub fn clear_score(mut self) -> Self {
        self.score = Some(None);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    pub fn clear_notes(mut self) -> Self {
        self.notes = Some(None);
        self
    }

    pub fn interview_date_time(mut self, when: impl Into<String>) -> Self {
        self.interview_date_time = Some(Some(when.into()));
        self
    }

    pub fn offer_draft(mut self, draft: impl Into<String>) -> Self {
        self.offer_draft = Some(Some(draft.into()));
        self
    }

    /// Merges the specified fields into `application`. Status and candidate
    /// fields are never touched.
    pub fn apply_to(&self, application: &mut Application) {
        if let Some(score) = self.score {
            application.score = score;
        }
        if let Some(notes) = &self.notes {
            application.notes = notes.clone();
        }
        if let Some(when) = &self.interview_date_time {
            application.interview_date_time = when.clone();
        }
        if let Some(draft) = &self.offer_draft {
            application.offer_draft = draft.clone();
        }
    }
}

fn validate_patch_score(patch: &ApplicationPatch) -> std::result::Result<(), ValidationError> {
    match patch.score {
        Some(Some(score)) if !(1..=5).contains(&score) => {
            let mut err = ValidationError::new("score");
            err.message = Some("Score must be between 1 and 5".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn double_option<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
