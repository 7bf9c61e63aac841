#![allow(dead_code)]

use recruitment_pipeline::{Application, ApplicationStatus, ResumeMeta};

pub fn application(id: &str) -> Application {
    application_at(id, "2025-03-01T09:30:00Z")
}

pub fn application_at(id: &str, created_at: &str) -> Application {
    Application {
        application_id: id.to_string(),
        job_id: "frontend-fellow".to_string(),
        created_at: created_at.parse().expect("valid timestamp"),
        status: ApplicationStatus::Applied,
        full_name: format!("Candidate {}", id),
        email: format!("{}@example.com", id.to_lowercase()),
        phone: "+233 20 123 4567".to_string(),
        years_experience: 2,
        skills: vec!["React".to_string(), "Testing".to_string()],
        portfolio_url: Some("https://example.com/portfolio".to_string()),
        resume_meta: ResumeMeta {
            file_name: format!("{}.pdf", id),
            file_size: 48_000,
            file_type: "application/pdf".to_string(),
        },
        score: None,
        notes: None,
        interview_date_time: None,
        offer_draft: None,
    }
}

pub fn with_score(mut app: Application, score: Option<u8>) -> Application {
    app.score = score;
    app
}
