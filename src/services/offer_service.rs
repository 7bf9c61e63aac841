use crate::models::application::Application;
use crate::services::job_service::JobCatalog;
use crate::utils::time::format_date_time;

/// Plain-text offer letter the recruiter can edit before sending.
pub fn draft_offer(application: &Application, jobs: &JobCatalog) -> String {
    let (role, location) = match jobs.find(&application.job_id) {
        Some(job) => (job.title.as_str(), Some(job.location.as_str())),
        None => ("the role", None),
    };

    let mut lines = vec![
        format!("Dear {},", application.full_name),
        String::new(),
        format!(
            "Thank you for your time with us. We are pleased to offer you the position of {}.",
            role
        ),
    ];

    if let Some(location) = location {
        lines.push(format!("Location: {}.", location));
    }
    if let Some(when) = application.interview_date_time.as_deref() {
        lines.push(format!(
            "This follows our interview on {}.",
            format_date_time(when)
        ));
    }

    lines.extend([
        String::new(),
        "Please reply to this email to confirm your acceptance, and let us know your earliest start date."
            .to_string(),
        String::new(),
        "Kind regards,".to_string(),
        "The Hiring Team".to_string(),
        String::new(),
        format!("Reference: {}", application.application_id),
    ]);

    lines.join("\n")
}
