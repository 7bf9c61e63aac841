use std::cmp::Ordering;

use crate::dto::board_dto::{BoardColumn, BoardFilter, SortKey};
use crate::models::application::Application;
use crate::models::status::STATUS_ORDER;
use crate::services::job_service::JobCatalog;

pub fn matches_filter(application: &Application, filter: &BoardFilter, jobs: &JobCatalog) -> bool {
    if let Some(job_id) = filter.job_id.as_deref() {
        if application.job_id != job_id {
            return false;
        }
    }

    // A minimum of zero admits unscored applications.
    if let Some(min_score) = filter.min_score.filter(|&m| m > 0) {
        match application.score {
            Some(score) if score >= min_score => {}
            _ => return false,
        }
    }

    let query = filter.query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    search_text(application, jobs).contains(&query)
}

/// Lower-cased haystack the free-text query is matched against.
fn search_text(application: &Application, jobs: &JobCatalog) -> String {
    [
        application.application_id.as_str(),
        application.full_name.as_str(),
        application.email.as_str(),
        application.phone.as_str(),
        jobs.title_for(&application.job_id),
        application.skills.join(",").as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

pub fn filter_applications(
    applications: &[Application],
    filter: &BoardFilter,
    jobs: &JobCatalog,
) -> Vec<Application> {
    applications
        .iter()
        .filter(|a| matches_filter(a, filter, jobs))
        .cloned()
        .collect()
}

/// Unscored applications go last in both score orders.
pub fn compare(a: &Application, b: &Application, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Oldest => a.created_at.cmp(&b.created_at),
        SortKey::ScoreDesc => compare_scores(a.score, b.score, |x, y| y.cmp(&x)),
        SortKey::ScoreAsc => compare_scores(a.score, b.score, |x, y| x.cmp(&y)),
    }
}

fn compare_scores(a: Option<u8>, b: Option<u8>, present: impl Fn(u8, u8) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; ties keep their input order.
pub fn sort_applications(applications: &[Application], sort: SortKey) -> Vec<Application> {
    let mut sorted = applications.to_vec();
    sorted.sort_by(|a, b| compare(a, b, sort));
    sorted
}

/// Filters, then groups by stage and sorts inside each column. Every stage
/// gets a column, empty or not, in pipeline order.
pub fn build_board(
    applications: &[Application],
    filter: &BoardFilter,
    sort: SortKey,
    jobs: &JobCatalog,
) -> Vec<BoardColumn> {
    let visible = filter_applications(applications, filter, jobs);

    STATUS_ORDER
        .iter()
        .map(|&status| {
            let mut items: Vec<Application> = visible
                .iter()
                .filter(|a| a.status == status)
                .cloned()
                .collect();
            items.sort_by(|a, b| compare(a, b, sort));
            BoardColumn {
                status,
                label: status.label(),
                items,
            }
        })
        .collect()
}
