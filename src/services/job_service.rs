use crate::models::job::Job;

pub const UNKNOWN_ROLE: &str = "Unknown role";

/// Read-only job reference data. Applications point at jobs by id without any
/// referential check, so lookups must tolerate dangling ids.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Job {
                id: "frontend-fellow".to_string(),
                title: "Frontend Fellow".to_string(),
                location: "Remote (GMT)".to_string(),
                short_description:
                    "Build stateful UIs, complex forms, and clean frontend architecture."
                        .to_string(),
                full_description: Some(
                    "You will build frontend features with strong state management, validation, and UX."
                        .to_string(),
                ),
            },
            Job {
                id: "ui-engineer".to_string(),
                title: "UI Engineer".to_string(),
                location: "Accra, Ghana (Hybrid)".to_string(),
                short_description:
                    "Deliver polished interfaces, accessibility, and responsive layouts."
                        .to_string(),
                full_description: Some(
                    "You will focus on UI systems, component quality, and user experience."
                        .to_string(),
                ),
            },
            Job {
                id: "fullstack-fellow".to_string(),
                title: "Fullstack Fellow (Frontend-leaning)".to_string(),
                location: "Remote".to_string(),
                short_description:
                    "Own frontend flows end-to-end and integrate with APIs when needed."
                        .to_string(),
                full_description: Some(
                    "You will build user journeys and maintain consistent state across screens."
                        .to_string(),
                ),
            },
        ])
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn title_for(&self, id: &str) -> &str {
        self.find(id).map(|job| job.title.as_str()).unwrap_or(UNKNOWN_ROLE)
    }

    /// `(id, title)` pairs for the role filter dropdown.
    pub fn options(&self) -> Vec<(&str, &str)> {
        self.jobs
            .iter()
            .map(|job| (job.id.as_str(), job.title.as_str()))
            .collect()
    }
}

impl Default for JobCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = JobCatalog::builtin();
        assert_eq!(catalog.all().len(), 3);
        assert_eq!(catalog.find("ui-engineer").unwrap().location, "Accra, Ghana (Hybrid)");
    }

    #[test]
    fn test_dangling_job_id() {
        let catalog = JobCatalog::builtin();
        assert!(catalog.find("chief-vibes-officer").is_none());
        assert_eq!(catalog.title_for("chief-vibes-officer"), "Unknown role");
        assert_eq!(catalog.title_for("frontend-fellow"), "Frontend Fellow");
    }

    #[test]
    fn test_options_keep_catalog_order() {
        let catalog = JobCatalog::builtin();
        let ids: Vec<&str> = catalog.options().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["frontend-fellow", "ui-engineer", "fullstack-fellow"]);
    }
}
