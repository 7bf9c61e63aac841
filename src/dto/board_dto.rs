use serde::{Deserialize, Serialize};

use crate::models::application::Application;
use crate::models::status::ApplicationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    ScoreDesc,
    ScoreAsc,
}

/// Toolbar state for the pipeline board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardFilter {
    pub query: String,
    pub job_id: Option<String>,
    pub min_score: Option<u8>,
}

impl BoardFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.job_id.is_some() || self.min_score.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub status: ApplicationStatus,
    pub label: &'static str,
    pub items: Vec<Application>,
}

impl BoardColumn {
    pub fn count(&self) -> usize {
        self.items.len()
    }
}
