use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    InterviewScheduled,
    OfferSent,
}

/// Canonical stage order. Board columns and the steppers both follow it.
pub const STATUS_ORDER: [ApplicationStatus; 4] = [
    ApplicationStatus::Applied,
    ApplicationStatus::Reviewed,
    ApplicationStatus::InterviewScheduled,
    ApplicationStatus::OfferSent,
];

impl ApplicationStatus {
    pub const INITIAL: ApplicationStatus = ApplicationStatus::Applied;

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::OfferSent => "Offer Sent",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::Reviewed => "REVIEWED",
            ApplicationStatus::InterviewScheduled => "INTERVIEW_SCHEDULED",
            ApplicationStatus::OfferSent => "OFFER_SENT",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STATUS_ORDER
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown application status: {}", s))
    }
}

/// Position of a stage in [`STATUS_ORDER`].
pub fn stage_index(status: ApplicationStatus) -> usize {
    match status {
        ApplicationStatus::Applied => 0,
        ApplicationStatus::Reviewed => 1,
        ApplicationStatus::InterviewScheduled => 2,
        ApplicationStatus::OfferSent => 3,
    }
}

/// Stage immediately after `current`, or `None` from the last stage.
pub fn next_stage(current: ApplicationStatus) -> Option<ApplicationStatus> {
    STATUS_ORDER.get(stage_index(current) + 1).copied()
}

/// Stage immediately before `current`, or `None` from the first stage.
pub fn previous_stage(current: ApplicationStatus) -> Option<ApplicationStatus> {
    stage_index(current)
        .checked_sub(1)
        .map(|index| STATUS_ORDER[index])
}
