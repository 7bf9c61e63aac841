use tracing::{debug, info, warn};

use crate::dto::application_dto::ApplicationPatch;
use crate::models::application::Application;
use crate::models::status::{next_stage, previous_stage, ApplicationStatus};
use crate::storage::KeyValueStorage;

/// Result of a store mutation. None of these are errors; callers that do not
/// care can ignore the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// No application has the given id. The list is unchanged.
    NotFound,
    /// `add` was given an id that is already present. Nothing was written.
    DuplicateId,
    /// A stepper was asked to move past the first or last stage.
    AtBoundary,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == MutationOutcome::Applied
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added {
        application_id: String,
    },
    Patched {
        application_id: String,
    },
    StatusChanged {
        application_id: String,
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct ApplicationStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    applications: Vec<Application>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> ApplicationStore<S> {
    /// Loads the snapshot stored under `key`. A missing, unreadable or
    /// malformed snapshot yields an empty store.
    pub fn initialize(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let applications = load_snapshot(&storage, &key);
        info!(key = %key, count = applications.len(), "application store initialized");

        Self {
            storage,
            key,
            applications,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Most recently added first.
    pub fn list(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn get_by_id(&self, application_id: &str) -> Option<&Application> {
        self.applications
            .iter()
            .find(|a| a.application_id == application_id)
    }

    pub fn add(&mut self, application: Application) -> MutationOutcome {
        if self.get_by_id(&application.application_id).is_some() {
            warn!(
                application_id = %application.application_id,
                "rejecting application with duplicate id"
            );
            return MutationOutcome::DuplicateId;
        }

        let application_id = application.application_id.clone();
        self.applications.insert(0, application);
        self.persist();
        info!(application_id = %application_id, "application added");
        self.notify(&StoreEvent::Added { application_id });
        MutationOutcome::Applied
    }

    /// Merges recruiter fields. An unknown id changes nothing but the snapshot
    /// is still rewritten.
    pub fn patch(&mut self, application_id: &str, patch: &ApplicationPatch) -> MutationOutcome {
        let found = match self.find_mut(application_id) {
            Some(application) => {
                patch.apply_to(application);
                true
            }
            None => false,
        };
        self.persist();

        if !found {
            debug!(application_id, "patch ignored, application not found");
            return MutationOutcome::NotFound;
        }
        self.notify(&StoreEvent::Patched {
            application_id: application_id.to_string(),
        });
        MutationOutcome::Applied
    }

    /// Direct assignment to any stage, skipping allowed.
    pub fn set_status(&mut self, application_id: &str, status: ApplicationStatus) -> MutationOutcome {
        let from = self.find_mut(application_id).map(|application| {
            let from = application.status;
            application.status = status;
            from
        });
        self.persist();

        let Some(from) = from else {
            debug!(application_id, %status, "status change ignored, application not found");
            return MutationOutcome::NotFound;
        };
        info!(application_id, %from, to = %status, "application status changed");
        self.notify(&StoreEvent::StatusChanged {
            application_id: application_id.to_string(),
            from,
            to: status,
        });
        MutationOutcome::Applied
    }

    /// Moves one stage forward.
    pub fn advance(&mut self, application_id: &str) -> MutationOutcome {
        self.step(application_id, next_stage)
    }

    /// Moves one stage back.
    pub fn retreat(&mut self, application_id: &str) -> MutationOutcome {
        self.step(application_id, previous_stage)
    }

    /// Records the interview time and jumps to `INTERVIEW_SCHEDULED` from
    /// whatever stage the application is in.
    pub fn schedule_interview(
        &mut self,
        application_id: &str,
        date_time: impl Into<String>,
    ) -> MutationOutcome {
        let patch = ApplicationPatch::new().interview_date_time(date_time);
        self.patch_and_move(application_id, &patch, ApplicationStatus::InterviewScheduled)
    }

    /// Stores the offer draft and jumps to `OFFER_SENT` from whatever stage the
    /// application is in.
    pub fn send_offer(&mut self, application_id: &str, draft: impl Into<String>) -> MutationOutcome {
        let patch = ApplicationPatch::new().offer_draft(draft);
        self.patch_and_move(application_id, &patch, ApplicationStatus::OfferSent)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn step(
        &mut self,
        application_id: &str,
        target: fn(ApplicationStatus) -> Option<ApplicationStatus>,
    ) -> MutationOutcome {
        let Some(current) = self.get_by_id(application_id).map(|a| a.status) else {
            return MutationOutcome::NotFound;
        };
        match target(current) {
            Some(status) => self.set_status(application_id, status),
            None => MutationOutcome::AtBoundary,
        }
    }

    fn patch_and_move(
        &mut self,
        application_id: &str,
        patch: &ApplicationPatch,
        status: ApplicationStatus,
    ) -> MutationOutcome {
        let from = self.find_mut(application_id).map(|application| {
            patch.apply_to(application);
            let from = application.status;
            application.status = status;
            from
        });
        self.persist();

        let Some(from) = from else {
            return MutationOutcome::NotFound;
        };
        info!(application_id, %from, to = %status, "application moved by recruiter action");
        self.notify(&StoreEvent::Patched {
            application_id: application_id.to_string(),
        });
        self.notify(&StoreEvent::StatusChanged {
            application_id: application_id.to_string(),
            from,
            to: status,
        });
        MutationOutcome::Applied
    }

    fn find_mut(&mut self, application_id: &str) -> Option<&mut Application> {
        self.applications
            .iter_mut()
            .find(|a| a.application_id == application_id)
    }

    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.applications) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize applications snapshot");
                return;
            }
        };

        match self.storage.set(&self.key, &snapshot) {
            Ok(()) => debug!(key = %self.key, count = self.applications.len(), "snapshot persisted"),
            Err(e) => warn!(
                key = %self.key,
                code = e.code(),
                error = %e,
                "failed to persist applications snapshot; keeping in-memory state"
            ),
        }
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

fn load_snapshot<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Application> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, code = e.code(), error = %e, "could not read applications snapshot, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Application>>(&raw) {
        Ok(applications) => applications,
        Err(e) => {
            warn!(key, error = %e, "malformed applications snapshot, starting empty");
            Vec::new()
        }
    }
}
