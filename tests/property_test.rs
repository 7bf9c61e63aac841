mod common;

use common::{application_at, with_score};
use proptest::prelude::*;
use recruitment_pipeline::dto::application_dto::ApplicationPatch;
use recruitment_pipeline::dto::board_dto::SortKey;
use recruitment_pipeline::services::board_service::sort_applications;
use recruitment_pipeline::storage::MemoryStorage;
use recruitment_pipeline::{
    next_stage, previous_stage, Application, ApplicationStatus, ApplicationStore, STATUS_ORDER,
};

fn any_status() -> impl Strategy<Value = ApplicationStatus> {
    prop::sample::select(STATUS_ORDER.to_vec())
}

fn any_application() -> impl Strategy<Value = Application> {
    (
        "[A-Z0-9]{6}",
        0i64..400,
        prop::option::of(1u8..=5),
        any_status(),
        prop::option::of("[a-z ]{0,20}"),
    )
        .prop_map(|(id, day, score, status, notes)| {
            let created_at = chrono::DateTime::from_timestamp(1_735_689_600 + day * 86_400, 0)
                .unwrap()
                .to_rfc3339();
            let mut app = with_score(application_at(&id, &created_at), score);
            app.status = status;
            app.notes = notes;
            app
        })
}

fn unique_applications() -> impl Strategy<Value = Vec<Application>> {
    prop::collection::vec(any_application(), 0..12).prop_map(|apps| {
        let mut seen = std::collections::HashSet::new();
        apps.into_iter()
            .filter(|a| seen.insert(a.application_id.clone()))
            .collect()
    })
}

proptest! {
    #[test]
    fn steppers_are_inverse(status in any_status()) {
        if let Some(next) = next_stage(status) {
            prop_assert_eq!(previous_stage(next), Some(status));
        }
        if let Some(prev) = previous_stage(status) {
            prop_assert_eq!(next_stage(prev), Some(status));
        }
    }

    #[test]
    fn unscored_always_sort_last(apps in unique_applications()) {
        for key in [SortKey::ScoreDesc, SortKey::ScoreAsc] {
            let sorted = sort_applications(&apps, key);
            let first_unscored = sorted.iter().position(|a| a.score.is_none()).unwrap_or(sorted.len());
            prop_assert!(sorted[first_unscored..].iter().all(|a| a.score.is_none()));
        }
    }

    #[test]
    fn snapshot_round_trip(apps in unique_applications()) {
        let storage = MemoryStorage::new();
        let mut store = ApplicationStore::initialize(storage.clone(), "prop.applications");
        for app in apps.iter().rev() {
            prop_assert!(store.add(app.clone()).is_applied());
        }
        prop_assert_eq!(store.list(), apps.as_slice());

        let reloaded = ApplicationStore::initialize(storage, "prop.applications");
        prop_assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn patch_only_touches_named_field(apps in unique_applications(), score in 1u8..=5) {
        prop_assume!(!apps.is_empty());
        let mut store = ApplicationStore::initialize(MemoryStorage::new(), "prop.applications");
        for app in apps.iter().rev() {
            store.add(app.clone());
        }
        let target = apps[0].application_id.clone();

        store.patch(&target, &ApplicationPatch::new().score(score));

        for (before, after) in apps.iter().zip(store.list()) {
            let mut expected = before.clone();
            if expected.application_id == target {
                expected.score = Some(score);
            }
            prop_assert_eq!(after, &expected);
        }
    }
}
