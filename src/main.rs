use recruitment_pipeline::{
    config::{get_config, init_config, LogFormat},
    dto::board_dto::{BoardFilter, SortKey},
    services::{board_service::build_board, job_service::JobCatalog},
    storage::FileStorage,
    ApplicationStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let storage = FileStorage::new(&config.storage_dir);
    info!(dir = %storage.dir().display(), key = %config.storage_key, "opening application store");
    let store = ApplicationStore::initialize(storage, config.storage_key.clone());

    let jobs = JobCatalog::builtin();
    let board = build_board(store.list(), &BoardFilter::default(), SortKey::Newest, &jobs);

    info!(total = store.len(), "pipeline loaded");
    for column in &board {
        info!(stage = %column.status, label = column.label, count = column.count(), "pipeline column");
        for application in &column.items {
            info!(
                application_id = %application.application_id,
                candidate = %application.full_name,
                role = jobs.title_for(&application.job_id),
                score = %application.score_label(),
                "card"
            );
        }
    }

    Ok(())
}
