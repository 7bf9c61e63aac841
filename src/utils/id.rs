use chrono::Utc;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

const SUFFIX_LEN: usize = 10;

/// Builds an application id such as `APP-20250301-7QX2M9KD0L`.
pub fn generate_application_id() -> String {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("APP-{}-{}", Utc::now().format("%Y%m%d"), suffix)
}
