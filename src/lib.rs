pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use error::{Error, Result};
pub use models::application::{Application, ResumeMeta};
pub use models::status::{next_stage, previous_stage, ApplicationStatus, STATUS_ORDER};
pub use services::application_store::{ApplicationStore, MutationOutcome, StoreEvent};
