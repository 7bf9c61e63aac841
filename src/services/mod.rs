pub mod application_store;
pub mod board_service;
pub mod job_service;
pub mod offer_service;
