pub mod application;
pub mod job;
pub mod status;
