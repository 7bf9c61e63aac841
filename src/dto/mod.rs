pub mod application_dto;
pub mod board_dto;
