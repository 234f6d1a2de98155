pub mod profile_repository;
pub mod timestamp;
