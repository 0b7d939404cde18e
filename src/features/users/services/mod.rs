mod profile_repository;
mod profile_service;

pub use profile_repository::ProfileRepository;
pub use profile_service::ProfileService;
