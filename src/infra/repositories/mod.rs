pub mod memory_activity_repo;
pub mod memory_campaign_repo;
pub mod memory_event_repo;
pub mod memory_registration_repo;
pub mod memory_user_repo;
