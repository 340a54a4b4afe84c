use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    ActivityRepository, CampaignRepository, EventRepository, RegistrationRepository,
    UserRepository,
};

/// Explicit context object passed to the API layer at construction. The
/// repositories exclusively own all entity records for the process lifetime;
/// nothing survives a restart.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub activity_repo: Arc<dyn ActivityRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub campaign_repo: Arc<dyn CampaignRepository>,
    pub registration_repo: Arc<dyn RegistrationRepository>,
}
