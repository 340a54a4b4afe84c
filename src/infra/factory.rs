use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::infra::repositories::{
    memory_activity_repo::MemoryActivityRepo, memory_campaign_repo::MemoryCampaignRepo,
    memory_event_repo::MemoryEventRepo, memory_registration_repo::MemoryRegistrationRepo,
    memory_user_repo::MemoryUserRepo,
};
use crate::infra::seed::seed_demo_data;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing in-memory stores...");

    let state = AppState {
        config: config.clone(),
        event_repo: Arc::new(MemoryEventRepo::new()),
        activity_repo: Arc::new(MemoryActivityRepo::new()),
        user_repo: Arc::new(MemoryUserRepo::new()),
        campaign_repo: Arc::new(MemoryCampaignRepo::new()),
        registration_repo: Arc::new(MemoryRegistrationRepo::new()),
    };

    if config.seed_demo_data {
        seed_demo_data(&state)
            .await
            .expect("Failed to seed demo data");
    }

    state
}
