use std::sync::Arc;

use chrono::{Duration, Utc};

use crm_mock_backend::api::dtos::requests::{
    CreateActivityRequest, CreateEventRequest, CreateUserRequest,
};
use crm_mock_backend::api::MockApi;
use crm_mock_backend::cache::{QueryCache, QueryOptions};
use crm_mock_backend::config::Config;
use crm_mock_backend::domain::models::event::Location;
use crm_mock_backend::infra::factory::bootstrap_state;
use crm_mock_backend::state::AppState;

#[allow(dead_code)]
pub struct TestApp {
    pub state: Arc<AppState>,
    pub api: Arc<MockApi>,
    pub cache: QueryCache,
}

impl TestApp {
    /// Empty stores, zero latency.
    pub async fn new() -> Self {
        Self::with_config(Config::for_tests()).await
    }

    /// Demo dataset loaded: 2 events, 3 activities, 4 users, 2 campaigns.
    #[allow(dead_code)]
    pub async fn seeded() -> Self {
        let mut config = Config::for_tests();
        config.seed_demo_data = true;
        Self::with_config(config).await
    }

    async fn with_config(config: Config) -> Self {
        let state = Arc::new(bootstrap_state(&config).await);
        let api = Arc::new(MockApi::new(state.clone()));
        let cache = QueryCache::new(QueryOptions::from_config(&config));
        Self { state, api, cache }
    }
}

#[allow(dead_code)]
pub fn sample_event(title: &str) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        description: "Testarrangement".to_string(),
        start_at: Utc::now() + Duration::days(14),
        end_at: Utc::now() + Duration::days(14) + Duration::hours(6),
        location: Location {
            venue: "Kulturhuset".to_string(),
            address: "Youngstorget 3".to_string(),
            city: "Oslo".to_string(),
            country: "NO".to_string(),
        },
        status: None,
        capacity: 10,
        category: "Seminar".to_string(),
        ticket_types: None,
        speakers: None,
    }
}

#[allow(dead_code)]
pub fn sample_activity(title: &str) -> CreateActivityRequest {
    CreateActivityRequest {
        title: title.to_string(),
        description: "Testaktivitet".to_string(),
        category: "Sport".to_string(),
        duration: "60 minutter".to_string(),
        level: "Nybegynner".to_string(),
        instructor: "Test Instruktør".to_string(),
        schedule: "Mandager 18:00".to_string(),
        location: "Aktivitetshuset".to_string(),
        status: None,
    }
}

#[allow(dead_code)]
pub fn sample_user(first_name: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        first_name: first_name.to_string(),
        last_name: "Testesen".to_string(),
        email: email.to_string(),
        phone: "+47 000 00 000".to_string(),
        role: "member".to_string(),
        status: None,
    }
}
