pub mod activities;
pub mod auth;
pub mod dashboard;
pub mod dtos;
pub mod events;
pub mod newsletter;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::state::AppState;

use activities::ActivitiesApi;
use auth::AuthApi;
use dashboard::DashboardApi;
use events::EventsApi;
use newsletter::NewsletterApi;
use users::UsersApi;

/// The full mock API surface, mirroring the client object a real HTTP/JSON
/// backend would replace: same method names, parameter shapes, return shapes
/// and error-on-not-found behavior.
pub struct MockApi {
    pub events: EventsApi,
    pub activities: ActivitiesApi,
    pub users: UsersApi,
    pub newsletter: NewsletterApi,
    pub dashboard: DashboardApi,
    pub auth: AuthApi,
}

impl MockApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            events: EventsApi::new(state.clone()),
            activities: ActivitiesApi::new(state.clone()),
            users: UsersApi::new(state.clone()),
            newsletter: NewsletterApi::new(state.clone()),
            dashboard: DashboardApi::new(state.clone()),
            auth: AuthApi::new(state),
        }
    }
}

/// Emulated network I/O. Each operation carries the delay the demo frontend
/// was tuned against, scaled by config (tests run at 0.0).
pub(crate) async fn simulate_latency(config: &Config, base_ms: u64) {
    if config.latency_scale <= 0.0 {
        return;
    }
    let scaled = (base_ms as f64 * config.latency_scale).round() as u64;
    tokio::time::sleep(Duration::from_millis(scaled)).await;
}
