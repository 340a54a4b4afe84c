use std::sync::Arc;

use crate::api::simulate_latency;
use crate::domain::models::stats::{DashboardStats, NewsletterStats, SignupPoint};
use crate::error::AppError;
use crate::state::AppState;

pub struct DashboardApi {
    state: Arc<AppState>,
}

impl DashboardApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Static mock numbers; nothing is aggregated from the stores.
    pub async fn get_stats(&self) -> Result<DashboardStats, AppError> {
        simulate_latency(&self.state.config, 700).await;

        Ok(DashboardStats {
            total_contacts: 1247,
            upcoming_events: 3,
            signups_data: vec![
                SignupPoint { date: "2025-08-01".to_string(), signups: 12 },
                SignupPoint { date: "2025-08-02".to_string(), signups: 19 },
                SignupPoint { date: "2025-08-03".to_string(), signups: 8 },
                SignupPoint { date: "2025-08-04".to_string(), signups: 15 },
                SignupPoint { date: "2025-08-05".to_string(), signups: 22 },
                SignupPoint { date: "2025-08-06".to_string(), signups: 18 },
                SignupPoint { date: "2025-08-07".to_string(), signups: 25 },
            ],
            newsletter_stats: NewsletterStats {
                sent: 5420,
                open_rate: 24.5,
                click_rate: 3.2,
            },
        })
    }
}
