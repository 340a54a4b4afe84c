use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::Credentials;
use crate::api::simulate_latency;
use crate::domain::models::session::{Session, SessionUser};
use crate::error::AppError;
use crate::state::AppState;

pub struct AuthApi {
    state: Arc<AppState>,
}

impl AuthApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Demo login: any credentials are accepted and yield an admin session.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, AppError> {
        simulate_latency(&self.state.config, 1000).await;

        info!("Login: {}", credentials.email);
        Ok(Session::new(SessionUser {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: credentials.email,
            role: "admin".to_string(),
        }))
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        simulate_latency(&self.state.config, 500).await;
        Ok(())
    }
}
