use crate::domain::{models::registration::Registration, ports::RegistrationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryRegistrationRepo {
    registrations: RwLock<Vec<Registration>>,
}

impl MemoryRegistrationRepo {
    pub fn new() -> Self {
        Self {
            registrations: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryRegistrationRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationRepository for MemoryRegistrationRepo {
    async fn insert(&self, registration: &Registration) -> Result<Registration, AppError> {
        let mut registrations = self.registrations.write().await;
        registrations.push(registration.clone());
        Ok(registration.clone())
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Registration>, AppError> {
        let registrations = self.registrations.read().await;
        Ok(registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }
}
