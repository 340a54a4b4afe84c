use crate::domain::models::{
    activity::Activity, campaign::Campaign, event::Event, registration::Registration, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage seams for the mock backend. The in-memory implementations in
/// `infra::repositories` own the canonical collections for the process
/// lifetime; a persistent backend would slot in behind the same traits
/// without touching the API layer.
///
/// Repositories are deliberately dumb: no filtering, no id generation, no
/// timestamp handling. All of that lives in the API layer, which is the only
/// mutation path.

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    /// Replaces the stored record with the same id. `None` when absent.
    async fn update(&self, event: &Event) -> Result<Option<Event>, AppError>;
    /// Removes and returns the record. `None` when absent.
    async fn delete(&self, id: &str) -> Result<Option<Event>, AppError>;
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn insert(&self, activity: &Activity) -> Result<Activity, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Activity>, AppError>;
    async fn list(&self) -> Result<Vec<Activity>, AppError>;
    async fn update(&self, activity: &Activity) -> Result<Option<Activity>, AppError>;
    async fn delete(&self, id: &str) -> Result<Option<Activity>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<Option<User>, AppError>;
    async fn delete(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn insert(&self, campaign: &Campaign) -> Result<Campaign, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Campaign>, AppError>;
    async fn list(&self) -> Result<Vec<Campaign>, AppError>;
    async fn update(&self, campaign: &Campaign) -> Result<Option<Campaign>, AppError>;
    async fn delete(&self, id: &str) -> Result<Option<Campaign>, AppError>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn insert(&self, registration: &Registration) -> Result<Registration, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Registration>, AppError>;
}
