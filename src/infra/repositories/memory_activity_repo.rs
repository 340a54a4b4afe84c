use crate::domain::{models::activity::Activity, ports::ActivityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryActivityRepo {
    activities: RwLock<Vec<Activity>>,
}

impl MemoryActivityRepo {
    pub fn new() -> Self {
        Self {
            activities: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryActivityRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityRepository for MemoryActivityRepo {
    async fn insert(&self, activity: &Activity) -> Result<Activity, AppError> {
        let mut activities = self.activities.write().await;
        activities.push(activity.clone());
        Ok(activity.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Activity>, AppError> {
        let activities = self.activities.read().await;
        Ok(activities.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Activity>, AppError> {
        let activities = self.activities.read().await;
        Ok(activities.clone())
    }

    async fn update(&self, activity: &Activity) -> Result<Option<Activity>, AppError> {
        let mut activities = self.activities.write().await;
        match activities.iter_mut().find(|a| a.id == activity.id) {
            Some(existing) => {
                *existing = activity.clone();
                Ok(Some(activity.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<Activity>, AppError> {
        let mut activities = self.activities.write().await;
        match activities.iter().position(|a| a.id == id) {
            Some(index) => Ok(Some(activities.remove(index))),
            None => Ok(None),
        }
    }
}
