use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::api::dtos::requests::{ActivityFilter, CreateActivityRequest, UpdateActivityRequest};
use crate::api::dtos::responses::Page;
use crate::api::simulate_latency;
use crate::domain::models::activity::{Activity, NewActivityParams, ACTIVITY_STATUSES};
use crate::error::AppError;
use crate::state::AppState;

pub struct ActivitiesApi {
    state: Arc<AppState>,
}

impl ActivitiesApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn get_all(&self, filter: &ActivityFilter) -> Result<Page<Activity>, AppError> {
        simulate_latency(&self.state.config, 700).await;

        let mut activities = self.state.activity_repo.list().await?;

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            activities.retain(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.description.to_lowercase().contains(&needle)
            });
        }
        if let Some(category) = filter.category.as_deref().filter(|s| !s.is_empty()) {
            activities.retain(|a| a.category == category);
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            activities.retain(|a| a.status == status);
        }
        if let Some(limit) = filter.limit {
            activities.truncate(limit);
        }

        let total = activities.len();
        Ok(Page {
            items: activities,
            total,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Activity, AppError> {
        simulate_latency(&self.state.config, 500).await;

        self.state
            .activity_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }

    pub async fn create(&self, payload: CreateActivityRequest) -> Result<Activity, AppError> {
        simulate_latency(&self.state.config, 900).await;

        let status = payload.status.unwrap_or_else(|| "active".to_string());
        if !ACTIVITY_STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation("Invalid status".to_string()));
        }

        let activity = Activity::new(NewActivityParams {
            title: payload.title,
            description: payload.description,
            category: payload.category,
            duration: payload.duration,
            level: payload.level,
            instructor: payload.instructor,
            schedule: payload.schedule,
            location: payload.location,
            status,
        });

        info!("Creating activity: {}", activity.title);
        self.state.activity_repo.insert(&activity).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: UpdateActivityRequest,
    ) -> Result<Activity, AppError> {
        simulate_latency(&self.state.config, 800).await;

        let mut activity = self
            .state
            .activity_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        if let Some(title) = payload.title {
            activity.title = title;
        }
        if let Some(description) = payload.description {
            activity.description = description;
        }
        if let Some(category) = payload.category {
            activity.category = category;
        }
        if let Some(duration) = payload.duration {
            activity.duration = duration;
        }
        if let Some(level) = payload.level {
            activity.level = level;
        }
        if let Some(instructor) = payload.instructor {
            activity.instructor = instructor;
        }
        if let Some(schedule) = payload.schedule {
            activity.schedule = schedule;
        }
        if let Some(location) = payload.location {
            activity.location = location;
        }
        if let Some(status) = payload.status {
            if !ACTIVITY_STATUSES.contains(&status.as_str()) {
                return Err(AppError::Validation("Invalid status".to_string()));
            }
            activity.status = status;
        }
        activity.updated_at = Utc::now();

        self.state
            .activity_repo
            .update(&activity)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<Activity, AppError> {
        simulate_latency(&self.state.config, 600).await;

        info!("Deleting activity: {}", id);
        self.state
            .activity_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }
}
