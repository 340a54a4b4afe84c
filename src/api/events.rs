use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::api::dtos::requests::{CreateEventRequest, EventFilter, RegisterRequest, UpdateEventRequest};
use crate::api::dtos::responses::Page;
use crate::api::simulate_latency;
use crate::domain::models::event::{Event, NewEventParams, EVENT_STATUSES};
use crate::domain::models::registration::Registration;
use crate::error::AppError;
use crate::state::AppState;

pub struct EventsApi {
    state: Arc<AppState>,
}

impl EventsApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Never fails: unknown filter values just produce an empty page.
    pub async fn get_all(&self, filter: &EventFilter) -> Result<Page<Event>, AppError> {
        simulate_latency(&self.state.config, 800).await;

        let mut events = self.state.event_repo.list().await?;

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            events.retain(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
            });
        }
        if let Some(category) = filter.category.as_deref().filter(|s| !s.is_empty()) {
            events.retain(|e| e.category == category);
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            events.retain(|e| e.status == status);
        }
        if let Some(limit) = filter.limit {
            events.truncate(limit);
        }

        let total = events.len();
        Ok(Page { items: events, total })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Event, AppError> {
        simulate_latency(&self.state.config, 600).await;

        self.state
            .event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn create(&self, payload: CreateEventRequest) -> Result<Event, AppError> {
        simulate_latency(&self.state.config, 1000).await;

        let status = payload.status.unwrap_or_else(|| "open".to_string());
        if !EVENT_STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation("Invalid status".to_string()));
        }
        if payload.end_at < payload.start_at {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }
        if payload.capacity <= 0 {
            return Err(AppError::Validation("Capacity must be positive".to_string()));
        }

        let event = Event::new(NewEventParams {
            title: payload.title,
            description: payload.description,
            start_at: payload.start_at,
            end_at: payload.end_at,
            location: payload.location,
            status,
            capacity: payload.capacity,
            category: payload.category,
            ticket_types: payload.ticket_types.unwrap_or_default(),
            speakers: payload.speakers.unwrap_or_default(),
        });

        info!("Creating event: {}", event.title);
        self.state.event_repo.insert(&event).await
    }

    /// Shallow-merge: fields absent from the payload are preserved as-is.
    /// Status values are checked against the allowed set; other patched
    /// fields are applied as-is.
    pub async fn update(&self, id: &str, payload: UpdateEventRequest) -> Result<Event, AppError> {
        simulate_latency(&self.state.config, 900).await;

        let mut event = self
            .state
            .event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if let Some(title) = payload.title {
            event.title = title;
        }
        if let Some(description) = payload.description {
            event.description = description;
        }
        if let Some(start_at) = payload.start_at {
            event.start_at = start_at;
        }
        if let Some(end_at) = payload.end_at {
            event.end_at = end_at;
        }
        if let Some(location) = payload.location {
            event.location = location;
        }
        if let Some(status) = payload.status {
            if !EVENT_STATUSES.contains(&status.as_str()) {
                return Err(AppError::Validation("Invalid status".to_string()));
            }
            event.status = status;
        }
        if let Some(capacity) = payload.capacity {
            event.capacity = capacity;
        }
        if let Some(category) = payload.category {
            event.category = category;
        }
        if let Some(ticket_types) = payload.ticket_types {
            event.ticket_types = ticket_types;
        }
        if let Some(speakers) = payload.speakers {
            event.speakers = speakers;
        }
        event.updated_at = Utc::now();

        self.state
            .event_repo
            .update(&event)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Removes and returns the deleted record.
    pub async fn delete(&self, id: &str) -> Result<Event, AppError> {
        simulate_latency(&self.state.config, 700).await;

        info!("Deleting event: {}", id);
        self.state
            .event_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Bumps the event's registration counter and records the attendee.
    /// Fails with `NotFound` when the event is gone, rather than silently
    /// returning an orphan registration.
    ///
    /// Capacity is not checked; overbooking is possible, as in the demo.
    pub async fn register(
        &self,
        event_id: &str,
        payload: RegisterRequest,
    ) -> Result<Registration, AppError> {
        simulate_latency(&self.state.config, 1200).await;

        let mut event = self
            .state
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        event.registrations += 1;
        event.updated_at = Utc::now();
        self.state
            .event_repo
            .update(&event)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let registration = Registration::new(
            event_id.to_string(),
            payload.name,
            payload.email,
            payload.ticket_type.unwrap_or_else(|| "std".to_string()),
        );

        info!(
            "Registered {} for event {} ({} total)",
            registration.email, event_id, event.registrations
        );
        self.state.registration_repo.insert(&registration).await
    }

    pub async fn list_registrations(&self, event_id: &str) -> Result<Vec<Registration>, AppError> {
        simulate_latency(&self.state.config, 500).await;
        self.state.registration_repo.list_by_event(event_id).await
    }
}
