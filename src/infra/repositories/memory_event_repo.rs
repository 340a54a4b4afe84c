use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory event collection. One lock per collection: mutations and reads
/// are separated by the API layer's artificial delay, so overlapping
/// operations would otherwise interleave mid-write.
pub struct MemoryEventRepo {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepo {
    async fn insert(&self, event: &Event) -> Result<Event, AppError> {
        let mut events = self.events.write().await;
        events.push(event.clone());
        Ok(event.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, AppError> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn update(&self, event: &Event) -> Result<Option<Event>, AppError> {
        let mut events = self.events.write().await;
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => {
                *existing = event.clone();
                Ok(Some(event.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<Event>, AppError> {
        let mut events = self.events.write().await;
        match events.iter().position(|e| e.id == id) {
            Some(index) => Ok(Some(events.remove(index))),
            None => Ok(None),
        }
    }
}
