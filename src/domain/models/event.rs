use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fresh_id;

pub const EVENT_STATUSES: &[&str] = &["open", "closed", "cancelled"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub venue: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TicketType {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
    pub capacity: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: Location,
    pub status: String,
    pub capacity: i32,
    pub registrations: i32,
    pub category: String,
    pub ticket_types: Vec<TicketType>,
    pub speakers: Vec<Speaker>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: Location,
    pub status: String,
    pub capacity: i32,
    pub category: String,
    pub ticket_types: Vec<TicketType>,
    pub speakers: Vec<Speaker>,
}

impl Event {
    pub fn new(params: NewEventParams) -> Self {
        let now = Utc::now();
        Self {
            id: fresh_id("evt"),
            title: params.title,
            description: params.description,
            start_at: params.start_at,
            end_at: params.end_at,
            location: params.location,
            status: params.status,
            capacity: params.capacity,
            registrations: 0,
            category: params.category,
            ticket_types: params.ticket_types,
            speakers: params.speakers,
            created_at: now,
            updated_at: now,
        }
    }
}
