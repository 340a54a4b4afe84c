use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fresh_id;

pub const ACTIVITY_STATUSES: &[&str] = &["active", "inactive", "archived"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Free text, e.g. "90 minutter".
    pub duration: String,
    pub level: String,
    pub instructor: String,
    /// Free text, e.g. "Tirsdager 18:00".
    pub schedule: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewActivityParams {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub level: String,
    pub instructor: String,
    pub schedule: String,
    pub location: String,
    pub status: String,
}

impl Activity {
    pub fn new(params: NewActivityParams) -> Self {
        let now = Utc::now();
        Self {
            id: fresh_id("act"),
            title: params.title,
            description: params.description,
            category: params.category,
            duration: params.duration,
            level: params.level,
            instructor: params.instructor,
            schedule: params.schedule,
            location: params.location,
            status: params.status,
            created_at: now,
            updated_at: now,
        }
    }
}
