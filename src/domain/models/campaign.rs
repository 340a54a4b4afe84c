use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fresh_id;

pub const CAMPAIGN_STATUSES: &[&str] = &["draft", "scheduled", "sending", "sent"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub content: String,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub audience_id: String,
}

impl Campaign {
    pub fn new(name: String, subject: String, content: String, audience_id: String) -> Self {
        Self {
            id: fresh_id("camp"),
            name,
            subject,
            content,
            status: "draft".to_string(),
            scheduled_at: None,
            audience_id,
        }
    }
}
