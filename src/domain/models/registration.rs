use serde::{Deserialize, Serialize};

use super::fresh_id;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub ticket_type: String,
    /// Always "confirmed" on creation; the demo has no payment step.
    pub status: String,
}

impl Registration {
    pub fn new(event_id: String, name: String, email: String, ticket_type: String) -> Self {
        Self {
            id: fresh_id("reg"),
            event_id,
            name,
            email,
            ticket_type,
            status: "confirmed".to_string(),
        }
    }
}
