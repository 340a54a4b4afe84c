use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fresh_id;

pub const USER_ROLES: &[&str] = &["admin", "editor", "member"];
pub const USER_STATUSES: &[&str] = &["active", "inactive", "suspended"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique by convention only; the mock layer does not validate it.
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub joined_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub events_attended: i32,
}

pub struct NewUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
}

impl User {
    pub fn new(params: NewUserParams) -> Self {
        Self {
            id: fresh_id("user"),
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
            role: params.role,
            status: params.status,
            joined_at: Utc::now(),
            last_login_at: None,
            events_attended: 0,
        }
    }
}
