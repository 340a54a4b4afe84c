use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// The user record carried inside a login session. Leaner than the CRM
/// `User` entity; this is what the auth endpoint returns.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl Session {
    pub fn new(user: SessionUser) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        Self { user, token }
    }
}
