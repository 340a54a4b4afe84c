pub mod activity;
pub mod campaign;
pub mod event;
pub mod registration;
pub mod session;
pub mod stats;
pub mod user;

use rand::{distributions::Alphanumeric, Rng};

/// Random prefixed id in the demo's `evt_a1b2c3d4e` style.
/// Not collision-checked; good enough for a session-scoped store.
pub fn fresh_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("{}_{}", prefix, suffix.to_lowercase())
}
