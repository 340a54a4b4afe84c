use std::future::Future;
use std::sync::Mutex;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// Tracks the lifecycle of a single write so a caller can render
/// pending/error/success state. Never touches the cache; invalidation is the
/// caller's job (or [`QueryCache::mutate`]'s, which does it by entity kind).
///
/// [`QueryCache::mutate`]: super::query_cache::QueryCache::mutate
pub struct Mutation {
    status: Mutex<MutationStatus>,
}

impl Mutation {
    pub fn new() -> Self {
        Self {
            status: Mutex::new(MutationStatus::Idle),
        }
    }

    pub fn status(&self) -> MutationStatus {
        *self.status.lock().unwrap()
    }

    pub async fn run<T, F, Fut>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        *self.status.lock().unwrap() = MutationStatus::Pending;
        let result = f().await;
        *self.status.lock().unwrap() = match &result {
            Ok(_) => MutationStatus::Success,
            Err(_) => MutationStatus::Error,
        };
        result
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Self::new()
    }
}
