use serde::{Deserialize, Serialize};

/// List result shape shared by every `get_all`.
///
/// `total` counts the items actually returned (after any `limit`), matching
/// the contract the frontend was built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReport {
    pub sent: i64,
}
