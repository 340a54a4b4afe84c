use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SignupPoint {
    pub date: String,
    pub signups: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterStats {
    pub sent: i64,
    pub open_rate: f64,
    pub click_rate: f64,
}

/// Dashboard aggregate. The numbers are static mock data; no analytics are
/// computed from the stores.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_contacts: i64,
    pub upcoming_events: i64,
    pub signups_data: Vec<SignupPoint>,
    pub newsletter_stats: NewsletterStats,
}
