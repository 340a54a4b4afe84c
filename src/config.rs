use std::env;

#[derive(Clone)]
pub struct Config {
    /// Multiplier applied to every simulated network delay.
    /// 1.0 behaves like the demo frontend, 0.0 disables latency (tests).
    pub latency_scale: f64,
    /// Freshness window for cached queries, in milliseconds.
    pub stale_time_ms: u64,
    /// Automatic retries for a failed fetch before surfacing the error.
    pub retry: u32,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            latency_scale: env::var("MOCK_LATENCY_SCALE")
                .unwrap_or_else(|_| "1.0".to_string())
                .parse()
                .expect("MOCK_LATENCY_SCALE must be a number"),
            stale_time_ms: env::var("QUERY_STALE_TIME_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .expect("QUERY_STALE_TIME_MS must be a number"),
            retry: env::var("QUERY_RETRY")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .expect("QUERY_RETRY must be a number"),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .expect("SEED_DEMO_DATA must be true or false"),
        }
    }

    /// Zero-latency configuration used by the integration tests.
    pub fn for_tests() -> Self {
        Self {
            latency_scale: 0.0,
            stale_time_ms: 30_000,
            retry: 2,
            seed_demo_data: false,
        }
    }
}
