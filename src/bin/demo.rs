//! Walkthrough of the mock backend: login, guarded routes, cached reads and
//! a mutation with automatic invalidation. Run with `cargo run --bin demo`.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use crm_mock_backend::api::dtos::requests::{CreateEventRequest, Credentials, EventFilter};
use crm_mock_backend::api::dtos::responses::Page;
use crm_mock_backend::api::MockApi;
use crm_mock_backend::cache::{EntityKind, QueryCache, QueryKey, QueryOptions};
use crm_mock_backend::config::Config;
use crm_mock_backend::domain::models::event::{Event, Location};
use crm_mock_backend::infra::factory::bootstrap_state;
use crm_mock_backend::init_logging;
use crm_mock_backend::routing::RoutePolicy;

#[tokio::main]
async fn main() {
    let _guard = init_logging();

    let config = Config::from_env();
    let state = Arc::new(bootstrap_state(&config).await);
    let api = Arc::new(MockApi::new(state));
    let cache = QueryCache::new(QueryOptions::from_config(&config));

    let session = api
        .auth
        .login(Credentials {
            email: "demo@example.com".to_string(),
            password: "whatever".to_string(),
        })
        .await
        .expect("demo login cannot fail");

    let policy = RoutePolicy::default_table();
    for path in ["/", "/admin/arrangementer", "/admin/innstillinger"] {
        info!(
            "{} -> {:?} (as {})",
            path,
            policy.resolve(path, Some(&session)),
            session.user.role
        );
    }

    // Two concurrent observers of the same key share one fetch.
    let events_key = QueryKey::new("events");
    let fetch_events = {
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.events.get_all(&EventFilter::default()).await }
        }
    };
    let (first, second) = tokio::join!(
        cache.observe::<Page<Event>, _, _>(events_key.clone(), None, fetch_events.clone()),
        cache.observe::<Page<Event>, _, _>(events_key.clone(), None, fetch_events.clone()),
    );
    info!(
        "events: {} (deduped: {})",
        first.data.map(|p| p.total).unwrap_or(0),
        second.from_cache || second.data.is_some()
    );

    // A write through the cache invalidates every event-derived key family.
    let created = cache
        .mutate(EntityKind::Events, || {
            api.events.create(CreateEventRequest {
                title: "Vinterworkshop".to_string(),
                description: "Praktisk workshop i mindre grupper".to_string(),
                start_at: Utc::now() + Duration::days(30),
                end_at: Utc::now() + Duration::days(30) + Duration::hours(4),
                location: Location {
                    venue: "Kontoret".to_string(),
                    address: "Storgata 1".to_string(),
                    city: "Oslo".to_string(),
                    country: "NO".to_string(),
                },
                status: None,
                capacity: 25,
                category: "Workshop".to_string(),
                ticket_types: None,
                speakers: None,
            })
        })
        .await
        .expect("create failed");
    info!("created {} ({})", created.title, created.id);

    let refreshed = cache
        .observe::<Page<Event>, _, _>(events_key, None, fetch_events)
        .await;
    info!(
        "events after create: {} (from_cache: {})",
        refreshed.data.map(|p| p.total).unwrap_or(0),
        refreshed.from_cache
    );
}
