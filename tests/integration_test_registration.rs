mod common;

use common::{sample_event, TestApp};
use crm_mock_backend::api::dtos::requests::RegisterRequest;

fn attendee(name: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        ticket_type: None,
    }
}

#[tokio::test]
async fn test_register_increments_event_counter() {
    let app = TestApp::new().await;

    let event = app.api.events.create(sample_event("Demo")).await.unwrap();
    assert_eq!(event.registrations, 0);

    for i in 0..3 {
        app.api
            .events
            .register(&event.id, attendee("Deltaker", &format!("d{}@example.com", i)))
            .await
            .unwrap();
    }

    let after = app.api.events.get_by_id(&event.id).await.unwrap();
    assert_eq!(after.registrations, 3);
    assert!(after.updated_at >= event.updated_at);
}

#[tokio::test]
async fn test_register_returns_confirmed_registration() {
    let app = TestApp::new().await;

    let event = app.api.events.create(sample_event("Demo")).await.unwrap();
    let registration = app
        .api
        .events
        .register(&event.id, attendee("Alice", "alice@example.com"))
        .await
        .unwrap();

    assert!(registration.id.starts_with("reg_"));
    assert_eq!(registration.event_id, event.id);
    assert_eq!(registration.status, "confirmed");
    assert_eq!(registration.ticket_type, "std");
}

#[tokio::test]
async fn test_register_on_missing_event_fails_with_not_found() {
    let app = TestApp::new().await;

    let err = app
        .api
        .events
        .register("evt_missing", attendee("Bob", "bob@example.com"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_registrations_are_listable_per_event() {
    let app = TestApp::new().await;

    let first = app.api.events.create(sample_event("Første")).await.unwrap();
    let second = app.api.events.create(sample_event("Andre")).await.unwrap();

    app.api
        .events
        .register(&first.id, attendee("Alice", "alice@example.com"))
        .await
        .unwrap();
    app.api
        .events
        .register(&first.id, attendee("Bob", "bob@example.com"))
        .await
        .unwrap();
    app.api
        .events
        .register(&second.id, attendee("Carol", "carol@example.com"))
        .await
        .unwrap();

    let listed = app.api.events.list_registrations(&first.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.event_id == first.id));
}

#[tokio::test]
async fn test_overbooking_is_not_prevented() {
    let app = TestApp::new().await;

    let mut request = sample_event("Liten");
    request.capacity = 1;
    let event = app.api.events.create(request).await.unwrap();

    for i in 0..2 {
        app.api
            .events
            .register(&event.id, attendee("Deltaker", &format!("d{}@example.com", i)))
            .await
            .unwrap();
    }

    let after = app.api.events.get_by_id(&event.id).await.unwrap();
    assert_eq!(after.registrations, 2);
    assert!(after.registrations > after.capacity);
}
