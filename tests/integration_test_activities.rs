mod common;

use common::{sample_activity, TestApp};
use crm_mock_backend::api::dtos::requests::{ActivityFilter, UpdateActivityRequest};
use crm_mock_backend::error::AppError;

#[tokio::test]
async fn test_seed_contains_three_activities() {
    let app = TestApp::seeded().await;

    let page = app
        .api
        .activities
        .get_all(&ActivityFilter::default())
        .await
        .unwrap();
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_status_filter_hides_inactive() {
    let app = TestApp::seeded().await;

    let page = app
        .api
        .activities
        .get_all(&ActivityFilter {
            status: Some("active".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|a| a.status == "active"));
}

#[tokio::test]
async fn test_create_defaults_to_active() {
    let app = TestApp::new().await;

    let created = app
        .api
        .activities
        .create(sample_activity("Sjakkgruppe"))
        .await
        .unwrap();
    assert!(created.id.starts_with("act_"));
    assert_eq!(created.status, "active");

    let fetched = app.api.activities.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let app = TestApp::new().await;

    let mut request = sample_activity("Sjakkgruppe");
    request.status = Some("paused".to_string());
    assert!(matches!(
        app.api.activities.create(request).await.unwrap_err(),
        AppError::Validation(_)
    ));
}

#[tokio::test]
async fn test_update_merges_and_advances_updated_at() {
    let app = TestApp::new().await;

    let created = app
        .api
        .activities
        .create(sample_activity("Sjakkgruppe"))
        .await
        .unwrap();

    let updated = app
        .api
        .activities
        .update(
            &created.id,
            UpdateActivityRequest {
                schedule: Some("Torsdager 19:00".to_string()),
                status: Some("archived".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.instructor, created.instructor);
    assert_eq!(updated.schedule, "Torsdager 19:00");
    assert_eq!(updated.status, "archived");
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_rejects_unknown_status() {
    let app = TestApp::new().await;

    let created = app
        .api
        .activities
        .create(sample_activity("Sjakkgruppe"))
        .await
        .unwrap();

    let err = app
        .api
        .activities
        .update(
            &created.id,
            UpdateActivityRequest {
                status: Some("paused".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_delete_then_gone() {
    let app = TestApp::new().await;

    let created = app
        .api
        .activities
        .create(sample_activity("Sjakkgruppe"))
        .await
        .unwrap();

    let deleted = app.api.activities.delete(&created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);

    assert!(app
        .api
        .activities
        .get_by_id(&created.id)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(app
        .api
        .activities
        .delete(&created.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_search_matches_title_and_description() {
    let app = TestApp::seeded().await;

    let page = app
        .api
        .activities
        .get_all(&ActivityFilter {
            search: Some("yoga".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "Yoga for alle");
}
