mod common;

use common::TestApp;
use crm_mock_backend::api::dtos::requests::Credentials;
use crm_mock_backend::domain::models::session::{Session, SessionUser};
use crm_mock_backend::routing::{require_authenticated, require_role, RouteDecision, RoutePolicy};

fn session_with_role(role: &str) -> Session {
    Session::new(SessionUser {
        id: "1".to_string(),
        name: "Testbruker".to_string(),
        email: "test@example.com".to_string(),
        role: role.to_string(),
    })
}

#[test]
fn test_require_authenticated_redirects_anonymous_to_login() {
    assert_eq!(require_authenticated(None), RouteDecision::RedirectToLogin);
    let session = session_with_role("member");
    assert_eq!(require_authenticated(Some(&session)), RouteDecision::Allow);
}

#[test]
fn test_require_role_distinguishes_anonymous_from_unauthorized() {
    let editor = session_with_role("editor");

    assert_eq!(require_role(None, &["admin"]), RouteDecision::RedirectToLogin);
    assert_eq!(
        require_role(Some(&editor), &["admin"]),
        RouteDecision::RedirectToDefault
    );
    assert_eq!(
        require_role(Some(&editor), &["editor", "admin"]),
        RouteDecision::Allow
    );
}

#[test]
fn test_public_pages_need_no_session() {
    let policy = RoutePolicy::default_table();

    for path in ["/", "/arrangementer", "/aktiviteter", "/om-oss", "/kontakt", "/admin/login"] {
        assert_eq!(policy.resolve(path, None), RouteDecision::Allow, "path {}", path);
    }
}

#[test]
fn test_admin_area_requires_a_session() {
    let policy = RoutePolicy::default_table();
    let member = session_with_role("member");

    assert_eq!(
        policy.resolve("/admin", None),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(
        policy.resolve("/admin/arrangementer", None),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(policy.resolve("/admin", Some(&member)), RouteDecision::Allow);
    assert_eq!(
        policy.resolve("/admin/arrangementer", Some(&member)),
        RouteDecision::Allow
    );
}

#[test]
fn test_admin_only_sections_bounce_other_roles() {
    let policy = RoutePolicy::default_table();
    let admin = session_with_role("admin");
    let editor = session_with_role("editor");

    for path in ["/admin/brukere", "/admin/innstillinger"] {
        assert_eq!(policy.resolve(path, Some(&admin)), RouteDecision::Allow, "path {}", path);
        assert_eq!(
            policy.resolve(path, Some(&editor)),
            RouteDecision::RedirectToDefault,
            "path {}",
            path
        );
        assert_eq!(
            policy.resolve(path, None),
            RouteDecision::RedirectToLogin,
            "path {}",
            path
        );
    }
}

#[test]
fn test_editor_sections_allow_editor_and_admin() {
    let policy = RoutePolicy::default_table();
    let admin = session_with_role("admin");
    let editor = session_with_role("editor");
    let member = session_with_role("member");

    for path in ["/admin/nyhetsbrev", "/admin/rapportering"] {
        assert_eq!(policy.resolve(path, Some(&admin)), RouteDecision::Allow, "path {}", path);
        assert_eq!(policy.resolve(path, Some(&editor)), RouteDecision::Allow, "path {}", path);
        assert_eq!(
            policy.resolve(path, Some(&member)),
            RouteDecision::RedirectToDefault,
            "path {}",
            path
        );
    }
}

#[test]
fn test_most_specific_rule_wins() {
    let policy = RoutePolicy::default_table();
    let member = session_with_role("member");

    // /admin/login is public even though /admin requires a session.
    assert_eq!(policy.resolve("/admin/login", None), RouteDecision::Allow);
    // Role rules apply to nested paths under their section.
    assert_eq!(
        policy.resolve("/admin/brukere/user_1", Some(&member)),
        RouteDecision::RedirectToDefault
    );
    // Prefixes match whole segments only.
    assert_eq!(
        policy.resolve("/administrasjon", None),
        RouteDecision::Allow
    );
}

#[test]
fn test_unknown_paths_fall_through_to_public() {
    let policy = RoutePolicy::default_table();
    assert_eq!(policy.resolve("/finnes-ikke", None), RouteDecision::Allow);
}

#[tokio::test]
async fn test_login_grants_admin_session() {
    let app = TestApp::new().await;

    let session = app
        .api
        .auth
        .login(Credentials {
            email: "anna@example.com".to_string(),
            password: "hemmelig".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.role, "admin");
    assert_eq!(session.user.email, "anna@example.com");
    assert_eq!(session.token.len(), 48);

    let policy = RoutePolicy::default_table();
    assert_eq!(
        policy.resolve("/admin/innstillinger", Some(&session)),
        RouteDecision::Allow
    );

    app.api.auth.logout().await.unwrap();
    assert_eq!(
        policy.resolve("/admin/innstillinger", None),
        RouteDecision::RedirectToLogin
    );
}
