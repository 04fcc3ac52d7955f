//! End-to-end tests driving the router over HTTP semantics.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use hackhub_api_rest::{create_app_with_state, ApiConfig, AppState};
use hackhub_application::identity::UserRepositoryPort;
use hackhub_domain::identifiers::HackathonEventId;
use hackhub_testing::builders::UserBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

const ADMIN_SUBJECT: &str = "auth0|admin";

async fn test_app() -> (Router, AppState) {
    let state = AppState::new(ApiConfig::default());
    let admin = UserBuilder::new().with_subject(ADMIN_SUBJECT).admin().build();
    state.users.insert(&admin).await.unwrap();
    (create_app_with_state(state.clone()), state)
}

fn request(method: Method, uri: &str, subject: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(subject) = subject {
        builder = builder.header("x-hackhub-subject", subject);
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// POST /users for the subject and return the new user id as JSON.
async fn register(app: &Router, subject: &str, first_name: &str) -> Value {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/api/v1/users",
            Some(subject),
            Some(json!({
                "first_name": first_name,
                "last_name": "Tester",
                "avatar_url": null,
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    body["value"].clone()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _state) = test_app().await;
    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_configured_cors_origin_is_pinned() {
    let config = ApiConfig {
        cors_allow_origin: Some("https://hackhub.example".to_string()),
        ..ApiConfig::default()
    };
    let app = create_app_with_state(AppState::new(config));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://hackhub.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://hackhub.example")
    );

    // A different origin is not echoed back.
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_anonymous_caller_gets_unauthenticated_envelope() {
    let (app, _state) = test_app().await;
    let (status, body) = send(&app, request(Method::GET, "/api/v1/users/me", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"]["type"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_upsert_and_current_user_roundtrip() {
    let (app, _state) = test_app().await;
    let user_id = register(&app, "auth0|mona", "Mona").await;

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/v1/users/me", Some("auth0|mona"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["id"], user_id);
    assert_eq!(body["value"]["first_name"], "Mona");

    // Fetch by id works for anyone.
    let uri = format!("/api/v1/users/{}", user_id.as_str().unwrap());
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["first_name"], "Mona");
}

#[tokio::test]
async fn test_project_lifecycle_over_http() {
    let (app, _state) = test_app().await;
    register(&app, "auth0|creator", "Casey").await;
    register(&app, "auth0|stranger", "Sam").await;
    let event_id = HackathonEventId::new().to_string();

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/projects",
            Some("auth0|creator"),
            Some(json!({
                "title": "Realtime whiteboard",
                "description": "Multiplayer sketching",
                "hackathon_event_id": event_id,
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let project_id = body["value"]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/v1/projects/{project_id}");
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["title"], "Realtime whiteboard");

    // Only the creator may patch.
    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &uri,
            Some("auth0|stranger"),
            Some(json!({"title": "Hijacked"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["type"], "UNAUTHORIZED");

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &uri,
            Some("auth0|creator"),
            Some(json!({"title": "Renamed whiteboard"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["title"], "Renamed whiteboard");

    // The board lists the project and surfaces its creator.
    let board_uri = format!("/api/v1/events/{event_id}/projects");
    let (status, body) = send(&app, request(Method::GET, &board_uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["projects"].as_array().unwrap().len(), 1);
    assert_eq!(body["value"]["visible_users"].as_array().unwrap().len(), 1);

    let (status, _body) = send(
        &app,
        request(Method::DELETE, &uri, Some("auth0|creator"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Not-found responses carry the offending id.
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "PROJECT_NOT_FOUND");
    assert_eq!(body["error"]["id"], project_id);
}

#[tokio::test]
async fn test_project_upvote_flips_and_removal_is_idempotent() {
    let (app, _state) = test_app().await;
    register(&app, "auth0|voter", "Val").await;

    let (_, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/projects",
            Some("auth0|voter"),
            Some(json!({
                "title": "Voting target",
                "description": "Upvote me",
                "hackathon_event_id": HackathonEventId::new().to_string(),
            })),
        ),
    )
    .await;
    let uri = format!(
        "/api/v1/projects/{}/upvote",
        body["value"]["id"].as_str().unwrap()
    );

    let (status, body) = send(&app, request(Method::PUT, &uri, Some("auth0|voter"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["added"], true);

    let (_, body) = send(&app, request(Method::PUT, &uri, Some("auth0|voter"), None)).await;
    assert_eq!(body["value"]["added"], false);

    // Removing an absent upvote still succeeds.
    let (status, _) = send(
        &app,
        request(Method::DELETE, &uri, Some("auth0|voter"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_finalized_surface_is_admin_gated() {
    let (app, _state) = test_app().await;
    let member_id = register(&app, "auth0|member", "Mika").await;
    let event_id = HackathonEventId::new().to_string();
    let create_body = json!({
        "title": "Team Alpha",
        "description": "Selected for the build phase",
        "hackathon_event_id": event_id,
    });

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/finalized-projects",
            Some("auth0|member"),
            Some(create_body.clone()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["type"], "UNAUTHORIZED");

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/finalized-projects",
            Some(ADMIN_SUBJECT),
            Some(create_body),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let project_id = body["value"]["id"].as_str().unwrap().to_string();

    // Any registered caller may mark interest.
    let interest_uri = format!("/api/v1/finalized-projects/{project_id}/interest");
    let (status, _) = send(
        &app,
        request(Method::PUT, &interest_uri, Some("auth0|member"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Assignment is admin only.
    let assignment_uri = format!("/api/v1/finalized-projects/{project_id}/assignment");
    let assignment = json!({ "user_id": member_id });
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &assignment_uri,
            Some("auth0|member"),
            Some(assignment.clone()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &assignment_uri,
            Some(ADMIN_SUBJECT),
            Some(assignment),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let board_uri = format!("/api/v1/events/{event_id}/finalized-projects");
    let (status, body) = send(&app, request(Method::GET, &board_uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let project = &body["value"]["projects"][0];
    assert_eq!(project["interested_users"].as_array().unwrap().len(), 1);
    assert_eq!(project["assigned_users"].as_array().unwrap().len(), 1);
    assert_eq!(body["value"]["visible_users"][0]["id"], member_id);
}

#[tokio::test]
async fn test_event_routes() {
    let (app, _state) = test_app().await;
    register(&app, "auth0|member", "Mika").await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/events",
            Some("auth0|member"),
            Some(json!({"name": "Spring Hackathon"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/events",
            Some(ADMIN_SUBJECT),
            Some(json!({"name": "Spring Hackathon"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["current_phase"], "PROJECT_SUBMISSION");
    let event_id = body["value"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/api/v1/events/{event_id}/phase"),
            Some(ADMIN_SUBJECT),
            Some(json!({"phase": "PROJECT_VOTING"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["current_phase"], "PROJECT_VOTING");

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/v1/events/latest", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"]["id"], event_id);
}
