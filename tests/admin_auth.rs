mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::read_json;
use http_helpers::json_request;
use nodex::api::types::FeatureFlags;
use nodex::app::{AppState, build_router};
use nodex::i18n::Lang;
use nodex::service::EventMembershipService;
use nodex::store::memory::InMemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with_token(
    admin_token: Option<&str>,
) -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState {
        features: FeatureFlags {
            durable_storage: false,
            admin_enabled: admin_token.is_some(),
        },
        service: EventMembershipService::new(store),
        api_version: "v1".to_string(),
        default_lang: Lang::En,
        admin_token: admin_token.map(str::to_string),
    };
    build_router(state).into_service()
}

fn seed_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/v1/admin/events/seed");
    if let Some(token) = token {
        builder = builder.header("X-NodeX-Admin-Token", token);
    }
    builder.body(Body::empty()).expect("request")
}

#[tokio::test]
async fn admin_routes_hidden_without_configured_token() {
    let app = app_with_token(None);
    let response = app
        .clone()
        .oneshot(seed_request(Some("anything")))
        .await
        .expect("seed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json(response).await;
    assert_eq!(payload["code"], "not_enabled");
}

#[tokio::test]
async fn admin_token_is_checked() {
    let app = app_with_token(Some("operator-token"));

    let response = app
        .clone()
        .oneshot(seed_request(None))
        .await
        .expect("missing token");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(seed_request(Some("wrong")))
        .await
        .expect("wrong token");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(seed_request(Some("operator-token")))
        .await
        .expect("seed");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["inserted"], 3);

    // Second seed is a no-op against the populated catalog.
    let response = app
        .clone()
        .oneshot(seed_request(Some("operator-token")))
        .await
        .expect("seed again");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["inserted"], 0);
}

#[tokio::test]
async fn create_and_delete_event() {
    let app = app_with_token(Some("operator-token"));

    let invalid = json_request(
        "POST",
        "/v1/admin/events",
        serde_json::json!({
            "title_en": "No Capacity",
            "date": "2026-10-01",
            "max_participants": 0
        }),
    );
    let invalid = with_token(invalid, "operator-token");
    let response = app.clone().oneshot(invalid).await.expect("invalid");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let create = json_request(
        "POST",
        "/v1/admin/events",
        serde_json::json!({
            "title_en": "Movie Night",
            "title_kr": "영화의 밤",
            "date": "2026-10-01",
            "location": "Auditorium",
            "max_participants": 40
        }),
    );
    let create = with_token(create, "operator-token");
    let response = app.clone().oneshot(create).await.expect("create");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json(response).await;
    let event_id = payload["id"].as_str().expect("id").to_string();
    assert_eq!(payload["current_participants"], 0);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/v1/admin/events/{event_id}"))
        .header("X-NodeX-Admin-Token", "operator-token")
        .body(Body::empty())
        .expect("delete");
    let response = app.clone().oneshot(delete).await.expect("delete");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let delete_missing = Request::builder()
        .method("DELETE")
        .uri(format!("/v1/admin/events/{event_id}"))
        .header("X-NodeX-Admin-Token", "operator-token")
        .body(Body::empty())
        .expect("delete missing");
    let response = app
        .clone()
        .oneshot(delete_missing)
        .await
        .expect("delete missing");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn with_token(request: Request<Body>, token: &str) -> Request<Body> {
    let (mut parts, body) = request.into_parts();
    parts
        .headers
        .insert("X-NodeX-Admin-Token", token.parse().expect("token header"));
    Request::from_parts(parts, body)
}
