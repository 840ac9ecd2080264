mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::read_json;
use http_helpers::json_request;
use nodex::api::types::FeatureFlags;
use nodex::app::{AppState, build_router};
use nodex::i18n::Lang;
use nodex::service::EventMembershipService;
use nodex::store::null::NullStore;
use std::sync::Arc;
use tower::ServiceExt;

fn null_app() -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    let state = AppState {
        features: FeatureFlags {
            durable_storage: false,
            admin_enabled: false,
        },
        service: EventMembershipService::new(Arc::new(NullStore)),
        api_version: "v1".to_string(),
        default_lang: Lang::En,
        admin_token: None,
    };
    build_router(state).into_service()
}

// Without a configured backend the app stays navigable: every read answers
// with empty data and writes vanish instead of erroring.
#[tokio::test]
async fn reads_answer_empty_and_writes_are_dropped() {
    let app = null_app();

    let list = Request::builder()
        .uri("/v1/events")
        .body(Body::empty())
        .expect("list");
    let response = app.clone().oneshot(list).await.expect("list");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert!(payload["items"].as_array().unwrap().is_empty());

    let register = json_request(
        "POST",
        "/v1/users",
        serde_json::json!({ "name": "Kim", "student_id": "20231234" }),
    );
    let response = app.clone().oneshot(register).await.expect("register");
    assert_eq!(response.status(), StatusCode::CREATED);

    // The write went nowhere.
    let profile = Request::builder()
        .uri("/v1/users/20231234")
        .body(Body::empty())
        .expect("profile");
    let response = app.clone().oneshot(profile).await.expect("profile");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Joins fall out as unregistered because the lookup finds nothing.
    let join = json_request(
        "POST",
        "/v1/events/any/join",
        serde_json::json!({ "user_name": "Kim" }),
    );
    let response = app.clone().oneshot(join).await.expect("join");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let visit = Request::builder()
        .method("POST")
        .uri("/v1/visits")
        .body(Body::empty())
        .expect("visit");
    let response = app.clone().oneshot(visit).await.expect("visit");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["count"], 0);

    let info = Request::builder()
        .uri("/v1/system/info")
        .body(Body::empty())
        .expect("info");
    let response = app.clone().oneshot(info).await.expect("info");
    let payload = read_json(response).await;
    assert_eq!(payload["storage_backend"], "none");
}
