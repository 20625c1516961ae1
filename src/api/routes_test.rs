//! Integration tests for the HTTP surface.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{ClientRepository, Database, NewClient, SqliteDatabase};

/// Create a test app with an in-memory database
async fn test_state(graphiql: bool) -> AppState<SqliteDatabase> {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    AppState::new(db, graphiql)
}

/// Helper to parse JSON response body
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn graphql_post(query: &str, variables: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "query": query, "variables": variables })).unwrap(),
        ))
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let app = routes::create_router(test_state(false).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn post_graphql_lists_seeded_clients() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    let seeded = db
        .clients()
        .create(&NewClient {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555-1".to_string(),
        })
        .await
        .unwrap();
    let app = routes::create_router(AppState::new(db, false));

    let response = app
        .oneshot(graphql_post("{ clients { id name } }", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body["data"]["clients"],
        json!([{ "id": seeded.id, "name": "Ann" }])
    );
    assert!(body.get("errors").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn post_graphql_mutation_then_query_share_state() {
    let app = routes::create_router(test_state(false).await);

    let response = app
        .clone()
        .oneshot(graphql_post(
            r#"mutation { addClient(name: "Ann", email: "ann@x.com", phone: "555-1") { id } }"#,
            json!({}),
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    let client_id = body["data"]["addClient"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(graphql_post(
            "mutation($c: ID!) { addProject(name: \"Site\", description: \"desc\", clientId: $c) { id } }",
            json!({ "c": client_id }),
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    let project_id = body["data"]["addProject"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(graphql_post(
            "query($p: ID) { project(id: $p) { status client { name } } }",
            json!({ "p": project_id }),
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(
        body["data"]["project"],
        json!({ "status": "Not Started", "client": { "name": "Ann" } })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn post_graphql_validation_error_is_reported() {
    let app = routes::create_router(test_state(false).await);

    let response = app
        .oneshot(graphql_post(
            r#"mutation { addClient(name: "Ann") { id } }"#,
            json!({}),
        ))
        .await
        .unwrap();

    let body = json_body(response).await;
    let errors = body["errors"].as_array().expect("Expected errors array");
    assert!(!errors.is_empty());
    assert!(body["data"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn get_graphql_executes_query_when_graphiql_disabled() {
    let app = routes::create_router(test_state(false).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/graphql?query=%7B%20projects%20%7B%20id%20%7D%20%7D")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["projects"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_graphql_serves_graphiql_to_browsers_when_enabled() {
    let app = routes::create_router(test_state(true).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("graphiql"));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_graphql_executes_query_for_non_browser_when_graphiql_enabled() {
    let app = routes::create_router(test_state(true).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/graphql?query=%7B%20clients%20%7B%20id%20%7D%20%7D")
                .header(header::ACCEPT, "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["clients"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_graphql_ignores_html_accept_when_graphiql_disabled() {
    let app = routes::create_router(test_state(false).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/graphql?query=%7B%20clients%20%7B%20id%20%7D%20%7D")
                .header(header::ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["clients"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn cors_headers_are_present() {
    let app = routes::create_router(test_state(false).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
