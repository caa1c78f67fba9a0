//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reflink_core::value_objects::LinkStatus;
use reflink_service::CatalogService;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Index and Fallback Tests
// ============================================================================

#[tokio::test]
async fn test_index_lists_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    let index: IndexBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(index.message, "Referral Links Bot API");
    assert_eq!(index.version, "1.0");
    assert_eq!(index.endpoints, vec!["/api/categories", "/api/health"]);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/links").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Not found");
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_categories_lists_only_active() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let active = seed_category(server.context(), "🏦").await.unwrap();
    let hidden = seed_category(server.context(), "🙈").await.unwrap();
    CatalogService::new(server.context())
        .toggle_category(hidden.id)
        .await
        .unwrap();

    let response = server.get("/api/categories").await.unwrap();
    let categories: Vec<CategorySummary> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(categories.contains(&CategorySummary {
        id: active.id.into_inner(),
        name: active.name.clone(),
        emoji: "🏦".to_string(),
    }));
    assert!(categories
        .iter()
        .all(|category| category.id != hidden.id.into_inner()));
}

#[tokio::test]
async fn test_categories_are_projected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = seed_category(server.context(), "🛠").await.unwrap();
    seed_link(server.context(), category.id, LinkStatus::Approved)
        .await
        .unwrap();

    let response = server.get("/api/categories").await.unwrap();
    let body: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = body
        .iter()
        .find(|entry| entry["id"] == category.id.into_inner())
        .expect("seeded category listed");
    let mut keys: Vec<&str> = entry
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["emoji", "id", "name"]);
}

#[tokio::test]
async fn test_categories_ordered_by_position() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let catalog = CatalogService::new(server.context());
    let late = catalog
        .add_category(reflink_service::dto::AddCategoryRequest {
            name: format!("Late {}", unique_suffix()),
            emoji: None,
            position: Some(1_000_001),
        })
        .await
        .unwrap();
    let early = catalog
        .add_category(reflink_service::dto::AddCategoryRequest {
            name: format!("Early {}", unique_suffix()),
            emoji: None,
            position: Some(1_000_000),
        })
        .await
        .unwrap();

    let response = server.get("/api/categories").await.unwrap();
    let categories: Vec<CategorySummary> = assert_json(response, StatusCode::OK).await.unwrap();
    let position_of = |id: i64| categories.iter().position(|category| category.id == id);

    let early_at = position_of(early.id.into_inner()).expect("early listed");
    let late_at = position_of(late.id.into_inner()).expect("late listed");
    assert!(early_at < late_at);
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_returned() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_cors_configured_origin() {
    if !check_test_env() {
        return;
    }

    let mut config = test_config().unwrap();
    config.cors.allowed_origins = vec!["https://app.example".to_string()];
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = server
        .get_from_origin("/api/categories", "https://app.example")
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://app.example")
    );

    let response = server
        .get_from_origin("/api/categories", "https://other.example")
        .await
        .unwrap();
    assert!(!response.headers().contains_key("access-control-allow-origin"));
}
