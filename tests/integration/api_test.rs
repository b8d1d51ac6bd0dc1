// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_and_version() {
    let app = create_test_app().await;

    let health = app.server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.text(), "OK");

    let version = app.server.get("/api/v1/version").await;
    assert_eq!(version.status_code(), StatusCode::OK);
    assert_eq!(version.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_create_and_fetch_news() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/v1/news")
        .add_header("x-user-id", "7".to_string())
        .json(&json!({
            "title": "Council approves budget",
            "content": "The city council approved the budget.",
            "source": "city desk",
            "category": "politics",
            "link": "https://desk.example.com/budget"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["created_by"], 7);
    assert_eq!(body["data"]["source_type"], "manual");
    let id = body["data"]["id"].as_i64().unwrap();

    let fetched = app.server.get(&format!("/api/v1/news/{}", id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(
        fetched.json::<Value>()["data"]["title"],
        "Council approves budget"
    );

    let duplicate = app
        .server
        .post("/api/v1/news")
        .json(&json!({
            "title": "Council approves budget again",
            "content": "Same link.",
            "source": "city desk",
            "link": "https://desk.example.com/budget"
        }))
        .await;
    assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);

    let missing_source = app
        .server
        .post("/api/v1/news")
        .json(&json!({ "title": "No source", "content": "text", "source": "" }))
        .await;
    assert_eq!(missing_source.status_code(), StatusCode::BAD_REQUEST);

    let deleted = app.server.delete(&format!("/api/v1/news/{}", id)).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let gone = app.server.get(&format!("/api/v1/news/{}", id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(gone.json::<Value>()["code"], 404);
}

#[tokio::test]
async fn test_seed_endpoint_imports_once_and_lists_pages() {
    let app = create_test_app().await;
    let items: Vec<Value> = (0..15)
        .map(|i| {
            json!({
                "title": format!("Seeded {}", i),
                "content": "body",
                "source": "wire",
                "category": if i % 2 == 0 { "tech" } else { "sports" },
                "guid": format!("seed-{}", i),
                "link": format!("https://wire.example.com/{}", i),
                "published_at": format!("2024-05-01 10:{:02}:00", i),
                "view_count": i
            })
        })
        .collect();
    std::fs::write(&app.seed_file, json!({ "news_items": items }).to_string()).unwrap();

    let seeded = app.server.post("/api/v1/admin/seed").await;
    assert_eq!(seeded.status_code(), StatusCode::OK);
    let report = seeded.json::<Value>();
    assert_eq!(report["data"]["imported"], 15);
    assert_eq!(report["data"]["skipped_entirely"], false);

    let again = app.server.post("/api/v1/admin/seed").await;
    assert_eq!(again.json::<Value>()["data"]["skipped_entirely"], true);

    let page = app
        .server
        .get("/api/v1/news")
        .add_query_param("page", 2)
        .add_query_param("size", 10)
        .await;
    assert_eq!(page.status_code(), StatusCode::OK);
    let body = page.json::<Value>();
    assert_eq!(body["pagination"]["total"], 15);
    assert_eq!(body["pagination"]["total_pages"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][0]["title"], "Seeded 4");

    let tech = app.server.get("/api/v1/news/category/tech").await;
    assert_eq!(tech.json::<Value>()["pagination"]["total"], 8);

    let hot = app
        .server
        .get("/api/v1/news/hot")
        .add_query_param("limit", 3)
        .await;
    assert_eq!(hot.json::<Value>()["data"].as_array().unwrap().len(), 3);

    let unlinked = app.server.get("/api/v1/news/unlinked").await;
    assert_eq!(unlinked.json::<Value>()["pagination"]["total"], 15);
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = create_test_app().await;

    let response = app.server.get("/api/v1/news/search").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 400);

    let empty = app.server.get("/api/v1/news/search?query=").await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_event_association_endpoint() {
    let app = create_test_app().await;
    let created = app
        .server
        .post("/api/v1/news")
        .json(&json!({ "title": "Flood", "content": "Rivers rise", "source": "wire" }))
        .await;
    let id = created.json::<Value>()["data"]["id"].as_i64().unwrap();

    let empty = app
        .server
        .put("/api/v1/news/event-association")
        .json(&json!({ "news_ids": [], "event_id": 3 }))
        .await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);

    let unknown = app
        .server
        .put("/api/v1/news/event-association")
        .json(&json!({ "news_ids": [9999], "event_id": 3 }))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);

    let linked = app
        .server
        .put("/api/v1/news/event-association")
        .json(&json!({ "news_ids": [id], "event_id": 3 }))
        .await;
    assert_eq!(linked.status_code(), StatusCode::OK);
    assert_eq!(linked.json::<Value>()["data"]["affected"], 1);

    let by_event = app.server.get("/api/v1/news/event/3").await;
    let body = by_event.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["event_id"], 3);
}

#[tokio::test]
async fn test_rss_sources_listing_starts_empty() {
    let app = create_test_app().await;

    let response = app.server.get("/api/v1/admin/rss-sources").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["data"], json!([]));
}

#[tokio::test]
async fn test_broken_seed_file_is_a_server_error() {
    let app = create_test_app().await;
    std::fs::write(&app.seed_file, "{\"news_items\": [").unwrap();

    let response = app.server.post("/api/v1/admin/seed").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], 500);
}

#[tokio::test]
async fn test_huge_page_query_is_served() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/v1/news")
        .add_query_param("page", "9223372036854775807")
        .add_query_param("size", 100)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 0);
}
