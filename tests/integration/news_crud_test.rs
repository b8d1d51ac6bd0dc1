// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{news_rows, setup_services};
use newsdesk::domain::models::news::{Counter, NewsChanges, NewsDraft, DELETED_STATUS};
use newsdesk::domain::repositories::news_repository::{IdentityLookup, NewsRepository};
use newsdesk::domain::services::news_service::NewsError;

fn draft(guid: &str, link: &str) -> NewsDraft {
    NewsDraft {
        title: "Manual story".to_string(),
        content: "Written by hand".to_string(),
        source: "desk".to_string(),
        category: "local".to_string(),
        guid: guid.to_string(),
        link: link.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_update_and_delete_news() {
    let ctx = setup_services().await;

    let created = ctx
        .news
        .create_news(draft("m-1", "https://desk/1"), Some(11))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_by, Some(11));
    assert_eq!(created.status, "published");

    let updated = ctx
        .news
        .update_news(
            created.id,
            NewsChanges {
                title: Some("Edited story".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Edited story");
    assert_eq!(updated.content, "Written by hand");

    ctx.news.delete_news(created.id).await.unwrap();
    assert!(matches!(
        ctx.news.get_news_by_id(created.id).await,
        Err(NewsError::NotFound)
    ));
    assert!(matches!(
        ctx.news.delete_news(created.id).await,
        Err(NewsError::NotFound)
    ));

    let news_id = created.id;
    let deleted = ctx.repo.find_by_identity("m-1", "").await.unwrap().unwrap();
    assert_eq!(deleted.id, news_id);
    assert_eq!(deleted.status, DELETED_STATUS);
    assert!(!deleted.is_active);
    assert!(deleted.deleted_at.is_some());

    ctx.news.hard_delete_news(news_id).await.unwrap();
    assert_eq!(news_rows(&ctx.db).await, 0);
}

#[tokio::test]
async fn test_create_rejects_duplicates_and_missing_fields() {
    let ctx = setup_services().await;
    ctx.news
        .create_news(draft("m-1", "https://desk/1"), None)
        .await
        .unwrap();

    let same_link = ctx
        .news
        .create_news(draft("m-2", "https://desk/1"), None)
        .await;
    assert!(matches!(same_link, Err(NewsError::Conflict(_))));

    let mut no_source = draft("m-3", "https://desk/3");
    no_source.source = String::new();
    assert!(matches!(
        ctx.news.create_news(no_source, None).await,
        Err(NewsError::Validation(_))
    ));
}

#[tokio::test]
async fn test_counters_and_hotness() {
    let ctx = setup_services().await;
    let news = ctx
        .news
        .create_news(draft("m-1", "https://desk/1"), None)
        .await
        .unwrap();

    ctx.news.increment_counter(news.id, Counter::View).await.unwrap();
    ctx.news.increment_counter(news.id, Counter::View).await.unwrap();
    ctx.news.increment_counter(news.id, Counter::Share).await.unwrap();

    let score = ctx.news.recalculate_hotness(news.id).await.unwrap();
    let stored = ctx.news.get_news_by_id(news.id).await.unwrap();
    assert_eq!(stored.view_count, 2);
    assert_eq!(stored.share_count, 1);
    assert!(score > 0.0);
    assert!((stored.hotness_score - score).abs() < 1e-9);

    assert!(matches!(
        ctx.news.increment_counter(9_999, Counter::Like).await,
        Err(NewsError::NotFound)
    ));
}

#[tokio::test]
async fn test_update_keeps_counters_and_deletion() {
    let ctx = setup_services().await;
    let news = ctx
        .news
        .create_news(draft("m-1", "https://desk/1"), None)
        .await
        .unwrap();

    for _ in 0..5 {
        ctx.news.increment_counter(news.id, Counter::View).await.unwrap();
    }
    let updated = ctx
        .repo
        .update(
            news.id,
            &NewsChanges {
                title: Some("Retitled".to_string()),
                is_active: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Retitled");
    assert_eq!(updated.view_count, 5);
    assert!(updated.updated_at >= news.updated_at);

    ctx.news.delete_news(news.id).await.unwrap();
    let late_edit = ctx
        .news
        .update_news(
            news.id,
            NewsChanges {
                title: Some("Revived".to_string()),
                status: Some("published".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(late_edit, Err(NewsError::NotFound)));

    let stored = ctx.repo.find_by_identity("m-1", "").await.unwrap().unwrap();
    assert_eq!(stored.title, "Retitled");
    assert_eq!(stored.status, DELETED_STATUS);
    assert_eq!(stored.view_count, 5);
    assert!(stored.deleted_at.is_some());
    assert!(matches!(
        ctx.news.get_news_by_id(news.id).await,
        Err(NewsError::NotFound)
    ));
}
