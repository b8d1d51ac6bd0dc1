// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{numbered_candidates, setup_services, TestServices};
use newsdesk::domain::models::pagination::PageRequest;
use newsdesk::domain::services::news_service::NewsError;

async fn seeded(count: usize) -> (TestServices, Vec<i32>) {
    let ctx = setup_services().await;
    ctx.ingestion
        .import_candidates(numbered_candidates(count))
        .await
        .unwrap();
    let page = ctx
        .news
        .list(PageRequest::new(Some(1), Some(100)))
        .await
        .unwrap();
    let mut ids: Vec<i32> = page.items.iter().map(|n| n.id).collect();
    ids.sort();
    (ctx, ids)
}

#[tokio::test]
async fn test_link_and_clear_event_association() {
    let (ctx, ids) = seeded(4).await;

    let linked = ctx
        .news
        .reassociate_by_ids(&ids[..3], Some(42))
        .await
        .unwrap();
    assert_eq!(linked, 3);
    assert_eq!(ctx.news.by_event_id(42).await.unwrap().len(), 3);

    let cleared = ctx
        .news
        .reassociate_by_ids(&ids[..2], None)
        .await
        .unwrap();
    assert_eq!(cleared, 2);

    let remaining = ctx.news.by_event_id(42).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, ids[2]);

    let unlinked = ctx.news.unlinked(PageRequest::default()).await.unwrap();
    assert_eq!(unlinked.total, 3);
    assert!(unlinked.items.iter().all(|n| n.event_id.is_none()));
}

#[tokio::test]
async fn test_unknown_ids_report_nothing_updated() {
    let (ctx, ids) = seeded(2).await;
    ctx.news
        .reassociate_by_ids(&ids[..1], Some(7))
        .await
        .unwrap();

    let result = ctx.news.reassociate_by_ids(&[9_998, 9_999], Some(8)).await;

    assert!(matches!(result, Err(NewsError::NothingUpdated)));
    assert_eq!(ctx.news.by_event_id(7).await.unwrap().len(), 1);
    assert!(ctx.news.by_event_id(8).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_id_list_is_rejected() {
    let (ctx, _) = seeded(1).await;

    let result = ctx.news.reassociate_by_ids(&[], Some(1)).await;

    assert!(matches!(result, Err(NewsError::EmptyIds)));
}

#[tokio::test]
async fn test_mixed_known_and_unknown_ids_count_only_existing() {
    let (ctx, ids) = seeded(2).await;

    let affected = ctx
        .news
        .reassociate_by_ids(&[ids[0], ids[1], 123_456], Some(5))
        .await
        .unwrap();

    assert_eq!(affected, 2);
}

#[tokio::test]
async fn test_deleted_news_is_not_reassociated() {
    let (ctx, ids) = seeded(2).await;
    ctx.news.delete_news(ids[0]).await.unwrap();

    let result = ctx.news.reassociate_by_ids(&ids[..1], Some(3)).await;
    assert!(matches!(result, Err(NewsError::NothingUpdated)));

    let affected = ctx.news.reassociate_by_ids(&ids, Some(3)).await.unwrap();
    assert_eq!(affected, 1);
}
