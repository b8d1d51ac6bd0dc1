// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{candidate, numbered_candidates, setup_services};
use newsdesk::domain::models::pagination::PageRequest;
use newsdesk::domain::services::news_service::NewsError;

#[tokio::test]
async fn test_list_orders_by_published_desc_and_clamps_paging() {
    let ctx = setup_services().await;
    ctx.ingestion
        .import_candidates(numbered_candidates(25))
        .await
        .unwrap();

    let page = ctx
        .news
        .list(PageRequest::new(Some(0), Some(500)))
        .await
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].title, "News 24");
    assert!(page
        .items
        .windows(2)
        .all(|pair| pair[0].published_at >= pair[1].published_at));

    let last = ctx
        .news
        .list(PageRequest::new(Some(3), Some(-1)))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items[4].title, "News 0");
}

#[tokio::test]
async fn test_huge_page_number_returns_empty_page() {
    let ctx = setup_services().await;
    ctx.ingestion
        .import_candidates(numbered_candidates(3))
        .await
        .unwrap();

    let page = ctx
        .news
        .list(PageRequest::new(Some(i64::MAX), Some(100)))
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_hot_news_limit_and_tie_order() {
    let ctx = setup_services().await;
    let candidates = numbered_candidates(15)
        .into_iter()
        .enumerate()
        .map(|(i, mut c)| {
            c.hotness_score = match i {
                3 | 4 => 99.0,
                _ => i as f64,
            };
            c
        })
        .collect();
    ctx.ingestion.import_candidates(candidates).await.unwrap();

    let hot = ctx.news.hot_news(Some(1000)).await.unwrap();

    assert_eq!(hot.len(), 10);
    assert_eq!(hot[0].hotness_score, 99.0);
    assert_eq!(hot[1].hotness_score, 99.0);
    assert!(hot[0].id < hot[1].id);
    assert!(hot
        .windows(2)
        .all(|pair| pair[0].hotness_score >= pair[1].hotness_score));

    assert_eq!(ctx.news.hot_news(Some(3)).await.unwrap().len(), 3);
    assert_eq!(ctx.news.hot_news(Some(0)).await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_search_is_case_insensitive_across_fields() {
    let ctx = setup_services().await;
    let mut tagged = candidate("g2", "https://x/2", "Weekly digest");
    tagged.tags = "[\"Rust\",\"systems\"]".to_string();
    let mut discount = candidate("g3", "https://x/3", "Sale 100% off");
    discount.summary = "limited".to_string();
    ctx.ingestion
        .import_candidates(vec![
            candidate("g1", "https://x/1", "Learning RUST the hard way"),
            tagged,
            discount,
            candidate("g4", "https://x/4", "Gardening tips"),
        ])
        .await
        .unwrap();

    let results = ctx
        .news
        .search("rust", PageRequest::default())
        .await
        .unwrap();
    assert_eq!(results.total, 2);

    let literal = ctx
        .news
        .search("100%", PageRequest::default())
        .await
        .unwrap();
    assert_eq!(literal.total, 1);
    assert_eq!(literal.items[0].title, "Sale 100% off");

    let empty = ctx.news.search("   ", PageRequest::default()).await;
    assert!(matches!(empty, Err(NewsError::EmptyQuery)));
}

#[tokio::test]
async fn test_category_and_title_lookups() {
    let ctx = setup_services().await;
    let mut sports = candidate("g2", "https://x/2", "Match report");
    sports.category = "sports".to_string();
    ctx.ingestion
        .import_candidates(vec![candidate("g1", "https://x/1", "Chip launch"), sports])
        .await
        .unwrap();

    let page = ctx
        .news
        .by_category("sports", PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "Match report");

    assert_eq!(ctx.news.by_title("Chip launch").await.unwrap().len(), 1);
    assert!(ctx.news.by_title("Chip").await.unwrap().is_empty());

    assert!(matches!(
        ctx.news.by_category(" ", PageRequest::default()).await,
        Err(NewsError::Validation(_))
    ));
    assert!(matches!(
        ctx.news.by_title("").await,
        Err(NewsError::Validation(_))
    ));
}

#[tokio::test]
async fn test_reads_exclude_deleted_news() {
    let ctx = setup_services().await;
    ctx.ingestion
        .import_candidates(numbered_candidates(3))
        .await
        .unwrap();
    let target = ctx.news.by_title("News 1").await.unwrap()[0].id;

    ctx.news.delete_news(target).await.unwrap();

    let page = ctx.news.list(PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 2);
    assert!(ctx.news.by_title("News 1").await.unwrap().is_empty());
    assert!(ctx
        .news
        .hot_news(None)
        .await
        .unwrap()
        .iter()
        .all(|n| n.id != target));
}
