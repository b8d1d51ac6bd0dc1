// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::rss_source::{NewRssSource, RssSource};
use crate::domain::repositories::news_repository::RepositoryError;
use async_trait::async_trait;

/// 默认订阅源写入结果
#[derive(Debug)]
pub enum SourceSeedOutcome {
    /// 已写入的订阅源
    Created(Vec<RssSource>),
    /// 已存在订阅源，整体跳过
    Skipped { existing: u64 },
}

/// RSS 订阅源仓库特质
#[async_trait]
pub trait RssSourceRepository: Send + Sync {
    /// 按优先级列出订阅源
    async fn list(&self) -> Result<Vec<RssSource>, RepositoryError>;
    /// 在单个事务中写入默认订阅源，只要已有任意订阅源就整体跳过
    async fn seed_if_empty(
        &self,
        sources: &[NewRssSource],
    ) -> Result<SourceSeedOutcome, RepositoryError>;
}
