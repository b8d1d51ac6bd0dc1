// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::news::{Counter, News, NewsChanges, NewsDraft};
use crate::domain::models::pagination::{hot_limit, Page, PageRequest};
use crate::domain::repositories::news_repository::{
    NewsQueryParams, NewsRepository, RepositoryError,
};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// 新闻业务错误
#[derive(Error, Debug)]
pub enum NewsError {
    /// 搜索关键词为空
    #[error("Search query cannot be empty")]
    EmptyQuery,
    /// 新闻ID列表为空
    #[error("News IDs cannot be empty")]
    EmptyIds,
    /// 批量更新没有命中任何记录
    #[error("No news was updated, check that the news IDs are correct")]
    NothingUpdated,
    #[error("News not found")]
    NotFound,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    /// 读取批量导入文件失败
    #[error("Failed to read bulk source: {0}")]
    Io(#[from] std::io::Error),
    /// 解析批量导入文件失败
    #[error("Failed to parse bulk source: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for NewsError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => NewsError::NotFound,
            RepositoryError::Conflict(message) => NewsError::Conflict(message),
            other => NewsError::Repository(other),
        }
    }
}

/// 新闻服务
///
/// 提供新闻的查询面（列表、搜索、分类、热门、未关联）、事件关联管理、
/// 单条新闻的增删改以及互动计数。
pub struct NewsService<R: NewsRepository> {
    repo: Arc<R>,
}

impl<R: NewsRepository> NewsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 分页获取全部新闻，按发布时间倒序
    pub async fn list(&self, page: PageRequest) -> Result<Page<News>, NewsError> {
        self.query(NewsQueryParams {
            page,
            ..Default::default()
        })
        .await
    }

    /// 搜索新闻
    ///
    /// # 参数
    ///
    /// * `text` - 关键词，在标题、正文、摘要、描述和标签中匹配
    /// * `page` - 分页请求
    ///
    /// # 返回值
    ///
    /// * `Ok(Page<News>)` - 匹配结果
    /// * `Err(NewsError::EmptyQuery)` - 关键词为空
    pub async fn search(&self, text: &str, page: PageRequest) -> Result<Page<News>, NewsError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NewsError::EmptyQuery);
        }
        self.query(NewsQueryParams {
            text: Some(text.to_string()),
            page,
            ..Default::default()
        })
        .await
    }

    /// 按分类分页获取新闻
    pub async fn by_category(
        &self,
        category: &str,
        page: PageRequest,
    ) -> Result<Page<News>, NewsError> {
        if category.trim().is_empty() {
            return Err(NewsError::Validation("Category is required".to_string()));
        }
        self.query(NewsQueryParams {
            category: Some(category.to_string()),
            page,
            ..Default::default()
        })
        .await
    }

    /// 分页获取未关联事件的新闻
    pub async fn unlinked(&self, page: PageRequest) -> Result<Page<News>, NewsError> {
        self.query(NewsQueryParams {
            unlinked_only: true,
            page,
            ..Default::default()
        })
        .await
    }

    /// 按标题精确查找
    pub async fn by_title(&self, title: &str) -> Result<Vec<News>, NewsError> {
        if title.trim().is_empty() {
            return Err(NewsError::Validation(
                "Title parameter is required".to_string(),
            ));
        }
        Ok(self.repo.find_by_title(title).await?)
    }

    /// 获取关联到指定事件的新闻
    pub async fn by_event_id(&self, event_id: i32) -> Result<Vec<News>, NewsError> {
        Ok(self.repo.find_by_event_id(event_id).await?)
    }

    /// 获取热门新闻
    ///
    /// `limit` 缺失、非正数或超过 100 时按 10 处理；结果按热度降序，
    /// 热度相同时按ID升序。
    pub async fn hot_news(&self, limit: Option<i64>) -> Result<Vec<News>, NewsError> {
        Ok(self.repo.find_hot(hot_limit(limit)).await?)
    }

    /// 批量设置或清除新闻的事件关联
    ///
    /// # 参数
    ///
    /// * `ids` - 新闻ID列表，不能为空
    /// * `event_id` - 事件ID，为 `None` 时清除关联
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 受影响的行数
    /// * `Err(NewsError::EmptyIds)` - ID列表为空
    /// * `Err(NewsError::NothingUpdated)` - 没有任何ID命中
    pub async fn reassociate_by_ids(
        &self,
        ids: &[i32],
        event_id: Option<i32>,
    ) -> Result<u64, NewsError> {
        if ids.is_empty() {
            return Err(NewsError::EmptyIds);
        }

        let affected = self.repo.update_event_association(ids, event_id).await?;
        if affected == 0 {
            warn!(
                "Event association update matched none of {} news ids",
                ids.len()
            );
            return Err(NewsError::NothingUpdated);
        }

        metrics::counter!("news_association_updates_total").increment(affected);
        match event_id {
            Some(event_id) => info!("Linked {} news to event {}", affected, event_id),
            None => info!("Cleared event association on {} news", affected),
        }
        Ok(affected)
    }

    /// 创建新闻
    ///
    /// GUID 或链接与已有新闻重复时返回冲突
    pub async fn create_news(
        &self,
        draft: NewsDraft,
        creator_id: Option<i32>,
    ) -> Result<News, NewsError> {
        if draft.title.trim().is_empty()
            || draft.content.trim().is_empty()
            || draft.source.trim().is_empty()
        {
            return Err(NewsError::Validation(
                "Title, content and source are required".to_string(),
            ));
        }

        if let Some(existing) = self.repo.find_by_identity(&draft.guid, &draft.link).await? {
            return Err(NewsError::Conflict(format!(
                "News with the same guid or link already exists (id {})",
                existing.id
            )));
        }

        let news = self.repo.create(&draft.into_news(creator_id)).await?;
        info!("Created news {} ({})", news.id, news.title);
        Ok(news)
    }

    pub async fn get_news_by_id(&self, id: i32) -> Result<News, NewsError> {
        self.repo.find_by_id(id).await?.ok_or(NewsError::NotFound)
    }

    /// 部分更新新闻字段
    ///
    /// 只写入给出的字段，计数器和删除标记不受影响
    pub async fn update_news(&self, id: i32, changes: NewsChanges) -> Result<News, NewsError> {
        let news = self.repo.update(id, &changes).await?;
        info!("Updated news {}", id);
        Ok(news)
    }

    /// 逻辑删除新闻，已删除的记录返回未找到
    pub async fn delete_news(&self, id: i32) -> Result<(), NewsError> {
        self.repo.soft_delete(id).await?;
        info!("Soft deleted news {}", id);
        Ok(())
    }

    /// 物理删除新闻
    pub async fn hard_delete_news(&self, id: i32) -> Result<(), NewsError> {
        self.repo.hard_delete(id).await?;
        warn!("Hard deleted news {}", id);
        Ok(())
    }

    pub async fn increment_counter(&self, id: i32, counter: Counter) -> Result<(), NewsError> {
        Ok(self.repo.increment_counter(id, counter).await?)
    }

    /// 根据当前计数重新计算热度分数
    pub async fn recalculate_hotness(&self, id: i32) -> Result<f64, NewsError> {
        let news = self.get_news_by_id(id).await?;
        let score = news.compute_hotness(Utc::now());
        self.repo.update_hotness(id, score).await?;
        Ok(score)
    }

    async fn query(&self, params: NewsQueryParams) -> Result<Page<News>, NewsError> {
        let request = params.page;
        let (items, total) = self.repo.query(&params).await?;
        Ok(Page::new(items, total, request))
    }
}
