// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::news::{NewsChanges, NewsDraft};
use crate::domain::models::pagination::{parse_param, PageRequest};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建新闻请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub source: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub category: String,
    pub published_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub language: String,
}

impl From<CreateNewsRequest> for NewsDraft {
    fn from(request: CreateNewsRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            summary: request.summary,
            description: request.description,
            source: request.source,
            category: request.category,
            published_at: request.published_at,
            link: request.link,
            guid: request.guid,
            author: request.author,
            image_url: request.image_url,
            tags: request.tags,
            language: request.language,
        }
    }
}

/// 更新新闻请求，未提供的字段保持不变
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub source: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub link: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    #[validate(length(max = 10))]
    pub language: Option<String>,
    pub is_active: Option<bool>,
    pub status: Option<String>,
}

impl From<UpdateNewsRequest> for NewsChanges {
    fn from(request: UpdateNewsRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            summary: request.summary,
            description: request.description,
            source: request.source,
            category: request.category,
            published_at: request.published_at,
            link: request.link,
            author: request.author,
            image_url: request.image_url,
            tags: request.tags,
            language: request.language,
            is_active: request.is_active,
            status: request.status,
        }
    }
}

/// 批量更新事件关联请求
///
/// `event_id` 为空表示取消关联
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateEventAssociationRequest {
    pub news_ids: Vec<i32>,
    pub event_id: Option<i32>,
}

/// 分页查询参数
///
/// 以字符串接收，无法解析的值按缺失处理
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.size.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl SearchQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.size.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HotQuery {
    pub limit: Option<String>,
}

impl HotQuery {
    pub fn limit(&self) -> Option<i64> {
        parse_param(self.limit.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}
