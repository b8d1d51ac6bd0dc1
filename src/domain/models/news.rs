// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 批量导入文件中 `published_at` 的文本格式
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 逻辑删除后写入的状态值
pub const DELETED_STATUS: &str = "deleted";

/// 新闻实体
///
/// 系统中的核心数据单元。新闻可以来自批量导入、RSS 订阅或手动创建，
/// 并可关联到一个外部事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    /// 新闻ID，持久化之前为 0
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub description: String,
    /// 来源名称
    pub source: String,
    pub category: String,
    pub published_at: DateTime<FixedOffset>,
    /// 创建者用户ID
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub source_type: NewsSourceType,
    pub rss_source_id: Option<i32>,
    /// 原文链接，与 GUID 一起构成去重键
    pub link: String,
    pub guid: String,
    pub author: String,
    pub image_url: String,
    /// 序列化后的标签列表
    pub tags: String,
    pub language: String,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    /// 预计算的热度分数
    pub hotness_score: f64,
    pub status: String,
    pub is_processed: bool,
    /// 关联的事件ID，为空表示未关联
    pub event_id: Option<i32>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    /// 逻辑删除时间
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// 新闻来源类型
///
/// 导入数据中的来源标签只有 `rss` 会映射为 [`NewsSourceType::Rss`]，
/// 其余任何取值都归为手动录入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NewsSourceType {
    /// 手动创建或批量导入
    #[default]
    Manual,
    /// RSS 订阅抓取
    Rss,
}

impl NewsSourceType {
    /// 将外部来源标签映射为来源类型
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "rss" => NewsSourceType::Rss,
            _ => NewsSourceType::Manual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsSourceType::Manual => "manual",
            NewsSourceType::Rss => "rss",
        }
    }
}

impl fmt::Display for NewsSourceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 互动计数器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    View,
    Like,
    Comment,
    Share,
}

/// 批量导入文档
///
/// 只识别顶层的 `news_items` 字段
#[derive(Debug, Default, Deserialize)]
pub struct BulkDocument {
    #[serde(default)]
    pub news_items: Vec<NewsCandidate>,
}

/// 候选新闻记录
///
/// 已解析但尚未决定是否入库的新闻。缺失的字段取零值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsCandidate {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub description: String,
    pub source: String,
    pub category: String,
    pub published_at: String,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub source_type: String,
    pub rss_source_id: Option<i32>,
    pub link: String,
    pub guid: String,
    pub author: String,
    pub image_url: String,
    pub tags: String,
    pub language: String,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub hotness_score: f64,
    pub status: String,
    pub is_processed: bool,
}

impl NewsCandidate {
    /// 将候选记录转换为待持久化的新闻
    ///
    /// # 参数
    ///
    /// * `published_at` - 已解析的发布时间
    pub fn into_news(self, published_at: DateTime<FixedOffset>) -> News {
        let now: DateTime<FixedOffset> = Utc::now().into();
        News {
            id: 0,
            title: self.title,
            content: self.content,
            summary: self.summary,
            description: self.description,
            source: self.source,
            category: self.category,
            published_at,
            created_by: self.created_by,
            is_active: self.is_active,
            source_type: NewsSourceType::from_tag(&self.source_type),
            rss_source_id: self.rss_source_id,
            link: self.link,
            guid: self.guid,
            author: self.author,
            image_url: self.image_url,
            tags: self.tags,
            language: self.language,
            view_count: self.view_count,
            like_count: self.like_count,
            comment_count: self.comment_count,
            share_count: self.share_count,
            hotness_score: self.hotness_score,
            status: self.status,
            is_processed: self.is_processed,
            event_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// 按固定格式解析发布时间，按 UTC 解释
pub fn parse_published_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    NaiveDateTime::parse_from_str(raw.trim(), PUBLISHED_AT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// 手动创建新闻所需的数据
#[derive(Debug, Clone, Default)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub description: String,
    pub source: String,
    pub category: String,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub link: String,
    pub guid: String,
    pub author: String,
    pub image_url: String,
    pub tags: String,
    pub language: String,
}

impl NewsDraft {
    pub fn into_news(self, creator_id: Option<i32>) -> News {
        let now: DateTime<FixedOffset> = Utc::now().into();
        News {
            id: 0,
            title: self.title,
            content: self.content,
            summary: self.summary,
            description: self.description,
            source: self.source,
            category: self.category,
            published_at: self.published_at.unwrap_or(now),
            created_by: creator_id,
            is_active: true,
            source_type: NewsSourceType::Manual,
            rss_source_id: None,
            link: self.link,
            guid: self.guid,
            author: self.author,
            image_url: self.image_url,
            tags: self.tags,
            language: if self.language.is_empty() {
                "zh".to_string()
            } else {
                self.language
            },
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            hotness_score: 0.0,
            status: "published".to_string(),
            is_processed: false,
            event_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// 新闻的部分字段更新
///
/// 为 `None` 的字段保持不变
#[derive(Debug, Clone, Default)]
pub struct NewsChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub link: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub language: Option<String>,
    pub is_active: Option<bool>,
    pub status: Option<String>,
}

impl News {
    /// 根据互动计数和发布时长计算热度分数
    ///
    /// 分数 = (浏览×1 + 点赞×3 + 评论×5 + 分享×10) / (小时数 + 2)^1.5
    pub fn compute_hotness(&self, now: DateTime<Utc>) -> f64 {
        let engagement = self.view_count as f64
            + self.like_count as f64 * 3.0
            + self.comment_count as f64 * 5.0
            + self.share_count as f64 * 10.0;
        let age_hours = (now.signed_duration_since(self.published_at).num_minutes() as f64
            / 60.0)
            .max(0.0);
        engagement / (age_hours + 2.0).powf(1.5)
    }
}
