// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// RSS 订阅源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RssSource {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub category: String,
    pub language: String,
    pub is_active: bool,
    pub description: String,
    /// 排序权重
    pub priority: i32,
    /// 更新频率（分钟）
    pub update_freq: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// 待创建的订阅源
#[derive(Debug, Clone, PartialEq)]
pub struct NewRssSource {
    pub name: String,
    pub url: String,
    pub category: String,
    pub language: String,
    pub is_active: bool,
    pub description: String,
    pub priority: i32,
    pub update_freq: i32,
}

/// 首次启动时写入的默认订阅源
pub fn default_sources() -> Vec<NewRssSource> {
    vec![
        NewRssSource {
            name: "新浪新闻".to_string(),
            url: "http://rss.sina.com.cn/news/china/focus15.xml".to_string(),
            category: "国内新闻".to_string(),
            language: "zh".to_string(),
            is_active: true,
            description: "新浪网国内新闻RSS源".to_string(),
            priority: 1,
            update_freq: 60,
        },
        NewRssSource {
            name: "网易科技".to_string(),
            url: "http://rss.163.com/rss/tech_index.xml".to_string(),
            category: "科技".to_string(),
            language: "zh".to_string(),
            is_active: true,
            description: "网易科技新闻RSS源".to_string(),
            priority: 1,
            update_freq: 60,
        },
    ]
}
