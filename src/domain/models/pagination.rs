// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const DEFAULT_HOT_LIMIT: u64 = 10;
pub const MAX_HOT_LIMIT: u64 = 100;
/// 数据库 OFFSET 为有符号 64 位整数
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// 分页请求
///
/// 所有列表、搜索、分类和未关联新闻查询共用同一套清洗规则：
/// 页码缺失或小于 1 时取 1；每页大小缺失或不在 [1, 100] 内时取 10。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => DEFAULT_PAGE,
        };
        let size = match size {
            Some(s) if s >= 1 && s as u64 <= MAX_PAGE_SIZE => s as u64,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, size }
    }

    /// 从原始查询字符串解析，无法解析的值按缺失处理
    pub fn from_raw(page: Option<&str>, size: Option<&str>) -> Self {
        Self::new(parse_param(page), parse_param(size))
    }

    /// 跳过的行数，超大页码饱和到 [`MAX_OFFSET`]
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size).min(MAX_OFFSET)
    }
}

/// 热门新闻条数，缺失、非正数或大于 100 时取 10
pub fn hot_limit(limit: Option<i64>) -> u64 {
    match limit {
        Some(l) if l > 0 && l as u64 <= MAX_HOT_LIMIT => l as u64,
        _ => DEFAULT_HOT_LIMIT,
    }
}

pub fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// 分页结果
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.size.max(1))
    }
}
