// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::news::News;
use crate::domain::repositories::news_repository::{IdentityLookup, RepositoryError};
use std::collections::HashSet;

/// 身份判定结果
#[derive(Debug)]
pub enum Resolution {
    /// 与已存储的记录重复
    Duplicate(Box<News>),
    /// 与本次运行中较早接受的候选记录重复
    PendingDuplicate,
    /// 未找到，可以写入
    NotFound,
}

impl Resolution {
    pub fn is_duplicate(&self) -> bool {
        !matches!(self, Resolution::NotFound)
    }
}

/// 身份解析器
///
/// 以 (GUID, 链接) 两个信号判断候选新闻是否已存在，任一信号相等即为重复。
/// 同时记住本次运行中已接受但可能尚未落库的候选，避免同一批次内重复写入。
#[derive(Debug, Default)]
pub struct IdentityResolver {
    seen_guids: HashSet<String>,
    seen_links: HashSet<String>,
}

fn signal(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 判定候选记录的身份
    ///
    /// # 参数
    ///
    /// * `lookup` - 已存储数据的查询入口
    /// * `guid` - 候选记录的 GUID
    /// * `link` - 候选记录的链接
    ///
    /// # 返回值
    ///
    /// * `Ok(Resolution)` - 判定结果
    /// * `Err(RepositoryError)` - 查询失败，由调用方决定是否跳过该候选
    pub async fn resolve<L>(
        &self,
        lookup: &L,
        guid: &str,
        link: &str,
    ) -> Result<Resolution, RepositoryError>
    where
        L: IdentityLookup + ?Sized,
    {
        let guid = signal(guid);
        let link = signal(link);

        if guid.is_none() && link.is_none() {
            return Ok(Resolution::NotFound);
        }

        if guid.is_some_and(|g| self.seen_guids.contains(g))
            || link.is_some_and(|l| self.seen_links.contains(l))
        {
            return Ok(Resolution::PendingDuplicate);
        }

        let existing = lookup
            .find_by_identity(guid.unwrap_or_default(), link.unwrap_or_default())
            .await?;

        Ok(match existing {
            Some(news) => Resolution::Duplicate(Box::new(news)),
            None => Resolution::NotFound,
        })
    }

    /// 记录一个已接受的候选
    pub fn remember(&mut self, guid: &str, link: &str) {
        if let Some(g) = signal(guid) {
            self.seen_guids.insert(g.to_string());
        }
        if let Some(l) = signal(link) {
            self.seen_links.insert(l.to_string());
        }
    }
}
