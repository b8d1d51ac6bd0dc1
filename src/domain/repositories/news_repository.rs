// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::news::{Counter, News, NewsChanges};
use crate::domain::models::pagination::PageRequest;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 批量写入时单次 INSERT 的最大行数
pub const WRITE_CHUNK_SIZE: usize = 50;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一性冲突
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// 新闻查询参数
#[derive(Debug, Default, Clone)]
pub struct NewsQueryParams {
    /// 按分类精确过滤
    pub category: Option<String>,
    /// 在标题、正文、摘要、描述和标签中做不区分大小写的子串匹配
    pub text: Option<String>,
    /// 只返回未关联事件的新闻
    pub unlinked_only: bool,
    pub page: PageRequest,
}

/// 按身份键查找已存储的新闻
///
/// GUID 或链接任一相等即视为同一条新闻。空白的 GUID / 链接不参与匹配。
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    async fn find_by_identity(
        &self,
        guid: &str,
        link: &str,
    ) -> Result<Option<News>, RepositoryError>;
}

/// 导入会话
///
/// 一次导入的全部读写都在同一个事务内完成；`commit` 之前丢弃会话即回滚。
#[async_trait]
pub trait NewsImportSession: IdentityLookup {
    /// 统计已存储的新闻总数（包括已逻辑删除的记录）
    async fn count_news(&self) -> Result<u64, RepositoryError>;

    /// 原子地写入一批新闻
    ///
    /// 内部按 [`WRITE_CHUNK_SIZE`] 分组插入，任一分组失败则整批都不生效。
    async fn write_batch(&self, batch: &[News]) -> Result<u64, RepositoryError>;

    /// 提交会话
    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
}

/// 导入入口
#[async_trait]
pub trait NewsImporter: Send + Sync {
    /// 开启导入会话，并取得导入互斥锁
    async fn begin_import(&self) -> Result<Box<dyn NewsImportSession>, RepositoryError>;
}

/// 新闻仓库特质
///
/// 定义新闻数据访问接口
#[async_trait]
pub trait NewsRepository: NewsImporter + IdentityLookup {
    /// 创建单条新闻
    async fn create(&self, news: &News) -> Result<News, RepositoryError>;
    /// 根据ID查找未删除的新闻
    async fn find_by_id(&self, id: i32) -> Result<Option<News>, RepositoryError>;
    /// 只写入给定的字段，已逻辑删除的新闻视为不存在
    async fn update(&self, id: i32, changes: &NewsChanges) -> Result<News, RepositoryError>;
    /// 逻辑删除
    async fn soft_delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 物理删除
    async fn hard_delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 互动计数加一
    async fn increment_counter(&self, id: i32, counter: Counter) -> Result<(), RepositoryError>;
    /// 写入热度分数
    async fn update_hotness(&self, id: i32, score: f64) -> Result<(), RepositoryError>;
    /// 在单个事务中批量设置或清除事件关联
    ///
    /// 返回受影响的行数；为 0 时事务已回滚。
    async fn update_event_association(
        &self,
        ids: &[i32],
        event_id: Option<i32>,
    ) -> Result<u64, RepositoryError>;
    /// 分页查询
    async fn query(&self, params: &NewsQueryParams) -> Result<(Vec<News>, u64), RepositoryError>;
    /// 按标题精确查找
    async fn find_by_title(&self, title: &str) -> Result<Vec<News>, RepositoryError>;
    /// 查找关联到指定事件的新闻
    async fn find_by_event_id(&self, event_id: i32) -> Result<Vec<News>, RepositoryError>;
    /// 按热度降序取前 `limit` 条
    async fn find_hot(&self, limit: u64) -> Result<Vec<News>, RepositoryError>;
}
