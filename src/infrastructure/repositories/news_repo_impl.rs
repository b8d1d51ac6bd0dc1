// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::news::{Counter, News, NewsChanges, NewsSourceType, DELETED_STATUS};
use crate::domain::repositories::news_repository::{
    IdentityLookup, NewsImportSession, NewsImporter, NewsQueryParams, NewsRepository,
    RepositoryError, WRITE_CHUNK_SIZE,
};
use crate::infrastructure::database::entities::news as news_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbBackend, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

/// 导入互斥使用的 PostgreSQL 事务级 advisory lock 键
const IMPORT_LOCK_KEY: i64 = 0x6e65_7773;

/// 新闻仓库实现
///
/// 基于SeaORM实现的新闻数据访问层
#[derive(Clone)]
pub struct NewsRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<news_entity::Model> for News {
    fn from(model: news_entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            summary: model.summary,
            description: model.description,
            source: model.source,
            category: model.category,
            published_at: model.published_at,
            created_by: model.created_by,
            is_active: model.is_active,
            source_type: NewsSourceType::from_tag(&model.source_type),
            rss_source_id: model.rss_source_id,
            link: model.link,
            guid: model.guid,
            author: model.author,
            image_url: model.image_url,
            tags: model.tags,
            language: model.language,
            view_count: model.view_count,
            like_count: model.like_count,
            comment_count: model.comment_count,
            share_count: model.share_count,
            hotness_score: model.hotness_score,
            status: model.status,
            is_processed: model.is_processed,
            event_id: model.event_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// 转换为待插入的 ActiveModel，ID 由数据库分配
impl From<&News> for news_entity::ActiveModel {
    fn from(news: &News) -> Self {
        Self {
            id: NotSet,
            title: Set(news.title.clone()),
            content: Set(news.content.clone()),
            summary: Set(news.summary.clone()),
            description: Set(news.description.clone()),
            source: Set(news.source.clone()),
            category: Set(news.category.clone()),
            published_at: Set(news.published_at),
            created_by: Set(news.created_by),
            is_active: Set(news.is_active),
            source_type: Set(news.source_type.to_string()),
            rss_source_id: Set(news.rss_source_id),
            link: Set(news.link.clone()),
            guid: Set(news.guid.clone()),
            author: Set(news.author.clone()),
            image_url: Set(news.image_url.clone()),
            tags: Set(news.tags.clone()),
            language: Set(news.language.clone()),
            view_count: Set(news.view_count),
            like_count: Set(news.like_count),
            comment_count: Set(news.comment_count),
            share_count: Set(news.share_count),
            hotness_score: Set(news.hotness_score),
            status: Set(news.status.clone()),
            is_processed: Set(news.is_processed),
            event_id: Set(news.event_id),
            created_at: Set(news.created_at),
            updated_at: Set(news.updated_at),
            deleted_at: Set(news.deleted_at),
        }
    }
}

fn counter_column(counter: Counter) -> news_entity::Column {
    match counter {
        Counter::View => news_entity::Column::ViewCount,
        Counter::Like => news_entity::Column::LikeCount,
        Counter::Comment => news_entity::Column::CommentCount,
        Counter::Share => news_entity::Column::ShareCount,
    }
}

/// 只包含已给出字段的 ActiveModel，其余列保持 NotSet
fn changes_model(changes: &NewsChanges) -> news_entity::ActiveModel {
    let mut model = news_entity::ActiveModel {
        updated_at: Set(now()),
        ..Default::default()
    };

    macro_rules! set_changed {
        ($($field:ident),*) => {
            $(if let Some(value) = &changes.$field {
                model.$field = Set(value.clone());
            })*
        };
    }
    set_changed!(
        title,
        content,
        summary,
        description,
        source,
        category,
        published_at,
        link,
        author,
        image_url,
        tags,
        language,
        is_active,
        status
    );
    model
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 在标题、正文、摘要、描述和标签中做不区分大小写的子串匹配
fn text_condition(text: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&text.to_lowercase()));
    [
        news_entity::Column::Title,
        news_entity::Column::Content,
        news_entity::Column::Summary,
        news_entity::Column::Description,
        news_entity::Column::Tags,
    ]
    .into_iter()
    .fold(Condition::any(), |condition, column| {
        condition.add(
            Expr::expr(Func::lower(Expr::col(column)))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    })
}

/// 按 GUID 或链接查找，空白信号不参与匹配；包括已逻辑删除的记录
async fn find_identity<C: ConnectionTrait>(
    conn: &C,
    guid: &str,
    link: &str,
) -> Result<Option<News>, RepositoryError> {
    let guid = guid.trim();
    let link = link.trim();

    let mut condition = Condition::any();
    if !guid.is_empty() {
        condition = condition.add(news_entity::Column::Guid.eq(guid));
    }
    if !link.is_empty() {
        condition = condition.add(news_entity::Column::Link.eq(link));
    }
    if condition.is_empty() {
        return Ok(None);
    }

    let model = news_entity::Entity::find()
        .filter(condition)
        .order_by_asc(news_entity::Column::Id)
        .one(conn)
        .await?;

    Ok(model.map(Into::into))
}

/// 按 [`WRITE_CHUNK_SIZE`] 分组批量插入，不回读ID
async fn insert_chunked<C: ConnectionTrait>(conn: &C, batch: &[News]) -> Result<u64, DbErr> {
    let mut written = 0;
    for chunk in batch.chunks(WRITE_CHUNK_SIZE) {
        let models = chunk.iter().map(news_entity::ActiveModel::from);
        written += news_entity::Entity::insert_many(models)
            .exec_without_returning(conn)
            .await?;
    }
    Ok(written)
}

/// 基于单个数据库事务的导入会话
pub struct SeaOrmImportSession {
    txn: DatabaseTransaction,
}

#[async_trait]
impl IdentityLookup for SeaOrmImportSession {
    async fn find_by_identity(
        &self,
        guid: &str,
        link: &str,
    ) -> Result<Option<News>, RepositoryError> {
        // 每次查找放在独立的 SAVEPOINT 中，失败的语句不会使外层事务失效
        let savepoint = self.txn.begin().await?;
        match find_identity(&savepoint, guid, link).await {
            Ok(found) => {
                savepoint.commit().await?;
                Ok(found)
            }
            Err(e) => {
                savepoint.rollback().await?;
                Err(e)
            }
        }
    }
}

#[async_trait]
impl NewsImportSession for SeaOrmImportSession {
    async fn count_news(&self) -> Result<u64, RepositoryError> {
        Ok(news_entity::Entity::find().count(&self.txn).await?)
    }

    async fn write_batch(&self, batch: &[News]) -> Result<u64, RepositoryError> {
        if batch.is_empty() {
            return Ok(0);
        }

        // 嵌套事务即 SAVEPOINT，失败时只回滚本批
        let savepoint = self.txn.begin().await?;
        let written = match insert_chunked(&savepoint, batch).await {
            Ok(written) => written,
            Err(e) => {
                savepoint.rollback().await?;
                return Err(e.into());
            }
        };
        savepoint.commit().await?;

        debug!("Wrote {} news in {} chunks", written, batch.len().div_ceil(WRITE_CHUNK_SIZE));
        Ok(written)
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl NewsImporter for NewsRepositoryImpl {
    async fn begin_import(&self) -> Result<Box<dyn NewsImportSession>, RepositoryError> {
        let txn = self.db.begin().await?;

        if txn.get_database_backend() == DbBackend::Postgres {
            txn.execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT pg_advisory_xact_lock($1)",
                [IMPORT_LOCK_KEY.into()],
            ))
            .await?;
        }

        Ok(Box::new(SeaOrmImportSession { txn }))
    }
}

#[async_trait]
impl IdentityLookup for NewsRepositoryImpl {
    async fn find_by_identity(
        &self,
        guid: &str,
        link: &str,
    ) -> Result<Option<News>, RepositoryError> {
        find_identity(self.db.as_ref(), guid, link).await
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryImpl {
    async fn create(&self, news: &News) -> Result<News, RepositoryError> {
        let model: news_entity::ActiveModel = news.into();
        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, RepositoryError> {
        let model = news_entity::Entity::find_by_id(id)
            .filter(news_entity::Column::DeletedAt.is_null())
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, changes: &NewsChanges) -> Result<News, RepositoryError> {
        let result = news_entity::Entity::update_many()
            .set(changes_model(changes))
            .filter(news_entity::Column::Id.eq(id))
            .filter(news_entity::Column::DeletedAt.is_null())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RepositoryError> {
        let timestamp = now();
        let result = news_entity::Entity::update_many()
            .col_expr(news_entity::Column::DeletedAt, Expr::value(Some(timestamp)))
            .col_expr(news_entity::Column::IsActive, Expr::value(false))
            .col_expr(news_entity::Column::Status, Expr::value(DELETED_STATUS))
            .col_expr(news_entity::Column::UpdatedAt, Expr::value(timestamp))
            .filter(news_entity::Column::Id.eq(id))
            .filter(news_entity::Column::DeletedAt.is_null())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn hard_delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = news_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn increment_counter(&self, id: i32, counter: Counter) -> Result<(), RepositoryError> {
        let column = counter_column(counter);
        let result = news_entity::Entity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(news_entity::Column::Id.eq(id))
            .filter(news_entity::Column::DeletedAt.is_null())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn update_hotness(&self, id: i32, score: f64) -> Result<(), RepositoryError> {
        let result = news_entity::Entity::update_many()
            .col_expr(news_entity::Column::HotnessScore, Expr::value(score))
            .filter(news_entity::Column::Id.eq(id))
            .filter(news_entity::Column::DeletedAt.is_null())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn update_event_association(
        &self,
        ids: &[i32],
        event_id: Option<i32>,
    ) -> Result<u64, RepositoryError> {
        let txn = self.db.begin().await?;

        let result = news_entity::Entity::update_many()
            .col_expr(news_entity::Column::EventId, Expr::value(event_id))
            .col_expr(news_entity::Column::UpdatedAt, Expr::value(now()))
            .filter(news_entity::Column::Id.is_in(ids.iter().copied()))
            .filter(news_entity::Column::DeletedAt.is_null())
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(0);
        }

        txn.commit().await?;
        Ok(result.rows_affected)
    }

    async fn query(&self, params: &NewsQueryParams) -> Result<(Vec<News>, u64), RepositoryError> {
        let mut select =
            news_entity::Entity::find().filter(news_entity::Column::DeletedAt.is_null());

        if let Some(category) = &params.category {
            select = select.filter(news_entity::Column::Category.eq(category.as_str()));
        }
        if let Some(text) = &params.text {
            select = select.filter(text_condition(text));
        }
        if params.unlinked_only {
            select = select.filter(news_entity::Column::EventId.is_null());
        }

        let total = select.clone().count(self.db.as_ref()).await?;

        let models = select
            .order_by_desc(news_entity::Column::PublishedAt)
            .order_by_desc(news_entity::Column::Id)
            .offset(params.page.offset())
            .limit(params.page.size)
            .all(self.db.as_ref())
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<News>, RepositoryError> {
        let models = news_entity::Entity::find()
            .filter(news_entity::Column::Title.eq(title))
            .filter(news_entity::Column::DeletedAt.is_null())
            .order_by_desc(news_entity::Column::PublishedAt)
            .order_by_desc(news_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_event_id(&self, event_id: i32) -> Result<Vec<News>, RepositoryError> {
        let models = news_entity::Entity::find()
            .filter(news_entity::Column::EventId.eq(event_id))
            .filter(news_entity::Column::DeletedAt.is_null())
            .order_by_desc(news_entity::Column::PublishedAt)
            .order_by_desc(news_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_hot(&self, limit: u64) -> Result<Vec<News>, RepositoryError> {
        let models = news_entity::Entity::find()
            .filter(news_entity::Column::DeletedAt.is_null())
            .order_by_desc(news_entity::Column::HotnessScore)
            .order_by_asc(news_entity::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
