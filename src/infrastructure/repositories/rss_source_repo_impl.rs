// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::rss_source::{NewRssSource, RssSource};
use crate::domain::repositories::news_repository::RepositoryError;
use crate::domain::repositories::rss_source_repository::{RssSourceRepository, SourceSeedOutcome};
use crate::infrastructure::database::entities::rss_source as rss_source_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;

/// RSS 订阅源仓库实现
#[derive(Clone)]
pub struct RssSourceRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl RssSourceRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<rss_source_entity::Model> for RssSource {
    fn from(model: rss_source_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            category: model.category,
            language: model.language,
            is_active: model.is_active,
            description: model.description,
            priority: model.priority,
            update_freq: model.update_freq,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn active_model(source: &NewRssSource, now: DateTime<FixedOffset>) -> rss_source_entity::ActiveModel {
    rss_source_entity::ActiveModel {
        id: NotSet,
        name: Set(source.name.clone()),
        url: Set(source.url.clone()),
        category: Set(source.category.clone()),
        language: Set(source.language.clone()),
        is_active: Set(source.is_active),
        description: Set(source.description.clone()),
        priority: Set(source.priority),
        update_freq: Set(source.update_freq),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[async_trait]
impl RssSourceRepository for RssSourceRepositoryImpl {
    async fn list(&self) -> Result<Vec<RssSource>, RepositoryError> {
        let models = rss_source_entity::Entity::find()
            .order_by_asc(rss_source_entity::Column::Priority)
            .order_by_asc(rss_source_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn seed_if_empty(
        &self,
        sources: &[NewRssSource],
    ) -> Result<SourceSeedOutcome, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = rss_source_entity::Entity::find().count(&txn).await?;
        if existing > 0 {
            txn.rollback().await?;
            return Ok(SourceSeedOutcome::Skipped { existing });
        }

        let now: DateTime<FixedOffset> = Utc::now().into();
        let mut created = Vec::with_capacity(sources.len());
        for source in sources {
            let model = active_model(source, now).insert(&txn).await?;
            created.push(model.into());
        }

        txn.commit().await?;
        Ok(SourceSeedOutcome::Created(created))
    }
}
