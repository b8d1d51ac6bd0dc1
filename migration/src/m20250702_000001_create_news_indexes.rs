// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::m20250701_000001_create_news::News;
use sea_orm_migration::prelude::*;

/// 新闻查询索引迁移
///
/// 覆盖去重查询（guid / link）、分类列表、事件关联和热度排序
#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: &[(&str, News)] = &[
    ("idx_news_guid", News::Guid),
    ("idx_news_link", News::Link),
    ("idx_news_category", News::Category),
    ("idx_news_event_id", News::EventId),
    ("idx_news_hotness_score", News::HotnessScore),
    ("idx_news_published_at", News::PublishedAt),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(*name)
                        .table(News::Table)
                        .col(*column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _) in INDEXES {
            manager
                .drop_index(Index::drop().name(*name).table(News::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}
