// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 新闻表迁移
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(News::Title).string().not_null())
                    .col(ColumnDef::new(News::Content).text().not_null())
                    .col(ColumnDef::new(News::Summary).text().not_null().default(""))
                    .col(ColumnDef::new(News::Description).text().not_null().default(""))
                    .col(ColumnDef::new(News::Source).string().not_null().default(""))
                    .col(ColumnDef::new(News::Category).string().not_null().default(""))
                    .col(
                        ColumnDef::new(News::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(News::CreatedBy).integer())
                    .col(ColumnDef::new(News::IsActive).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(News::SourceType)
                            .string_len(20)
                            .not_null()
                            .default("manual"),
                    )
                    .col(ColumnDef::new(News::RssSourceId).integer())
                    .col(ColumnDef::new(News::Link).string().not_null().default(""))
                    .col(ColumnDef::new(News::Guid).string().not_null().default(""))
                    .col(ColumnDef::new(News::Author).string().not_null().default(""))
                    .col(ColumnDef::new(News::ImageUrl).string().not_null().default(""))
                    .col(ColumnDef::new(News::Tags).text().not_null().default(""))
                    .col(ColumnDef::new(News::Language).string_len(10).not_null().default("zh"))
                    .col(ColumnDef::new(News::ViewCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(News::LikeCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(News::CommentCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(News::ShareCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(News::HotnessScore).double().not_null().default(0.0))
                    .col(
                        ColumnDef::new(News::Status)
                            .string_len(20)
                            .not_null()
                            .default("published"),
                    )
                    .col(ColumnDef::new(News::IsProcessed).boolean().not_null().default(false))
                    .col(ColumnDef::new(News::EventId).integer())
                    .col(
                        ColumnDef::new(News::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(News::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(News::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum News {
    Table,
    Id,
    Title,
    Content,
    Summary,
    Description,
    Source,
    Category,
    PublishedAt,
    CreatedBy,
    IsActive,
    SourceType,
    RssSourceId,
    Link,
    Guid,
    Author,
    ImageUrl,
    Tags,
    Language,
    ViewCount,
    LikeCount,
    CommentCount,
    ShareCount,
    HotnessScore,
    Status,
    IsProcessed,
    EventId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
