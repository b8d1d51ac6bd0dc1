// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RssSources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RssSources::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RssSources::Name).string().not_null())
                    .col(ColumnDef::new(RssSources::Url).string().not_null().unique_key())
                    .col(ColumnDef::new(RssSources::Category).string().not_null().default(""))
                    .col(
                        ColumnDef::new(RssSources::Language)
                            .string_len(10)
                            .not_null()
                            .default("zh"),
                    )
                    .col(
                        ColumnDef::new(RssSources::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(RssSources::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(RssSources::Priority).integer().not_null().default(1))
                    .col(
                        ColumnDef::new(RssSources::UpdateFreq)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(
                        ColumnDef::new(RssSources::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RssSources::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RssSources::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RssSources {
    Table,
    Id,
    Name,
    Url,
    Category,
    Language,
    IsActive,
    Description,
    Priority,
    UpdateFreq,
    CreatedAt,
    UpdatedAt,
}
