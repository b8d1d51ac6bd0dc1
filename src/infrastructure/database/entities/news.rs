// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub summary: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub source: String,
    pub category: String,
    pub published_at: ChronoDateTimeWithTimeZone,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub source_type: String,
    pub rss_source_id: Option<i32>,
    pub link: String,
    pub guid: String,
    pub author: String,
    pub image_url: String,
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub language: String,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    #[sea_orm(column_type = "Double")]
    pub hotness_score: f64,
    pub status: String,
    pub is_processed: bool,
    pub event_id: Option<i32>,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
    pub deleted_at: Option<ChronoDateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
