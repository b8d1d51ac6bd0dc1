// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::rss_source::RssSource;
use crate::domain::repositories::news_repository::NewsImporter;
use crate::domain::repositories::rss_source_repository::RssSourceRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::bootstrap_service::BootstrapService;
use crate::domain::services::ingestion_service::{ImportReport, IngestionService};
use crate::presentation::errors::AppError;
use crate::presentation::response::ApiResponse;
use axum::{extract::Extension, Json};
use std::path::PathBuf;
use std::sync::Arc;

/// 种子数据文件位置
#[derive(Debug, Clone)]
pub struct SeedFile(pub PathBuf);

/// 导入种子数据
pub async fn seed_data<R: NewsImporter + 'static>(
    Extension(service): Extension<Arc<IngestionService<R>>>,
    Extension(SeedFile(path)): Extension<SeedFile>,
) -> Result<Json<ApiResponse<ImportReport>>, AppError> {
    let report = service.seed_all_data(&path).await?;

    let message = if report.skipped_entirely {
        "News data already exists, seeding skipped"
    } else {
        "Seed data imported successfully"
    };
    Ok(Json(ApiResponse::with_message(report, message)))
}

/// 列出 RSS 订阅源
pub async fn list_rss_sources<U, S>(
    Extension(service): Extension<Arc<BootstrapService<U, S>>>,
) -> Result<Json<ApiResponse<Vec<RssSource>>>, AppError>
where
    U: UserRepository + 'static,
    S: RssSourceRepository + 'static,
{
    let sources = service.list_sources().await?;
    Ok(Json(ApiResponse::success(sources)))
}
