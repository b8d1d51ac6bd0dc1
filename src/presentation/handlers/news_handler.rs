// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::news_request::{
    CreateNewsRequest, HotQuery, PageQuery, SearchQuery, TitleQuery, UpdateEventAssociationRequest,
    UpdateNewsRequest,
};
use crate::domain::models::news::News;
use crate::domain::repositories::news_repository::NewsRepository;
use crate::domain::services::news_service::NewsService;
use crate::presentation::errors::AppError;
use crate::presentation::response::ApiResponse;
use axum::{
    extract::{Extension, Path, Query},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

/// 创建者ID所在的请求头
pub const USER_ID_HEADER: &str = "x-user-id";

type NewsServiceExt<R> = Extension<Arc<NewsService<R>>>;

fn creator_id(headers: &HeaderMap) -> Option<i32> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

pub async fn list_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let page = service.list(query.page_request()).await?;
    Ok(Json(ApiResponse::paginated(page)))
}

pub async fn get_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<News>>, AppError> {
    let news = service.get_news_by_id(id).await?;
    Ok(Json(ApiResponse::success(news)))
}

pub async fn search_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let text = query.query.as_deref().unwrap_or_default();
    let page = service.search(text, query.page_request()).await?;
    Ok(Json(ApiResponse::paginated(page)))
}

pub async fn hot_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Query(query): Query<HotQuery>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let news = service.hot_news(query.limit()).await?;
    Ok(Json(ApiResponse::success(news)))
}

pub async fn news_by_title<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let news = service
        .by_title(query.title.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(ApiResponse::success(news)))
}

pub async fn news_by_category<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Path(category): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let page = service
        .by_category(&category, query.page_request())
        .await?;
    Ok(Json(ApiResponse::paginated(page)))
}

pub async fn unlinked_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let page = service.unlinked(query.page_request()).await?;
    Ok(Json(ApiResponse::paginated(page)))
}

pub async fn news_by_event<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Path(event_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<News>>>, AppError> {
    let news = service.by_event_id(event_id).await?;
    Ok(Json(ApiResponse::success(news)))
}

pub async fn create_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    headers: HeaderMap,
    Json(request): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<News>>), AppError> {
    request
        .validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let news = service
        .create_news(request.into(), creator_id(&headers))
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(news))))
}

pub async fn update_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateNewsRequest>,
) -> Result<Json<ApiResponse<News>>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let news = service.update_news(id, request.into()).await?;
    Ok(Json(ApiResponse::success(news)))
}

pub async fn delete_news<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    service.delete_news(id).await?;
    Ok(Json(ApiResponse::success(
        json!({ "message": "News deleted successfully" }),
    )))
}

pub async fn update_event_association<R: NewsRepository + 'static>(
    Extension(service): NewsServiceExt<R>,
    Json(request): Json<UpdateEventAssociationRequest>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let affected = service
        .reassociate_by_ids(&request.news_ids, request.event_id)
        .await?;

    let message = match request.event_id {
        Some(_) => "News event association updated successfully",
        None => "News event association removed successfully",
    };
    Ok(Json(ApiResponse::success(
        json!({ "message": message, "affected": affected }),
    )))
}
