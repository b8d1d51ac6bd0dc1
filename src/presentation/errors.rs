// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::domain::repositories::news_repository::RepositoryError;
use crate::domain::services::bootstrap_service::BootstrapError;
use crate::domain::services::news_service::NewsError;
use crate::presentation::response::ApiResponse;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(anyhow::Error::new(NewsError::Validation(message.into())))
    }

    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<NewsError>() {
            return match err {
                NewsError::EmptyQuery
                | NewsError::EmptyIds
                | NewsError::NothingUpdated
                | NewsError::Validation(_) => StatusCode::BAD_REQUEST,
                NewsError::NotFound => StatusCode::NOT_FOUND,
                NewsError::Conflict(_) => StatusCode::CONFLICT,
                // 种子文件由服务端提供，读取或解析失败都属于服务端错误
                NewsError::Io(_) | NewsError::Parse(_) | NewsError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
        }

        if let Some(err) = self.0.downcast_ref::<BootstrapError>() {
            return match err {
                BootstrapError::Validation(_) => StatusCode::BAD_REQUEST,
                BootstrapError::Conflict(_) => StatusCode::CONFLICT,
                BootstrapError::Hash(_) | BootstrapError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        (status, Json(ApiResponse::error(status, message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
