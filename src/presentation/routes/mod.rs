// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::bootstrap_service::BootstrapService;
use crate::domain::services::ingestion_service::IngestionService;
use crate::domain::services::news_service::NewsService;
use crate::infrastructure::repositories::news_repo_impl::NewsRepositoryImpl;
use crate::infrastructure::repositories::rss_source_repo_impl::RssSourceRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crate::presentation::handlers::admin_handler::{self, SeedFile};
use crate::presentation::handlers::news_handler;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

type Bootstrap = BootstrapService<UserRepositoryImpl, RssSourceRepositoryImpl>;

/// 路由所需的服务集合
#[derive(Clone)]
pub struct AppServices {
    pub news: Arc<NewsService<NewsRepositoryImpl>>,
    pub ingestion: Arc<IngestionService<NewsRepositoryImpl>>,
    pub bootstrap: Arc<Bootstrap>,
    pub seed_file: PathBuf,
}

impl AppServices {
    /// 基于同一个数据库连接构建全部服务
    pub fn new(db: Arc<DatabaseConnection>, seed_file: impl Into<PathBuf>) -> Self {
        let news_repo = Arc::new(NewsRepositoryImpl::new(db.clone()));
        let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
        let source_repo = Arc::new(RssSourceRepositoryImpl::new(db));

        Self {
            news: Arc::new(NewsService::new(news_repo.clone())),
            ingestion: Arc::new(IngestionService::new(news_repo)),
            bootstrap: Arc::new(BootstrapService::new(user_repo, source_repo)),
            seed_file: seed_file.into(),
        }
    }
}

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，服务需通过 [`app`] 注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/version", get(version));

    let news_routes = Router::new()
        .route(
            "/",
            get(news_handler::list_news::<NewsRepositoryImpl>)
                .post(news_handler::create_news::<NewsRepositoryImpl>),
        )
        .route("/search", get(news_handler::search_news::<NewsRepositoryImpl>))
        .route("/hot", get(news_handler::hot_news::<NewsRepositoryImpl>))
        .route("/title", get(news_handler::news_by_title::<NewsRepositoryImpl>))
        .route(
            "/unlinked",
            get(news_handler::unlinked_news::<NewsRepositoryImpl>),
        )
        .route(
            "/category/{category}",
            get(news_handler::news_by_category::<NewsRepositoryImpl>),
        )
        .route(
            "/event/{event_id}",
            get(news_handler::news_by_event::<NewsRepositoryImpl>),
        )
        .route(
            "/event-association",
            put(news_handler::update_event_association::<NewsRepositoryImpl>),
        )
        .route(
            "/{id}",
            get(news_handler::get_news::<NewsRepositoryImpl>)
                .put(news_handler::update_news::<NewsRepositoryImpl>)
                .delete(news_handler::delete_news::<NewsRepositoryImpl>),
        );

    let admin_routes = Router::new()
        .route(
            "/seed",
            post(admin_handler::seed_data::<NewsRepositoryImpl>),
        )
        .route(
            "/rss-sources",
            get(admin_handler::list_rss_sources::<UserRepositoryImpl, RssSourceRepositoryImpl>),
        );

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/news", news_routes)
        .nest("/api/v1/admin", admin_routes)
}

/// 注入服务并挂载请求追踪
pub fn app(services: AppServices) -> Router {
    routes()
        .layer(Extension(services.news))
        .layer(Extension(services.ingestion))
        .layer(Extension(services.bootstrap))
        .layer(Extension(SeedFile(services.seed_file)))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
